use kereta_api::{app, state::AppState};
use kereta_booking::fare::{FareCalculator, FareConfig};
use kereta_core::repository::OrderRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kereta_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = kereta_store::app_config::Config::load()?;
    tracing::info!("Starting Kereta API on port {}", config.server.port);

    let orders: Arc<dyn OrderRepository> = match &config.database.url {
        Some(url) => {
            let db = kereta_store::DbClient::connect(url).await?;
            db.ensure_schema().await?;
            Arc::new(kereta_store::PgOrderRepository::new(db))
        }
        None => {
            tracing::warn!("no database configured, orders are held in memory");
            Arc::new(kereta_store::MemoryOrderRepository::new())
        }
    };

    let app_state = AppState {
        orders,
        search: Arc::new(kereta_store::RouteCatalog::new()),
        fares: Arc::new(FareCalculator::new(FareConfig {
            tax_rate: config.business_rules.tax_rate,
        })),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;
    Ok(())
}
