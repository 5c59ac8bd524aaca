use async_trait::async_trait;
use kereta_core::repository::{OrderRepository, RepoError};
use kereta_order::changes::OrderChange;
use kereta_order::lifecycle::OrderMutation;
use kereta_order::models::Order;
use sqlx::Row;

use crate::database::DbClient;

/// Postgres-backed order store. Orders and change entries are kept as JSONB
/// documents keyed by their ids; `update` runs the state machine inside a
/// row-locked transaction so concurrent mutations of one order serialize.
#[derive(Clone)]
pub struct PgOrderRepository {
    db: DbClient,
}

impl PgOrderRepository {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

fn backend(err: impl std::fmt::Display) -> RepoError {
    RepoError::Backend(err.to_string())
}

fn decode_order(body: serde_json::Value) -> Result<Order, RepoError> {
    serde_json::from_value(body).map_err(backend)
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &Order) -> Result<String, RepoError> {
        let body = serde_json::to_value(order).map_err(backend)?;

        sqlx::query(
            "INSERT INTO orders (id, body, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&order.id)
        .bind(&body)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(self.db.pool())
        .await
        .map_err(backend)?;

        Ok(order.id.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Order>, RepoError> {
        let row = sqlx::query("SELECT body FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(backend)?;

        match row {
            Some(row) => Ok(Some(decode_order(row.get("body"))?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let rows = sqlx::query("SELECT body FROM orders ORDER BY created_at DESC")
            .fetch_all(self.db.pool())
            .await
            .map_err(backend)?;

        rows.into_iter()
            .map(|row| decode_order(row.get("body")))
            .collect()
    }

    async fn update(&self, id: &str, mutation: OrderMutation) -> Result<Order, RepoError> {
        let mut tx = self.db.pool().begin().await.map_err(backend)?;

        let row = sqlx::query("SELECT body FROM orders WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(backend)?
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        let mut order = decode_order(row.get("body"))?;
        mutation.apply(&mut order)?;

        let body = serde_json::to_value(&order).map_err(backend)?;
        sqlx::query("UPDATE orders SET body = $2, updated_at = $3 WHERE id = $1")
            .bind(id)
            .bind(&body)
            .bind(order.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(backend)?;

        tx.commit().await.map_err(backend)?;
        Ok(order)
    }

    async fn add_change(&self, change: &OrderChange) -> Result<(), RepoError> {
        let body = serde_json::to_value(change).map_err(backend)?;

        sqlx::query(
            "INSERT INTO order_changes (id, order_id, body, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(change.id)
        .bind(&change.order_id)
        .bind(&body)
        .bind(change.created_at)
        .execute(self.db.pool())
        .await
        .map_err(backend)?;

        Ok(())
    }

    async fn list_changes(&self, order_id: &str) -> Result<Vec<OrderChange>, RepoError> {
        let rows = sqlx::query(
            "SELECT body FROM order_changes WHERE order_id = $1 ORDER BY created_at ASC",
        )
        .bind(order_id)
        .fetch_all(self.db.pool())
        .await
        .map_err(backend)?;

        rows.into_iter()
            .map(|row| serde_json::from_value(row.get("body")).map_err(backend))
            .collect()
    }
}
