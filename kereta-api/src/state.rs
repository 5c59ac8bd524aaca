use kereta_booking::fare::FareCalculator;
use kereta_core::repository::OrderRepository;
use kereta_core::search::SearchService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub search: Arc<dyn SearchService>,
    pub fares: Arc<FareCalculator>,
}
