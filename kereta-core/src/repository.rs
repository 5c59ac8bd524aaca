use async_trait::async_trait;
use kereta_order::changes::OrderChange;
use kereta_order::lifecycle::{OrderError, OrderMutation};
use kereta_order::models::Order;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("order not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Transition(#[from] OrderError),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Repository trait for order persistence.
///
/// `update` is the only write path for existing orders and must be an atomic
/// read-modify-write per order id: the mutation runs through the lifecycle
/// state machines inside the implementation's critical section, so concurrent
/// requests commit at most one transition per logical change.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<String, RepoError>;

    async fn get(&self, id: &str) -> Result<Option<Order>, RepoError>;

    /// All orders, newest first
    async fn list(&self) -> Result<Vec<Order>, RepoError>;

    async fn update(&self, id: &str, mutation: OrderMutation) -> Result<Order, RepoError>;

    async fn add_change(&self, change: &OrderChange) -> Result<(), RepoError>;

    async fn list_changes(&self, order_id: &str) -> Result<Vec<OrderChange>, RepoError>;
}
