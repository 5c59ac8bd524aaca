use async_trait::async_trait;
use kereta_core::repository::{OrderRepository, RepoError};
use kereta_order::changes::OrderChange;
use kereta_order::lifecycle::OrderMutation;
use kereta_order::models::Order;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory order store, the default runtime when no database is configured
/// and the test double everywhere else.
///
/// Holding the write lock across read-modify-write in `update` gives the
/// per-order atomicity the repository contract requires.
#[derive(Default)]
pub struct MemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
    changes: RwLock<Vec<OrderChange>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<String, RepoError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(RepoError::Backend(format!(
                "duplicate order id {}",
                order.id
            )));
        }

        orders.insert(order.id.clone(), order.clone());
        Ok(order.id.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Order>, RepoError> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let orders = self.orders.read().await;
        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, id: &str, mutation: OrderMutation) -> Result<Order, RepoError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        mutation.apply(order)?;
        Ok(order.clone())
    }

    async fn add_change(&self, change: &OrderChange) -> Result<(), RepoError> {
        self.changes.write().await.push(change.clone());
        Ok(())
    }

    async fn list_changes(&self, order_id: &str) -> Result<Vec<OrderChange>, RepoError> {
        Ok(self
            .changes
            .read()
            .await
            .iter()
            .filter(|change| change.order_id == order_id)
            .cloned()
            .collect())
    }
}
