pub mod changes;
pub mod lifecycle;
pub mod models;
pub mod refund;

pub use changes::OrderChange;
pub use lifecycle::{OrderError, OrderMutation};
pub use models::{Order, OrderDraft, OrderLeg, OrderStatus, RefundStatus};
pub use refund::RefundProgress;
