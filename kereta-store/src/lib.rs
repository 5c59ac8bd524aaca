pub mod app_config;
pub mod catalog;
pub mod database;
pub mod memory;
pub mod pg;

pub use catalog::RouteCatalog;
pub use database::DbClient;
pub use memory::MemoryOrderRepository;
pub use pg::PgOrderRepository;
