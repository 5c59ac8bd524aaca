pub mod repository;
pub mod search;

pub use repository::{OrderRepository, RepoError};
pub use search::{SearchRequest, SearchResponse, SearchRoute, SearchService};
