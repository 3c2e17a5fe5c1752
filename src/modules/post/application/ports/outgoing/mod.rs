pub mod post_query;
pub mod post_repository;

pub use post_query::PostQuery;
pub use post_repository::{PostRepository, PostRepositoryError};
