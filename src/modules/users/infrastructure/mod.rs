pub mod cache;
pub mod datasource;
pub mod repository;

pub use cache::InMemoryUserCache;
pub use repository::{CachingUserRepository, UserDataRepository};
