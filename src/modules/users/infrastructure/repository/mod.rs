mod caching_repository;
mod user_data_repository;

pub use caching_repository::CachingUserRepository;
pub use user_data_repository::UserDataRepository;
