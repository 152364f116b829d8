pub mod cloud;
pub mod http_support;

pub use cloud::CloudUserDataSource;
pub use http_support::RetryConfig;
