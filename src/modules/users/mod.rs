pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-exports for easy external access
pub use application::{GetUserDetailsUseCase, UserModel, UserModelMapper};
pub use domain::entities::{User, UserId};
pub use domain::repositories::{UserCache, UserRepository};
pub use presentation::{UserDetailsPresenter, UserDetailsView, ViewState};
