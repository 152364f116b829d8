pub mod get_user_details;

pub use get_user_details::{FetchHandle, GetUserDetailsUseCase};
