pub mod dto;
pub mod mapper;
pub mod use_cases;

pub use dto::UserModel;
pub use mapper::UserModelMapper;
pub use use_cases::{FetchHandle, GetUserDetailsUseCase};
