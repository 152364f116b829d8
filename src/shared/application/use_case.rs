use crate::shared::errors::{AppError, AppResult};
/// Base trait for single-purpose domain operations.
///
/// A use case is invoked once per request and produces one result or
/// one failure.
///
/// # Example
///
/// ```rust,ignore
/// struct GetUserDetailsUseCase {
///     repository: Arc<dyn UserRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<UserId, User> for GetUserDetailsUseCase {
///     async fn execute(&self, user_id: UserId) -> AppResult<User> {
///         self.repository.get_user_details(user_id).await
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases
#[async_trait]
pub trait UseCase<TParams, TResult>: Send + Sync {
    /// Execute the use case with the given parameters
    async fn execute(&self, params: TParams) -> AppResult<TResult>;
}

/// Callback contract for detached use-case execution.
///
/// Exactly one of `on_success` / `on_error` fires per detached
/// execution, on the interactive thread, unless the execution is
/// cancelled first.
pub trait UseCaseObserver<T>: Send + Sync {
    fn on_success(&self, value: T);
    fn on_error(&self, error: AppError);
}
