use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::modules::users::domain::entities::{User, UserId};
use crate::modules::users::domain::repositories::UserRepository;
use crate::shared::application::{UseCase, UseCaseObserver};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{MainThreadDispatcher, TaskExecutor};
use crate::log_debug;

/// Handle to an in-flight detached fetch.
///
/// Dropping the handle does not cancel the fetch; call
/// [`FetchHandle::cancel`] to unsubscribe the observer. A cancelled
/// fetch delivers nothing.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    token: CancellationToken,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Use case for fetching one user's profile details.
pub struct GetUserDetailsUseCase {
    repository: Arc<dyn UserRepository>,
    executor: TaskExecutor,
    dispatcher: MainThreadDispatcher,
}

impl GetUserDetailsUseCase {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        executor: TaskExecutor,
        dispatcher: MainThreadDispatcher,
    ) -> Self {
        Self {
            repository,
            executor,
            dispatcher,
        }
    }

    /// Schedule the fetch on the background pool; the observer hears
    /// the outcome on the interactive thread.
    ///
    /// Exactly one of `on_success` / `on_error` fires per call unless
    /// the returned handle is cancelled first. The token is checked
    /// again on the interactive thread immediately before the observer
    /// runs, so a completed-but-late result is dropped rather than
    /// delivered to a torn-down subscriber.
    pub fn execute_detached(
        &self,
        user_id: UserId,
        observer: Arc<dyn UseCaseObserver<User>>,
    ) -> FetchHandle {
        let token = CancellationToken::new();
        let guard = token.clone();
        let repository = Arc::clone(&self.repository);
        let dispatcher = self.dispatcher.clone();

        self.executor.spawn(async move {
            let started = Instant::now();
            let result = tokio::select! {
                _ = guard.cancelled() => {
                    log_debug!("Fetch for user {} cancelled mid-flight", user_id);
                    return;
                }
                result = repository.get_user_details(user_id) => result,
            };
            log_debug!(
                "Fetch for user {} resolved in {}ms",
                user_id,
                started.elapsed().as_millis()
            );

            let delivery_guard = guard.clone();
            dispatcher.dispatch(move || {
                if delivery_guard.is_cancelled() {
                    log_debug!("Dropping unsubscribed result for user {}", user_id);
                    return;
                }
                match result {
                    Ok(user) => observer.on_success(user),
                    Err(e) => observer.on_error(e),
                }
            });
        });

        FetchHandle { token }
    }
}

#[async_trait]
impl UseCase<UserId, User> for GetUserDetailsUseCase {
    /// Direct async path for callers already off the interactive thread.
    async fn execute(&self, user_id: UserId) -> AppResult<User> {
        self.repository.get_user_details(user_id).await
    }
}
