use std::future::Future;
use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::shared::errors::{AppError, AppResult};

/// Retry configuration for calls to the remote profile store
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Conservative settings for production use
    pub fn conservative() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 1.5,
            jitter: true,
        }
    }
}

/// Build the HTTP client every datasource call goes through
pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::Unknown(format!("Failed to build HTTP client: {}", e)))
}

/// Execute `operation` with bounded retry and exponential backoff.
///
/// Only transient failures (network, server-side API errors) are
/// retried; NotFound and client-side errors surface immediately.
pub async fn with_retry<F, Fut, T>(
    operation: F,
    config: &RetryConfig,
    operation_name: &str,
) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(
                        "{} succeeded on attempt {} after {} retries",
                        operation_name,
                        attempt + 1,
                        attempt
                    );
                }
                return Ok(result);
            }
            Err(e) if is_retryable(&e) && attempt < config.max_retries => {
                let delay = backoff_delay(config, attempt);
                warn!(
                    "{} failed on attempt {}: {}; retrying in {:?}",
                    operation_name,
                    attempt + 1,
                    e,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn is_retryable(error: &AppError) -> bool {
    matches!(
        error,
        AppError::NetworkFailure(_) | AppError::ApiError(_) | AppError::Unknown(_)
    )
}

fn backoff_delay(config: &RetryConfig, attempt: u32) -> Duration {
    let exponential =
        config.base_delay.as_millis() as f64 * config.backoff_multiplier.powi(attempt as i32);
    let mut millis = exponential.min(config.max_delay.as_millis() as f64);

    if config.jitter {
        millis *= rand::thread_rng().gen_range(0.8..1.2);
    }

    Duration::from_millis(millis as u64)
}
