use reqwest::{Client, StatusCode};
use tracing::debug;

use super::http_support::{self, RetryConfig};
use crate::modules::users::domain::entities::{User, UserId};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

const USER_AGENT: &str = "Persona-App/1.0";

/// Datasource backed by the remote profile store.
///
/// Speaks `GET {base_url}/users/{id}` returning the profile JSON
/// document. Transient failures are retried with backoff before
/// surfacing.
pub struct CloudUserDataSource {
    client: Client,
    base_url: String,
    retry: RetryConfig,
}

impl CloudUserDataSource {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            client: http_support::create_http_client(config.http_timeout, USER_AGENT)?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        })
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub async fn fetch_user(&self, id: UserId) -> AppResult<User> {
        let url = format!("{}/users/{}", self.base_url, id);
        http_support::with_retry(
            || self.fetch_user_once(&url, id),
            &self.retry,
            "get user details",
        )
        .await
    }

    async fn fetch_user_once(&self, url: &str, id: UserId) -> AppResult<User> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                Err(AppError::NotFound(format!("User {} does not exist", id)))
            }
            status if status.is_success() => {
                let user = response.json::<User>().await.map_err(|e| {
                    AppError::SerializationError(format!("Invalid profile document: {}", e))
                })?;
                Ok(user)
            }
            status => Err(AppError::ApiError(format!(
                "HTTP {} fetching user {}",
                status, id
            ))),
        }
    }
}
