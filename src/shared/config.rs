use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup.
///
/// Every knob has a default so the binary runs without any environment;
/// `dotenvy` is loaded by the composition root before this is built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote profile store.
    pub api_base_url: String,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
    /// How long a cached profile stays fresh.
    pub cache_ttl: Duration,
    /// Upper bound on cached profiles before eviction kicks in.
    pub cache_max_entries: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("PERSONA_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            http_timeout: Duration::from_secs(parse_var("PERSONA_HTTP_TIMEOUT_SECS", 30)),
            cache_ttl: Duration::from_secs(parse_var("PERSONA_CACHE_TTL_SECS", 1800)),
            cache_max_entries: parse_var("PERSONA_CACHE_MAX_ENTRIES", 1000) as usize,
        }
    }
}

fn parse_var(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
