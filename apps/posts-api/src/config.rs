//! Application configuration loaded from environment variables.

use std::env;

use posts_core::UpdateMissingPolicy;
use posts_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// How `PUT /api/posts/{id}` reports an id the store does not know.
    pub update_missing: UpdateMissingPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            update_missing: env::var("UPDATE_MISSING_POLICY")
                .ok()
                .map(|raw| Self::parse_update_missing(&raw))
                .unwrap_or_default(),
        }
    }

    fn parse_update_missing(raw: &str) -> UpdateMissingPolicy {
        raw.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to pass-through", e);
            UpdateMissingPolicy::PassThrough
        })
    }
}
