//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::ports::PostRepository;
use posts_core::{PostController, UpdateMissingPolicy};
use posts_infra::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use posts_infra::{DatabaseConnections, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostController,
    /// Which store backs `posts`, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store
    /// when PostgreSQL is not configured or unreachable.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (repo, storage): (Arc<dyn PostRepository>, &'static str) = {
            if let Some(db_config) = config.database.as_ref() {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => (
                        Arc::new(PostgresPostRepository::new(connections.main)),
                        "postgres",
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), "memory")
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repo, storage): (Arc<dyn PostRepository>, &'static str) = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Arc::new(InMemoryPostRepository::new()), "memory")
        };

        tracing::info!(storage, "Application state initialized");

        Self::with_repository(repo, config.update_missing, storage)
    }

    /// Build the state around an existing repository.
    pub fn with_repository(
        repo: Arc<dyn PostRepository>,
        update_missing: UpdateMissingPolicy,
        storage: &'static str,
    ) -> Self {
        Self {
            posts: PostController::new(repo).with_update_missing(update_missing),
            storage,
        }
    }
}
