//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::BlogPostResource;
use quill_core::ports::BlogPostRepository;
use quill_infra::InMemoryBlogPostRepository;
use quill_infra::database::DatabaseConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: BlogPostResource,
}

impl AppState {
    /// Wrap an already-built repository.
    pub fn with_repository(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts: BlogPostResource::new(repo),
        }
    }

    /// State backed by the in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBlogPostRepository::new()))
    }

    /// Build the application state with the configured storage.
    ///
    /// Falls back to the in-memory repository when no database is configured
    /// or the connection cannot be established.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match connect_postgres(config).await {
                Ok(repo) => Self::with_repository(repo),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(
    config: &DatabaseConfig,
) -> Result<Arc<dyn BlogPostRepository>, quill_infra::sea_orm::DbErr> {
    let db = quill_infra::database::connect(config).await?;
    quill_infra::database::ensure_schema(&db).await?;
    Ok(Arc::new(quill_infra::PostgresBlogPostRepository::new(db)))
}
