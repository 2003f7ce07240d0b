//! Application state - shared across all handlers.

use std::sync::Arc;

use guestbook_core::ports::{PostRepository, UploadUrlIssuer};
use guestbook_infra::repository::InMemoryPostRepository;
use guestbook_infra::store::InMemoryRowStore;
use guestbook_infra::uploads::{SignedUploadUrlIssuer, UploadConfig};

#[cfg(feature = "postgres")]
use guestbook_infra::database::DatabaseConnections;
#[cfg(feature = "postgres")]
use guestbook_infra::repository::PostgresPostRepository;
#[cfg(feature = "postgres")]
use guestbook_infra::store::PostgresRowStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub upload_urls: Arc<dyn UploadUrlIssuer>,
    pub uploads: UploadConfig,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(db_config) = config.database.as_ref() {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => Arc::new(PostgresPostRepository::new(
                        PostgresRowStore::new(connections.main),
                    )),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new(InMemoryRowStore::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new(InMemoryRowStore::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory row store");
            Arc::new(InMemoryPostRepository::new(InMemoryRowStore::new()))
        };

        let upload_urls: Arc<dyn UploadUrlIssuer> =
            Arc::new(SignedUploadUrlIssuer::new(config.uploads.clone()));

        tracing::info!("Application state initialized");

        Self {
            posts,
            upload_urls,
            uploads: config.uploads.clone(),
        }
    }
}
