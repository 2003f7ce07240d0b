//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the guestbook use cases.
///
/// `PostNotFound` is the single domain-specific error the boundary must tell
/// apart from everything else; any backend failure travels as `Storage`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("The post identified by {post_id} is not found")]
    PostNotFound { post_id: Uuid },

    #[error("Storage failure: {0}")]
    Storage(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
