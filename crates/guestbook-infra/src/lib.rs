//! # Guestbook Infrastructure
//!
//! Concrete implementations of the ports defined in `guestbook-core`:
//! row stores and the post repository over them, database connection
//! management, and upload URL signing.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL row store via SeaORM
//! - `minimal` - no external storage, in-memory row store only

pub mod database;
pub mod repository;
pub mod store;
pub mod uploads;

// Re-exports - In-Memory
pub use repository::{InMemoryPostRepository, RowStorePostRepository};
pub use store::InMemoryRowStore;
pub use uploads::{SignedUploadUrlIssuer, UploadConfig};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
#[cfg(feature = "postgres")]
pub use repository::PostgresPostRepository;
#[cfg(feature = "postgres")]
pub use store::PostgresRowStore;
