//! Row stores - the flat keyed storage behind the post repository.
//!
//! Rows are addressed by a composite key: the partition key (`h_key`) groups
//! a post with its replies, the sort key (`s_key`) distinguishes rows within
//! the partition.

mod mapper;
mod memory;
mod row;

#[cfg(feature = "postgres")]
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use guestbook_core::error::RepoError;

pub use mapper::{parse_rows, post_from_rows, posts_from_rows, rows_from_post};
pub use memory::InMemoryRowStore;
pub use row::{
    PostRow, RawRow, ReplyRow, RowParseError, StoredRow, TYPE_POST, TYPE_REPLY, parse_row,
};

#[cfg(feature = "postgres")]
pub use postgres::PostgresRowStore;

/// A flat keyed row store addressed by (partition, sort) key.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Every row from every partition.
    async fn scan(&self) -> Result<Vec<RawRow>, RepoError>;

    /// Every row sharing the given partition key.
    async fn query_partition(&self, h_key: Uuid) -> Result<Vec<RawRow>, RepoError>;

    /// Upsert rows by (h_key, s_key).
    async fn put_all(&self, rows: Vec<RawRow>) -> Result<(), RepoError>;

    /// Delete every row in the partition.
    async fn delete_partition(&self, h_key: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
impl<S: RowStore + ?Sized> RowStore for Arc<S> {
    async fn scan(&self) -> Result<Vec<RawRow>, RepoError> {
        self.as_ref().scan().await
    }

    async fn query_partition(&self, h_key: Uuid) -> Result<Vec<RawRow>, RepoError> {
        self.as_ref().query_partition(h_key).await
    }

    async fn put_all(&self, rows: Vec<RawRow>) -> Result<(), RepoError> {
        self.as_ref().put_all(rows).await
    }

    async fn delete_partition(&self, h_key: Uuid) -> Result<(), RepoError> {
        self.as_ref().delete_partition(h_key).await
    }
}
