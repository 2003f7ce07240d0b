//! Post repository over a row store.

use async_trait::async_trait;
use uuid::Uuid;

use guestbook_core::domain::Post;
use guestbook_core::error::RepoError;
use guestbook_core::ports::PostRepository;

use crate::store::{self, InMemoryRowStore, RowStore};

#[cfg(feature = "postgres")]
use crate::store::PostgresRowStore;

/// [`PostRepository`] implementation over any [`RowStore`], applying the
/// aggregate/row mapping on the way in and out.
pub struct RowStorePostRepository<S: RowStore> {
    store: S,
}

/// In-memory post repository.
pub type InMemoryPostRepository = RowStorePostRepository<InMemoryRowStore>;

/// PostgreSQL post repository.
#[cfg(feature = "postgres")]
pub type PostgresPostRepository = RowStorePostRepository<PostgresRowStore>;

impl<S: RowStore> RowStorePostRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: RowStore> PostRepository for RowStorePostRepository<S> {
    async fn fetch_all(&self) -> Result<Vec<Post>, RepoError> {
        let raws = self.store.scan().await?;
        let (rows, dropped) = store::parse_rows(raws);
        if !dropped.is_empty() {
            tracing::warn!(count = dropped.len(), "Dropped unparseable rows during scan");
        }

        Ok(store::posts_from_rows(rows))
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, RepoError> {
        let raws = self.store.query_partition(post_id).await?;
        let (rows, dropped) = store::parse_rows(raws);
        if !dropped.is_empty() {
            tracing::warn!(
                %post_id,
                count = dropped.len(),
                "Dropped unparseable rows during lookup"
            );
        }

        Ok(store::post_from_rows(post_id, rows))
    }

    async fn save(&self, post: &Post) -> Result<(), RepoError> {
        tracing::debug!(post_id = %post.id, replies = post.replies.len(), "Saving post aggregate");
        self.store.put_all(store::rows_from_post(post)).await
    }

    async fn remove_by_id(&self, post_id: Uuid) -> Result<(), RepoError> {
        // Deleting the partition takes the reply rows with the post row.
        self.store.delete_partition(post_id).await
    }
}
