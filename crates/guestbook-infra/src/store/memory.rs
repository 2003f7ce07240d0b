//! In-memory row store - used in tests and as fallback when no database is
//! configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use guestbook_core::error::RepoError;

use super::{RawRow, RowStore};

/// Row store backed by a BTreeMap under an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryRowStore {
    rows: RwLock<BTreeMap<(Uuid, Uuid), RawRow>>,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn scan(&self) -> Result<Vec<RawRow>, RepoError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn query_partition(&self, h_key: Uuid) -> Result<Vec<RawRow>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.h_key == h_key)
            .cloned()
            .collect())
    }

    async fn put_all(&self, rows: Vec<RawRow>) -> Result<(), RepoError> {
        let mut store = self.rows.write().await;
        for row in rows {
            store.insert((row.h_key, row.s_key), row);
        }
        Ok(())
    }

    async fn delete_partition(&self, h_key: Uuid) -> Result<(), RepoError> {
        let mut store = self.rows.write().await;
        store.retain(|(partition, _), _| *partition != h_key);
        Ok(())
    }
}
