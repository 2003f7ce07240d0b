//! PostgreSQL row store backed by SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter};
use uuid::Uuid;

use guestbook_core::error::RepoError;

use crate::database::entity::row::{self, Entity as RowEntity};

use super::{RawRow, RowStore};

/// Row store over the `guest_book_rows` table.
pub struct PostgresRowStore {
    db: DbConn,
}

impl PostgresRowStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RowStore for PostgresRowStore {
    async fn scan(&self) -> Result<Vec<RawRow>, RepoError> {
        let models = RowEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn query_partition(&self, h_key: Uuid) -> Result<Vec<RawRow>, RepoError> {
        tracing::debug!(%h_key, "Querying partition");

        let models = RowEntity::find()
            .filter(row::Column::HKey.eq(h_key))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn put_all(&self, rows: Vec<RawRow>) -> Result<(), RepoError> {
        if rows.is_empty() {
            return Ok(());
        }

        let models = rows.into_iter().map(row::ActiveModel::from);

        RowEntity::insert_many(models)
            .on_conflict(
                OnConflict::columns([row::Column::HKey, row::Column::SKey])
                    .update_columns([
                        row::Column::RowType,
                        row::Column::Name,
                        row::Column::Message,
                        row::Column::ImageUrl,
                        row::Column::PostedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete_partition(&self, h_key: Uuid) -> Result<(), RepoError> {
        RowEntity::delete_many()
            .filter(row::Column::HKey.eq(h_key))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
