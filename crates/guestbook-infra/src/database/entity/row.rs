//! Guestbook row entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::store::RawRow;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guest_book_rows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub h_key: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub s_key: Uuid,
    #[sea_orm(column_name = "type_")]
    pub row_type: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub image_url: Option<String>,
    /// Epoch milliseconds.
    pub posted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the raw storage row.
impl From<Model> for RawRow {
    fn from(model: Model) -> Self {
        Self {
            h_key: model.h_key,
            s_key: model.s_key,
            type_: model.row_type,
            name: model.name,
            message: model.message,
            image_url: model.image_url,
            posted_at: model.posted_at,
        }
    }
}

/// Conversion from the raw storage row to a SeaORM ActiveModel.
impl From<RawRow> for ActiveModel {
    fn from(row: RawRow) -> Self {
        Self {
            h_key: Set(row.h_key),
            s_key: Set(row.s_key),
            row_type: Set(row.type_),
            name: Set(row.name),
            message: Set(row.message),
            image_url: Set(row.image_url),
            posted_at: Set(row.posted_at),
        }
    }
}
