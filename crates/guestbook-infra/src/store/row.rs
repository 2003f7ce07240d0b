//! Denormalized storage rows for the guestbook table.
//!
//! A post and all of its replies share one partition key (`h_key`). The sort
//! key (`s_key`) is the post's own id on the post row and the reply's own id
//! on each reply row; a `type_` tag tells the two kinds apart.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use guestbook_core::domain::{Post, Reply};

pub const TYPE_POST: &str = "Post";
pub const TYPE_REPLY: &str = "Reply";

/// A storage record as it comes back from a scan or query, before the type
/// tag has been inspected. `posted_at` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub h_key: Uuid,
    pub s_key: Uuid,
    pub type_: String,
    pub name: String,
    pub message: String,
    pub image_url: Option<String>,
    pub posted_at: i64,
}

/// Per-row parse failure. Non-fatal: the row is dropped and the batch
/// continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowParseError {
    #[error("unrecognized row type tag {0:?}")]
    UnknownType(String),

    #[error("posted_at {0} is out of range")]
    InvalidTimestamp(i64),
}

/// Post-kind row. `h_key == s_key == post id`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub h_key: Uuid,
    pub s_key: Uuid,
    pub name: String,
    pub message: String,
    pub image_url: Option<String>,
    pub posted_at: DateTime<Utc>,
}

impl PostRow {
    pub fn from_post(post: &Post) -> Self {
        Self {
            h_key: post.id,
            s_key: post.id,
            name: post.name.clone(),
            message: post.message.clone(),
            image_url: post.image_url.clone(),
            posted_at: post.posted_at,
        }
    }

    /// Rebuild the aggregate root, attaching the replies of its partition.
    pub fn into_post(self, replies: Vec<Reply>) -> Post {
        Post {
            id: self.h_key,
            name: self.name,
            message: self.message,
            image_url: self.image_url,
            posted_at: self.posted_at,
            replies,
        }
    }
}

/// Reply-kind row. `h_key` is the owning post id, `s_key` the reply's own id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyRow {
    pub h_key: Uuid,
    pub s_key: Uuid,
    pub name: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl ReplyRow {
    pub fn from_reply(post_id: Uuid, reply: &Reply) -> Self {
        Self {
            h_key: post_id,
            s_key: reply.id,
            name: reply.name.clone(),
            message: reply.message.clone(),
            posted_at: reply.posted_at,
        }
    }

    pub fn into_reply(self) -> Reply {
        Reply {
            id: self.s_key,
            name: self.name,
            message: self.message,
            posted_at: self.posted_at,
        }
    }
}

/// A validated row of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRow {
    Post(PostRow),
    Reply(ReplyRow),
}

impl StoredRow {
    pub fn to_raw(&self) -> RawRow {
        match self {
            StoredRow::Post(row) => RawRow {
                h_key: row.h_key,
                s_key: row.s_key,
                type_: TYPE_POST.to_string(),
                name: row.name.clone(),
                message: row.message.clone(),
                image_url: row.image_url.clone(),
                posted_at: row.posted_at.timestamp_millis(),
            },
            StoredRow::Reply(row) => RawRow {
                h_key: row.h_key,
                s_key: row.s_key,
                type_: TYPE_REPLY.to_string(),
                name: row.name.clone(),
                message: row.message.clone(),
                image_url: None,
                posted_at: row.posted_at.timestamp_millis(),
            },
        }
    }
}

/// Inspect the type tag and decode the kind-specific fields.
///
/// Never panics: unknown tags and out-of-range timestamps come back as
/// [`RowParseError`] values for the caller to drop or log.
pub fn parse_row(raw: RawRow) -> Result<StoredRow, RowParseError> {
    let posted_at = DateTime::from_timestamp_millis(raw.posted_at)
        .ok_or(RowParseError::InvalidTimestamp(raw.posted_at))?;

    match raw.type_.as_str() {
        TYPE_POST => Ok(StoredRow::Post(PostRow {
            h_key: raw.h_key,
            s_key: raw.s_key,
            name: raw.name,
            message: raw.message,
            image_url: raw.image_url,
            posted_at,
        })),
        TYPE_REPLY => Ok(StoredRow::Reply(ReplyRow {
            h_key: raw.h_key,
            s_key: raw.s_key,
            name: raw.name,
            message: raw.message,
            posted_at,
        })),
        _ => Err(RowParseError::UnknownType(raw.type_)),
    }
}
