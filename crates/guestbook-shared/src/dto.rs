//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use guestbook_core::domain::Post;

/// Request to create a new post.
///
/// `image_file_name` announces an upcoming image upload; the response then
/// carries a short-lived URL to upload it to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostRequest {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_file_name: Option<String>,
}

/// Response to a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostResponse {
    pub post: Post,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_upload_url: Option<String>,
}

/// Request to reply to a post.
///
/// The post id travels in the URL path; a `post_id` field in the body is
/// accepted for compatibility but the path segment is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReplyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<Uuid>,
    pub replyer_name: String,
    pub reply_message: String,
}

/// A batch of upload completion notifications from the file store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEventBatch {
    pub records: Vec<UploadEventRecord>,
}

/// One stored object event. Keys are `"<post_id>/<file_name>"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEventRecord {
    pub event_name: String,
    pub bucket: String,
    pub key: String,
}

/// Outcome of ingesting an upload event batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEventsResponse {
    pub processed: usize,
}
