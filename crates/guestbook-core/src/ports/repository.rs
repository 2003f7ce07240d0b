use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - the storage capability the guestbook needs.
///
/// Absence in `find_by_id` is a normal outcome (`Ok(None)`), never an error.
/// `save` operates at aggregate granularity: the full current state of the
/// post including every reply is persisted, so a subsequent fetch reconstructs
/// exactly the in-memory state.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every post with its replies fully populated.
    async fn fetch_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post and its replies by ID.
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist the full current state of the post (full overwrite).
    async fn save(&self, post: &Post) -> Result<(), RepoError>;

    /// Delete the post together with all of its replies.
    async fn remove_by_id(&self, post_id: Uuid) -> Result<(), RepoError>;
}
