//! Use-case orchestration for the guestbook.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::ServiceError;
use crate::ports::PostRepository;

/// Guestbook use cases composed over a [`PostRepository`].
///
/// Existence checks live here, not in the repository, so "not found" is a
/// single uniformly-typed domain error regardless of which backend is plugged
/// in. The service is cheap to construct; build one per request.
pub struct GuestBookService {
    repository: Arc<dyn PostRepository>,
}

impl GuestBookService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// All posts. No guaranteed ordering across posts.
    pub async fn get_posts(&self) -> Result<Vec<Post>, ServiceError> {
        Ok(self.repository.fetch_all().await?)
    }

    /// A single post by ID. Absence is a successful `None`, not an error.
    pub async fn find_post_by_id(&self, post_id: Uuid) -> Result<Option<Post>, ServiceError> {
        Ok(self.repository.find_by_id(post_id).await?)
    }

    /// Create and persist a new post, returning it.
    pub async fn add_new_post(
        &self,
        name: String,
        message: String,
        image_url: Option<String>,
    ) -> Result<Post, ServiceError> {
        let post = Post::new(name, message, image_url);
        self.repository.save(&post).await?;
        Ok(post)
    }

    /// Append a reply to an existing post and persist the whole aggregate.
    pub async fn add_new_reply_to_post(
        &self,
        post_id: Uuid,
        replier_name: String,
        reply_message: String,
    ) -> Result<(), ServiceError> {
        let mut post = self
            .repository
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::PostNotFound { post_id })?;

        post.add_reply(replier_name, reply_message);
        self.repository.save(&post).await?;
        Ok(())
    }

    /// Remove a post and, with it, all of its replies.
    pub async fn remove_post(&self, post_id: Uuid) -> Result<(), ServiceError> {
        if self.repository.find_by_id(post_id).await?.is_none() {
            return Err(ServiceError::PostNotFound { post_id });
        }

        self.repository.remove_by_id(post_id).await?;
        Ok(())
    }

    /// Record the image URL once its upload has completed.
    pub async fn image_uploaded(
        &self,
        post_id: Uuid,
        image_url: String,
    ) -> Result<(), ServiceError> {
        let mut post = self
            .repository
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::PostNotFound { post_id })?;

        post.set_image_url(image_url);
        self.repository.save(&post).await?;
        Ok(())
    }
}
