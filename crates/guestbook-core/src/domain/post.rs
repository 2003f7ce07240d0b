use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post aggregate root - a guestbook entry together with its replies.
///
/// Replies are owned exclusively by the post: they are appended in place and
/// only disappear when the whole post is removed. Serde field names are the
/// wire names (`image_url`, `posted_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub image_url: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

impl Post {
    /// Create a new post with generated ID and timestamp and no replies.
    pub fn new(name: String, message: String, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            message,
            image_url,
            // Stored rows carry epoch milliseconds; mint at that precision.
            posted_at: Utc::now().trunc_subsecs(3),
            replies: Vec::new(),
        }
    }

    /// Append a newly minted reply. Insertion order is preserved.
    pub fn add_reply(&mut self, replier_name: String, reply_message: String) {
        self.replies.push(Reply::new(replier_name, reply_message));
    }

    /// Set the image URL. A repeated upload overwrites the prior value.
    pub fn set_image_url(&mut self, image_url: String) {
        self.image_url = Some(image_url);
    }
}

/// Reply to a post. Only meaningful in the context of its owning post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl Reply {
    /// Create a new reply with generated ID and timestamp.
    pub fn new(name: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            message,
            posted_at: Utc::now().trunc_subsecs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_has_empty_replies_and_generated_id() {
        let post = Post::new(
            "Taro".to_string(),
            "It is nice place here!".to_string(),
            Some("https://example.com/photo.png".to_string()),
        );

        assert!(!post.id.is_nil());
        assert_eq!(post.name, "Taro");
        assert_eq!(post.message, "It is nice place here!");
        assert_eq!(
            post.image_url.as_deref(),
            Some("https://example.com/photo.png")
        );
        assert!(post.replies.is_empty());
    }

    #[test]
    fn new_post_without_image_has_unset_url() {
        let post = Post::new("Taro".to_string(), "Hi, everyone".to_string(), None);
        assert!(post.image_url.is_none());
    }

    #[test]
    fn post_ids_are_unique_across_calls() {
        let ids: Vec<Uuid> = (0..32)
            .map(|_| Post::new("Taro".to_string(), "Hi".to_string(), None).id)
            .collect();

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn add_reply_appends_in_call_order() {
        let mut post = Post::new("Taro".to_string(), "Hi, everyone".to_string(), None);
        post.add_reply("Hanako".to_string(), "I am with you".to_string());
        post.add_reply("Jiro".to_string(), "You are right!".to_string());
        post.add_reply("Saburo".to_string(), "I see".to_string());

        assert_eq!(post.replies.len(), 3);
        assert_eq!(post.replies[0].name, "Hanako");
        assert_eq!(post.replies[0].message, "I am with you");
        assert_eq!(post.replies[1].name, "Jiro");
        assert_eq!(post.replies[2].name, "Saburo");
    }

    #[test]
    fn set_image_url_overwrites() {
        let mut post = Post::new("Taro".to_string(), "Hi".to_string(), None);
        post.set_image_url("https://example.com/a.png".to_string());
        post.set_image_url("https://example.com/b.png".to_string());
        assert_eq!(post.image_url.as_deref(), Some("https://example.com/b.png"));
    }

    #[test]
    fn post_serializes_with_wire_field_names() {
        let mut post = Post::new(
            "Taro".to_string(),
            "Hi".to_string(),
            Some("https://example.com/photo.png".to_string()),
        );
        post.add_reply("Hanako".to_string(), "I am with you".to_string());

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["image_url"], "https://example.com/photo.png");
        assert!(json["posted_at"].is_string());
        assert_eq!(json["replies"].as_array().unwrap().len(), 1);
        assert!(json["replies"][0]["posted_at"].is_string());
    }
}
