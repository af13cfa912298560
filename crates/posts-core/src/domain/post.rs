use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RepoError;

/// Opaque post identifier, assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Post entity - a text record with author, title and content.
///
/// `id` and `date` are owned by the store and never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Apply a partial update. Only the fields present in `patch` change.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Body of a create request, forwarded to the store as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NewPost {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: Some(author.into()),
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Build the stored entity once the store has assigned `id` and `date`.
    /// Fails on the first missing field.
    pub fn into_post(self, id: PostId, date: DateTime<Utc>) -> Result<Post, RepoError> {
        Ok(Post {
            id,
            author: self.author.ok_or(RepoError::MissingField("author"))?,
            title: self.title.ok_or(RepoError::MissingField("title"))?,
            content: self.content.ok_or(RepoError::MissingField("content"))?,
            date,
        })
    }
}

/// Body of an update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        NewPost::new("stswenguser", "My first test post", "Random content")
            .into_post(PostId::new("507asdghajsdhjgasd"), Utc::now())
            .unwrap()
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut post = sample();
        let before = post.clone();

        post.apply(PostPatch {
            title: Some("Updated Title".to_string()),
            content: Some("Updated Content".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "Updated Title");
        assert_eq!(post.content, "Updated Content");
        assert_eq!(post.author, before.author);
        assert_eq!(post.id, before.id);
        assert_eq!(post.date, before.date);
    }

    #[test]
    fn test_into_post_requires_every_field() {
        let partial = NewPost {
            author: Some("stswenguser".to_string()),
            title: None,
            content: Some("Random content".to_string()),
        };

        let err = partial
            .into_post(PostId::new("x"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, RepoError::MissingField("title")));
    }

    #[test]
    fn test_post_serializes_id_as_underscore_id() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["_id"], "507asdghajsdhjgasd");
        assert_eq!(json["author"], "stswenguser");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_patch_deserializes_partial_body() {
        let patch: PostPatch = serde_json::from_str(r#"{"title":"Updated Title"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Updated Title"));
        assert!(patch.author.is_none());
        assert!(!patch.is_empty());
        assert!(PostPatch::default().is_empty());
    }
}
