//! In-memory post repository - fallback when PostgreSQL is unavailable.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostId, PostPatch};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use crate::generate_post_id;

/// Post store backed by a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order, which is the order `get_all_posts`
/// returns. Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, data: NewPost) -> Result<Post, RepoError> {
        let post = data.into_post(generate_post_id(), Utc::now())?;

        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!("duplicate id {}", post.id)));
        }
        posts.push(post.clone());

        Ok(post)
    }

    async fn update_post(&self, id: &PostId, data: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };

        post.apply(data);
        Ok(Some(post.clone()))
    }

    async fn find_post(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| &p.id == id).cloned())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost::new("stswenguser", title, "Random content")
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_date() {
        let repo = InMemoryPostRepository::new();
        let before = Utc::now();

        let post = repo.create_post(new_post("My first test post")).await.unwrap();

        assert!(!post.id.as_str().is_empty());
        assert!(post.date >= before);
        assert_eq!(post.title, "My first test post");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_field() {
        let repo = InMemoryPostRepository::new();
        let data = NewPost {
            author: Some("stswenguser".to_string()),
            ..Default::default()
        };

        let err = repo.create_post(data).await.unwrap_err();

        assert!(matches!(err, RepoError::MissingField("title")));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create_post(new_post("Original")).await.unwrap();

        let patch = PostPatch {
            title: Some("Updated Title".to_string()),
            ..Default::default()
        };
        let updated = repo.update_post(&created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, created.date);
        assert_eq!(repo.find_post(&created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryPostRepository::new();

        let result = repo
            .update_post(&PostId::new("nonexistentid"), PostPatch::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(repo.find_post(&PostId::new("nonexistentid")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order_and_unique_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create_post(new_post("First Post")).await.unwrap();
        let second = repo.create_post(new_post("Second Post")).await.unwrap();

        let all = repo.get_all_posts().await.unwrap();

        assert_eq!(all, vec![first.clone(), second.clone()]);
        assert_ne!(first.id, second.id);
    }
}
