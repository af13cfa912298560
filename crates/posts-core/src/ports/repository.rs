use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Post persistence. Storage, schema and query logic live behind this trait.
///
/// Every call resolves exactly once, with either an error or a value.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post. The store assigns `id` and `date`.
    async fn create_post(&self, data: NewPost) -> Result<Post, RepoError>;

    /// Apply a partial update. `Ok(None)` when no post has this id.
    async fn update_post(&self, id: &PostId, data: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Find a post by id. `Ok(None)` when it does not exist.
    async fn find_post(&self, id: &PostId) -> Result<Option<Post>, RepoError>;

    /// Every stored post, in store order.
    async fn get_all_posts(&self) -> Result<Vec<Post>, RepoError>;
}
