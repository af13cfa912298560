//! Post controller - one handler per repository operation.
//!
//! Each handler awaits its repository call exactly once and folds the result
//! into a [`PostOutcome`]. Error details stay in the logs; callers only see
//! which of the three outcomes happened.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::ports::PostRepository;

/// Input of [`PostController::create`].
#[derive(Debug, Clone)]
pub struct CreateInput {
    pub body: NewPost,
}

/// Input of [`PostController::update`].
#[derive(Debug, Clone)]
pub struct UpdateInput {
    pub id: PostId,
    pub patch: PostPatch,
}

/// Input of [`PostController::find_post`].
#[derive(Debug, Clone)]
pub struct FindInput {
    pub id: PostId,
}

/// Input of [`PostController::get_all_posts`].
#[derive(Debug, Clone, Default)]
pub struct ListInput {}

/// Result of a controller call, one variant per response shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PostOutcome<T> {
    /// Success: default status with a JSON body.
    Ok(T),
    /// Resource absent: 404 with an empty body.
    NotFound,
    /// Persistence failure: 500 with an empty body.
    ServerError,
}

/// What `update` reports when the store has no post with the given id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMissingPolicy {
    /// Report success with a `null` body.
    #[default]
    PassThrough,
    /// Report 404, the same way `find_post` does.
    NotFound,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown update-missing policy `{0}` (expected `pass-through` or `not-found`)")]
pub struct ParsePolicyError(String);

impl FromStr for UpdateMissingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass-through" | "passthrough" => Ok(Self::PassThrough),
            "not-found" | "notfound" | "404" => Ok(Self::NotFound),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

impl fmt::Display for UpdateMissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassThrough => f.write_str("pass-through"),
            Self::NotFound => f.write_str("not-found"),
        }
    }
}

/// Maps post repository outcomes onto responses.
///
/// Holds no per-request state; one instance is shared by all workers.
#[derive(Clone)]
pub struct PostController {
    posts: Arc<dyn PostRepository>,
    update_missing: UpdateMissingPolicy,
}

impl PostController {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            update_missing: UpdateMissingPolicy::default(),
        }
    }

    pub fn with_update_missing(mut self, policy: UpdateMissingPolicy) -> Self {
        self.update_missing = policy;
        self
    }

    pub async fn create(&self, input: CreateInput) -> PostOutcome<Post> {
        match self.posts.create_post(input.body).await {
            Ok(post) => {
                tracing::debug!(post_id = %post.id, "Post created");
                PostOutcome::Ok(post)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create post");
                PostOutcome::ServerError
            }
        }
    }

    /// Under [`UpdateMissingPolicy::PassThrough`] a missing id yields
    /// `Ok(None)`; under [`UpdateMissingPolicy::NotFound`] it yields
    /// `NotFound`.
    pub async fn update(&self, input: UpdateInput) -> PostOutcome<Option<Post>> {
        match self.posts.update_post(&input.id, input.patch).await {
            Ok(Some(post)) => PostOutcome::Ok(Some(post)),
            Ok(None) => match self.update_missing {
                UpdateMissingPolicy::PassThrough => {
                    tracing::warn!(post_id = %input.id, "Update matched no post, passing through");
                    PostOutcome::Ok(None)
                }
                UpdateMissingPolicy::NotFound => {
                    tracing::debug!(post_id = %input.id, "Update matched no post");
                    PostOutcome::NotFound
                }
            },
            Err(e) => {
                tracing::error!(post_id = %input.id, error = %e, "Failed to update post");
                PostOutcome::ServerError
            }
        }
    }

    pub async fn find_post(&self, input: FindInput) -> PostOutcome<Post> {
        match self.posts.find_post(&input.id).await {
            Ok(Some(post)) => PostOutcome::Ok(post),
            Ok(None) => {
                tracing::debug!(post_id = %input.id, "Post not found");
                PostOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(post_id = %input.id, error = %e, "Failed to find post");
                PostOutcome::ServerError
            }
        }
    }

    pub async fn get_all_posts(&self, _input: ListInput) -> PostOutcome<Vec<Post>> {
        match self.posts.get_all_posts().await {
            Ok(posts) => PostOutcome::Ok(posts),
            Err(e) => {
                tracing::error!(error = %e, "Failed to list posts");
                PostOutcome::ServerError
            }
        }
    }
}
