//! # Posts Infrastructure
//!
//! Concrete implementations of the `PostRepository` port defined in
//! `posts-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};

/// Fresh opaque id for a new post.
pub(crate) fn generate_post_id() -> posts_core::domain::PostId {
    posts_core::domain::PostId::new(uuid::Uuid::new_v4().simple().to_string())
}
