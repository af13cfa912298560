//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, Set};

use posts_core::domain::{NewPost, Post, PostId, PostPatch};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use crate::generate_post_id;

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, data: NewPost) -> Result<Post, RepoError> {
        let new_post = data.into_post(generate_post_id(), Utc::now())?;
        tracing::debug!(post_id = %new_post.id, "Inserting post");

        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update_post(&self, id: &PostId, data: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id.as_str().to_owned())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        if data.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active_model: post::ActiveModel = model.into();
        if let Some(author) = data.author {
            active_model.author = Set(author);
        }
        if let Some(title) = data.title {
            active_model.title = Set(title);
        }
        if let Some(content) = data.content {
            active_model.content = Set(content);
        }

        let updated = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.into()))
    }

    async fn find_post(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id.as_str().to_owned())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Date)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
