//! Post handlers. Each one extracts a typed input, runs the controller once
//! and writes exactly one response.

use actix_web::{HttpResponse, web};

use posts_core::controller::{CreateInput, FindInput, ListInput, UpdateInput};
use posts_core::domain::{NewPost, PostId, PostPatch};

use crate::middleware::error::{AppResult, respond};
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .posts
        .create(CreateInput {
            body: body.into_inner(),
        })
        .await;

    respond(outcome)
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .posts
        .update(UpdateInput {
            id: PostId::from(path.into_inner()),
            patch: body.into_inner(),
        })
        .await;

    respond(outcome)
}

/// GET /api/posts/{id}
pub async fn find_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .posts
        .find_post(FindInput {
            id: PostId::from(path.into_inner()),
        })
        .await;

    respond(outcome)
}

/// GET /api/posts
pub async fn get_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    respond(state.posts.get_all_posts(ListInput::default()).await)
}
