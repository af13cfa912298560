//! Error handling - maps controller outcomes onto HTTP responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::Serialize;
use std::fmt;

use posts_core::PostOutcome;

/// Application-level error type. Rendered with an empty body: the cause is
/// logged where it happened and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal => write!(f, "Internal error"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Body extraction settings for every route. A body that cannot be read as
/// the expected JSON is a server error with an empty body, like any other
/// failure to hand the request to the store.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");
    AppError::Internal.into()
}

/// Turn a controller outcome into the single response for this request.
pub fn respond<T: Serialize>(outcome: PostOutcome<T>) -> AppResult<HttpResponse> {
    match outcome {
        PostOutcome::Ok(body) => Ok(HttpResponse::Ok().json(body)),
        PostOutcome::NotFound => Err(AppError::NotFound),
        PostOutcome::ServerError => Err(AppError::Internal),
    }
}
