//! Persistence-level error types.

use thiserror::Error;

/// Errors raised by a `PostRepository` implementation.
///
/// The controller never inspects the variant: every one of them is surfaced
/// as a server error with an empty body.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
}
