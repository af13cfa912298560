//! # Posts Core
//!
//! The domain layer of the posts service.
//! Holds the `Post` entity, the persistence port and the controller that maps
//! persistence outcomes onto responses. No infrastructure dependencies.

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;

pub use controller::{PostController, PostOutcome, UpdateMissingPolicy};
pub use error::RepoError;
