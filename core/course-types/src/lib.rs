//! Core identifier types for the course registry.
//!
//! Teachers, students and courses are looked up by opaque identifiers only,
//! never by object identity. Each kind of identifier is its own type so one
//! cannot be passed where another is expected.

mod ids;

pub use ids::{CourseId, StudentId, TeacherId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
