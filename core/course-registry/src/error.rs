//! Error types for the registry.

use course_types::CourseId;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors reported by strict registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A course with this id is already registered.
    #[error("duplicate course id: {0}")]
    DuplicateCourse(CourseId),
}
