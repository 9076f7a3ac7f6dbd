//! In-memory registry of courses.
//!
//! [`CourseManager`] is the only mutator and query surface over the course
//! collection. Every operation is keyed by identifier, so callers never need
//! to hold live references to the courses they registered.
//!
//! Absence is not an error: lookups that miss return `false` or an empty
//! result. Only [`CourseManager::try_add_course`] reports failures, for
//! callers that want id uniqueness enforced at insertion.
//!
//! The manager is single-owner. [`SharedCourseManager`] wraps it in one mutex
//! for callers that need to mutate it from several threads.

mod error;
mod manager;
mod shared;

pub use error::{RegistryError, RegistryResult};
pub use manager::CourseManager;
pub use shared::SharedCourseManager;
