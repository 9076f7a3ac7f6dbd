//! Entity model for the course registry.
//!
//! Defines the values the registry stores and hands back:
//! - [`Teacher`] and [`Student`]: immutable id + name holders
//! - [`Course`]: id, title, optional teacher and a duplicate-free roster
//! - [`CourseKind`]: the delivery variant (online platform or offline room)
//!
//! Teachers and students are shared through `Arc`. A course refers to them
//! but never owns their lifetime; dropping a course leaves them untouched.

mod course;
mod person;

pub use course::{Course, CourseKind, UNASSIGNED_TEACHER};
pub use person::{Student, Teacher};
