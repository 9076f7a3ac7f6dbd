//! Thread-safe handle over a [`CourseManager`].
//!
//! Every operation, read or write, runs under the same lock. Queries return
//! owned clones so no guard escapes the call.

use crate::{CourseManager, RegistryResult};
use course_model::{Course, Student, Teacher};
use course_types::{CourseId, StudentId, TeacherId};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, lock-guarded course registry.
#[derive(Debug, Clone, Default)]
pub struct SharedCourseManager {
    inner: Arc<Mutex<CourseManager>>,
}

impl SharedCourseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing registry.
    pub fn from_manager(manager: CourseManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, CourseManager> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut CourseManager) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn add_course(&self, course: Course) {
        self.lock().add_course(course);
    }

    pub fn try_add_course(&self, course: Course) -> RegistryResult<()> {
        self.lock().try_add_course(course)
    }

    pub fn remove_course(&self, course_id: CourseId) -> bool {
        self.lock().remove_course(course_id)
    }

    pub fn assign_teacher(&self, course_id: CourseId, teacher: Arc<Teacher>) -> bool {
        self.lock().assign_teacher(course_id, teacher)
    }

    pub fn enroll_student(&self, course_id: CourseId, student: Arc<Student>) -> bool {
        self.lock().enroll_student(course_id, student)
    }

    pub fn unenroll_student(&self, course_id: CourseId, student_id: StudentId) -> bool {
        self.lock().unenroll_student(course_id, student_id)
    }

    pub fn courses_by_teacher(&self, teacher_id: TeacherId) -> Vec<Course> {
        self.lock()
            .courses_by_teacher(teacher_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn list_all(&self) -> Vec<Course> {
        self.lock().list_all().to_vec()
    }

    pub fn get(&self, course_id: CourseId) -> Option<Course> {
        self.lock().get(course_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
