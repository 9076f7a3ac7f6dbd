//! The course registry.
//!
//! Courses are stored in insertion order and found by linear scan. When two
//! courses share an id (possible through [`CourseManager::add_course`]), the
//! first one registered wins every lookup.

use crate::{RegistryError, RegistryResult};
use course_model::{Course, Student, Teacher};
use course_types::{CourseId, StudentId, TeacherId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the registered courses and mediates every change to them.
#[derive(Debug, Clone, Default)]
pub struct CourseManager {
    courses: Vec<Course>,
}

impl CourseManager {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `course` without checking for an existing id.
    pub fn add_course(&mut self, course: Course) {
        debug!("Registered course {} ({})", course.id(), course.title());
        self.courses.push(course);
    }

    /// Appends `course` only if no registered course has the same id.
    pub fn try_add_course(&mut self, course: Course) -> RegistryResult<()> {
        if self.contains(course.id()) {
            warn!("Rejected duplicate course id {}", course.id());
            return Err(RegistryError::DuplicateCourse(course.id()));
        }
        self.add_course(course);
        Ok(())
    }

    /// Removes every course with `course_id`. Returns `true` if any was removed.
    pub fn remove_course(&mut self, course_id: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id() != course_id);
        let removed = before - self.courses.len();
        if removed > 0 {
            debug!("Removed course {} ({} entries)", course_id, removed);
        }
        removed > 0
    }

    /// Assigns `teacher` to the course, replacing any previous teacher.
    ///
    /// Returns `false` if no such course is registered.
    pub fn assign_teacher(&mut self, course_id: CourseId, teacher: Arc<Teacher>) -> bool {
        match self.get_mut(course_id) {
            Some(course) => {
                course.assign_teacher(teacher);
                true
            }
            None => false,
        }
    }

    /// Enrolls `student` in the course.
    ///
    /// Returns `false` if the course is unknown or the student is already
    /// enrolled.
    pub fn enroll_student(&mut self, course_id: CourseId, student: Arc<Student>) -> bool {
        self.get_mut(course_id).is_some_and(|c| c.add_student(student))
    }

    /// Removes the student from the course roster.
    ///
    /// Returns `false` if the course is unknown or the student was not
    /// enrolled.
    pub fn unenroll_student(&mut self, course_id: CourseId, student_id: StudentId) -> bool {
        self.get_mut(course_id).is_some_and(|c| c.remove_student(student_id))
    }

    /// Courses currently taught by `teacher_id`, in registration order.
    pub fn courses_by_teacher(&self, teacher_id: TeacherId) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.teacher().is_some_and(|t| t.id() == teacher_id))
            .collect()
    }

    /// Courses whose roster contains `student_id`, in registration order.
    pub fn courses_for_student(&self, student_id: StudentId) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.has_student(student_id))
            .collect()
    }

    /// All courses in registration order.
    pub fn list_all(&self) -> &[Course] {
        &self.courses
    }

    /// First course registered with `course_id`.
    pub fn get(&self, course_id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == course_id)
    }

    /// Mutable access to the first course registered with `course_id`.
    pub fn get_mut(&mut self, course_id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id() == course_id)
    }

    pub fn contains(&self, course_id: CourseId) -> bool {
        self.get(course_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
