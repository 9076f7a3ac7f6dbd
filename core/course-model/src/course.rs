//! Courses and their delivery variants.

use crate::{Student, Teacher};
use course_types::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Text shown in place of a teacher name while no teacher is assigned.
pub const UNASSIGNED_TEACHER: &str = "TBD";

/// How a course is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CourseKind {
    /// Taught remotely on a conferencing platform (e.g. "Zoom").
    Online { platform: String },
    /// Taught in a physical room (e.g. "2304").
    Offline { room: String },
}

/// A course with an optional teacher and a roster of enrolled students.
///
/// The roster keeps insertion order and never holds two students with the
/// same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    id: CourseId,
    title: String,
    kind: CourseKind,
    teacher: Option<Arc<Teacher>>,
    students: Vec<Arc<Student>>,
}

/// Wire shape of a [`Course`], checked before it becomes one.
#[derive(Deserialize)]
struct CourseRecord {
    id: CourseId,
    title: String,
    kind: CourseKind,
    teacher: Option<Arc<Teacher>>,
    students: Vec<Arc<Student>>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = String;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        let mut course = Self::with_id(record.id, record.title, record.kind);
        course.teacher = record.teacher;
        for student in record.students {
            let student_id = student.id();
            if !course.add_student(student) {
                return Err(format!(
                    "student {student_id} listed twice in course {}",
                    course.id
                ));
            }
        }
        Ok(course)
    }
}

impl Course {
    /// Creates a course with a fresh id, no teacher and an empty roster.
    pub fn new(title: impl Into<String>, kind: CourseKind) -> Self {
        Self::with_id(CourseId::new(), title, kind)
    }

    /// Creates a course for an id the caller already holds.
    pub fn with_id(id: CourseId, title: impl Into<String>, kind: CourseKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            teacher: None,
            students: Vec::new(),
        }
    }

    /// Shorthand for an online course on `platform`.
    pub fn online(title: impl Into<String>, platform: impl Into<String>) -> Self {
        Self::new(
            title,
            CourseKind::Online {
                platform: platform.into(),
            },
        )
    }

    /// Shorthand for an offline course held in `room`.
    pub fn offline(title: impl Into<String>, room: impl Into<String>) -> Self {
        Self::new(title, CourseKind::Offline { room: room.into() })
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &CourseKind {
        &self.kind
    }

    /// The currently assigned teacher, if any.
    pub fn teacher(&self) -> Option<&Arc<Teacher>> {
        self.teacher.as_ref()
    }

    /// Enrolled students in enrollment order.
    pub fn students(&self) -> &[Arc<Student>] {
        &self.students
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn has_student(&self, student_id: StudentId) -> bool {
        self.students.iter().any(|s| s.id() == student_id)
    }

    /// Assigns `teacher`, replacing whoever was assigned before.
    pub fn assign_teacher(&mut self, teacher: Arc<Teacher>) {
        debug!("Assigned teacher {} to course {}", teacher.id(), self.id);
        self.teacher = Some(teacher);
    }

    /// Removes the assigned teacher and returns it.
    pub fn clear_teacher(&mut self) -> Option<Arc<Teacher>> {
        self.teacher.take()
    }

    /// Adds `student` to the roster.
    ///
    /// Returns `false` and leaves the roster unchanged if a student with the
    /// same id is already enrolled.
    pub fn add_student(&mut self, student: Arc<Student>) -> bool {
        if self.has_student(student.id()) {
            return false;
        }
        debug!("Enrolled student {} in course {}", student.id(), self.id);
        self.students.push(student);
        true
    }

    /// Removes every roster entry with `student_id`.
    ///
    /// Returns `true` if at least one entry was removed.
    pub fn remove_student(&mut self, student_id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id() != student_id);
        let removed = before - self.students.len();
        if removed > 0 {
            debug!("Unenrolled student {} from course {}", student_id, self.id);
        }
        removed > 0
    }

    /// One-line human-readable summary of the course.
    pub fn describe(&self) -> String {
        let teacher = self
            .teacher
            .as_deref()
            .map_or(UNASSIGNED_TEACHER, Teacher::name);
        let count = self.students.len();

        match &self.kind {
            CourseKind::Online { platform } => format!(
                "Online: {} ({platform}), Teacher: {teacher}, Students: {count}",
                self.title
            ),
            CourseKind::Offline { room } => format!(
                "Offline: {} (Room {room}), Teacher: {teacher}, Students: {count}",
                self.title
            ),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
