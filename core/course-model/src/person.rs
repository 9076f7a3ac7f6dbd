use course_types::{StudentId, TeacherId};
use serde::{Deserialize, Serialize};

/// A teacher who can be assigned to courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    id: TeacherId,
    name: String,
}

impl Teacher {
    /// Creates a teacher with a freshly minted id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(TeacherId::new(), name)
    }

    /// Creates a teacher for an id the caller already holds.
    pub fn with_id(id: TeacherId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> TeacherId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A student who can be enrolled in courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
}

impl Student {
    /// Creates a student with a freshly minted id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(StudentId::new(), name)
    }

    /// Creates a student for an id the caller already holds.
    pub fn with_id(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
