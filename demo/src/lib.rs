//! Sample registry used by the `course-demo` binary.

use anyhow::{Context, Result};
use course_model::{Course, Student, Teacher};
use course_registry::CourseManager;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Snapshot of the sample registry after all enrollments.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CatalogReport {
    pub courses: Vec<Course>,
    pub featured_teacher: Teacher,
    pub featured_courses: Vec<Course>,
}

/// Builds the two-course sample registry.
///
/// With `strict`, courses are registered through the duplicate-checked path.
pub fn build_sample(strict: bool) -> Result<CatalogReport> {
    let mut manager = CourseManager::new();

    let teacher_a = Arc::new(Teacher::new("Ivan Ivanov"));
    let teacher_b = Arc::new(Teacher::new("Kirill Kirillov"));

    let online = Course::online("Algorithms and Data Structures", "Zoom");
    let offline = Course::offline("Object-Oriented Programming", "2304");
    let (online_id, offline_id) = (online.id(), offline.id());

    for course in [online, offline] {
        if strict {
            manager
                .try_add_course(course)
                .context("registering sample course")?;
        } else {
            manager.add_course(course);
        }
    }

    manager.assign_teacher(online_id, teacher_a.clone());
    manager.assign_teacher(offline_id, teacher_b);

    let student_a = Arc::new(Student::new("Sergey Sergeev"));
    let student_b = Arc::new(Student::new("Stas Stasov"));

    manager.enroll_student(online_id, student_a);
    manager.enroll_student(online_id, student_b.clone());
    manager.enroll_student(offline_id, student_b);

    info!("Sample registry holds {} courses", manager.len());

    Ok(CatalogReport {
        courses: manager.list_all().to_vec(),
        featured_courses: manager
            .courses_by_teacher(teacher_a.id())
            .into_iter()
            .cloned()
            .collect(),
        featured_teacher: (*teacher_a).clone(),
    })
}

/// Renders the report as console text, one course per line.
pub fn render_text(report: &CatalogReport) -> String {
    let mut out = String::from("All courses:\n");
    for course in &report.courses {
        out.push_str(&format!("{course}\n"));
    }
    out.push_str(&format!(
        "\nCourses taught by {}:\n",
        report.featured_teacher.name()
    ));
    for course in &report.featured_courses {
        out.push_str(&format!("{course}\n"));
    }
    out
}
