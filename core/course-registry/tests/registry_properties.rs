//! Property-based tests for registry invariants.
//!
//! Random sequences of enroll/unenroll/assign operations are applied and
//! the registry is checked against:
//! - Roster uniqueness: no course ever lists the same student id twice
//! - Filter exactness: `courses_by_teacher` matches the current assignments
//! - Remove semantics: removing a known id drops it, an unknown id is a no-op

use course_model::{Course, Student, Teacher};
use course_registry::CourseManager;
use course_types::CourseId;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Enroll { course: usize, student: usize },
    Unenroll { course: usize, student: usize },
    Assign { course: usize, teacher: usize },
}

const COURSES: usize = 4;
const STUDENTS: usize = 6;
const TEACHERS: usize = 3;

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..COURSES, 0..STUDENTS).prop_map(|(course, student)| Op::Enroll { course, student }),
        (0..COURSES, 0..STUDENTS).prop_map(|(course, student)| Op::Unenroll { course, student }),
        (0..COURSES, 0..TEACHERS).prop_map(|(course, teacher)| Op::Assign { course, teacher }),
    ]
}

struct Fixture {
    manager: CourseManager,
    courses: Vec<CourseId>,
    students: Vec<Arc<Student>>,
    teachers: Vec<Arc<Teacher>>,
}

fn fixture() -> Fixture {
    let mut manager = CourseManager::new();
    let courses = (0..COURSES)
        .map(|i| {
            let course = Course::online(format!("C{i}"), "Zoom");
            let id = course.id();
            manager.add_course(course);
            id
        })
        .collect();
    Fixture {
        manager,
        courses,
        students: (0..STUDENTS).map(|i| Arc::new(Student::new(format!("S{i}")))).collect(),
        teachers: (0..TEACHERS).map(|i| Arc::new(Teacher::new(format!("T{i}")))).collect(),
    }
}

proptest! {
    #[test]
    fn rosters_never_hold_duplicates(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut f = fixture();
        let mut expected: Vec<HashSet<usize>> = vec![HashSet::new(); COURSES];

        for op in ops {
            match op {
                Op::Enroll { course, student } => {
                    let student_ref = f.students[student].clone();
                    let added = f.manager.enroll_student(f.courses[course], student_ref);
                    prop_assert_eq!(added, expected[course].insert(student));
                }
                Op::Unenroll { course, student } => {
                    let student_id = f.students[student].id();
                    let removed = f.manager.unenroll_student(f.courses[course], student_id);
                    prop_assert_eq!(removed, expected[course].remove(&student));
                }
                Op::Assign { course, teacher } => {
                    let teacher_ref = f.teachers[teacher].clone();
                    prop_assert!(f.manager.assign_teacher(f.courses[course], teacher_ref));
                }
            }
        }

        for course in f.manager.list_all() {
            let ids: HashSet<_> = course.students().iter().map(|s| s.id()).collect();
            prop_assert_eq!(ids.len(), course.student_count());
        }
    }

    #[test]
    fn courses_by_teacher_matches_last_assignment(
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut f = fixture();
        let mut assigned: Vec<Option<usize>> = vec![None; COURSES];

        for op in ops {
            if let Op::Assign { course, teacher } = op {
                f.manager.assign_teacher(f.courses[course], f.teachers[teacher].clone());
                assigned[course] = Some(teacher);
            }
        }

        for (t, teacher) in f.teachers.iter().enumerate() {
            let got: Vec<CourseId> = f
                .manager
                .courses_by_teacher(teacher.id())
                .iter()
                .map(|c| c.id())
                .collect();
            let want: Vec<CourseId> = (0..COURSES)
                .filter(|&c| assigned[c] == Some(t))
                .map(|c| f.courses[c])
                .collect();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn remove_course_drops_only_the_target(target in 0..COURSES, unknown in any::<bool>()) {
        let mut f = fixture();
        let id = if unknown { CourseId::new() } else { f.courses[target] };

        let removed = f.manager.remove_course(id);

        prop_assert_eq!(removed, !unknown);
        prop_assert_eq!(f.manager.len(), if unknown { COURSES } else { COURSES - 1 });
        prop_assert!(!f.manager.list_all().iter().any(|c| c.id() == id));
    }
}
