//! Report service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use classroom_api::domain::{Course, CourseType, Person, PersonWithCourses};
use classroom_api::infra::{MockCourseRepository, MockPersonRepository};
use classroom_api::services::{ReportManager, ReportService};

fn record(name: &str, age: i32, group: &str, courses: &[&str]) -> PersonWithCourses {
    PersonWithCourses {
        person: Person {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            group: group.to_string(),
        },
        courses: courses
            .iter()
            .map(|course| Course {
                id: Uuid::new_v4(),
                name: course.to_string(),
                course_type: CourseType::Main,
            })
            .collect(),
    }
}

fn reports(
    students: MockPersonRepository,
    teachers: MockPersonRepository,
    courses: MockCourseRepository,
) -> ReportManager {
    ReportManager::new(Arc::new(students), Arc::new(teachers), Arc::new(courses))
}

#[tokio::test]
async fn test_count_students_and_teachers_hit_their_own_directories() {
    let mut students = MockPersonRepository::new();
    students.expect_count().returning(|| Ok(3));
    let mut teachers = MockPersonRepository::new();
    teachers.expect_count().returning(|| Ok(1));

    let service = reports(students, teachers, MockCourseRepository::new());

    assert_eq!(assert_ok!(service.count_students().await), 3);
    assert_eq!(assert_ok!(service.count_teachers().await), 1);
}

#[tokio::test]
async fn test_count_courses_by_type_parses_any_case() {
    let students = MockPersonRepository::new();
    let teachers = MockPersonRepository::new();
    let mut courses = MockCourseRepository::new();
    courses
        .expect_count_by_type()
        .with(eq(CourseType::Main))
        .returning(|_| Ok(2));

    let service = reports(students, teachers, courses);
    let count = assert_ok!(service.count_courses_by_type("main").await);

    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_count_courses_by_unknown_type_is_rejected() {
    let students = MockPersonRepository::new();
    let teachers = MockPersonRepository::new();
    let mut courses = MockCourseRepository::new();
    courses.expect_count_by_type().times(0);

    let service = reports(students, teachers, courses);

    assert_err!(service.count_courses_by_type("weekly").await);
}

#[tokio::test]
async fn test_students_by_course_returns_full_membership_lists() {
    let mut students = MockPersonRepository::new();
    students
        .expect_find_by_course()
        .with(eq("Mathematics"))
        .returning(|_| {
            Ok(vec![record(
                "Georgi",
                24,
                "A2",
                &["Science", "Mathematics"],
            )])
        });

    let service = reports(
        students,
        MockPersonRepository::new(),
        MockCourseRepository::new(),
    );
    let result = assert_ok!(service.students_by_course("Mathematics").await);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Georgi");
    // The response carries every membership, not only the queried course.
    assert_eq!(result[0].courses.len(), 2);
}

#[tokio::test]
async fn test_students_by_unknown_course_is_empty() {
    let mut students = MockPersonRepository::new();
    students.expect_find_by_course().returning(|_| Ok(vec![]));

    let service = reports(
        students,
        MockPersonRepository::new(),
        MockCourseRepository::new(),
    );
    let result = assert_ok!(service.students_by_course("Alchemy").await);

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_students_by_group() {
    let mut students = MockPersonRepository::new();
    students
        .expect_find_by_group()
        .with(eq("A2"))
        .returning(|_| {
            Ok(vec![
                record("Mariya", 20, "A2", &["Mathematics"]),
                record("Georgi", 24, "A2", &["Science"]),
            ])
        });

    let service = reports(
        students,
        MockPersonRepository::new(),
        MockCourseRepository::new(),
    );
    let result = assert_ok!(service.students_by_group("A2").await);

    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_students_older_than_in_course_forwards_both_filters() {
    let mut students = MockPersonRepository::new();
    students
        .expect_find_older_than_in_course()
        .withf(|age, course_name| *age == 21 && course_name == "Mathematics")
        .returning(|_, _| Ok(vec![record("Georgi", 24, "A2", &["Mathematics"])]));

    let service = reports(
        students,
        MockPersonRepository::new(),
        MockCourseRepository::new(),
    );
    let result = assert_ok!(service.students_older_than_in_course(21, "Mathematics").await);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Georgi");
}

#[tokio::test]
async fn test_course_group_report_combines_both_directories() {
    let mut students = MockPersonRepository::new();
    students
        .expect_find_by_course_and_group()
        .withf(|course_name, group| course_name == "Mathematics" && group == "A2")
        .returning(|_, _| {
            Ok(vec![
                record("Mariya", 20, "A2", &["Mathematics"]),
                record("Georgi", 24, "A2", &["Science", "Mathematics"]),
            ])
        });
    let mut teachers = MockPersonRepository::new();
    teachers
        .expect_find_by_course_and_group()
        .returning(|_, _| Ok(vec![record("Silvia", 35, "A2", &["Mathematics"])]));

    let service = reports(students, teachers, MockCourseRepository::new());
    let report = assert_ok!(service.course_group_report("Mathematics", "A2").await);

    assert_eq!(report.students.len(), 2);
    assert_eq!(report.teachers.len(), 1);
    assert_eq!(report.teachers[0].name, "Silvia");
    // Summaries flatten memberships to course names.
    assert_eq!(report.students[1].courses, vec!["Science", "Mathematics"]);
}
