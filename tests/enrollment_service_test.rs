//! Enrollment service unit tests.
//!
//! The check order is load-bearing for callers: person first, then the
//! membership state, then the course. Several cases pin it with
//! `times(0)` on the lookups that must not run.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use classroom_api::domain::{Course, CourseType, Person, PersonKind, PersonWithCourses};
use classroom_api::errors::AppError;
use classroom_api::infra::{MockCourseRepository, MockPersonRepository};
use classroom_api::services::{EnrollmentManager, EnrollmentService};

fn create_test_person(id: Uuid) -> Person {
    Person {
        id,
        name: "Mariya".to_string(),
        age: 20,
        group: "A2".to_string(),
    }
}

fn course(name: &str) -> Course {
    Course {
        id: Uuid::new_v4(),
        name: name.to_string(),
        course_type: CourseType::Main,
    }
}

fn enrolled_in(id: Uuid, courses: Vec<Course>) -> PersonWithCourses {
    PersonWithCourses {
        person: create_test_person(id),
        courses,
    }
}

#[tokio::test]
async fn test_enroll_student_success() {
    let student_id = Uuid::new_v4();
    let mathematics = course("Mathematics");
    let course_id = mathematics.id;

    let mut persons = MockPersonRepository::new();
    persons
        .expect_find_with_courses()
        .with(eq(student_id))
        .returning(|id| Ok(Some(enrolled_in(id, vec![]))));
    persons
        .expect_attach_course()
        .with(eq(student_id), eq(course_id))
        .returning(|_, _| Ok(()));

    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_name()
        .returning(move |_| Ok(Some(mathematics.clone())));

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.enroll(student_id, "Mathematics", None).await;

    assert!(result.is_ok());
    let student = result.unwrap();
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.courses[0].name, "Mathematics");
}

#[tokio::test]
async fn test_enroll_unknown_student() {
    let student_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons.expect_find_with_courses().returning(|_| Ok(None));
    persons.expect_attach_course().times(0);

    let mut courses = MockCourseRepository::new();
    courses.expect_find_by_name().times(0);

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.enroll(student_id, "Mathematics", None).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("Student with ID {} does not exist", student_id)
    );
}

#[tokio::test]
async fn test_enroll_duplicate_membership_checked_before_course() {
    let student_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons
        .expect_find_with_courses()
        .returning(|id| Ok(Some(enrolled_in(id, vec![course("Mathematics")]))));
    persons.expect_attach_course().times(0);

    let mut courses = MockCourseRepository::new();
    courses.expect_find_by_name().times(0);

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.enroll(student_id, "Mathematics", None).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(
        err.to_string(),
        format!(
            "Student with ID {} is already enrolled in course Mathematics",
            student_id
        )
    );
}

#[tokio::test]
async fn test_enroll_unknown_course() {
    let student_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons
        .expect_find_with_courses()
        .returning(|id| Ok(Some(enrolled_in(id, vec![]))));
    persons.expect_attach_course().times(0);

    let mut courses = MockCourseRepository::new();
    courses.expect_find_by_name().returning(|_| Ok(None));

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.enroll(student_id, "Biology", None).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Course with name Biology does not exist");
}

#[tokio::test]
async fn test_enroll_ignores_declared_course_type() {
    // The request may carry any type label; the stored course wins.
    let student_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons
        .expect_find_with_courses()
        .returning(|id| Ok(Some(enrolled_in(id, vec![]))));
    persons.expect_attach_course().returning(|_, _| Ok(()));

    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_name()
        .returning(|name| Ok(Some(course(name))));

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service
        .enroll(student_id, "Mathematics", Some("WEEKLY".to_string()))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().courses[0].course_type, CourseType::Main);
}

#[tokio::test]
async fn test_enroll_course_name_matching_is_case_sensitive() {
    // "mathematics" is not "Mathematics": the membership check passes
    // and the catalog lookup decides.
    let student_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons
        .expect_find_with_courses()
        .returning(|id| Ok(Some(enrolled_in(id, vec![course("mathematics")]))));
    persons.expect_attach_course().times(0);

    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_name()
        .with(eq("Mathematics"))
        .returning(|_| Ok(None));

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.enroll(student_id, "Mathematics", None).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_withdraw_student_success() {
    let student_id = Uuid::new_v4();
    let mathematics = course("Mathematics");
    let course_id = mathematics.id;
    let history = course("History");

    let mut persons = MockPersonRepository::new();
    let memberships = vec![mathematics.clone(), history];
    persons
        .expect_find_with_courses()
        .returning(move |id| Ok(Some(enrolled_in(id, memberships.clone()))));
    persons
        .expect_detach_course()
        .with(eq(student_id), eq(course_id))
        .returning(|_, _| Ok(()));

    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_name()
        .returning(move |_| Ok(Some(mathematics.clone())));

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.withdraw(student_id, "Mathematics").await;

    assert!(result.is_ok());
    let student = result.unwrap();
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.courses[0].name, "History");
}

#[tokio::test]
async fn test_withdraw_not_enrolled() {
    let student_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons
        .expect_find_with_courses()
        .returning(|id| Ok(Some(enrolled_in(id, vec![]))));
    persons.expect_detach_course().times(0);

    let mut courses = MockCourseRepository::new();
    courses.expect_find_by_name().times(0);

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Student);
    let result = service.withdraw(student_id, "Mathematics").await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(
        err.to_string(),
        format!(
            "Student with ID {} is not enrolled in course Mathematics",
            student_id
        )
    );
}

#[tokio::test]
async fn test_withdraw_unknown_teacher_uses_teacher_wording() {
    let teacher_id = Uuid::new_v4();

    let mut persons = MockPersonRepository::new();
    persons.expect_find_with_courses().returning(|_| Ok(None));

    let courses = MockCourseRepository::new();

    let service = EnrollmentManager::new(Arc::new(persons), Arc::new(courses), PersonKind::Teacher);
    let result = service.withdraw(teacher_id, "Mathematics").await;

    assert_eq!(
        result.unwrap_err().to_string(),
        format!("Teacher with ID {} does not exist", teacher_id)
    );
}
