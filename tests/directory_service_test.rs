//! Directory service unit tests.
//!
//! One implementation serves both directories, so most cases run against
//! the student kind and a few verify the teacher wording.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use classroom_api::domain::{Course, CourseType, Person, PersonKind, PersonWithCourses};
use classroom_api::errors::AppError;
use classroom_api::infra::MockPersonRepository;
use classroom_api::services::{DirectoryManager, DirectoryService};

fn create_test_person(id: Uuid, name: &str, age: i32, group: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        age,
        group: group.to_string(),
    }
}

fn mathematics() -> Course {
    Course {
        id: Uuid::new_v4(),
        name: "Mathematics".to_string(),
        course_type: CourseType::Main,
    }
}

#[tokio::test]
async fn test_create_student_success() {
    let mut repo = MockPersonRepository::new();
    repo.expect_find_by_natural_key()
        .withf(|name, group, age| name == "Mariya" && group == "A2" && *age == 20)
        .returning(|_, _, _| Ok(None));
    repo.expect_create()
        .returning(|name, age, group| Ok(create_test_person(Uuid::new_v4(), &name, age, &group)));

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Student);
    let result = service.create("Mariya".to_string(), 20, "A2".to_string()).await;

    assert!(result.is_ok());
    let student = result.unwrap();
    assert_eq!(student.name, "Mariya");
    assert_eq!(student.age, 20);
    assert_eq!(student.group, "A2");
    assert!(student.courses.is_empty());
}

#[tokio::test]
async fn test_create_student_duplicate_identity() {
    let mut repo = MockPersonRepository::new();
    repo.expect_find_by_natural_key()
        .returning(|name, group, age| {
            Ok(Some(create_test_person(Uuid::new_v4(), name, age, group)))
        });
    repo.expect_create().times(0);

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Student);
    let result = service.create("Mariya".to_string(), 20, "A2".to_string()).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Student with name Mariya already exists");
}

#[tokio::test]
async fn test_create_teacher_duplicate_uses_teacher_wording() {
    let mut repo = MockPersonRepository::new();
    repo.expect_find_by_natural_key()
        .returning(|name, group, age| {
            Ok(Some(create_test_person(Uuid::new_v4(), name, age, group)))
        });
    repo.expect_create().times(0);

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Teacher);
    let result = service.create("Silvia".to_string(), 35, "A2".to_string()).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Teacher with name Silvia already exists"
    );
}

#[tokio::test]
async fn test_update_student_success() {
    let student_id = Uuid::new_v4();

    let mut repo = MockPersonRepository::new();
    repo.expect_find_with_courses()
        .with(eq(student_id))
        .returning(|id| {
            Ok(Some(PersonWithCourses {
                person: create_test_person(id, "Mariya", 20, "A2"),
                courses: vec![mathematics()],
            }))
        });
    repo.expect_update()
        .returning(|id, name, age, group| Ok(create_test_person(id, &name, age, &group)));

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Student);
    let result = service
        .update(student_id, "Mariya".to_string(), 21, "A1".to_string())
        .await;

    assert!(result.is_ok());
    let student = result.unwrap();
    assert_eq!(student.age, 21);
    assert_eq!(student.group, "A1");
    // Memberships survive the rewrite of the person fields.
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.courses[0].name, "Mathematics");
}

#[tokio::test]
async fn test_update_unknown_student() {
    let mut repo = MockPersonRepository::new();
    repo.expect_find_with_courses().returning(|_| Ok(None));
    repo.expect_update().times(0);

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Student);
    let result = service
        .update(Uuid::new_v4(), "Mariya".to_string(), 21, "A1".to_string())
        .await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_student_success() {
    let student_id = Uuid::new_v4();

    let mut repo = MockPersonRepository::new();
    repo.expect_find_by_id()
        .with(eq(student_id))
        .returning(|id| Ok(Some(create_test_person(id, "Mariya", 20, "A2"))));
    repo.expect_delete().with(eq(student_id)).returning(|_| Ok(()));

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Student);
    let result = service.delete(student_id).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_unknown_student() {
    let student_id = Uuid::new_v4();

    let mut repo = MockPersonRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_delete().times(0);

    let service = DirectoryManager::new(Arc::new(repo), PersonKind::Student);
    let result = service.delete(student_id).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Student with ID {} does not exist", student_id)
    );
}
