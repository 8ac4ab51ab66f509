//! Course service unit tests.

use std::sync::Arc;

use uuid::Uuid;

use classroom_api::domain::{Course, CourseType};
use classroom_api::errors::AppError;
use classroom_api::infra::MockCourseRepository;
use classroom_api::services::{CourseManager, CourseService};

fn create_test_course(name: &str, course_type: CourseType) -> Course {
    Course {
        id: Uuid::new_v4(),
        name: name.to_string(),
        course_type,
    }
}

#[tokio::test]
async fn test_create_course_success() {
    let mut repo = MockCourseRepository::new();
    repo.expect_exists_by_name().returning(|_| Ok(false));
    repo.expect_create()
        .returning(|name, course_type| Ok(create_test_course(&name, course_type)));

    let service = CourseManager::new(Arc::new(repo));
    let result = service.create("Mathematics".to_string(), "MAIN").await;

    assert!(result.is_ok());
    let course = result.unwrap();
    assert_eq!(course.name, "Mathematics");
    assert_eq!(course.course_type, CourseType::Main);
}

#[tokio::test]
async fn test_create_course_accepts_lowercase_type_name() {
    let mut repo = MockCourseRepository::new();
    repo.expect_exists_by_name().returning(|_| Ok(false));
    repo.expect_create()
        .withf(|_, course_type| *course_type == CourseType::Secondary)
        .returning(|name, course_type| Ok(create_test_course(&name, course_type)));

    let service = CourseManager::new(Arc::new(repo));
    let result = service.create("History".to_string(), "secondary").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().course_type, CourseType::Secondary);
}

#[tokio::test]
async fn test_create_course_duplicate_name() {
    let mut repo = MockCourseRepository::new();
    repo.expect_exists_by_name().returning(|_| Ok(true));
    repo.expect_create().times(0);

    let service = CourseManager::new(Arc::new(repo));
    let result = service.create("Mathematics".to_string(), "MAIN").await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Course with name Mathematics already exists");
}

#[tokio::test]
async fn test_create_course_duplicate_wins_over_bad_type() {
    // An existing name is reported even when the type name would not
    // have parsed.
    let mut repo = MockCourseRepository::new();
    repo.expect_exists_by_name().returning(|_| Ok(true));
    repo.expect_create().times(0);

    let service = CourseManager::new(Arc::new(repo));
    let result = service.create("Mathematics".to_string(), "WEEKLY").await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_create_course_rejects_unknown_type() {
    let mut repo = MockCourseRepository::new();
    repo.expect_exists_by_name().returning(|_| Ok(false));
    repo.expect_create().times(0);

    let service = CourseManager::new(Arc::new(repo));
    let result = service.create("Crafts".to_string(), "WEEKLY").await;

    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
}

#[tokio::test]
async fn test_list_courses() {
    let mut repo = MockCourseRepository::new();
    repo.expect_find_all().returning(|| {
        Ok(vec![
            create_test_course("Mathematics", CourseType::Main),
            create_test_course("History", CourseType::Secondary),
        ])
    });

    let service = CourseManager::new(Arc::new(repo));
    let result = service.list().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_course_by_name_found() {
    let mut repo = MockCourseRepository::new();
    repo.expect_find_by_name()
        .returning(|name| Ok(Some(create_test_course(name, CourseType::Main))));

    let service = CourseManager::new(Arc::new(repo));
    let result = service.get_by_name("Mathematics").await;

    assert!(result.is_ok());
    let course = result.unwrap();
    assert!(course.is_some());
    assert_eq!(course.unwrap().name, "Mathematics");
}

#[tokio::test]
async fn test_get_course_by_name_missing_is_not_an_error() {
    let mut repo = MockCourseRepository::new();
    repo.expect_find_by_name().returning(|_| Ok(None));

    let service = CourseManager::new(Arc::new(repo));
    let result = service.get_by_name("Alchemy").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}
