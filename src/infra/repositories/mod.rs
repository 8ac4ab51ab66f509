//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod course_repository;
pub(crate) mod entities;
mod person_repository;
mod student_repository;
mod teacher_repository;

pub use course_repository::{CourseRepository, CourseStore};
pub use person_repository::PersonRepository;
pub use student_repository::StudentStore;
pub use teacher_repository::TeacherStore;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use person_repository::MockPersonRepository;
