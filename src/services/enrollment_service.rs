//! Enrollment engine - membership transitions between persons and courses.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{PersonKind, PersonResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::{CourseRepository, PersonRepository};

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enroll a person in the named course.
    ///
    /// `declared_type` is accepted for wire compatibility but carries no
    /// weight; the stored course type wins.
    async fn enroll(
        &self,
        person_id: Uuid,
        course_name: &str,
        declared_type: Option<String>,
    ) -> AppResult<PersonResponse>;

    /// Withdraw a person from the named course.
    async fn withdraw(&self, person_id: Uuid, course_name: &str) -> AppResult<PersonResponse>;
}

/// Concrete implementation over one person directory and the catalog.
pub struct EnrollmentManager {
    persons: Arc<dyn PersonRepository>,
    courses: Arc<dyn CourseRepository>,
    kind: PersonKind,
}

impl EnrollmentManager {
    /// Create new service instance with repositories
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        courses: Arc<dyn CourseRepository>,
        kind: PersonKind,
    ) -> Self {
        Self {
            persons,
            courses,
            kind,
        }
    }
}

#[async_trait]
impl EnrollmentService for EnrollmentManager {
    async fn enroll(
        &self,
        person_id: Uuid,
        course_name: &str,
        _declared_type: Option<String>,
    ) -> AppResult<PersonResponse> {
        // Checks run person, then membership, then course. Callers
        // distinguish the failures by message, so the order is part of
        // the contract.
        let record = self.persons.find_with_courses(person_id).await?.ok_or_else(|| {
            AppError::not_found(format!("{} with ID {} does not exist", self.kind, person_id))
        })?;

        // Name comparison is exact, including case.
        if record.courses.iter().any(|c| c.name == course_name) {
            return Err(AppError::conflict(format!(
                "{} with ID {} is already enrolled in course {}",
                self.kind, person_id, course_name
            )));
        }

        let course = self.courses.find_by_name(course_name).await?.ok_or_else(|| {
            AppError::not_found(format!("Course with name {} does not exist", course_name))
        })?;

        self.persons
            .attach_course(record.person.id, course.id)
            .await?;

        let mut courses = record.courses;
        courses.push(course);
        Ok(PersonResponse::from_parts(record.person, courses))
    }

    async fn withdraw(&self, person_id: Uuid, course_name: &str) -> AppResult<PersonResponse> {
        let record = self.persons.find_with_courses(person_id).await?.ok_or_else(|| {
            AppError::not_found(format!("{} with ID {} does not exist", self.kind, person_id))
        })?;

        if !record.courses.iter().any(|c| c.name == course_name) {
            return Err(AppError::conflict(format!(
                "{} with ID {} is not enrolled in course {}",
                self.kind, person_id, course_name
            )));
        }

        let course = self.courses.find_by_name(course_name).await?.ok_or_else(|| {
            AppError::not_found(format!("Course with name {} does not exist", course_name))
        })?;

        self.persons
            .detach_course(record.person.id, course.id)
            .await?;

        let courses = record
            .courses
            .into_iter()
            .filter(|c| c.name != course_name)
            .collect();
        Ok(PersonResponse::from_parts(record.person, courses))
    }
}
