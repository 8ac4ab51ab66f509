//! Report service - read-only queries across directories and catalog.
//!
//! Reports never mutate and never validate existence: asking about an
//! unknown course or group yields an empty result, not an error.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::try_join;

use crate::domain::{CourseGroupReport, CourseType, PersonResponse, PersonSummary};
use crate::errors::AppResult;
use crate::infra::{CourseRepository, PersonRepository};

/// Report service trait for dependency injection.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Total number of students
    async fn count_students(&self) -> AppResult<u64>;

    /// Total number of teachers
    async fn count_teachers(&self) -> AppResult<u64>;

    /// Number of courses of the given type; the name parses case-insensitively
    async fn count_courses_by_type(&self, type_name: &str) -> AppResult<u64>;

    /// Students enrolled in the named course, with their full course lists
    async fn students_by_course(&self, course_name: &str) -> AppResult<Vec<PersonResponse>>;

    /// Students belonging to the given group
    async fn students_by_group(&self, group: &str) -> AppResult<Vec<PersonResponse>>;

    /// Students in the named course strictly older than the given age
    async fn students_older_than_in_course(
        &self,
        age: i32,
        course_name: &str,
    ) -> AppResult<Vec<PersonResponse>>;

    /// Students and teachers sharing the named course and group
    async fn course_group_report(
        &self,
        course_name: &str,
        group: &str,
    ) -> AppResult<CourseGroupReport>;
}

/// Concrete implementation reading from both directories and the catalog.
pub struct ReportManager {
    students: Arc<dyn PersonRepository>,
    teachers: Arc<dyn PersonRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl ReportManager {
    /// Create new service instance with repositories
    pub fn new(
        students: Arc<dyn PersonRepository>,
        teachers: Arc<dyn PersonRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            students,
            teachers,
            courses,
        }
    }
}

#[async_trait]
impl ReportService for ReportManager {
    async fn count_students(&self) -> AppResult<u64> {
        self.students.count().await
    }

    async fn count_teachers(&self) -> AppResult<u64> {
        self.teachers.count().await
    }

    async fn count_courses_by_type(&self, type_name: &str) -> AppResult<u64> {
        let course_type: CourseType = type_name.parse()?;
        self.courses.count_by_type(course_type).await
    }

    async fn students_by_course(&self, course_name: &str) -> AppResult<Vec<PersonResponse>> {
        let records = self.students.find_by_course(course_name).await?;
        Ok(records.into_iter().map(PersonResponse::from).collect())
    }

    async fn students_by_group(&self, group: &str) -> AppResult<Vec<PersonResponse>> {
        let records = self.students.find_by_group(group).await?;
        Ok(records.into_iter().map(PersonResponse::from).collect())
    }

    async fn students_older_than_in_course(
        &self,
        age: i32,
        course_name: &str,
    ) -> AppResult<Vec<PersonResponse>> {
        let records = self
            .students
            .find_older_than_in_course(age, course_name)
            .await?;
        Ok(records.into_iter().map(PersonResponse::from).collect())
    }

    async fn course_group_report(
        &self,
        course_name: &str,
        group: &str,
    ) -> AppResult<CourseGroupReport> {
        // The two directories are independent; query them concurrently.
        let (students, teachers) = try_join!(
            self.students.find_by_course_and_group(course_name, group),
            self.teachers.find_by_course_and_group(course_name, group),
        )?;

        Ok(CourseGroupReport {
            students: students.into_iter().map(PersonSummary::from).collect(),
            teachers: teachers.into_iter().map(PersonSummary::from).collect(),
        })
    }
}
