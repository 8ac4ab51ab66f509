//! Course service - catalog management.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CourseResponse, CourseType};
use crate::errors::{AppError, AppResult};
use crate::infra::CourseRepository;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Add a course to the catalog
    async fn create(&self, name: String, type_name: &str) -> AppResult<CourseResponse>;

    /// List the whole catalog
    async fn list(&self) -> AppResult<Vec<CourseResponse>>;

    /// Look up a single course by its exact name
    async fn get_by_name(&self, name: &str) -> AppResult<Option<CourseResponse>>;
}

/// Concrete implementation using repository pattern.
pub struct CourseManager {
    repo: Arc<dyn CourseRepository>,
}

impl CourseManager {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn create(&self, name: String, type_name: &str) -> AppResult<CourseResponse> {
        // Uniqueness is answered before the type name is parsed.
        if self.repo.exists_by_name(&name).await? {
            return Err(AppError::conflict(format!(
                "Course with name {} already exists",
                name
            )));
        }

        let course_type: CourseType = type_name.parse()?;
        let course = self.repo.create(name, course_type).await?;
        Ok(CourseResponse::from(course))
    }

    async fn list(&self) -> AppResult<Vec<CourseResponse>> {
        let courses = self.repo.find_all().await?;
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Option<CourseResponse>> {
        let course = self.repo.find_by_name(name).await?;
        Ok(course.map(CourseResponse::from))
    }
}
