//! Course repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::course::{self, ActiveModel, Entity as CourseEntity};
use crate::domain::{Course, CourseType};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository trait for dependency injection.
///
/// Course names are matched exactly; callers are expected to pass the
/// name as the client supplied it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find course by its unique name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Course>>;

    /// Check whether a course with this name exists
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// Create a new course
    async fn create(&self, name: String, course_type: CourseType) -> AppResult<Course>;

    /// List the whole catalog
    async fn find_all(&self) -> AppResult<Vec<Course>>;

    /// Count courses of the given type
    async fn count_by_type(&self, course_type: CourseType) -> AppResult<u64>;
}

/// Concrete implementation of CourseRepository
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Course>> {
        let result = CourseEntity::find()
            .filter(course::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Course::try_from).transpose()
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let matches = CourseEntity::find()
            .filter(course::Column::Name.eq(name))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(matches > 0)
    }

    async fn create(&self, name: String, course_type: CourseType) -> AppResult<Course> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            course_type: Set(course_type.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Course::try_from(model)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let models = CourseEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(Course::try_from).collect()
    }

    async fn count_by_type(&self, course_type: CourseType) -> AppResult<u64> {
        CourseEntity::find()
            .filter(course::Column::CourseType.eq(course_type.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
