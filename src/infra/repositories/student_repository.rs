//! Student repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::course;
use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use super::entities::student_course::{self, Entity as StudentCourseEntity};
use super::person_repository::PersonRepository;
use crate::domain::{Course, Person, PersonWithCourses};
use crate::errors::{AppError, AppResult};

/// Concrete implementation of PersonRepository for the students table
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Select students that are members of the named course.
    fn members_of(course_name: &str) -> sea_orm::Select<StudentEntity> {
        StudentEntity::find()
            .join(JoinType::InnerJoin, student::Relation::StudentCourses.def())
            .join(JoinType::InnerJoin, student_course::Relation::Course.def())
            .filter(course::Column::Name.eq(course_name))
    }

    /// Resolve the complete course list for each student in one query.
    async fn with_courses(&self, models: Vec<student::Model>) -> AppResult<Vec<PersonWithCourses>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links = StudentCourseEntity::find()
            .filter(student_course::Column::StudentId.is_in(ids))
            .find_also_related(course::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let mut courses_by_student: HashMap<Uuid, Vec<Course>> = HashMap::new();
        for (link, course_model) in links {
            if let Some(model) = course_model {
                courses_by_student
                    .entry(link.student_id)
                    .or_default()
                    .push(Course::try_from(model)?);
            }
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let courses = courses_by_student.remove(&model.id).unwrap_or_default();
                PersonWithCourses {
                    person: Person::from(model),
                    courses,
                }
            })
            .collect())
    }
}

#[async_trait]
impl PersonRepository for StudentStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Person>> {
        let result = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Person::from))
    }

    async fn find_with_courses(&self, id: Uuid) -> AppResult<Option<PersonWithCourses>> {
        let model = match StudentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        {
            Some(model) => model,
            None => return Ok(None),
        };

        let mut records = self.with_courses(vec![model]).await?;
        Ok(records.pop())
    }

    async fn find_by_natural_key(
        &self,
        name: &str,
        group: &str,
        age: i32,
    ) -> AppResult<Option<Person>> {
        let result = StudentEntity::find()
            .filter(student::Column::Name.eq(name))
            .filter(student::Column::GroupName.eq(group))
            .filter(student::Column::Age.eq(age))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Person::from))
    }

    async fn create(&self, name: String, age: i32, group: String) -> AppResult<Person> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            age: Set(age),
            group_name: Set(group),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Person::from(model))
    }

    async fn update(&self, id: Uuid, name: String, age: i32, group: String) -> AppResult<Person> {
        let student = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Student with ID {} does not exist", id))
            })?;

        let mut active: ActiveModel = student.into();
        active.name = Set(name);
        active.age = Set(age);
        active.group_name = Set(group);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Person::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // Membership rows go in the same transaction; the removal is
        // all or nothing.
        let txn = self.db.begin().await.map_err(AppError::from)?;

        StudentCourseEntity::delete_many()
            .filter(student_course::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        let result = StudentEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(AppError::from)?;
            return Err(AppError::not_found(format!(
                "Student with ID {} does not exist",
                id
            )));
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        StudentEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn attach_course(&self, person_id: Uuid, course_id: Uuid) -> AppResult<()> {
        let link = student_course::ActiveModel {
            student_id: Set(person_id),
            course_id: Set(course_id),
        };

        link.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn detach_course(&self, person_id: Uuid, course_id: Uuid) -> AppResult<()> {
        StudentCourseEntity::delete_many()
            .filter(student_course::Column::StudentId.eq(person_id))
            .filter(student_course::Column::CourseId.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn find_by_course(&self, course_name: &str) -> AppResult<Vec<PersonWithCourses>> {
        let models = Self::members_of(course_name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.with_courses(models).await
    }

    async fn find_by_group(&self, group: &str) -> AppResult<Vec<PersonWithCourses>> {
        let models = StudentEntity::find()
            .filter(student::Column::GroupName.eq(group))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.with_courses(models).await
    }

    async fn find_older_than_in_course(
        &self,
        age: i32,
        course_name: &str,
    ) -> AppResult<Vec<PersonWithCourses>> {
        let models = Self::members_of(course_name)
            .filter(student::Column::Age.gt(age))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.with_courses(models).await
    }

    async fn find_by_course_and_group(
        &self,
        course_name: &str,
        group: &str,
    ) -> AppResult<Vec<PersonWithCourses>> {
        let models = Self::members_of(course_name)
            .filter(student::Column::GroupName.eq(group))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.with_courses(models).await
    }
}
