//! Course database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Course, CourseType};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    /// Stored in canonical upper-case form, see [`CourseType::as_str`]
    pub course_type: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourses,
    #[sea_orm(has_many = "super::teacher_course::Entity")]
    TeacherCourses,
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fallible: a stored type string outside the known set means the row
/// was written by something other than this application, and surfaces
/// as an internal error rather than a silent default.
impl TryFrom<Model> for Course {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let course_type: CourseType = model.course_type.parse().map_err(|_| {
            AppError::internal(format!(
                "course {} has unknown type {:?} in storage",
                model.id, model.course_type
            ))
        })?;

        Ok(Course {
            id: model.id,
            name: model.name,
            course_type,
        })
    }
}
