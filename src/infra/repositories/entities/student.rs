//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Person;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub group_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourses,
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Person {
    fn from(model: Model) -> Self {
        Person {
            id: model.id,
            name: model.name,
            age: model.age,
            group: model.group_name,
        }
    }
}
