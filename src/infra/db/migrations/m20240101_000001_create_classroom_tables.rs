//! Migration: Create classroom tables.
//!
//! Creates the course catalog, both person directories, and the two
//! membership join tables that link them.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Age).integer().not_null())
                    .col(ColumnDef::new(Students::GroupName).string().not_null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::Age).integer().not_null())
                    .col(ColumnDef::new(Teachers::GroupName).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Teachers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (name, group, age) triple; backs the duplicate
        // pre-check in the directory services.
        manager
            .create_index(
                Index::create()
                    .name("idx_students_name_group_age")
                    .table(Students::Table)
                    .col(Students::Name)
                    .col(Students::GroupName)
                    .col(Students::Age)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_name_group_age")
                    .table(Teachers::Table)
                    .col(Teachers::Name)
                    .col(Teachers::GroupName)
                    .col(Teachers::Age)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Membership join tables. The composite primary key doubles as
        // the at-most-one-membership guarantee; rows follow their person
        // and course on delete.
        manager
            .create_table(
                Table::create()
                    .table(StudentCourses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StudentCourses::StudentId).uuid().not_null())
                    .col(ColumnDef::new(StudentCourses::CourseId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(StudentCourses::StudentId)
                            .col(StudentCourses::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_courses_student")
                            .from(StudentCourses::Table, StudentCourses::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_courses_course")
                            .from(StudentCourses::Table, StudentCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeacherCourses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeacherCourses::TeacherId).uuid().not_null())
                    .col(ColumnDef::new(TeacherCourses::CourseId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(TeacherCourses::TeacherId)
                            .col(TeacherCourses::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_courses_teacher")
                            .from(TeacherCourses::Table, TeacherCourses::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_courses_course")
                            .from(TeacherCourses::Table, TeacherCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    CourseType,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Name,
    Age,
    GroupName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    Name,
    Age,
    GroupName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum StudentCourses {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum TeacherCourses {
    Table,
    TeacherId,
    CourseId,
}
