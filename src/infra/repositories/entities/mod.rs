//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod course;
pub mod student;
pub mod student_course;
pub mod teacher;
pub mod teacher_course;
