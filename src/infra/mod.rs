//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the directory, catalog and membership tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    CourseRepository, CourseStore, PersonRepository, StudentStore, TeacherStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCourseRepository, MockPersonRepository};
