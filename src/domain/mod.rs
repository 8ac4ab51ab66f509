//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod course;
pub mod person;
pub mod report;

pub use course::{Course, CourseResponse, CourseType};
pub use person::{Person, PersonKind, PersonResponse, PersonWithCourses};
pub use report::{CourseGroupReport, PersonSummary};
