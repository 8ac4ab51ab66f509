//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod course_service;
mod directory_service;
mod enrollment_service;
mod report_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use course_service::{CourseManager, CourseService};
pub use directory_service::{DirectoryManager, DirectoryService};
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
pub use report_service::{ReportManager, ReportService};
