//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    CourseService, DirectoryService, EnrollmentService, ReportService, Services,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for the standard wiring over live stores; `new()`
/// accepts pre-built services for tests.
#[derive(Clone)]
pub struct AppState {
    /// Student directory service
    pub student_directory: Arc<dyn DirectoryService>,
    /// Teacher directory service
    pub teacher_directory: Arc<dyn DirectoryService>,
    /// Student enrollment service
    pub student_enrollment: Arc<dyn EnrollmentService>,
    /// Teacher enrollment service
    pub teacher_enrollment: Arc<dyn EnrollmentService>,
    /// Course catalog service
    pub courses: Arc<dyn CourseService>,
    /// Report service
    pub reports: Arc<dyn ReportService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    pub fn from_config(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(services, database)
    }

    /// Create application state from an already wired service bundle.
    pub fn new(services: Services, database: Arc<Database>) -> Self {
        Self {
            student_directory: services.student_directory,
            teacher_directory: services.teacher_directory,
            student_enrollment: services.student_enrollment,
            teacher_enrollment: services.teacher_enrollment,
            courses: services.courses,
            reports: services.reports,
            database,
        }
    }
}
