//! Service container - wires every service over one database connection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    CourseManager, CourseService, DirectoryManager, DirectoryService, EnrollmentManager,
    EnrollmentService, ReportManager, ReportService,
};
use crate::domain::PersonKind;
use crate::infra::{CourseRepository, CourseStore, PersonRepository, StudentStore, TeacherStore};

/// Bundle of every application service, shared through the router state.
#[derive(Clone)]
pub struct Services {
    pub student_directory: Arc<dyn DirectoryService>,
    pub teacher_directory: Arc<dyn DirectoryService>,
    pub student_enrollment: Arc<dyn EnrollmentService>,
    pub teacher_enrollment: Arc<dyn EnrollmentService>,
    pub courses: Arc<dyn CourseService>,
    pub reports: Arc<dyn ReportService>,
}

impl Services {
    /// Create a service container backed by live stores.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let student_repo: Arc<dyn PersonRepository> = Arc::new(StudentStore::new(db.clone()));
        let teacher_repo: Arc<dyn PersonRepository> = Arc::new(TeacherStore::new(db.clone()));
        let course_repo: Arc<dyn CourseRepository> = Arc::new(CourseStore::new(db));

        Self {
            student_directory: Arc::new(DirectoryManager::new(
                student_repo.clone(),
                PersonKind::Student,
            )),
            teacher_directory: Arc::new(DirectoryManager::new(
                teacher_repo.clone(),
                PersonKind::Teacher,
            )),
            student_enrollment: Arc::new(EnrollmentManager::new(
                student_repo.clone(),
                course_repo.clone(),
                PersonKind::Student,
            )),
            teacher_enrollment: Arc::new(EnrollmentManager::new(
                teacher_repo.clone(),
                course_repo.clone(),
                PersonKind::Teacher,
            )),
            courses: Arc::new(CourseManager::new(course_repo.clone())),
            reports: Arc::new(ReportManager::new(student_repo, teacher_repo, course_repo)),
        }
    }
}
