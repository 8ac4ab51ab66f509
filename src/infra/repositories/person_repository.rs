//! Person repository abstraction shared by both directories.
//!
//! Students and teachers live in separate tables with identical shapes,
//! so one trait serves both; each store binds the queries to its own
//! entity pair.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Person, PersonWithCourses};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Person repository trait for dependency injection.
///
/// Query methods that return [`PersonWithCourses`] resolve the complete
/// course list of every matched person, not just the course that
/// matched the filter.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Find person by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Person>>;

    /// Find person by ID together with their course memberships
    async fn find_with_courses(&self, id: Uuid) -> AppResult<Option<PersonWithCourses>>;

    /// Find person by the (name, group, age) identity triple
    async fn find_by_natural_key(
        &self,
        name: &str,
        group: &str,
        age: i32,
    ) -> AppResult<Option<Person>>;

    /// Create a new person
    async fn create(&self, name: String, age: i32, group: String) -> AppResult<Person>;

    /// Overwrite name, age and group of an existing person
    async fn update(&self, id: Uuid, name: String, age: i32, group: String) -> AppResult<Person>;

    /// Delete a person and every membership row that references them
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Count all persons in the directory
    async fn count(&self) -> AppResult<u64>;

    /// Record course membership
    async fn attach_course(&self, person_id: Uuid, course_id: Uuid) -> AppResult<()>;

    /// Remove course membership
    async fn detach_course(&self, person_id: Uuid, course_id: Uuid) -> AppResult<()>;

    /// All persons that are members of the named course
    async fn find_by_course(&self, course_name: &str) -> AppResult<Vec<PersonWithCourses>>;

    /// All persons in the given group
    async fn find_by_group(&self, group: &str) -> AppResult<Vec<PersonWithCourses>>;

    /// Members of the named course strictly older than the given age
    async fn find_older_than_in_course(
        &self,
        age: i32,
        course_name: &str,
    ) -> AppResult<Vec<PersonWithCourses>>;

    /// Members of the named course that also belong to the given group
    async fn find_by_course_and_group(
        &self,
        course_name: &str,
        group: &str,
    ) -> AppResult<Vec<PersonWithCourses>>;
}
