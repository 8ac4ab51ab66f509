//! Read-only report views assembled from directory and catalog data.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::person::PersonWithCourses;

/// Condensed person view used in report listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonSummary {
    /// Unique person identifier
    pub id: Uuid,
    /// Display name
    #[schema(example = "Georgi")]
    pub name: String,
    /// Age in years
    #[schema(example = 24)]
    pub age: i32,
    /// Group label
    #[schema(example = "A2")]
    pub group: String,
    /// Names of every course the person is a member of
    pub courses: Vec<String>,
}

impl From<PersonWithCourses> for PersonSummary {
    fn from(record: PersonWithCourses) -> Self {
        Self {
            id: record.person.id,
            name: record.person.name,
            age: record.person.age,
            group: record.person.group,
            courses: record.courses.into_iter().map(|c| c.name).collect(),
        }
    }
}

/// Students and teachers that share a course and a group.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseGroupReport {
    pub students: Vec<PersonSummary>,
    pub teachers: Vec<PersonSummary>,
}
