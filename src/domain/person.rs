//! Person domain entities shared by the student and teacher directories.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::course::{Course, CourseResponse};

/// Which directory a person belongs to.
///
/// Students and teachers share one shape and one rule set; the kind only
/// selects the backing table and the wording of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Student,
    Teacher,
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonKind::Student => write!(f, "Student"),
            PersonKind::Teacher => write!(f, "Teacher"),
        }
    }
}

/// Person domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub group: String,
}

/// A person together with every course they are currently a member of.
#[derive(Debug, Clone)]
pub struct PersonWithCourses {
    pub person: Person,
    pub courses: Vec<Course>,
}

/// Person response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonResponse {
    /// Unique person identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Mariya")]
    pub name: String,
    /// Age in years
    #[schema(example = 20)]
    pub age: i32,
    /// Group label
    #[schema(example = "A2")]
    pub group: String,
    /// Current course memberships
    pub courses: Vec<CourseResponse>,
}

impl PersonResponse {
    pub fn from_parts(person: Person, courses: Vec<Course>) -> Self {
        Self {
            id: person.id,
            name: person.name,
            age: person.age,
            group: person.group,
            courses: courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}

impl From<PersonWithCourses> for PersonResponse {
    fn from(record: PersonWithCourses) -> Self {
        Self::from_parts(record.person, record.courses)
    }
}
