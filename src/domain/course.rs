//! Course domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

/// Course classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseType {
    Main,
    Secondary,
}

impl CourseType {
    /// Canonical storage form
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Main => "MAIN",
            CourseType::Secondary => "SECONDARY",
        }
    }
}

impl FromStr for CourseType {
    type Err = AppError;

    /// Parse a caller-supplied type name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MAIN" => Ok(CourseType::Main),
            "SECONDARY" => Ok(CourseType::Secondary),
            _ => Err(AppError::bad_request(format!(
                "no course type named {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Course domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub course_type: CourseType,
}

/// Course response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    /// Course name, unique across the catalog
    #[schema(example = "Mathematics")]
    pub name: String,
    /// Course classification
    #[schema(example = "MAIN")]
    pub course_type: CourseType,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            name: course.name,
            course_type: course.course_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_type_parses_any_case() {
        assert_eq!("MAIN".parse::<CourseType>().unwrap(), CourseType::Main);
        assert_eq!("main".parse::<CourseType>().unwrap(), CourseType::Main);
        assert_eq!(
            "Secondary".parse::<CourseType>().unwrap(),
            CourseType::Secondary
        );
        assert_eq!(
            "sEcOnDaRy".parse::<CourseType>().unwrap(),
            CourseType::Secondary
        );
    }

    #[test]
    fn test_course_type_rejects_unknown_names() {
        let err = "weekly".parse::<CourseType>().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_course_type_round_trips_through_storage_form() {
        for course_type in [CourseType::Main, CourseType::Secondary] {
            assert_eq!(
                course_type.as_str().parse::<CourseType>().unwrap(),
                course_type
            );
        }
    }
}
