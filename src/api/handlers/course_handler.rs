//! Course catalog handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::CourseResponse;
use crate::errors::AppResult;

/// Course creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    /// Course name, unique across the catalog
    #[validate(length(min = 1, message = "Course name is required"))]
    #[schema(example = "Mathematics")]
    pub name: String,
    /// Course type name, matched case-insensitively
    #[validate(length(min = 1, message = "Course type is required"))]
    #[schema(example = "MAIN")]
    pub course_type: String,
}

/// Create course catalog routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/:name", get(get_course))
}

/// List every course in the catalog
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "Course catalog", body = Vec<CourseResponse>)
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<CourseResponse>>> {
    let courses = state.courses.list().await?;
    Ok(Json(courses))
}

/// Look up a course by its exact name
#[utoipa::path(
    get,
    path = "/api/v1/courses/{name}",
    tag = "Courses",
    params(
        ("name" = String, Path, description = "Course name, matched exactly")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "No course with this name")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    // Absence is an empty 404 here, unlike the mutating endpoints
    // where a missing course is a 400 with a message.
    match state.courses.get_by_name(&name).await? {
        Some(course) => Ok(Json(course).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Add a course to the catalog
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = "Courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Duplicate name or unknown course type")
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    let course = state
        .courses
        .create(payload.name, &payload.course_type)
        .await?;

    Ok((StatusCode::CREATED, Json(course)))
}
