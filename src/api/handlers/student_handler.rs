//! Student directory and enrollment handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::PersonResponse;
use crate::errors::AppResult;

/// Student registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Mariya")]
    pub name: String,
    /// Age in years
    #[validate(range(min = 0, message = "Age must not be negative"))]
    #[schema(example = 20)]
    pub age: i32,
    /// Group label
    #[validate(length(min = 1, message = "Group is required"))]
    #[schema(example = "A2")]
    pub group: String,
}

/// Student enrollment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollStudentRequest {
    /// Student identifier
    pub student_id: Uuid,
    /// Course to join, matched exactly by name
    #[validate(length(min = 1, message = "Course name is required"))]
    #[schema(example = "Mathematics")]
    pub course_name: String,
    /// Declared course type; accepted for compatibility, never checked
    #[schema(example = "MAIN")]
    pub course_type: Option<String>,
}

/// Student withdrawal request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LeaveStudentRequest {
    /// Student identifier
    pub student_id: Uuid,
    /// Course to leave, matched exactly by name
    #[validate(length(min = 1, message = "Course name is required"))]
    #[schema(example = "Mathematics")]
    pub course_name: String,
}

/// Create student directory routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student))
        .route("/:id", put(update_student).delete(delete_student))
        .route("/enroll", post(enroll_student))
        .route("/leave", post(leave_student))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/v1/students",
    tag = "Students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student registered", body = PersonResponse),
        (status = 400, description = "Validation error or duplicate student")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<PersonResponse>)> {
    let student = state
        .student_directory
        .create(payload.name, payload.age, payload.group)
        .await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// Overwrite an existing student's details
#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    tag = "Students",
    params(
        ("id" = Uuid, Path, description = "Student identifier")
    ),
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = PersonResponse),
        (status = 400, description = "Unknown student")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateStudentRequest>,
) -> AppResult<Json<PersonResponse>> {
    let student = state
        .student_directory
        .update(id, payload.name, payload.age, payload.group)
        .await?;

    Ok(Json(student))
}

/// Remove a student and their memberships
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    tag = "Students",
    params(
        ("id" = Uuid, Path, description = "Student identifier")
    ),
    responses(
        (status = 204, description = "Student removed"),
        (status = 400, description = "Unknown student")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.student_directory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/api/v1/students/enroll",
    tag = "Students",
    request_body = EnrollStudentRequest,
    responses(
        (status = 200, description = "Student enrolled", body = PersonResponse),
        (status = 400, description = "Unknown student or course, or already enrolled")
    )
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EnrollStudentRequest>,
) -> AppResult<Json<PersonResponse>> {
    let student = state
        .student_enrollment
        .enroll(
            payload.student_id,
            &payload.course_name,
            payload.course_type,
        )
        .await?;

    Ok(Json(student))
}

/// Withdraw a student from a course
#[utoipa::path(
    post,
    path = "/api/v1/students/leave",
    tag = "Students",
    request_body = LeaveStudentRequest,
    responses(
        (status = 200, description = "Student withdrawn", body = PersonResponse),
        (status = 400, description = "Unknown student or course, or not enrolled")
    )
)]
pub async fn leave_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LeaveStudentRequest>,
) -> AppResult<Json<PersonResponse>> {
    let student = state
        .student_enrollment
        .withdraw(payload.student_id, &payload.course_name)
        .await?;

    Ok(Json(student))
}
