//! Teacher directory and enrollment handlers.

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

/// Teacher registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ivan")]
    pub name: String,
    /// Age in years
    #[validate(range(min = 0, message = "Age must not be negative"))]
    #[schema(example = 42)]
    pub age: i32,
    /// Group label
    #[validate(length(min = 1, message = "Group is required"))]
    #[schema(example = "A1")]
    pub group: String,
}

/// Teacher enrollment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollTeacherRequest {
    /// Teacher identifier
    pub teacher_id: Uuid,
    /// Course to join, matched exactly by name
    #[validate(length(min = 1, message = "Course name is required"))]
    #[schema(example = "Mathematics")]
    pub course_name: String,
    /// Declared course type; accepted for compatibility, never checked
    #[schema(example = "MAIN")]
    pub course_type: Option<String>,
}

/// Teacher withdrawal request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LeaveTeacherRequest {
    /// Teacher identifier
    pub teacher_id: Uuid,
    /// Course to leave, matched exactly by name
    #[validate(length(min = 1, message = "Course name is required"))]
    #[schema(example = "Mathematics")]
    pub course_name: String,
}

/// Create teacher directory routes
pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher))
        .route("/:id", put(update_teacher).delete(delete_teacher))
        .route("/enroll", post(enroll_teacher))
        .route("/leave", post(leave_teacher))
}

/// Register a new teacher
#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    tag = "Teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher registered", body = PersonResponse),
        (status = 400, description = "Validation error or duplicate teacher")
    )
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTeacherRequest>,
) -> AppResult<(StatusCode, Json<PersonResponse>)> {
    let teacher = state
        .teacher_directory
        .create(payload.name, payload.age, payload.group)
        .await?;

    Ok((StatusCode::CREATED, Json(teacher)))
}

/// Overwrite an existing teacher's details
#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}",
    tag = "Teachers",
    params(
        ("id" = Uuid, Path, description = "Teacher identifier")
    ),
    request_body = CreateTeacherRequest,
    responses(
        (status = 200, description = "Teacher updated", body = PersonResponse),
        (status = 400, description = "Unknown teacher")
    )
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateTeacherRequest>,
) -> AppResult<Json<PersonResponse>> {
    let teacher = state
        .teacher_directory
        .update(id, payload.name, payload.age, payload.group)
        .await?;

    Ok(Json(teacher))
}

/// Remove a teacher and their memberships
#[utoipa::path(
    delete,
    path = "/api/v1/teachers/{id}",
    tag = "Teachers",
    params(
        ("id" = Uuid, Path, description = "Teacher identifier")
    ),
    responses(
        (status = 204, description = "Teacher removed"),
        (status = 400, description = "Unknown teacher")
    )
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.teacher_directory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enroll a teacher in a course
#[utoipa::path(
    post,
    path = "/api/v1/teachers/enroll",
    tag = "Teachers",
    request_body = EnrollTeacherRequest,
    responses(
        (status = 200, description = "Teacher enrolled", body = PersonResponse),
        (status = 400, description = "Unknown teacher or course, or already enrolled")
    )
)]
pub async fn enroll_teacher(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EnrollTeacherRequest>,
) -> AppResult<Json<PersonResponse>> {
    let teacher = state
        .teacher_enrollment
        .enroll(
            payload.teacher_id,
            &payload.course_name,
            payload.course_type,
        )
        .await?;

    Ok(Json(teacher))
}

/// Withdraw a teacher from a course
#[utoipa::path(
    post,
    path = "/api/v1/teachers/leave",
    tag = "Teachers",
    request_body = LeaveTeacherRequest,
    responses(
        (status = 200, description = "Teacher withdrawn", body = PersonResponse),
        (status = 400, description = "Unknown teacher or course, or not enrolled")
    )
)]
pub async fn leave_teacher(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LeaveTeacherRequest>,
) -> AppResult<Json<PersonResponse>> {
    let teacher = state
        .teacher_enrollment
        .withdraw(payload.teacher_id, &payload.course_name)
        .await?;

    Ok(Json(teacher))
}
