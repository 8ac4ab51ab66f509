//! Read-only report handlers over the directories and the catalog.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{CourseGroupReport, PersonResponse};
use crate::errors::AppResult;

/// Create report routes
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/students/count", get(count_students))
        .route("/teachers/count", get(count_teachers))
        .route("/courses/count/:course_type", get(count_courses_by_type))
        .route("/students/course/:course_name", get(students_by_course))
        .route(
            "/students/course/:course_name/age/:age",
            get(students_older_than_in_course),
        )
        .route("/students/group/:group_name", get(students_by_group))
        .route("/:course_name/:group_name", get(course_group_report))
}

/// Count registered students
#[utoipa::path(
    get,
    path = "/api/v1/reports/students/count",
    tag = "Reports",
    responses(
        (status = 200, description = "Student headcount", body = u64)
    )
)]
pub async fn count_students(State(state): State<AppState>) -> AppResult<Json<u64>> {
    let count = state.reports.count_students().await?;
    Ok(Json(count))
}

/// Count registered teachers
#[utoipa::path(
    get,
    path = "/api/v1/reports/teachers/count",
    tag = "Reports",
    responses(
        (status = 200, description = "Teacher headcount", body = u64)
    )
)]
pub async fn count_teachers(State(state): State<AppState>) -> AppResult<Json<u64>> {
    let count = state.reports.count_teachers().await?;
    Ok(Json(count))
}

/// Count courses of a given type
#[utoipa::path(
    get,
    path = "/api/v1/reports/courses/count/{course_type}",
    tag = "Reports",
    params(
        ("course_type" = String, Path, description = "Course type name, any casing")
    ),
    responses(
        (status = 200, description = "Course count for the type", body = u64),
        (status = 400, description = "Unknown course type")
    )
)]
pub async fn count_courses_by_type(
    State(state): State<AppState>,
    Path(course_type): Path<String>,
) -> AppResult<Json<u64>> {
    let count = state.reports.count_courses_by_type(&course_type).await?;
    Ok(Json(count))
}

/// List students enrolled in a course
#[utoipa::path(
    get,
    path = "/api/v1/reports/students/course/{course_name}",
    tag = "Reports",
    params(
        ("course_name" = String, Path, description = "Exact course name")
    ),
    responses(
        (status = 200, description = "Students in the course", body = [PersonResponse])
    )
)]
pub async fn students_by_course(
    State(state): State<AppState>,
    Path(course_name): Path<String>,
) -> AppResult<Json<Vec<PersonResponse>>> {
    let students = state.reports.students_by_course(&course_name).await?;
    Ok(Json(students))
}

/// List students in a course older than a given age
#[utoipa::path(
    get,
    path = "/api/v1/reports/students/course/{course_name}/age/{age}",
    tag = "Reports",
    params(
        ("course_name" = String, Path, description = "Exact course name"),
        ("age" = i32, Path, description = "Exclusive lower age bound")
    ),
    responses(
        (status = 200, description = "Students in the course above the age", body = [PersonResponse])
    )
)]
pub async fn students_older_than_in_course(
    State(state): State<AppState>,
    Path((course_name, age)): Path<(String, i32)>,
) -> AppResult<Json<Vec<PersonResponse>>> {
    let students = state
        .reports
        .students_older_than_in_course(age, &course_name)
        .await?;
    Ok(Json(students))
}

/// List students belonging to a group
#[utoipa::path(
    get,
    path = "/api/v1/reports/students/group/{group_name}",
    tag = "Reports",
    params(
        ("group_name" = String, Path, description = "Exact group label")
    ),
    responses(
        (status = 200, description = "Students in the group", body = [PersonResponse])
    )
)]
pub async fn students_by_group(
    State(state): State<AppState>,
    Path(group_name): Path<String>,
) -> AppResult<Json<Vec<PersonResponse>>> {
    let students = state.reports.students_by_group(&group_name).await?;
    Ok(Json(students))
}

/// List students and teachers sharing a course and group
#[utoipa::path(
    get,
    path = "/api/v1/reports/{course_name}/{group_name}",
    tag = "Reports",
    params(
        ("course_name" = String, Path, description = "Exact course name"),
        ("group_name" = String, Path, description = "Exact group label")
    ),
    responses(
        (status = 200, description = "People sharing the course and group", body = CourseGroupReport)
    )
)]
pub async fn course_group_report(
    State(state): State<AppState>,
    Path((course_name, group_name)): Path<(String, String)>,
) -> AppResult<Json<CourseGroupReport>> {
    let report = state
        .reports
        .course_group_report(&course_name, &group_name)
        .await?;
    Ok(Json(report))
}
