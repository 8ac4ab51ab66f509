//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{course_handler, report_handler, student_handler, teacher_handler};
use crate::domain::{CourseGroupReport, CourseResponse, CourseType, PersonResponse, PersonSummary};

/// OpenAPI documentation for the Classroom API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classroom API",
        version = "0.1.0",
        description = "Academic records backend: student and teacher directories, a course catalog, enrollments, and reports",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Course catalog endpoints
        course_handler::list_courses,
        course_handler::get_course,
        course_handler::create_course,
        // Student endpoints
        student_handler::create_student,
        student_handler::update_student,
        student_handler::delete_student,
        student_handler::enroll_student,
        student_handler::leave_student,
        // Teacher endpoints
        teacher_handler::create_teacher,
        teacher_handler::update_teacher,
        teacher_handler::delete_teacher,
        teacher_handler::enroll_teacher,
        teacher_handler::leave_teacher,
        // Report endpoints
        report_handler::count_students,
        report_handler::count_teachers,
        report_handler::count_courses_by_type,
        report_handler::students_by_course,
        report_handler::students_older_than_in_course,
        report_handler::students_by_group,
        report_handler::course_group_report,
    ),
    components(
        schemas(
            // Domain types
            CourseType,
            CourseResponse,
            PersonResponse,
            PersonSummary,
            CourseGroupReport,
            // Course handler types
            course_handler::CreateCourseRequest,
            // Student handler types
            student_handler::CreateStudentRequest,
            student_handler::EnrollStudentRequest,
            student_handler::LeaveStudentRequest,
            // Teacher handler types
            teacher_handler::CreateTeacherRequest,
            teacher_handler::EnrollTeacherRequest,
            teacher_handler::LeaveTeacherRequest,
        )
    ),
    tags(
        (name = "Courses", description = "Course catalog operations"),
        (name = "Students", description = "Student directory and enrollment"),
        (name = "Teachers", description = "Teacher directory and enrollment"),
        (name = "Reports", description = "Read-only statistics and listings")
    )
)]
pub struct ApiDoc;
