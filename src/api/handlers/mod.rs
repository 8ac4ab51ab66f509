//! HTTP request handlers.

pub mod course_handler;
pub mod report_handler;
pub mod student_handler;
pub mod teacher_handler;

pub use course_handler::course_routes;
pub use report_handler::report_routes;
pub use student_handler::student_routes;
pub use teacher_handler::teacher_routes;
