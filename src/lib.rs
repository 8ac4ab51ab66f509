//! Classroom API - academic records backend
//!
//! This crate provides a REST API over two people directories (students
//! and teachers), a course catalog, course memberships, and read-only
//! reports across all of them.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Course, CourseType, Person, PersonKind};
pub use errors::{AppError, AppResult};
