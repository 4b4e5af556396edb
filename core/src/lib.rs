//! # CourseHub Core
//!
//! Core business logic and domain layer for the CourseHub backend.
//! This crate contains domain entities, the token service, and error types
//! that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
