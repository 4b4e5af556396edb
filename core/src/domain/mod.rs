//! Domain entities for the CourseHub core crate.

pub mod entities;

pub use entities::{Claims, TOKEN_VALIDITY_DAYS};
