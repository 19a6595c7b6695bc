//! Core library for TodoPro
//!
//! This crate contains the core business logic, including:
//! - Task description validation
//! - The in-memory todo store and its filtered views

pub mod error;
pub mod todo;
pub mod validation;

pub use error::{Error, ValidationIssue};
pub type Result<T> = std::result::Result<T, Error>;
