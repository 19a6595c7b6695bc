//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid validation rules: {0}")]
    InvalidRules(String),

    #[error("Invalid character pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown filter: {0}")]
    InvalidFilter(String),
}

/// A user-correctable problem with a task description.
///
/// These are returned as values from validation, never raised as [`Error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Task description is required")]
    RequiredFieldMissing,

    #[error("Task description must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Task description cannot exceed {max} characters")]
    TooLong { max: usize },

    #[error("Task description contains invalid characters")]
    InvalidCharacters,

    #[error("Task description cannot contain prohibited words: {}", .words.join(", "))]
    ProhibitedWordsFound { words: Vec<String> },
}
