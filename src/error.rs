//! Error types for the phonebook crate.
//!
//! This module defines operational error types using `thiserror`.
//! Validation errors live in [`crate::domain::errors`] next to the value
//! objects they guard.

use thiserror::Error;

/// Errors that can occur during positional list operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The requested index is outside `[0, len)`.
    #[error("index {index} out of range for list of {len} contacts")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for Results with ListError
pub type ListResult<T> = Result<T, ListError>;
