//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace-only.
    BlankName,

    /// The provided number is outside the 9-digit range.
    NumberOutOfRange(u32),

    /// The provided string is not a plain decimal number.
    NumberNotNumeric(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "Contact name cannot be blank"),
            Self::NumberOutOfRange(number) => {
                write!(f, "Phone number {} is not a 9-digit number", number)
            }
            Self::NumberNotNumeric(input) => {
                write!(f, "Phone number {:?} is not numeric", input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
