//! Validation error types

use std::fmt;

/// Validation error for request bodies and path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent from the request body
    Missing { field: &'static str },

    /// Field is present but blank
    Empty { field: &'static str },

    /// Value doesn't parse (e.g., non-numeric id, malformed JSON)
    InvalidFormat { field: &'static str, reason: String },

    /// Path id and body id disagree on update
    IdMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::IdMismatch => write!(f, "ID mismatch"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing {
            field: "patientName",
        };
        assert_eq!(err.to_string(), "patientName is required");

        let err = ValidationError::Empty {
            field: "doctorName",
        };
        assert_eq!(err.to_string(), "doctorName cannot be empty");
    }

    #[test]
    fn mismatch_message_is_terse() {
        assert_eq!(ValidationError::IdMismatch.to_string(), "ID mismatch");
    }
}
