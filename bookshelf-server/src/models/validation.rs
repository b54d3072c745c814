//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// String doesn't parse into the required type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body is not a valid JSON payload for the route
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidBody { reason } => write!(f, "invalid JSON body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");

        let err = ValidationError::InvalidBody {
            reason: "EOF while parsing".into(),
        };
        assert_eq!(err.to_string(), "invalid JSON body: EOF while parsing");
    }
}
