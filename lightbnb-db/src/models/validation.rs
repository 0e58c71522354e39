//! Validation error types

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// String doesn't match required format (e.g., email)
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Count or amount below zero
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
}

/// Reject blank strings, returning the trimmed value.
pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "email",
            reason: "must contain '@'",
        };
        assert_eq!(err.to_string(), "email: must contain '@'");

        let err = ValidationError::Negative {
            field: "cost_per_night",
        };
        assert_eq!(err.to_string(), "cost_per_night cannot be negative");
    }

    #[test]
    fn non_empty_trims() {
        assert_eq!(non_empty("name", "  Ada ").unwrap(), "Ada");
        assert_eq!(
            non_empty("name", "   "),
            Err(ValidationError::Empty { field: "name" })
        );
    }
}
