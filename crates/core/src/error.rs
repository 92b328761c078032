use std::fmt;

use crate::types::EntityId;
use crate::validation::FieldViolation;

/// Domain-level error taxonomy.
///
/// No variant here is fatal: validation and not-found errors are recoverable
/// by the operator re-submitting corrected input, and authentication errors
/// surface as an inline banner on the login view.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a field-tagged validation error for one entity kind.
    pub fn validation(entity: &'static str, violations: Vec<FieldViolation>) -> Self {
        CoreError::Validation(ValidationFailure { entity, violations })
    }
}

/// A field-tagged validation failure raised by a store or form commit.
///
/// Carries every violation so a form can surface each message next to the
/// offending field instead of a single opaque string.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub entity: &'static str,
    pub violations: Vec<FieldViolation>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.entity)?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_every_field() {
        let err = CoreError::validation(
            "member",
            vec![
                FieldViolation {
                    field: "email".into(),
                    message: "Please enter valid email".into(),
                    value: None,
                },
                FieldViolation {
                    field: "name".into(),
                    message: "Please enter full name".into(),
                    value: None,
                },
            ],
        );
        let text = err.to_string();
        assert!(text.contains("email: Please enter valid email"));
        assert!(text.contains("name: Please enter full name"));
    }
}
