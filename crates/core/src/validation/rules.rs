//! Validation rule and result types.

use serde::Serialize;

/// A single declarative constraint on one field of a draft record.
///
/// Rule tables are `'static` slices declared next to each entity model, so
/// every constructor here borrows rather than allocates.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

impl ValidationRule {
    pub const fn new(field: &'static str, kind: RuleKind, message: &'static str) -> Self {
        ValidationRule {
            field,
            kind,
            message,
        }
    }
}

/// The closed set of constraint kinds the evaluator understands.
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Field must be present, non-null, and (for strings) non-empty.
    Required,
    /// String field must look like an email address.
    Email,
    /// Numeric field must be zero or greater.
    NonNegative,
    /// String field must be one of the listed labels.
    OneOf(&'static [&'static str]),
    /// Numeric field must not exceed the named sibling field.
    AtMostField(&'static str),
}

/// Aggregated result of evaluating a rule table against one record.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
