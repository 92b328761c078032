//! Declarative form validation engine.
//!
//! Provides rule types and a pure-logic evaluator. Each entity kind declares
//! a static rule table; stores and forms evaluate that table against a draft
//! record before committing it.

pub mod evaluator;
pub mod rules;

pub use evaluator::evaluate_rules;
pub use rules::{FieldViolation, RuleKind, ValidationResult, ValidationRule};
