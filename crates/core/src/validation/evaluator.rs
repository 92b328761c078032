//! Rule evaluator — pure logic, no storage access.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::rules::{FieldViolation, RuleKind, ValidationResult, ValidationRule};

/// Loose email shape check: something@something.something, no whitespace.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Evaluate a rule table against a single draft record.
pub fn evaluate_rules(
    rules: &[ValidationRule],
    data: &serde_json::Map<String, Value>,
) -> ValidationResult {
    let mut violations = Vec::new();

    for rule in rules {
        if let Some(violation) = evaluate_single_rule(rule, data) {
            violations.push(violation);
        }
    }

    ValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

fn evaluate_single_rule(
    rule: &ValidationRule,
    data: &serde_json::Map<String, Value>,
) -> Option<FieldViolation> {
    let field_value = data.get(rule.field);

    match rule.kind {
        RuleKind::Required => evaluate_required(rule, field_value),
        RuleKind::Email => evaluate_email(rule, field_value),
        RuleKind::NonNegative => evaluate_non_negative(rule, field_value),
        RuleKind::OneOf(allowed) => evaluate_one_of(rule, field_value, allowed),
        RuleKind::AtMostField(other) => evaluate_at_most_field(rule, field_value, data.get(other)),
    }
}

fn violation(rule: &ValidationRule, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        message: rule.message.to_string(),
        value: value.cloned(),
    }
}

fn evaluate_required(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(rule, value)),
        Some(Value::String(s)) if s.trim().is_empty() => Some(violation(rule, value)),
        _ => None,
    }
}

fn evaluate_email(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    // Presence is a separate Required rule; a missing or non-string value
    // passes silently here.
    let s = value.and_then(|v| v.as_str())?;
    if EMAIL_RE.is_match(s) {
        None
    } else {
        Some(violation(rule, value))
    }
}

fn evaluate_non_negative(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let num = value.and_then(|v| v.as_f64())?;
    if num < 0.0 {
        Some(violation(rule, value))
    } else {
        None
    }
}

fn evaluate_one_of(
    rule: &ValidationRule,
    value: Option<&Value>,
    allowed: &'static [&'static str],
) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    if allowed.contains(&s) {
        None
    } else {
        Some(violation(rule, value))
    }
}

fn evaluate_at_most_field(
    rule: &ValidationRule,
    value: Option<&Value>,
    limit: Option<&Value>,
) -> Option<FieldViolation> {
    let num = value.and_then(|v| v.as_f64())?;
    let limit = limit.and_then(|v| v.as_f64())?;
    if num > limit {
        Some(violation(rule, value))
    } else {
        None
    }
}
