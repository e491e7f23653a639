//! Rule evaluator — pure logic, no I/O.

use super::rules::{FieldError, FieldRule};
use crate::types::DbId;

/// A value a [`FieldRule`] can be checked against.
pub trait FieldValue {
    /// Whether the value counts as "missing" for a `required` rule.
    fn is_blank(&self) -> bool;

    /// Length in characters, or `None` for values without a length.
    fn char_len(&self) -> Option<usize>;
}

impl FieldValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn char_len(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl FieldValue for DbId {
    fn is_blank(&self) -> bool {
        false
    }

    fn char_len(&self) -> Option<usize> {
        None
    }
}

/// Evaluate all rules against a single field value, in rule order.
pub fn evaluate_rules<T: FieldValue>(rules: &[FieldRule], value: Option<&T>) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(*rule, value))
        .collect()
}

fn evaluate_single_rule<T: FieldValue>(rule: FieldRule, value: Option<&T>) -> Option<FieldError> {
    match rule {
        FieldRule::Required => evaluate_required(value),
        FieldRule::MaxLength { max } => evaluate_max_length(max, value),
    }
}

fn evaluate_required<T: FieldValue>(value: Option<&T>) -> Option<FieldError> {
    match value {
        None => Some(FieldError::Required),
        Some(v) if v.is_blank() => Some(FieldError::Required),
        _ => None,
    }
}

// Absent values pass; presence is the job of `Required`.
fn evaluate_max_length<T: FieldValue>(max: usize, value: Option<&T>) -> Option<FieldError> {
    let len = value.and_then(|v| v.char_len())?;
    if len > max {
        Some(FieldError::MaxLength {
            required_length: max,
            actual_length: len,
        })
    } else {
        None
    }
}
