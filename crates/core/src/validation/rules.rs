//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// A constraint attached to a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule_type", rename_all = "snake_case")]
pub enum FieldRule {
    /// The value must be present and non-empty.
    Required,
    /// The value, when it has a length, must not exceed `max` characters.
    MaxLength { max: usize },
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule_type", rename_all = "snake_case")]
pub enum FieldError {
    Required,
    MaxLength {
        required_length: usize,
        actual_length: usize,
    },
}

impl FieldError {
    /// Human-readable message for display next to the field.
    pub fn message(&self) -> String {
        match self {
            Self::Required => "This field is required.".to_string(),
            Self::MaxLength {
                required_length, ..
            } => format!("This field cannot be longer than {required_length} characters."),
        }
    }
}

/// Validity of a control or of a whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Valid,
    Invalid,
    /// The control is read-only and excluded from validation.
    Disabled,
}
