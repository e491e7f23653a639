//! A single form field: current value, rules, validity, and interaction flags.

use crate::validation::evaluator::{evaluate_rules, FieldValue};
use crate::validation::rules::{FieldError, FieldRule, ValidationStatus};

/// One field of a form.
///
/// Errors are recomputed whenever the value or the enabled state changes, so
/// `errors()` and `status()` always describe the current value. A disabled
/// control keeps its value but is excluded from validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl<T> {
    value: Option<T>,
    rules: Vec<FieldRule>,
    disabled: bool,
    dirty: bool,
    touched: bool,
    errors: Vec<FieldError>,
}

impl<T: FieldValue + Clone> FormControl<T> {
    pub fn new(value: Option<T>, rules: Vec<FieldRule>) -> Self {
        let mut control = Self {
            value,
            rules,
            disabled: false,
            dirty: false,
            touched: false,
            errors: Vec::new(),
        };
        control.revalidate();
        control
    }

    /// Build a control that starts out disabled.
    pub fn new_disabled(value: Option<T>, rules: Vec<FieldRule>) -> Self {
        let mut control = Self::new(value, rules);
        control.disable();
        control
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Replace the value as a user edit would: marks the control dirty.
    pub fn set_value(&mut self, value: Option<T>) {
        self.value = value;
        self.dirty = true;
        self.revalidate();
    }

    /// Replace the value and return to a pristine, untouched state.
    pub fn reset(&mut self, value: Option<T>) {
        self.value = value;
        self.dirty = false;
        self.touched = false;
        self.revalidate();
    }

    pub fn disable(&mut self) {
        self.disabled = true;
        self.revalidate();
    }

    pub fn enable(&mut self) {
        self.disabled = false;
        self.revalidate();
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn status(&self) -> ValidationStatus {
        if self.disabled {
            ValidationStatus::Disabled
        } else if self.errors.is_empty() {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == ValidationStatus::Valid
    }

    fn revalidate(&mut self) {
        self.errors = if self.disabled {
            Vec::new()
        } else {
            evaluate_rules(&self.rules, self.value.as_ref())
        };
    }
}
