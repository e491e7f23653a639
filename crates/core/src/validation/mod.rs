//! Field-level validation.
//!
//! Provides rule and error types plus a pure-logic evaluator. Rules never
//! fail loudly: a violation becomes a [`rules::FieldError`] on the field.

pub mod evaluator;
pub mod rules;
