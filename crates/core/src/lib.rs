//! Form layer for the Foo entity: record model, sample fixtures, field-rule
//! validation, form-state controls, and the entity route table.
//!
//! Everything here is pure in-memory logic. Rendering, navigation, and
//! persistence belong to the caller.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod foo;
pub mod form;
pub mod routes;
pub mod types;
pub mod validation;
