//! Form-state: per-field controls and the Foo form adapter built on them.

pub mod control;
pub mod foo_form;

pub use control::FormControl;
pub use foo_form::{FooFormGroup, FooFormService};
