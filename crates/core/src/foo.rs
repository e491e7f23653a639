//! Foo entity model and its wire shape.
//!
//! A Foo is either persisted ([`Foo`], carries an `id`) or not yet persisted
//! ([`NewFoo`], serialised with `"id": null`). [`FooRecord`] is the sum of the
//! two and is what the form layer hands back to callers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a Foo name, counted in characters.
pub const NAME_MAX_LENGTH: usize = 50;

// `validator` length bounds are u64.
const NAME_MAX_LENGTH_U64: u64 = NAME_MAX_LENGTH as u64;

/* --------------------------------------------------------------------------
   Records
   -------------------------------------------------------------------------- */

/// A persisted Foo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Foo {
    pub id: DbId,
    #[validate(required, length(min = 1, max = NAME_MAX_LENGTH_U64))]
    pub name: Option<String>,
}

/// A Foo that has not been persisted yet. Always serialised with `"id": null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(into = "FooFormInput", try_from = "FooFormInput")]
pub struct NewFoo {
    #[validate(required, length(min = 1, max = NAME_MAX_LENGTH_U64))]
    pub name: Option<String>,
}

impl TryFrom<FooFormInput> for NewFoo {
    type Error = CoreError;

    fn try_from(input: FooFormInput) -> Result<Self, Self::Error> {
        match input.id {
            Some(id) => Err(CoreError::Validation(format!(
                "A new foo cannot already have an id (got {id})"
            ))),
            None => Ok(Self { name: input.name }),
        }
    }
}

/// Either an existing or a new Foo, distinguished by whether `id` is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FooRecord {
    Existing(Foo),
    New(NewFoo),
}

impl FooRecord {
    pub fn id(&self) -> Option<DbId> {
        match self {
            Self::Existing(foo) => Some(foo.id),
            Self::New(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Existing(foo) => foo.name.as_deref(),
            Self::New(foo) => foo.name.as_deref(),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }

    /// Check the record against the entity's field constraints outside of a
    /// form (for example before handing it to a persistence client).
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Existing(foo) => foo.validate()?,
            Self::New(foo) => foo.validate()?,
        }
        Ok(())
    }
}

impl From<Foo> for FooRecord {
    fn from(foo: Foo) -> Self {
        Self::Existing(foo)
    }
}

impl From<NewFoo> for FooRecord {
    fn from(foo: NewFoo) -> Self {
        Self::New(foo)
    }
}

/* --------------------------------------------------------------------------
   Form input
   -------------------------------------------------------------------------- */

/// Input accepted when building or resetting a Foo form.
///
/// Only the key is guaranteed; any field left as `None` falls back to the
/// form defaults. `FooFormInput::default()` describes a blank create form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooFormInput {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

impl FooFormInput {
    pub fn with_id(id: DbId) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }
}

impl From<Foo> for FooFormInput {
    fn from(foo: Foo) -> Self {
        Self {
            id: Some(foo.id),
            name: foo.name,
        }
    }
}

impl From<NewFoo> for FooFormInput {
    fn from(foo: NewFoo) -> Self {
        Self {
            id: None,
            name: foo.name,
        }
    }
}

impl From<FooRecord> for FooFormInput {
    fn from(record: FooRecord) -> Self {
        match record {
            FooRecord::Existing(foo) => foo.into(),
            FooRecord::New(foo) => foo.into(),
        }
    }
}
