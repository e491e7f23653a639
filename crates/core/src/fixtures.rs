//! Sample Foo records for tests and demos.
//!
//! Each sample is built fresh on every call, so callers can never mutate a
//! shared fixture.

use crate::foo::{Foo, NewFoo};

/// Name given to entities built by [`create_entity`].
pub const DEFAULT_NAME: &str = "AAAAAAAAAA";

/// Name given to entities built by [`create_updated_entity`].
pub const UPDATED_NAME: &str = "BBBBBBBBBB";

pub fn sample_with_required_data() -> Foo {
    Foo {
        id: 75191,
        name: Some("24/7 sky HTTP".to_string()),
    }
}

pub fn sample_with_partial_data() -> Foo {
    Foo {
        id: 109,
        name: Some("calculate Intranet AI".to_string()),
    }
}

pub fn sample_with_full_data() -> Foo {
    Foo {
        id: 77214,
        name: Some("Concrete".to_string()),
    }
}

pub fn sample_with_new_data() -> NewFoo {
    NewFoo {
        name: Some("bypass SAS multi-state".to_string()),
    }
}

/// A not-yet-persisted Foo with [`DEFAULT_NAME`].
pub fn create_entity() -> NewFoo {
    NewFoo {
        name: Some(DEFAULT_NAME.to_string()),
    }
}

/// A not-yet-persisted Foo with [`UPDATED_NAME`].
pub fn create_updated_entity() -> NewFoo {
    NewFoo {
        name: Some(UPDATED_NAME.to_string()),
    }
}
