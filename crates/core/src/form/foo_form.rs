//! Foo form: builds form-state from a record, resets it in place, and
//! extracts the edited record back out.

use std::collections::BTreeMap;

use crate::config::FormConfig;
use crate::foo::{Foo, FooFormInput, FooRecord, NewFoo};
use crate::types::DbId;
use crate::validation::evaluator::FieldValue;
use crate::validation::rules::{FieldError, FieldRule, ValidationStatus};

use super::control::FormControl;

/// Field name of the identifier control.
pub const FIELD_ID: &str = "id";

/// Field name of the name control.
pub const FIELD_NAME: &str = "name";

/* --------------------------------------------------------------------------
   Form group
   -------------------------------------------------------------------------- */

/// Form-state for one Foo edit or create session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooFormGroup {
    id: FormControl<DbId>,
    name: FormControl<String>,
}

impl FooFormGroup {
    /// The identifier control. Always disabled: the key is carried through
    /// but never edited, so only read access is exposed.
    pub fn id(&self) -> &FormControl<DbId> {
        &self.id
    }

    pub fn name(&self) -> &FormControl<String> {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut FormControl<String> {
        &mut self.name
    }

    /// Aggregate status: invalid if any enabled control is invalid, disabled
    /// if every control is disabled, valid otherwise.
    pub fn status(&self) -> ValidationStatus {
        let statuses = [self.id.status(), self.name.status()];
        if statuses.contains(&ValidationStatus::Invalid) {
            ValidationStatus::Invalid
        } else if statuses.iter().all(|s| *s == ValidationStatus::Disabled) {
            ValidationStatus::Disabled
        } else {
            ValidationStatus::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == ValidationStatus::Valid
    }

    pub fn is_dirty(&self) -> bool {
        self.id.is_dirty() || self.name.is_dirty()
    }

    pub fn is_touched(&self) -> bool {
        self.id.is_touched() || self.name.is_touched()
    }

    pub fn mark_all_as_touched(&mut self) {
        self.id.mark_as_touched();
        self.name.mark_as_touched();
    }

    /// Current violations keyed by field name. Fields without errors are omitted.
    pub fn errors(&self) -> BTreeMap<&'static str, Vec<FieldError>> {
        [
            (FIELD_ID, self.id.errors()),
            (FIELD_NAME, self.name.errors()),
        ]
        .into_iter()
        .filter(|(_, errors)| !errors.is_empty())
        .map(|(field, errors)| (field, errors.to_vec()))
        .collect()
    }

    /// Values of the enabled controls only; disabled fields read as `None`.
    pub fn value(&self) -> FooFormInput {
        FooFormInput {
            id: enabled_value(&self.id),
            name: enabled_value(&self.name),
        }
    }

    /// Values of every control, disabled ones included.
    pub fn raw_value(&self) -> FooFormInput {
        FooFormInput {
            id: self.id.value().copied(),
            name: self.name.value().cloned(),
        }
    }
}

fn enabled_value<T: FieldValue + Clone>(control: &FormControl<T>) -> Option<T> {
    if control.is_disabled() {
        None
    } else {
        control.value().cloned()
    }
}

/* --------------------------------------------------------------------------
   Service
   -------------------------------------------------------------------------- */

/// Builds, resets, and reads [`FooFormGroup`]s.
#[derive(Debug, Clone, Default)]
pub struct FooFormService {
    config: FormConfig,
}

impl FooFormService {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Build a fresh form from an existing record or a partial one.
    ///
    /// Pass `FooFormInput::default()` for a blank create form. Missing fields
    /// fall back to the form defaults.
    pub fn create_form_group(&self, foo: impl Into<FooFormInput>) -> FooFormGroup {
        let raw = Self::merge_with_defaults(foo.into());
        tracing::debug!(foo_id = ?raw.id, "Creating foo form group");

        FooFormGroup {
            id: FormControl::new_disabled(raw.id, Self::id_rules()),
            name: FormControl::new(raw.name, self.name_rules()),
        }
    }

    /// Read the record out of the form, including the disabled `id`.
    ///
    /// No validation happens here; check [`FooFormGroup::is_valid`] first.
    pub fn get_foo(&self, form: &FooFormGroup) -> FooRecord {
        let raw = form.raw_value();
        tracing::trace!(foo_id = ?raw.id, valid = form.is_valid(), "Extracting foo from form");

        match raw.id {
            Some(id) => FooRecord::Existing(Foo { id, name: raw.name }),
            None => FooRecord::New(NewFoo { name: raw.name }),
        }
    }

    /// Re-apply defaults merged with `foo` to an existing form, in place.
    ///
    /// Controls return to pristine and untouched; `id` stays disabled.
    pub fn reset_form(&self, form: &mut FooFormGroup, foo: impl Into<FooFormInput>) {
        let raw = Self::merge_with_defaults(foo.into());
        tracing::debug!(foo_id = ?raw.id, "Resetting foo form group");

        form.id.reset(raw.id);
        form.id.disable();
        form.name.reset(raw.name);
    }

    fn form_defaults() -> FooFormInput {
        FooFormInput {
            id: None,
            name: None,
        }
    }

    fn merge_with_defaults(input: FooFormInput) -> FooFormInput {
        let defaults = Self::form_defaults();
        FooFormInput {
            id: input.id.or(defaults.id),
            name: input.name.or(defaults.name),
        }
    }

    fn id_rules() -> Vec<FieldRule> {
        vec![FieldRule::Required]
    }

    fn name_rules(&self) -> Vec<FieldRule> {
        vec![
            FieldRule::Required,
            FieldRule::MaxLength {
                max: self.config.name_max_length(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_has_null_id_and_missing_name() {
        let form = FooFormService::default().create_form_group(FooFormInput::default());
        assert_eq!(form.id().value(), None);
        assert_eq!(form.name().value(), None);
        assert!(form.id().is_disabled());
        assert_eq!(form.status(), ValidationStatus::Invalid);
        assert_eq!(
            form.errors().get(FIELD_NAME),
            Some(&vec![FieldError::Required])
        );
        assert!(!form.errors().contains_key(FIELD_ID));
    }

    #[test]
    fn partial_input_takes_id_and_defaults_the_rest() {
        let form = FooFormService::default().create_form_group(FooFormInput::with_id(42));
        assert_eq!(form.id().value(), Some(&42));
        assert_eq!(form.name().value(), None);
        assert!(!form.is_valid());
    }

    #[test]
    fn value_hides_disabled_id_but_raw_value_keeps_it() {
        let service = FooFormService::default();
        let form = service.create_form_group(Foo {
            id: 9,
            name: Some("nine".into()),
        });
        assert_eq!(form.value().id, None);
        assert_eq!(form.value().name.as_deref(), Some("nine"));
        assert_eq!(form.raw_value().id, Some(9));
    }

    #[test]
    fn configured_limit_drives_name_rule() {
        let service = FooFormService::new(FormConfig::with_name_max_length(4).unwrap());
        let form = service.create_form_group(NewFoo {
            name: Some("abcde".into()),
        });
        assert_eq!(
            form.name().errors(),
            &[FieldError::MaxLength {
                required_length: 4,
                actual_length: 5,
            }]
        );
    }

    #[test]
    fn form_and_record_validation_agree_on_long_names() {
        let too_long = Foo {
            id: 1,
            name: Some("a".repeat(crate::foo::NAME_MAX_LENGTH + 1)),
        };
        assert!(FooRecord::from(too_long.clone()).validate().is_err());
        assert!(FormConfig::with_name_max_length(200).is_err());

        for max in [1, 20, crate::foo::NAME_MAX_LENGTH] {
            let service = FooFormService::new(FormConfig::with_name_max_length(max).unwrap());
            let form = service.create_form_group(too_long.clone());
            assert!(!form.is_valid(), "limit {max} accepted an oversized name");
        }
    }

    #[test]
    fn editing_name_leaves_id_untouched() {
        let service = FooFormService::default();
        let mut form = service.create_form_group(Foo {
            id: 31,
            name: Some("before".into()),
        });

        form.name_mut().set_value(Some("after".into()));

        assert_eq!(form.id().value(), Some(&31));
        assert!(form.id().is_disabled());
        assert!(!form.id().is_dirty());
        assert_eq!(service.get_foo(&form).id(), Some(31));
    }

    #[test]
    fn reset_restores_pristine_state() {
        let service = FooFormService::default();
        let mut form = service.create_form_group(FooFormInput::default());
        form.name_mut().set_value(Some("typed".into()));
        form.mark_all_as_touched();
        assert!(form.is_dirty());

        service.reset_form(&mut form, FooFormInput::default());
        assert!(!form.is_dirty());
        assert!(!form.is_touched());
        assert!(form.id().is_disabled());
        assert_eq!(form.name().value(), None);
    }
}
