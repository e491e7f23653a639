use crate::error::CoreError;
use crate::foo::NAME_MAX_LENGTH;

/// Form configuration loaded from environment variables.
///
/// Defaults match the entity's own constraints. Overrides may only tighten
/// them, so a form never accepts a record that record validation rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    name_max_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_max_length: NAME_MAX_LENGTH,
        }
    }
}

impl FormConfig {
    /// Build a config with a custom `name` bound, which must be in
    /// `1..=NAME_MAX_LENGTH`.
    pub fn with_name_max_length(name_max_length: usize) -> Result<Self, CoreError> {
        if name_max_length == 0 || name_max_length > NAME_MAX_LENGTH {
            return Err(CoreError::Config(format!(
                "name max length must be between 1 and {NAME_MAX_LENGTH}, got {name_max_length}"
            )));
        }
        Ok(Self { name_max_length })
    }

    /// Upper bound on the `name` field, in characters (default: `50`).
    pub fn name_max_length(&self) -> usize {
        self.name_max_length
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default | Allowed  |
    /// |-----------------------|---------|----------|
    /// | `FOO_NAME_MAX_LENGTH` | `50`    | `1..=50` |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        match lookup("FOO_NAME_MAX_LENGTH") {
            Some(raw) => {
                let name_max_length = raw.trim().parse().map_err(|_| {
                    CoreError::Config(format!(
                        "FOO_NAME_MAX_LENGTH must be a non-negative integer, got '{raw}'"
                    ))
                })?;
                Self::with_name_max_length(name_max_length)
            }
            None => Ok(Self::default()),
        }
    }
}
