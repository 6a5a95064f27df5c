//! Error taxonomy for model parsing.
//!
//! Three kinds, mirroring the three ways a parse can fail:
//! - `Validation` — a required field is missing or mistyped during entity
//!   construction
//! - `Yaml` — the document is not well-formed YAML
//! - `Io` — the model file could not be read

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetaError>;

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl MetaError {
    /// Build the canonical field-validation error for an entity field.
    ///
    /// `display_name` is the entity's own `name` from the raw input, when it
    /// carried one — it disambiguates which of several siblings failed.
    pub fn expected(
        expected: &'static str,
        entity: &'static str,
        field: &str,
        display_name: Option<String>,
    ) -> Self {
        MetaError::Validation(ValidationError {
            expected,
            entity,
            field: field.to_string(),
            display_name,
        })
    }
}

/// A required field was missing or had the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Expected scalar kind, e.g. `"string"`.
    pub expected: &'static str,
    /// Owning entity type, e.g. `"Attribute"`.
    pub entity: &'static str,
    /// Field key that failed.
    pub field: String,
    /// The entity's `name`, when the raw input carried one.
    pub display_name: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected a {} for {}#{}",
            self.expected, self.entity, self.field
        )?;
        if let Some(name) = &self.display_name {
            write!(f, " (\"{name}\")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_entity_and_field() {
        let err = MetaError::expected("string", "Attribute", "name", None);
        assert_eq!(err.to_string(), "expected a string for Attribute#name");
    }

    #[test]
    fn validation_message_includes_display_name_when_known() {
        let err = MetaError::expected("boolean", "Attribute", "required", Some("body".into()));
        assert_eq!(
            err.to_string(),
            "expected a boolean for Attribute#required (\"body\")"
        );
    }
}
