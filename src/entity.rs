//! Shared behavior for model-graph nodes.
//!
//! Every node type extracts its fields through [`Fields`], which gives all
//! of them uniform, context-rich validation errors, and exposes its derived
//! names through [`Named`]. Adding a new scalar kind means one new accessor
//! here, not per-node validation code.

use serde_yaml::Value;

use crate::error::{MetaError, Result};
use crate::lexical;

const EMPTY_SEQ: &[Value] = &[];

/// Typed field access over a raw YAML value, on behalf of one entity.
///
/// Defaults apply only when a key is absent or null; a present value of the
/// wrong type is always a validation error naming the entity and field.
pub struct Fields<'a> {
    entity: &'static str,
    data: &'a Value,
}

impl<'a> Fields<'a> {
    pub fn new(entity: &'static str, data: &'a Value) -> Self {
        Self { entity, data }
    }

    /// The entity's own `name` from the raw input, used to disambiguate
    /// error messages. Only a string-typed name is usable here.
    fn display_name(&self) -> Option<String> {
        self.data
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn error(&self, expected: &'static str, field: &str) -> MetaError {
        MetaError::expected(expected, self.entity, field, self.display_name())
    }

    /// One extractor for the whole scalar-accessor family.
    fn scalar<T>(
        &self,
        key: &str,
        expected: &'static str,
        project: impl Fn(&Value) -> Option<T>,
        default: Option<T>,
    ) -> Result<T> {
        match self.data.get(key) {
            None | Some(Value::Null) => default.ok_or_else(|| self.error(expected, key)),
            Some(value) => project(value).ok_or_else(|| self.error(expected, key)),
        }
    }

    pub fn string(&self, key: &str) -> Result<String> {
        self.scalar(key, "string", |v| v.as_str().map(str::to_string), None)
    }

    pub fn string_or(&self, key: &str, default: &str) -> Result<String> {
        self.scalar(
            key,
            "string",
            |v| v.as_str().map(str::to_string),
            Some(default.to_string()),
        )
    }

    pub fn boolean(&self, key: &str) -> Result<bool> {
        self.scalar(key, "boolean", Value::as_bool, None)
    }

    pub fn boolean_or(&self, key: &str, default: bool) -> Result<bool> {
        self.scalar(key, "boolean", Value::as_bool, Some(default))
    }

    pub fn number(&self, key: &str) -> Result<f64> {
        self.scalar(key, "number", Value::as_f64, None)
    }

    pub fn number_or(&self, key: &str, default: f64) -> Result<f64> {
        self.scalar(key, "number", Value::as_f64, Some(default))
    }

    /// The entity's required `name`. Constructed entities never carry an
    /// empty name, so an empty string fails like a missing one.
    pub fn required_name(&self) -> Result<String> {
        let name = self.string("name")?;
        if name.is_empty() {
            return Err(self.error("string", "name"));
        }
        Ok(name)
    }

    /// A child sequence, empty when the key is absent or null.
    pub fn sequence(&self, key: &str) -> Result<&'a [Value]> {
        match self.data.get(key) {
            None | Some(Value::Null) => Ok(EMPTY_SEQ),
            Some(Value::Sequence(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.error("sequence", key)),
        }
    }
}

/// Derived naming conventions shared by every graph node.
///
/// All four forms are pure functions of `name`, recomputed per call — they
/// are cheap and not on any hot path.
pub trait Named {
    fn name(&self) -> &str;

    /// Capitalized singular form: `fooBar` → `FooBar`.
    fn singular(&self) -> String {
        lexical::capitalize(self.name())
    }

    /// Capitalized plural form: `fooBar` → `FooBars`.
    fn plural(&self) -> String {
        lexical::pluralize(&self.singular())
    }

    /// Snake-case form: `fooBar` → `foo_bar`.
    fn underscore(&self) -> String {
        lexical::underscore(self.name())
    }

    /// Snake-case plural form: `fooBar` → `foo_bars`.
    fn underscore_plural(&self) -> String {
        lexical::pluralize(&self.underscore())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    struct Plain(&'static str);

    impl Named for Plain {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn named_derives_camel_case_forms() {
        let entity = Plain("fooBar");
        assert_eq!(entity.singular(), "FooBar");
        assert_eq!(entity.plural(), "FooBars");
    }

    #[test]
    fn named_derives_underscore_forms() {
        let entity = Plain("fooBar");
        assert_eq!(entity.underscore(), "foo_bar");
        assert_eq!(entity.underscore_plural(), "foo_bars");
    }

    #[test]
    fn string_reads_a_present_string() {
        let data = yaml("name: title");
        assert_eq!(Fields::new("Attribute", &data).string("name").unwrap(), "title");
    }

    #[test]
    fn string_without_default_fails_when_absent() {
        let data = yaml("{}");
        let err = Fields::new("Model", &data).string("name").unwrap_err();
        assert_eq!(err.to_string(), "expected a string for Model#name");
    }

    #[test]
    fn error_carries_the_entity_name_when_present() {
        let data = yaml("name: body\nrequired: soon");
        let err = Fields::new("Attribute", &data).boolean("required").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a boolean for Attribute#required (\"body\")"
        );
    }

    #[test]
    fn defaults_cover_absent_and_null_keys() {
        let fields_absent = yaml("{}");
        let fields = Fields::new("Attribute", &fields_absent);
        assert_eq!(fields.string_or("type", "string").unwrap(), "string");
        assert!(!fields.boolean_or("required", false).unwrap());

        let fields_null = yaml("type:\nrequired:\n");
        let fields = Fields::new("Attribute", &fields_null);
        assert_eq!(fields.string_or("type", "string").unwrap(), "string");
        assert!(!fields.boolean_or("required", false).unwrap());
    }

    #[test]
    fn defaults_do_not_mask_wrong_types() {
        let data = yaml("type: 42");
        let err = Fields::new("Attribute", &data)
            .string_or("type", "string")
            .unwrap_err();
        assert_eq!(err.to_string(), "expected a string for Attribute#type");
    }

    #[test]
    fn number_follows_the_same_contract() {
        let data = yaml("weight: 2.5");
        let fields = Fields::new("Model", &data);
        assert_eq!(fields.number("weight").unwrap(), 2.5);
        assert_eq!(fields.number_or("rank", 1.0).unwrap(), 1.0);
        assert!(fields.number("missing").is_err());
    }

    #[test]
    fn required_name_rejects_empty_strings() {
        let data = yaml("name: \"\"");
        assert!(Fields::new("Model", &data).required_name().is_err());
    }

    #[test]
    fn sequence_is_empty_when_absent_and_strict_when_mistyped() {
        let absent = yaml("name: Blog");
        assert!(Fields::new("Application", &absent)
            .sequence("models")
            .unwrap()
            .is_empty());

        let mistyped = yaml("name: Blog\nmodels: nope");
        let err = Fields::new("Application", &mistyped)
            .sequence("models")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a sequence for Application#models (\"Blog\")"
        );
    }
}
