//! The parsed model graph: Application → Model → Attribute.
//!
//! Constructors walk a raw `serde_yaml::Value` tree top-down, each node
//! extracting and validating its own fields through [`Fields`]. Construction
//! is fail-fast: the first invalid field anywhere aborts the whole parse, and
//! no partial graph is ever returned. Nodes are immutable once built.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::entity::{Fields, Named};
use crate::error::Result;

/// A single typed attribute of a model.
///
/// Accepts three YAML shapes:
///
/// ```yaml
/// attributes:
///   - title                          # bare string
///   - [body, {type: text}]           # name + overrides pair
///   - {name: published, type: bool}  # long form
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    pub required: bool,
}

impl Attribute {
    pub fn from_value(value: &Value) -> Result<Self> {
        let data = Self::normalize(value);
        let fields = Fields::new("Attribute", &data);
        Ok(Self {
            name: fields.required_name()?,
            attr_type: fields.string_or("type", "string")?,
            required: fields.boolean_or("required", false)?,
        })
    }

    /// Convert the shorthand forms to the long form. Anything that is not a
    /// string, pair, or mapping normalizes to an empty mapping, so the
    /// `name` extraction reports the canonical error.
    fn normalize(value: &Value) -> Value {
        match value {
            Value::String(name) => {
                let mut data = Mapping::new();
                data.insert(Value::from("name"), Value::from(name.as_str()));
                Value::Mapping(data)
            }
            Value::Sequence(items) => {
                let mut data = Mapping::new();
                if let Some(name) = items.first() {
                    data.insert(Value::from("name"), name.clone());
                }
                // Overrides win on key collision, including `name`.
                if let Some(Value::Mapping(overrides)) = items.get(1) {
                    for (key, value) in overrides {
                        data.insert(key.clone(), value.clone());
                    }
                }
                Value::Mapping(data)
            }
            Value::Mapping(_) => value.clone(),
            _ => Value::Mapping(Mapping::new()),
        }
    }
}

impl Named for Attribute {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A domain object: a name plus its attributes in declaration order.
///
/// Attribute names are not checked for uniqueness; duplicates pass through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Model {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::new("Model", value);
        Ok(Self {
            name: fields.required_name()?,
            attributes: fields
                .sequence("attributes")?
                .iter()
                .map(Attribute::from_value)
                .collect::<Result<_>>()?,
        })
    }
}

impl Named for Model {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Root of the graph: the application and its models in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    pub name: String,
    pub models: Vec<Model>,
}

impl Application {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::new("Application", value);
        Ok(Self {
            name: fields.required_name()?,
            models: fields
                .sequence("models")?
                .iter()
                .map(Model::from_value)
                .collect::<Result<_>>()?,
        })
    }

    /// Parse an application graph from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        crate::parser::parse(text)
    }
}

impl Named for Application {
    fn name(&self) -> &str {
        &self.name
    }
}
