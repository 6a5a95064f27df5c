//! app-meta: application model metadata for code generation
//!
//! Parses a YAML document describing an application's domain model — named
//! models composed of named, typed attributes — into a strict, immutable
//! object graph with derived naming conventions (singular, plural,
//! underscore forms). Downstream generators consume the graph; this crate
//! only normalizes and validates it:
//!
//! - Lexical transforms (capitalize, pluralize, underscore)
//! - Shared field-extraction contract with uniform validation errors
//! - Attribute shorthand normalization (bare string, `[name, overrides]`
//!   pair, long-form mapping)
//! - Fail-fast top-down construction: Application → Model → Attribute
//!
//! ```
//! use app_meta::{parse, Named};
//!
//! let app = parse("name: Blog\nmodels:\n  - name: Post\n    attributes: [title]\n").unwrap();
//! assert_eq!(app.models[0].plural(), "Posts");
//! ```

pub mod entity;
pub mod error;
pub mod lexical;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use entity::{Fields, Named};
pub use error::{MetaError, Result, ValidationError};
pub use model::{Application, Attribute, Model};
pub use parser::{load_file, parse};
