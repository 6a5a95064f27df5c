//! Parse entry points: YAML text (or a file) to an [`Application`] graph.

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::{MetaError, Result};
use crate::model::Application;

/// Parse YAML text into an [`Application`].
///
/// Malformed YAML surfaces as [`MetaError::Yaml`]; construction failures
/// propagate untouched as [`MetaError::Validation`].
pub fn parse(text: &str) -> Result<Application> {
    let data: Value = serde_yaml::from_str(text)?;
    let app = Application::from_value(&data)?;
    debug!(
        application = %app.name,
        models = app.models.len(),
        "parsed application model"
    );
    Ok(app)
}

/// Read the file at `path` and parse it into an [`Application`].
///
/// Unreadable files surface as [`MetaError::Io`]; everything after the read
/// behaves exactly like [`parse`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Application> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading application model");
    let text = fs::read_to_string(path).map_err(|source| MetaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}
