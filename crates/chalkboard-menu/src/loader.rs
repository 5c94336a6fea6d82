//! Menu document loading.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

/// Errors that can occur when loading a menu document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Menu file not found at {path}.")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Read a menu document and parse it into an untyped YAML node tree.
///
/// No schema is applied here; see [`crate::validate`] for that step.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
