//! Document loading and parsing.
//!
//! The validation engine works on an already-parsed [`Document`]: the
//! ordered mapping a YAML parser produces. This module turns YAML text or
//! a file on disk into one.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Result, VetError};

/// An untyped configuration document: keys mapped to raw YAML values, in
/// source order.
pub type Document = serde_yaml::Mapping;

/// Parse YAML content into a [`Document`].
///
/// An empty or all-comment input parses to an empty document. Any other
/// non-mapping top level is rejected: the engine validates key-value
/// documents only.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source` - Path for error reporting
///
/// # Errors
///
/// Returns `DocumentParseError` if the YAML is invalid or its top level is
/// not a mapping.
pub fn parse_document(content: &str, source: &Path) -> Result<Document> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| VetError::DocumentParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Document::new()),
        other => Err(VetError::DocumentParseError {
            path: source.to_path_buf(),
            message: format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            ),
        }),
    }
}

/// Load a document from a YAML file.
///
/// # Errors
///
/// Returns `DocumentNotFound` if the file doesn't exist.
/// Returns `DocumentParseError` if its contents are invalid.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VetError::DocumentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VetError::Io(e)
        }
    })?;

    let document = parse_document(&content, path)?;
    tracing::debug!(
        "loaded document with {} keys from {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

/// The YAML-level kind of a value, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Compact rendering of a value for error messages: its kind plus, for
/// scalars, the value itself.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) if n.is_f64() => format!("float `{n}`"),
        Value::Number(n) => format!("integer `{n}`"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Sequence(items) => format!("sequence with {} elements", items.len()),
        Value::Mapping(entries) => format!("mapping with {} entries", entries.len()),
        Value::Tagged(_) => "tagged value".to_string(),
    }
}
