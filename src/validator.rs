//! The validation engine.
//!
//! This module enforces a [`Schema`] over a [`Document`] in a fixed order:
//! - Every document key must be declared by the schema
//! - Per key, in document order: declared type, then length, then pattern
//!
//! The first violated constraint aborts the whole call; there is no error
//! aggregation and no partial result. On success every key-value pair is
//! carried, untouched, into a [`ValidatedConfig`].

use std::ops::Index;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use crate::document::{describe, load_document, Document};
use crate::error::{Result, VetError};
use crate::schema::{FieldRule, FieldType, LengthBounds, Schema};

/// A validated configuration: the pass-gated copy of a document.
///
/// Keys are normalized to strings; values are the document's own,
/// uncoerced. A field validated as a URL still holds its raw string, and
/// iteration yields pairs in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig {
    values: Document,
}

impl ValidatedConfig {
    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether the configuration contains a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the configuration has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().filter_map(Value::as_str)
    }

    /// Iterate key-value pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .filter_map(|(key, value)| key.as_str().map(|k| (k, value)))
    }

    /// Borrow the underlying mapping, e.g. to validate it again.
    pub fn as_mapping(&self) -> &Document {
        &self.values
    }

    /// Consume the configuration, returning the underlying mapping.
    pub fn into_mapping(self) -> Document {
        self.values
    }
}

impl Index<&str> for ValidatedConfig {
    type Output = Value;

    /// Panics if the key is absent, like the standard map indexers.
    fn index(&self, key: &str) -> &Value {
        self.get(key).expect("no entry found for key")
    }
}

/// Validate a document against a schema.
///
/// Two passes run over the document, in its own key order:
/// 1. a presence pass resolves every key to its rule, so a key the schema
///    does not declare is reported before any value is examined;
/// 2. a check pass applies each key's rule: declared type, then length
///    bounds, then pattern.
///
/// Schema fields absent from the document are not an error; only the
/// document is barred from introducing unknown keys.
///
/// # Errors
///
/// Returns the taxonomy error for the first violated constraint:
/// `MissingKey`, `IncorrectType`, `IncorrectLength`, `IncorrectPattern`,
/// `IncorrectSpecification` for a malformed rule, or a semantic validator's
/// `InvalidPath`, `InvalidUrl`, or `InvalidHostname`.
pub fn validate(document: &Document, schema: &Schema) -> Result<ValidatedConfig> {
    let mut entries: Vec<(String, &Value, &FieldRule)> = Vec::with_capacity(document.len());
    for (key, value) in document {
        let name = key_text(key);
        let rule = schema
            .rule(&name)
            .ok_or_else(|| VetError::MissingKey { key: name.clone() })?;
        entries.push((name, value, rule));
    }

    for (name, value, rule) in &entries {
        check_type(name, value, rule)?;
        check_length(name, value, rule)?;
        check_pattern(name, value, rule)?;
    }

    let mut values = Document::new();
    for (name, value, _) in entries {
        values.insert(Value::String(name), value.clone());
    }
    tracing::debug!("document passed validation with {} keys", values.len());
    Ok(ValidatedConfig { values })
}

/// Load a YAML file and validate it against a schema in one step.
///
/// # Errors
///
/// Returns `DocumentNotFound` or `DocumentParseError` if loading fails,
/// otherwise whatever [`validate`] returns.
pub fn validate_file(path: &Path, schema: &Schema) -> Result<ValidatedConfig> {
    let document = load_document(path)?;
    validate(&document, schema)
}

/// Render a mapping key as the string the schema and the validated
/// configuration know it by. Scalar keys keep their YAML spelling.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

fn check_type(key: &str, value: &Value, rule: &FieldRule) -> Result<()> {
    match rule.field_type {
        FieldType::Semantic(kind) => kind.check(value),
        FieldType::Primitive(kind) => {
            if kind.matches(value) {
                Ok(())
            } else {
                Err(VetError::IncorrectType {
                    key: key.to_string(),
                    expected: kind.to_string(),
                    found: describe(value),
                })
            }
        }
    }
}

fn check_length(key: &str, value: &Value, rule: &FieldRule) -> Result<()> {
    let Some(LengthBounds { min, max }) = rule.length else {
        return Ok(());
    };

    // A malformed rule is reported before the value is measured.
    if min > max {
        return Err(VetError::IncorrectSpecification {
            key: key.to_string(),
            detail: format!("length bounds are inverted (min {min} > max {max})"),
        });
    }

    let length = measure(value).ok_or_else(|| VetError::IncorrectSpecification {
        key: key.to_string(),
        detail: format!(
            "length bounds declared for a value with no length ({})",
            describe(value)
        ),
    })?;

    if length < min || length > max {
        return Err(VetError::IncorrectLength {
            key: key.to_string(),
            length,
            min,
            max,
        });
    }
    Ok(())
}

fn check_pattern(key: &str, value: &Value, rule: &FieldRule) -> Result<()> {
    let Some(pattern) = &rule.pattern else {
        return Ok(());
    };

    let Some(text) = value.as_str() else {
        return Err(VetError::IncorrectSpecification {
            key: key.to_string(),
            detail: format!("pattern declared for a non-string value ({})", describe(value)),
        });
    };

    // Anchored at the start: the leftmost match must begin at the first
    // character, so rules need no explicit `^`.
    if pattern.find(text).is_some_and(|m| m.start() == 0) {
        Ok(())
    } else {
        Err(VetError::IncorrectPattern {
            key: key.to_string(),
            value: text.to_string(),
            pattern: pattern.as_str().to_string(),
        })
    }
}

/// The measurable length of a value: characters for strings, elements for
/// sequences and mappings. Other kinds have none.
fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Sequence(items) => Some(items.len()),
        Value::Mapping(entries) => Some(entries.len()),
        _ => None,
    }
}
