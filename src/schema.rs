//! Schema definitions: the per-field rules a document is validated against.
//!
//! A [`Schema`] maps each permitted document key to one flat [`FieldRule`].
//! A rule declares a required [`FieldType`] plus optional length bounds and
//! an optional start-anchored pattern. Schemas are built in code:
//!
//! ```
//! use regex::Regex;
//! use yamlvet::{FieldRule, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", FieldRule::string().length(1, 64))
//!     .field("pidfile", FieldRule::path())
//!     .field("endpoint", FieldRule::url())
//!     .field("mode", FieldRule::string().pattern(Regex::new("[a-z]+").unwrap()));
//! assert_eq!(schema.len(), 4);
//! ```
//!
//! Declared fields are implicitly optional: a document may omit any of
//! them. The asymmetry runs the other way, a document may not introduce
//! keys the schema does not declare.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::semantic::SemanticKind;

/// The declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A built-in runtime kind, checked against the value itself.
    Primitive(PrimitiveKind),
    /// A semantic validator, applied to the value's raw string.
    Semantic(SemanticKind),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(kind) => kind.fmt(f),
            FieldType::Semantic(kind) => kind.fmt(f),
        }
    }
}

/// The primitive runtime kinds a field may declare.
///
/// Booleans and integers are distinct kinds: a boolean value never
/// satisfies an `Integer` rule and vice versa. There is no float kind, and
/// floating-point values satisfy no primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Integer,
    Boolean,
    Mapping,
    Sequence,
}

impl PrimitiveKind {
    /// Whether a value's runtime kind matches this primitive.
    pub fn matches(&self, value: &serde_yaml::Value) -> bool {
        use serde_yaml::Value;
        match self {
            PrimitiveKind::String => value.is_string(),
            PrimitiveKind::Integer => {
                matches!(value, Value::Number(n) if n.is_i64() || n.is_u64())
            }
            PrimitiveKind::Boolean => value.is_bool(),
            PrimitiveKind::Mapping => value.is_mapping(),
            PrimitiveKind::Sequence => value.is_sequence(),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Mapping => "mapping",
            PrimitiveKind::Sequence => "sequence",
        };
        write!(f, "{name}")
    }
}

/// Inclusive length bounds for strings (characters), sequences, and
/// mappings (elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Minimum length, inclusive.
    pub min: usize,
    /// Maximum length, inclusive. A rule with `min > max` is reported as a
    /// specification error at validation time.
    pub max: usize,
}

/// The validation rule for one schema field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Declared type, checked first.
    pub field_type: FieldType,
    /// Optional length bounds, checked second.
    pub length: Option<LengthBounds>,
    /// Optional start-anchored pattern, checked last.
    pub pattern: Option<Regex>,
}

impl FieldRule {
    /// Create a rule with the given declared type and no other constraints.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            length: None,
            pattern: None,
        }
    }

    /// A rule declaring a string field.
    pub fn string() -> Self {
        Self::new(FieldType::Primitive(PrimitiveKind::String))
    }

    /// A rule declaring an integer field.
    pub fn integer() -> Self {
        Self::new(FieldType::Primitive(PrimitiveKind::Integer))
    }

    /// A rule declaring a boolean field.
    pub fn boolean() -> Self {
        Self::new(FieldType::Primitive(PrimitiveKind::Boolean))
    }

    /// A rule declaring a nested mapping field.
    pub fn mapping() -> Self {
        Self::new(FieldType::Primitive(PrimitiveKind::Mapping))
    }

    /// A rule declaring a sequence field.
    pub fn sequence() -> Self {
        Self::new(FieldType::Primitive(PrimitiveKind::Sequence))
    }

    /// A rule declaring an existing filesystem path.
    pub fn path() -> Self {
        Self::new(FieldType::Semantic(SemanticKind::Path))
    }

    /// A rule declaring a syntactically valid URL.
    pub fn url() -> Self {
        Self::new(FieldType::Semantic(SemanticKind::Url))
    }

    /// A rule declaring a syntactically valid DNS hostname.
    pub fn hostname() -> Self {
        Self::new(FieldType::Semantic(SemanticKind::Hostname))
    }

    /// Constrain the value's length to `min..=max`.
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.length = Some(LengthBounds { min, max });
        self
    }

    /// Constrain string values to match `pattern` at their start.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// A validation schema: one [`FieldRule`] per permitted document key.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: HashMap<String, FieldRule>,
}

impl Schema {
    /// Create an empty schema, which accepts only empty documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, consuming and returning the schema for chaining.
    /// Redeclaring a field replaces its rule.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(name.into(), rule);
        self
    }

    /// Look up the rule for a field.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Whether the schema declares a field.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
