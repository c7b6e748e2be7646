//! yamlvet - Schema validation for YAML configuration documents.
//!
//! yamlvet takes the untyped mapping a YAML parser produces and a
//! declarative [`Schema`], and returns either a fully-checked
//! [`ValidatedConfig`] or the first violated constraint as a typed error.
//! A rule is flat: each permitted top-level key declares one type (a
//! primitive runtime kind, or a path, URL, or hostname validator), optional
//! length bounds, and an optional start-anchored pattern.
//!
//! # Modules
//!
//! - [`document`] - The untyped document type, parsing and file loading
//! - [`error`] - Error types and result aliases
//! - [`schema`] - Schemas, field rules, and declared types
//! - [`semantic`] - Path, URL, and hostname validators
//! - [`validator`] - The validation engine and its output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use yamlvet::{parse_document, validate, FieldRule, Schema};
//!
//! let schema = Schema::new()
//!     .field("listen", FieldRule::hostname())
//!     .field("workers", FieldRule::integer());
//!
//! let document = parse_document("listen: node-1.example.com\nworkers: 4", Path::new("app.yml"))?;
//! let config = validate(&document, &schema)?;
//!
//! assert_eq!(config.get("workers").and_then(|v| v.as_i64()), Some(4));
//! # Ok::<(), yamlvet::VetError>(())
//! ```
//!
//! For file-based validation, see [`validate_file`] and the integration
//! tests.

pub mod document;
pub mod error;
pub mod schema;
pub mod semantic;
pub mod validator;

// Document re-exports
pub use document::{load_document, parse_document, Document};

// Error re-exports
pub use error::{Result, VetError};

// Schema re-exports
pub use schema::{FieldRule, FieldType, LengthBounds, PrimitiveKind, Schema};

// Semantic validator re-exports
pub use semantic::{validate_hostname, validate_path, validate_url, SemanticKind};

// Validator re-exports
pub use validator::{validate, validate_file, ValidatedConfig};
