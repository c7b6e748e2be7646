//! Error types for yamlvet operations.
//!
//! This module defines [`VetError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VetError` for validation failures that callers branch on by kind
//! - Use `anyhow::Error` (via `VetError::Other`) for unexpected errors
//! - Every message names the offending key or value so a failure can be
//!   traced back to one line of the document

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for document loading and validation.
///
/// The first eight variants are the validation taxonomy proper, one per
/// violable constraint. The remainder wrap loading and interop failures.
#[derive(Debug, Error)]
pub enum VetError {
    /// Document contains a key the schema does not declare.
    #[error("Key '{key}' is not declared in the schema")]
    MissingKey { key: String },

    /// Value's runtime kind does not match the rule's declared type.
    #[error("Value for key '{key}' has the wrong type: expected {expected}, found {found}")]
    IncorrectType {
        key: String,
        expected: String,
        found: String,
    },

    /// Value's length falls outside the rule's declared bounds.
    #[error("Value for key '{key}' has length {length}, outside declared bounds [{min}, {max}]")]
    IncorrectLength {
        key: String,
        length: usize,
        min: usize,
        max: usize,
    },

    /// The rule itself is malformed for the value it was applied to.
    #[error("Invalid rule for key '{key}': {detail}")]
    IncorrectSpecification { key: String, detail: String },

    /// String value does not match the rule's pattern at its start.
    #[error("Value '{value}' for key '{key}' does not match pattern '{pattern}'")]
    IncorrectPattern {
        key: String,
        value: String,
        pattern: String,
    },

    /// No filesystem entry exists at the named path.
    #[error("Path does not exist: {path}")]
    InvalidPath { path: String },

    /// String is not a syntactically valid URL.
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// String is not a syntactically valid DNS hostname.
    #[error("Invalid hostname: {name}")]
    InvalidHostname { name: String },

    /// Document file not found at expected location.
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// Failed to parse a document file.
    #[error("Failed to parse document at {path}: {message}")]
    DocumentParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for yamlvet operations.
pub type Result<T> = std::result::Result<T, VetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_displays_key() {
        let err = VetError::MissingKey {
            key: "stranger".into(),
        };
        assert!(err.to_string().contains("stranger"));
    }

    #[test]
    fn incorrect_type_displays_expected_and_found() {
        let err = VetError::IncorrectType {
            key: "workers".into(),
            expected: "integer".into(),
            found: "string \"four\"".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("workers"));
        assert!(msg.contains("expected integer"));
        assert!(msg.contains("four"));
    }

    #[test]
    fn incorrect_length_displays_length_and_bounds() {
        let err = VetError::IncorrectLength {
            key: "name".into(),
            length: 9,
            min: 1,
            max: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("length 9"));
        assert!(msg.contains("[1, 5]"));
    }

    #[test]
    fn incorrect_specification_displays_detail() {
        let err = VetError::IncorrectSpecification {
            key: "name".into(),
            detail: "length bounds are inverted".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("length bounds are inverted"));
    }

    #[test]
    fn incorrect_pattern_displays_value_and_pattern() {
        let err = VetError::IncorrectPattern {
            key: "mode".into(),
            value: "Fast".into(),
            pattern: "[a-z]+".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("mode"));
        assert!(msg.contains("Fast"));
        assert!(msg.contains("[a-z]+"));
    }

    #[test]
    fn invalid_path_displays_path() {
        let err = VetError::InvalidPath {
            path: "/no/such/file".into(),
        };
        assert!(err.to_string().contains("/no/such/file"));
    }

    #[test]
    fn invalid_url_displays_url() {
        let err = VetError::InvalidUrl {
            url: "h%tp://broken".into(),
        };
        assert!(err.to_string().contains("h%tp://broken"));
    }

    #[test]
    fn invalid_hostname_displays_name() {
        let err = VetError::InvalidHostname {
            name: "-bad-.example".into(),
        };
        assert!(err.to_string().contains("-bad-.example"));
    }

    #[test]
    fn document_not_found_displays_path() {
        let err = VetError::DocumentNotFound {
            path: PathBuf::from("/foo/bar.yml"),
        };
        assert!(err.to_string().contains("/foo/bar.yml"));
    }

    #[test]
    fn document_parse_error_displays_path_and_message() {
        let err = VetError::DocumentParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VetError = io_err.into();
        assert!(matches!(err, VetError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: VetError = anyhow::anyhow!("unexpected condition").into();
        assert!(matches!(err, VetError::Other(_)));
        assert_eq!(err.to_string(), "unexpected condition");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(VetError::MissingKey { key: "test".into() })
        }
        assert!(returns_error().is_err());
    }
}
