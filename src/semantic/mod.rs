//! Semantic type validators.
//!
//! Beyond the primitive runtime kinds, a schema field may declare one of
//! three semantic types:
//! - Filesystem path existence in [`path`]
//! - URL syntax in [`url`]
//! - DNS hostname syntax in [`hostname`]
//!
//! Each validator is a stateless check of a raw string. The engine
//! dispatches to one when a field declares the corresponding
//! [`SemanticKind`], and each is callable on its own. On success each
//! returns the input unchanged, so a validated value is always the
//! document's own.

pub mod hostname;
pub mod path;
pub mod url;

// Validator re-exports
pub use hostname::validate_hostname;
pub use path::validate_path;
pub use url::validate_url;

use std::fmt;

use serde_yaml::Value;

use crate::document::describe;
use crate::error::{Result, VetError};

/// The semantic validators a schema field may declare as its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticKind {
    /// An existing filesystem entry (file, directory, or symlink).
    Path,
    /// A syntactically valid URL.
    Url,
    /// A syntactically valid DNS hostname.
    Hostname,
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticKind::Path => write!(f, "path"),
            SemanticKind::Url => write!(f, "url"),
            SemanticKind::Hostname => write!(f, "hostname"),
        }
    }
}

impl SemanticKind {
    /// Run this kind's validator over a field value.
    ///
    /// Semantic types authorize raw strings only. A non-string value fails
    /// with the kind's own error rather than a generic type error, and the
    /// filesystem is never consulted for it.
    pub(crate) fn check(&self, value: &Value) -> Result<()> {
        let Some(raw) = value.as_str() else {
            return Err(self.rejection(&describe(value)));
        };
        match self {
            SemanticKind::Path => validate_path(raw).map(|_| ()),
            SemanticKind::Url => validate_url(raw).map(|_| ()),
            SemanticKind::Hostname => validate_hostname(raw).map(|_| ()),
        }
    }

    fn rejection(&self, value: &str) -> VetError {
        match self {
            SemanticKind::Path => VetError::InvalidPath {
                path: value.to_string(),
            },
            SemanticKind::Url => VetError::InvalidUrl {
                url: value.to_string(),
            },
            SemanticKind::Hostname => VetError::InvalidHostname {
                name: value.to_string(),
            },
        }
    }
}
