//! Filesystem path validation.

use std::fs;
use std::path::Path;

use crate::error::{Result, VetError};

/// Check that `name` denotes an existing filesystem entry.
///
/// The probe does not follow symbolic links: a dangling symlink still
/// counts as existing, because the link itself is the entry. No
/// distinction is made between absence and an unreadable parent; either
/// way the path is reported as not existing.
///
/// # Errors
///
/// Returns `InvalidPath` if no entry exists at `name`.
pub fn validate_path(name: &str) -> Result<&str> {
    if fs::symlink_metadata(Path::new(name)).is_ok() {
        Ok(name)
    } else {
        Err(VetError::InvalidPath {
            path: name.to_string(),
        })
    }
}
