//! DNS hostname validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, VetError};

/// Longest accepted hostname, in characters, after stripping one trailing
/// dot.
const MAX_HOSTNAME_LEN: usize = 253;

/// One DNS label: 1-63 alphanumerics with interior hyphens, no hyphen at
/// either edge.
static VALID_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").expect("label pattern must compile")
});

/// An entirely numeric label, which the final label must not be.
static ALL_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric pattern must compile"));

/// Check that `name` is a syntactically valid DNS hostname.
///
/// One trailing dot is tolerated (the fully-qualified form). After
/// stripping it, the name must be at most 253 characters. Every
/// dot-separated label must be 1-63 alphanumerics or hyphens with no
/// hyphen at either edge, and the final label must not be all digits
/// (which keeps dotted-quad addresses out).
///
/// Returns the input unchanged on success, trailing dot included.
///
/// # Errors
///
/// Returns `InvalidHostname` if any rule is violated.
pub fn validate_hostname(name: &str) -> Result<&str> {
    if is_valid_hostname(name) {
        Ok(name)
    } else {
        Err(VetError::InvalidHostname {
            name: name.to_string(),
        })
    }
}

fn is_valid_hostname(name: &str) -> bool {
    let stripped = name.strip_suffix('.').unwrap_or(name);
    if stripped.is_empty() || stripped.chars().count() > MAX_HOSTNAME_LEN {
        return false;
    }

    // Dotted-quad addresses are not hostnames.
    if stripped
        .split('.')
        .next_back()
        .is_some_and(|last| ALL_NUMERIC.is_match(last))
    {
        return false;
    }

    stripped.split('.').all(|label| VALID_LABEL.is_match(label))
}
