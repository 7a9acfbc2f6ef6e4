//! Syntactic URL validity check applied before a URL reaches the shortener.
//!
//! The check is deliberately loose: it accepts anything shaped like
//! `scheme://host...` or `//host...` whose host is either `localhost` or
//! contains a dot followed by at least two characters. It does not resolve
//! hosts or restrict schemes.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Optional scheme followed by `//` and a whitespace-free remainder.
static PROTOCOL_AND_REST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9_]+:)?//(\S+)$").unwrap());

static LOCALHOST_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^localhost[:?\d]*(?:[^:?\d]\S*)?$").unwrap());

static DOTTED_HOST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s.]+\.\S{2,}$").unwrap());

/// Returns `true` if `input` looks like a URL.
///
/// # Examples
///
/// ```
/// use seq_shortener::utils::url_validator::is_url;
///
/// assert!(is_url("https://example.com"));
/// assert!(is_url("http://localhost:3000/path"));
/// assert!(!is_url("example.com"));
/// assert!(!is_url("https://example"));
/// ```
pub fn is_url(input: &str) -> bool {
    let Some(rest) = PROTOCOL_AND_REST
        .captures(input)
        .and_then(|caps| caps.get(1))
    else {
        return false;
    };

    let rest = rest.as_str();
    LOCALHOST_HOST.is_match(rest) || DOTTED_HOST.is_match(rest)
}

/// `validator` adapter for [`is_url`].
pub fn validate_url(value: &str) -> Result<(), ValidationError> {
    if is_url(value) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Invalid URL".into()))
    }
}
