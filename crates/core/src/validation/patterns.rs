use regex::Regex;

use crate::error::{Error, Result};

/// Compiles a single regex option value.
///
/// # Errors
///
/// Returns [`Error::InvalidRegex`] carrying the regex engine's own diagnostic.
pub fn parse_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::invalid_regex(&e))
}

/// Compiles every pattern, stopping at the first one that does not compile.
///
/// # Errors
///
/// Returns [`Error::InvalidRegex`] for the first invalid pattern.
///
/// # Examples
///
/// ```rust
/// use apicheck_core::validation::validate_regex;
///
/// let compiled = validate_regex(&["^/users", "/orders/\\d+$"]).unwrap();
/// assert!(compiled[1].is_match("/orders/42"));
///
/// let error = validate_regex(&["["]).unwrap_err();
/// assert!(error.to_string().starts_with("Invalid regex: "));
/// ```
pub fn validate_regex<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| parse_regex(pattern.as_ref()))
        .collect()
}
