use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error::InvalidRateLimit;
use crate::error::Result;

// `<limit>/<interval>`, where the interval is a count, a unit, or a count followed by a unit.
// Counts are positive; leading zeros are allowed.
static RATE_LIMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0*[1-9][0-9]*/(?:0*[1-9][0-9]*[smhd]?|[smhd])$").expect("rate limit pattern is valid")
});

/// Validates the `--rate-limit` option and returns it unchanged.
///
/// Turning the value into an actual throttle is left to the caller.
///
/// # Errors
///
/// Returns [`InvalidRateLimit`] unless the value looks like `10/m`, `100/2s`
/// or `5/30`.
///
/// # Examples
///
/// ```rust
/// use apicheck_core::validation::validate_rate_limit;
///
/// assert_eq!(validate_rate_limit("10/m").unwrap(), "10/m");
/// assert!(validate_rate_limit("1/g").is_err());
/// ```
pub fn validate_rate_limit(value: &str) -> Result<String> {
    if RATE_LIMIT.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(InvalidRateLimit(value.to_string()))
    }
}
