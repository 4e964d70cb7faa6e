//! Conversions for boolean-like flags and worker counts.

use log::debug;
use serde::Serialize;

use crate::config::{get_workers_count, MAX_WORKERS};
use crate::error::Error::{InvalidWorkers, WorkersOutOfRange};
use crate::error::Result;

const TRUTHY: [&str; 6] = ["on", "true", "yes", "y", "t", "1"];
const FALSY: [&str; 6] = ["off", "false", "no", "n", "f", "0"];

/// Keyword accepted by `--workers` to size the pool from the host.
pub const AUTO_WORKERS: &str = "auto";

/// A flag that is either a boolean or a path, such as `--tls-verify`.
///
/// `--tls-verify false` disables certificate checks, while
/// `--tls-verify /etc/ssl/ca.pem` points at a CA bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BoolOrPath {
    Bool(bool),
    Path(String),
}

/// Converts a boolean-like string.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Strings
/// that are neither truthy nor falsy are returned unchanged as a path.
///
/// # Examples
///
/// ```rust
/// use apicheck_core::validation::{convert_boolean_string, BoolOrPath};
///
/// assert_eq!(convert_boolean_string("On"), BoolOrPath::Bool(true));
/// assert_eq!(convert_boolean_string("F"), BoolOrPath::Bool(false));
/// assert_eq!(
///     convert_boolean_string("/tmp/cert.pem"),
///     BoolOrPath::Path("/tmp/cert.pem".to_string())
/// );
/// ```
#[must_use]
pub fn convert_boolean_string(value: &str) -> BoolOrPath {
    let normalized = value.trim().to_lowercase();

    if TRUTHY.contains(&normalized.as_str()) {
        BoolOrPath::Bool(true)
    } else if FALSY.contains(&normalized.as_str()) {
        BoolOrPath::Bool(false)
    } else {
        BoolOrPath::Path(value.to_string())
    }
}

/// Converts the `--workers` option.
///
/// `auto` resolves to [`get_workers_count`]; anything else must be an integer
/// between 1 and [`MAX_WORKERS`].
///
/// # Errors
///
/// Returns [`InvalidWorkers`] if the value is not an integer, and
/// [`WorkersOutOfRange`] if it is outside the accepted range.
pub fn convert_workers(value: &str) -> Result<usize> {
    if value == AUTO_WORKERS {
        let workers = get_workers_count();
        debug!("Resolved `--workers auto` to {workers}");
        return Ok(workers);
    }

    let workers: usize = value
        .parse()
        .map_err(|_| InvalidWorkers(value.to_string()))?;

    if (1..=MAX_WORKERS).contains(&workers) {
        Ok(workers)
    } else {
        Err(WorkersOutOfRange(workers))
    }
}
