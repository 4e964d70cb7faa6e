//! Limits and host-derived defaults for command-line options.
//!
//! This module holds the constants the validators enforce, the helper that
//! resolves `--workers auto`, and path expansion for file-based schemas.

use std::thread::available_parallelism;

use log::debug;

/// Upper bound for the number of concurrent workers.
pub const MAX_WORKERS: usize = 64;

/// Lower bound used when resolving `--workers auto`.
pub const MIN_AUTO_WORKERS: usize = 2;

/// Returns the number of workers `--workers auto` resolves to.
///
/// The host's available parallelism, clamped to
/// [`MIN_AUTO_WORKERS`]`..=`[`MAX_WORKERS`]. Falls back to the lower bound when
/// the host cannot report its parallelism.
///
/// # Examples
///
/// ```
/// use apicheck_core::config::{get_workers_count, MAX_WORKERS, MIN_AUTO_WORKERS};
///
/// let workers = get_workers_count();
/// assert!((MIN_AUTO_WORKERS..=MAX_WORKERS).contains(&workers));
/// ```
#[must_use]
pub fn get_workers_count() -> usize {
    let detected = match available_parallelism() {
        Ok(parallelism) => parallelism.get(),
        Err(e) => {
            debug!("Unable to query available parallelism: {e}");
            MIN_AUTO_WORKERS
        }
    };

    detected.clamp(MIN_AUTO_WORKERS, MAX_WORKERS)
}

/// Expands a leading `~` in a filesystem path.
///
/// # Examples
///
/// ```
/// use apicheck_core::config::expand_path;
///
/// assert_eq!(expand_path("/absolute/openapi.json"), "/absolute/openapi.json");
/// assert!(!expand_path("~/openapi.json").starts_with('~'));
/// ```
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
