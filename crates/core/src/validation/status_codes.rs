use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static STATUS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-5][0-9]{2}$").expect("status code pattern is valid"));
static STATUS_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[2-5]xx$").expect("status range pattern is valid"));

fn is_valid_status_code(code: &str) -> bool {
    STATUS_CODE.is_match(code) || STATUS_RANGE.is_match(code)
}

/// Validates a list of expected status codes.
///
/// Each entry is either an exact code between `100` and `599` or a whole
/// class written as `2xx` through `5xx`. `None` and an empty list are returned
/// as they are. Valid input is returned unchanged, including its order and
/// duplicates.
///
/// # Errors
///
/// Returns [`Error::InvalidStatusCodes`] listing every invalid entry in input
/// order.
///
/// # Examples
///
/// ```rust
/// use apicheck_core::validation::convert_status_codes;
///
/// let codes = vec!["200".to_string(), "4xx".to_string()];
/// assert_eq!(convert_status_codes(Some(codes.clone())).unwrap(), Some(codes));
///
/// let error = convert_status_codes(Some(vec!["200".to_string(), "600".to_string()])).unwrap_err();
/// assert_eq!(error.to_string(), "Invalid status code(s): 600");
///
/// assert_eq!(convert_status_codes(None).unwrap(), None);
/// ```
pub fn convert_status_codes(codes: Option<Vec<String>>) -> Result<Option<Vec<String>>> {
    let Some(codes) = codes else {
        return Ok(None);
    };

    let invalid: Vec<&String> = codes
        .iter()
        .filter(|code| !is_valid_status_code(code))
        .collect();

    if !invalid.is_empty() {
        return Err(Error::invalid_status_codes(invalid.into_iter().cloned()));
    }

    Ok(Some(codes))
}
