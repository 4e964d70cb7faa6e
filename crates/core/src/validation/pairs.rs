//! `KEY:VALUE` style options: `--auth` and `--header`.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::encoding::is_latin_1_encodable;
use crate::error::Error::{
    AuthHeaderConflict, EmptyHeaderName, InvalidHeaderCharacters, KeyValueFormat, NotLatin1,
};
use crate::error::Result;

/// Header name that `--auth` would otherwise set.
const AUTHORIZATION_HEADER: &str = "Authorization";

/// Validated headers, in the order they were given on the command line.
pub type Headers = IndexMap<String, String>;

/// A validated `user:password` pair for HTTP basic auth.
///
/// Only the username is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Runs `parse` and replaces any error it returns with the canonical
/// `Expected KEY:VALUE format` error for `raw_value`.
///
/// # Errors
///
/// Returns [`KeyValueFormat`] if `parse` fails.
///
/// # Examples
///
/// ```rust
/// use apicheck_core::validation::reraise_format_error;
///
/// let result = reraise_format_error("bla", || "bla".split_once(':').ok_or(()));
/// assert_eq!(
///     result.unwrap_err().to_string(),
///     "Expected KEY:VALUE format, received bla."
/// );
/// ```
pub fn reraise_format_error<T, E, F>(raw_value: &str, parse: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, E>,
{
    parse().map_err(|_| KeyValueFormat(raw_value.to_string()))
}

/// Validates the `--auth` option.
///
/// # Errors
///
/// Returns [`KeyValueFormat`] unless the value contains exactly one `:`, and
/// [`NotLatin1`] if either part cannot be encoded as Latin-1.
pub fn validate_auth(value: &str) -> Result<Credentials> {
    let (username, password) = reraise_format_error(value, || split_exactly_once(value))?;

    if !is_latin_1_encodable(username) {
        return Err(NotLatin1("Username"));
    }
    if !is_latin_1_encodable(password) {
        return Err(NotLatin1("Password"));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn split_exactly_once(value: &str) -> std::result::Result<(&str, &str), ()> {
    match value.split_once(':') {
        Some((left, right)) if !right.contains(':') => Ok((left, right)),
        _ => Err(()),
    }
}

/// Validates a single `--header` entry and returns its trimmed name and value.
///
/// The entry is split on the first `:`. Surrounding whitespace is removed from
/// the name and leading whitespace from the value.
///
/// # Errors
///
/// Returns an error if:
/// - The entry has no `:` ([`KeyValueFormat`])
/// - The name is blank ([`EmptyHeaderName`])
/// - The name or value cannot be encoded as Latin-1 ([`NotLatin1`])
/// - The name or value contains a carriage return or line feed
///   ([`InvalidHeaderCharacters`])
pub fn validate_header(entry: &str) -> Result<(String, String)> {
    let (key, value) = reraise_format_error(entry, || entry.split_once(':').ok_or(()))?;
    let key = key.trim();
    let value = value.trim_start();

    if key.is_empty() {
        return Err(EmptyHeaderName);
    }
    if !is_latin_1_encodable(key) {
        return Err(NotLatin1("Header name"));
    }
    if !is_latin_1_encodable(value) {
        return Err(NotLatin1("Header value"));
    }
    if has_line_break(key) || has_line_break(value) {
        return Err(InvalidHeaderCharacters);
    }

    Ok((key.to_string(), value.to_string()))
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\r', '\n'])
}

/// Validates every `--header` entry and collects them into [`Headers`].
///
/// A header repeated later on the command line replaces the earlier value.
///
/// # Errors
///
/// Returns the error of the first entry rejected by [`validate_header`].
pub fn validate_headers<S: AsRef<str>>(entries: &[S]) -> Result<Headers> {
    let mut headers = Headers::with_capacity(entries.len());

    for entry in entries {
        let (key, value) = validate_header(entry.as_ref())?;
        if let Some(previous) = headers.insert(key, value) {
            debug!("Header value `{previous}` was overridden by a later entry");
        }
    }

    Ok(headers)
}

/// Rejects an `--auth` option combined with an explicit `Authorization` header.
///
/// # Errors
///
/// Returns [`AuthHeaderConflict`] if both are present.
pub fn validate_auth_overlap(auth: Option<&Credentials>, headers: &Headers) -> Result<()> {
    let has_authorization_header = headers
        .keys()
        .any(|name| name.eq_ignore_ascii_case(AUTHORIZATION_HEADER));

    if auth.is_some() && has_authorization_header {
        return Err(AuthHeaderConflict);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_reraise_format_error() {
        let result: Result<()> = reraise_format_error("bla", || Err("unpack failed"));
        let error = result.unwrap_err();
        assert_eq!(error, Error::KeyValueFormat("bla".to_string()));
        assert_eq!(error.to_string(), "Expected KEY:VALUE format, received bla.");
    }

    #[test]
    fn test_reraise_format_error_passes_success_through() {
        let result = reraise_format_error("a:b", || "a:b".split_once(':').ok_or(()));
        assert_eq!(result.unwrap(), ("a", "b"));
    }

    #[test]
    fn test_auth_valid() {
        let credentials = validate_auth("user:pass").unwrap();
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password, "pass");
    }

    #[test]
    fn test_auth_empty_parts_are_allowed() {
        let credentials = validate_auth(":").unwrap();
        assert_eq!(credentials.username, "");
        assert_eq!(credentials.password, "");
    }

    #[test]
    fn test_auth_wrong_colon_count() {
        for value in ["", "user", "user:pass:extra", "::"] {
            assert_eq!(
                validate_auth(value),
                Err(Error::KeyValueFormat(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_auth_non_latin1() {
        assert_eq!(validate_auth("Ā:0"), Err(Error::NotLatin1("Username")));
        assert_eq!(validate_auth("0:Ā"), Err(Error::NotLatin1("Password")));
    }

    #[test]
    fn test_header_trims_name_and_value() {
        let (key, value) = validate_header("  X-Token :  abc ").unwrap();
        assert_eq!(key, "X-Token");
        assert_eq!(value, "abc ");
    }

    #[test]
    fn test_header_value_may_contain_colons() {
        let (key, value) = validate_header("Location:http://example.com").unwrap();
        assert_eq!(key, "Location");
        assert_eq!(value, "http://example.com");
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(
            validate_header("no-colon"),
            Err(Error::KeyValueFormat("no-colon".to_string()))
        );
        assert_eq!(validate_header(":"), Err(Error::EmptyHeaderName));
        assert_eq!(validate_header(" :test"), Err(Error::EmptyHeaderName));
        assert_eq!(validate_header("Ā:0"), Err(Error::NotLatin1("Header name")));
        assert_eq!(validate_header("0:Ā"), Err(Error::NotLatin1("Header value")));
        assert_eq!(
            validate_header("X-Token:abc\r\nInjected: yes"),
            Err(Error::InvalidHeaderCharacters)
        );
    }

    #[test]
    fn test_headers_keep_order_and_last_duplicate_wins() {
        let entries = ["B:1", "A:2", "B:3"];
        let headers = validate_headers(&entries).unwrap();
        let collected: Vec<(&str, &str)> = headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(collected, vec![("B", "3"), ("A", "2")]);
    }

    #[test]
    fn test_headers_fail_on_first_bad_entry() {
        let entries = vec!["A:1".to_string(), ":".to_string(), "Ā:0".to_string()];
        assert_eq!(validate_headers(&entries), Err(Error::EmptyHeaderName));
    }

    #[test]
    fn test_headers_report_only_the_first_failure() {
        let error = validate_headers(&[":", "Ā:0"]).unwrap_err();
        assert_eq!(error, Error::EmptyHeaderName);
        assert_eq!(error.to_string(), "Header name should not be empty.");
    }

    #[test]
    fn test_headers_empty() {
        let entries: [&str; 0] = [];
        assert!(validate_headers(&entries).unwrap().is_empty());
    }

    #[test]
    fn test_auth_overlap() {
        let credentials = validate_auth("user:pass").unwrap();
        let with_authorization = validate_headers(&["authorization: Bearer x"]).unwrap();
        let without_authorization = validate_headers(&["X-Token: x"]).unwrap();

        assert_eq!(
            validate_auth_overlap(Some(&credentials), &with_authorization),
            Err(Error::AuthHeaderConflict)
        );
        assert!(validate_auth_overlap(Some(&credentials), &without_authorization).is_ok());
        assert!(validate_auth_overlap(None, &with_authorization).is_ok());
    }
}
