//! Schema locator and base URL validation.

use log::debug;
use serde::Serialize;
use url::Url;

use crate::config::expand_path;
use crate::error::Error::{InvalidBaseUrl, InvalidSchema, MissingBaseUrl};
use crate::error::Result;

const SCHEME_SEPARATOR: &str = "://";
const NETWORK_PATH_PREFIX: &str = "//";

/// Where the API schema is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum SchemaLocation {
    /// A network locator such as `https://example.com/openapi.json`.
    Url(String),
    /// A local file, with any leading `~` expanded.
    Path(String),
}

impl SchemaLocation {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(location) | Self::Path(location) => location,
        }
    }
}

/// Validates the `SCHEMA` argument against the accompanying `--base-url`.
///
/// A value containing a single `://` is a network locator and is accepted
/// whether or not a base URL is present. Anything else is a local path, which
/// can only be resolved with a base URL.
///
/// # Errors
///
/// Returns [`InvalidSchema`] if the value is empty, contains a NUL byte, has
/// more than one scheme separator, does not parse as a URL, is an `http(s)` URL
/// without a host, or is a scheme-less network path such as `//host`.
///
/// Returns [`MissingBaseUrl`] if the value is a path and no base URL is given.
///
/// # Examples
///
/// ```rust
/// use apicheck_core::validation::{validate_schema, SchemaLocation};
///
/// let location = validate_schema("https://example.com/openapi.json", None).unwrap();
/// assert_eq!(location, SchemaLocation::Url("https://example.com/openapi.json".to_string()));
///
/// assert!(validate_schema("openapi.json", None).is_err());
/// assert!(validate_schema("openapi.json", Some("http://127.0.0.1:8080")).is_ok());
/// ```
pub fn validate_schema(value: &str, base_url: Option<&str>) -> Result<SchemaLocation> {
    if value.is_empty() || value.contains('\0') {
        return Err(InvalidSchema);
    }

    match value.matches(SCHEME_SEPARATOR).count() {
        0 => {}
        1 => return parse_network_locator(value).map(SchemaLocation::Url),
        _ => return Err(InvalidSchema),
    }

    if value.starts_with(NETWORK_PATH_PREFIX) {
        return Err(InvalidSchema);
    }

    if !base_url.is_some_and(|url| !url.is_empty()) {
        return Err(MissingBaseUrl);
    }

    Ok(SchemaLocation::Path(expand_path(value)))
}

fn parse_network_locator(value: &str) -> Result<String> {
    let url = Url::parse(value).map_err(|e| {
        debug!("Schema locator `{value}` does not parse as a URL: {e}");
        InvalidSchema
    })?;

    let needs_host = matches!(url.scheme(), "http" | "https");
    if needs_host && url.host_str().map_or(true, str::is_empty) {
        return Err(InvalidSchema);
    }

    Ok(value.to_string())
}

/// Validates the `--base-url` option.
///
/// # Errors
///
/// Returns [`InvalidBaseUrl`] unless the value parses as an `http` or `https`
/// URL with a host.
pub fn validate_base_url(value: &str) -> Result<String> {
    let Ok(url) = Url::parse(value) else {
        return Err(InvalidBaseUrl(value.to_string()));
    };

    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    if !matches!(url.scheme(), "http" | "https") || !has_host {
        return Err(InvalidBaseUrl(value.to_string()));
    }

    Ok(value.to_string())
}
