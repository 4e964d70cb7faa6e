//! The validated, normalized form of every command-line option.

use apicheck_core::validation::{BoolOrPath, Credentials, Headers, SchemaLocation};
use serde::Serialize;

use crate::error::Result;

/// Options after every validator has run, ready to hand to the test runner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOptions {
    pub schema: SchemaLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
    pub headers: Headers,
    pub include_path_regex: Vec<String>,
    pub exclude_path_regex: Vec<String>,
    pub tls_verify: BoolOrPath,
    pub workers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_status_codes: Option<Vec<String>>,
}

impl ResolvedOptions {
    /// Renders the options as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
