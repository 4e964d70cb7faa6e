//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Single-value checks run as clap value parsers, so clap reports them
//! against the offending flag. Checks that need more than one option run in
//! [`Args::resolve`] after parsing.

use std::convert::Infallible;

use apicheck_core::validation::{
    convert_boolean_string, convert_status_codes, convert_workers, parse_regex,
    validate_auth, validate_auth_overlap, validate_base_url, validate_header, validate_headers,
    validate_rate_limit, validate_schema, BoolOrPath, Credentials,
};
use clap::Parser;
use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::options::ResolvedOptions;

/// Command-line arguments for the apicheck CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use apicheck_cli::cli_args::Args;
///
/// let args = Args::parse_from(["apicheck", "https://example.com/openapi.json", "-w", "4"]);
/// let options = args.resolve().unwrap();
/// assert_eq!(options.workers, 4);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "apicheck", term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Location of the API schema.
    ///
    /// Either a URL such as `https://example.com/openapi.json`, or a path to a
    /// local file. A local file also needs `--base-url`.
    pub schema: String,

    /// Base URL of the API under test, e.g. `http://127.0.0.1:8080/api`.
    #[arg(long, short = 'b', value_parser = validate_base_url)]
    pub base_url: Option<String>,

    /// Basic auth credentials in the format user:password.
    #[arg(long, short = 'a', value_name = "USER:PASS", value_parser = validate_auth)]
    pub auth: Option<Credentials>,

    /// Extra header sent with every request, in the format name:value.
    ///
    /// Multiple headers can be provided with repeated `-H` flags. A later
    /// header with the same name replaces the earlier one.
    ///
    /// # Examples
    /// ```bash
    /// apicheck openapi.json -H "X-Token: abc" -H "Accept: application/json"
    /// ```
    #[arg(
        long = "header",
        short = 'H',
        value_name = "NAME:VALUE",
        action = clap::ArgAction::Append,
        value_parser = parse_header
    )]
    pub headers: Vec<String>,

    /// Only test operations whose path matches this regex. Repeatable.
    #[arg(long, value_name = "REGEX", action = clap::ArgAction::Append, value_parser = parse_regex)]
    pub include_path_regex: Vec<Regex>,

    /// Skip operations whose path matches this regex. Repeatable.
    #[arg(long, value_name = "REGEX", action = clap::ArgAction::Append, value_parser = parse_regex)]
    pub exclude_path_regex: Vec<Regex>,

    /// Verify TLS certificates: `true`, `false`, or a path to a CA bundle.
    #[arg(long, value_name = "BOOL|PATH", default_value = "true", value_parser = parse_tls_verify)]
    pub tls_verify: BoolOrPath,

    /// Number of concurrent workers, or `auto` to size from available CPUs.
    #[arg(long, short = 'w', default_value = "1", value_parser = convert_workers)]
    pub workers: usize,

    /// Maximum request rate in the format limit/interval, e.g. `10/m`.
    #[arg(long, value_name = "LIMIT/INTERVAL", value_parser = validate_rate_limit)]
    pub rate_limit: Option<String>,

    /// Status codes treated as expected responses, comma separated.
    ///
    /// Accepts exact codes such as `404` and whole classes such as `2xx`.
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub allowed_status_codes: Option<Vec<String>>,
}

fn parse_header(entry: &str) -> std::result::Result<String, apicheck_core::error::Error> {
    validate_header(entry).map(|_| entry.to_string())
}

fn parse_tls_verify(value: &str) -> std::result::Result<BoolOrPath, Infallible> {
    Ok(convert_boolean_string(value))
}

impl Args {
    /// Runs the checks that span several options and returns the normalized options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schema is invalid, or is a file path without `--base-url`
    /// - `--auth` is combined with an `Authorization` header
    /// - Any allowed status code is invalid
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let schema = validate_schema(&self.schema, self.base_url.as_deref())?;
        debug!("Schema location: {schema:?}");

        let headers = validate_headers(&self.headers)?;
        validate_auth_overlap(self.auth.as_ref(), &headers)?;

        let allowed_status_codes = convert_status_codes(self.allowed_status_codes.clone())?;

        Ok(ResolvedOptions {
            schema,
            base_url: self.base_url.clone(),
            auth: self.auth.clone(),
            headers,
            include_path_regex: pattern_sources(&self.include_path_regex),
            exclude_path_regex: pattern_sources(&self.exclude_path_regex),
            tls_verify: self.tls_verify.clone(),
            workers: self.workers,
            rate_limit: self.rate_limit.clone(),
            allowed_status_codes,
        })
    }
}

fn pattern_sources(patterns: &[Regex]) -> Vec<String> {
    patterns.iter().map(|regex| regex.as_str().to_string()).collect()
}
