//! apicheck CLI Library
//!
//! This crate provides the command-line interface for apicheck. It parses the
//! options of an API test run with `clap`, validates them with
//! [`apicheck_core::validation`], and produces the normalized
//! [`options::ResolvedOptions`] the test runner consumes.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and cross-option validation
//! - [`options`]: The normalized options and their YAML rendering
//! - [`error`]: Errors and the process status they map to
//!
//! # Examples
//!
//! ```bash
//! # Schema served by the API itself
//! apicheck https://example.com/openapi.json
//!
//! # Local schema file, tested against a running server
//! apicheck ./openapi.yaml --base-url http://127.0.0.1:8080/api
//!
//! # Credentials, headers and throughput limits
//! apicheck ./openapi.yaml -b http://127.0.0.1:8080 -a user:pass -H "X-Tenant: acme" \
//!     --workers auto --rate-limit 10/m --allowed-status-codes 2xx,404
//! ```

pub mod cli_args;
pub mod error;
pub mod options;
