//! Validation and normalization of raw command-line option values.
//!
//! Every function here is a stateless check of one option kind. It either
//! returns the normalized value or an [`Error`](crate::error::Error) that the
//! command-line layer reports as a usage or bad-parameter error:
//!
//! - **Schema**: [`validate_schema`] and [`validate_base_url`]
//! - **Key/value pairs**: [`validate_auth`], [`validate_headers`] and
//!   [`reraise_format_error`]
//! - **Patterns**: [`validate_regex`]
//! - **Conversions**: [`convert_boolean_string`] and [`convert_workers`]
//! - **Throughput and expectations**: [`validate_rate_limit`] and
//!   [`convert_status_codes`]

pub mod conversion;
pub mod pairs;
pub mod patterns;
pub mod rate_limit;
pub mod schema;
pub mod status_codes;

// Re-exports for convenience
pub use conversion::{convert_boolean_string, convert_workers, BoolOrPath, AUTO_WORKERS};
pub use pairs::{
    reraise_format_error, validate_auth, validate_auth_overlap, validate_header,
    validate_headers, Credentials, Headers,
};
pub use patterns::{parse_regex, validate_regex};
pub use rate_limit::validate_rate_limit;
pub use schema::{validate_base_url, validate_schema, SchemaLocation};
pub use status_codes::convert_status_codes;
