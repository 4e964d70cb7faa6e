//! apicheck Core Library
//!
//! This crate validates the command-line options of apicheck, an API testing
//! tool, before the testing engine runs. Each option kind has one stateless
//! function that rejects malformed input and normalizes accepted input.
//!
//! # Key Features
//!
//! - **Schema Locators**: URLs and file paths, with the base URL a file path needs
//! - **Credentials and Headers**: `KEY:VALUE` parsing with Latin-1 checks
//! - **Patterns**: Regex compilation with the engine's own diagnostics
//! - **Conversions**: Boolean-or-path flags and `auto` worker counts
//! - **Rate Limits and Status Codes**: Grammar checks with verbatim error messages
//! - **Error Handling**: One error type, classified as usage or bad-parameter errors
//!
//! # Examples
//!
//! ```
//! use apicheck_core::validation::{convert_status_codes, validate_auth, validate_rate_limit};
//!
//! let credentials = validate_auth("admin:secret")?;
//! assert_eq!(credentials.username, "admin");
//!
//! assert_eq!(validate_rate_limit("10/m")?, "10/m");
//!
//! let codes = convert_status_codes(Some(vec!["2xx".to_string(), "404".to_string()]))?;
//! assert_eq!(codes.map(|codes| codes.len()), Some(2));
//! # Ok::<(), apicheck_core::error::Error>(())
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod validation;
