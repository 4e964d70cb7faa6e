use thiserror::Error;

use crate::config::MAX_WORKERS;

pub type Result<T> = std::result::Result<T, Error>;

/// How the command-line layer should report an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The invocation as a whole is malformed, e.g. a missing companion option.
    Usage,
    /// One option carries an invalid value.
    BadParameter,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid SCHEMA, must be a valid URL or file path.")]
    InvalidSchema,

    #[error("The `--base-url` option is required when specifying a schema via a file.")]
    MissingBaseUrl,

    #[error(
        "Invalid base URL: `{}`. It should include a scheme and a host, e.g. `http://127.0.0.1:8080/api`.",
        .0
    )]
    InvalidBaseUrl(String),

    #[error("Expected KEY:VALUE format, received {}.", .0)]
    KeyValueFormat(String),

    #[error("{} should be latin-1 encodable.", .0)]
    NotLatin1(&'static str),

    #[error("Header name should not be empty.")]
    EmptyHeaderName,

    #[error("Invalid return character or leading space in header.")]
    InvalidHeaderCharacters,

    #[error(
        "The `--auth` option conflicts with the `Authorization` header set via `--header`. Use only one of them."
    )]
    AuthHeaderConflict,

    #[error("Invalid regex: {}", .0)]
    InvalidRegex(String),

    #[error("`{}` is not a valid number of workers. Expected a positive integer or `auto`.", .0)]
    InvalidWorkers(String),

    #[error("Number of workers must be between 1 and {}, got {}.", MAX_WORKERS, .0)]
    WorkersOutOfRange(usize),

    #[error(
        "Invalid rate limit value: `{}`. Should be in form `limit/interval`. Example: `10/m` for 10 requests per minute.",
        .0
    )]
    InvalidRateLimit(String),

    #[error("Invalid status code(s): {}", join_codes(.0))]
    InvalidStatusCodes(Vec<String>),
}

fn join_codes(codes: &[String]) -> String {
    codes.join(", ")
}

impl Error {
    /// Classifies the error the way the command-line layer reports it.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSchema
            | Self::MissingBaseUrl
            | Self::AuthHeaderConflict
            | Self::InvalidRateLimit(_)
            | Self::InvalidStatusCodes(_) => ErrorKind::Usage,
            Self::InvalidBaseUrl(_)
            | Self::KeyValueFormat(_)
            | Self::NotLatin1(_)
            | Self::EmptyHeaderName
            | Self::InvalidHeaderCharacters
            | Self::InvalidRegex(_)
            | Self::InvalidWorkers(_)
            | Self::WorkersOutOfRange(_) => ErrorKind::BadParameter,
        }
    }

    pub fn invalid_regex(original: &regex::Error) -> Self {
        Self::InvalidRegex(original.to_string())
    }

    pub fn invalid_status_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidStatusCodes(codes.into_iter().map(Into::into).collect())
    }
}
