use std::process::ExitCode;

use apicheck_core::error::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

const USAGE_STATUS: u8 = 2;
const FAILURE_STATUS: u8 = 1;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] apicheck_core::error::Error),

    #[error("Error rendering resolved options: {}", .0)]
    Render(#[from] serde_yaml::Error),
}

impl Error {
    /// Process status for this error: 2 for usage errors, 1 for everything else.
    #[must_use]
    pub fn status(&self) -> u8 {
        match self {
            Self::Validation(e) if e.kind() == ErrorKind::Usage => USAGE_STATUS,
            _ => FAILURE_STATUS,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}
