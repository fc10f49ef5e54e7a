//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::{DispatchError, RegistrationError, SettingsError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("command setup failed: {0}")]
    Registration(#[from] RegistrationError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("unknown verb: {0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Dispatch(e) if e.is_usage() => crate::exitcode::USAGE,
            CliError::Dispatch(_) => crate::exitcode::SOFTWARE,
            CliError::Registration(_) => crate::exitcode::SOFTWARE,
            CliError::Settings(_) => crate::exitcode::CONFIG,
        }
    }
}
