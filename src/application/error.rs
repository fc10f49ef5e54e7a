//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::application::report::{failure_rows, ReportRow};
use crate::domain::{ConverterRegistryError, FailureChain, SchemaError, TokenizeError};

/// Error returned by a command handler. Passed through untouched.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Setup-time defects. These abort registry construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("verb already registered: {0}")]
    DuplicateVerb(String),

    #[error("option {option} of '{verb}': {source}")]
    Converter {
        verb: String,
        option: String,
        #[source]
        source: ConverterRegistryError,
    },
}

/// Why a dispatch call did not run a handler, or how the handler failed.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Verb is not recognized.")]
    UnknownVerb(String),

    #[error("{0}")]
    Tokenize(#[from] TokenizeError),

    #[error("{} option(s) could not be bound", .0.len())]
    Bind(FailureChain),

    #[error("command '{verb}' failed: {source}")]
    Handler {
        verb: String,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// `(label, message)` rows for display, in encounter order.
    pub fn rows(&self) -> Vec<ReportRow> {
        match self {
            DispatchError::UnknownVerb(verb) => vec![ReportRow::new(verb, self.to_string())],
            DispatchError::Tokenize(e) => vec![ReportRow::new(e.token(), e.to_string())],
            DispatchError::Bind(chain) => failure_rows(chain),
            DispatchError::Handler { verb, source } => {
                vec![ReportRow::new(verb, source.to_string())]
            }
        }
    }

    /// User input problems, as opposed to a failing handler.
    pub fn is_usage(&self) -> bool {
        !matches!(self, DispatchError::Handler { .. })
    }
}

/// Result type for dispatch calls.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Settings could not be loaded or written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("config error: {message}")]
    Load { message: String },

    #[error("serialize config: {message}")]
    Serialize { message: String },
}
