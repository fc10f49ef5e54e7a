//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::ValueKind;

/// Malformed argument tokens. Tokenizing stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Short name cannot contain more than one char")]
    ShortNameTooLong(String),

    #[error("There is no option for value")]
    ValueWithoutOption(String),
}

impl TokenizeError {
    /// The offending token, as given on the command line.
    pub fn token(&self) -> &str {
        match self {
            TokenizeError::ShortNameTooLong(token) | TokenizeError::ValueWithoutOption(token) => {
                token
            }
        }
    }
}

/// A converter could not turn raw strings into a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Property type {0} doesn't allow multiple values")]
    MultipleValuesNotAllowed(ValueKind),

    #[error("No value given for property type {0}")]
    MissingValue(ValueKind),

    #[error("Cannot convert '{raw}' to {kind}: {message}")]
    ConversionFailed {
        raw: String,
        kind: ValueKind,
        message: String,
    },

    #[error("Converter produced {found} for a {expected} property")]
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
}

/// Defects in converter rule configuration. These are programmer errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConverterRegistryError {
    #[error("There are no converter rules for type {0}")]
    NoApplicableConverter(ValueKind),

    #[error("Should be only single converter rule for type {kind}. Current rules number: {count}")]
    AmbiguousConverterRules { kind: ValueKind, count: usize },

    #[error("Cannot resolve unregistered converter dependency: {0}")]
    UnresolvedConverterDependency(String),
}

/// A command schema that cannot be registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("command verb must not be empty")]
    EmptyVerb,

    #[error("option -{short} of '{verb}' has an empty long name")]
    EmptyLongName { verb: String, short: char },

    #[error("short option -{key} declared more than once in '{verb}'")]
    DuplicateShortKey { verb: String, key: char },

    #[error("long option --{key} declared more than once in '{verb}'")]
    DuplicateLongKey { verb: String, key: String },
}
