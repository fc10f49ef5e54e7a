//! Domain layer: argument model, tokenizer, converters, failures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod converter;
pub mod descriptor;
pub mod error;
pub mod failure;
pub mod registry;
pub mod tokenizer;
pub mod value;

pub use converter::{Converter, PrimitiveConverter, TextConverter};
pub use descriptor::{Command, CommandSchema, OptionBinding, OptionDescriptor, OptionSpec};
pub use error::{ConversionError, ConverterRegistryError, SchemaError, TokenizeError};
pub use failure::{FailureChain, FailureRecord, Outcome};
pub use registry::{ConversionRule, ConverterRegistry, ConverterRegistryBuilder, Dependency};
pub use tokenizer::{tokenize, ParsedArguments};
pub use value::{FromValue, Value, ValueKind};
