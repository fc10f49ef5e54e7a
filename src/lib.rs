//! Bind raw process arguments to strongly-typed command objects.
//!
//! A command declares its options once through a [`CommandSchema`]; the
//! [`Dispatcher`] looks up the verb, tokenizes the remaining arguments, binds
//! them with the [`ConverterRegistry`], and runs the handler only if every
//! option bound. All binding failures are reported together.
//!
//! ```ignore
//! let dispatcher = RegistryBuilder::new()
//!     .register::<Fetch, _>(|cmd| run_fetch(cmd))?
//!     .freeze();
//! dispatcher.dispatch(&std::env::args().skip(1).collect::<Vec<_>>())?;
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{
    Binder, DispatchError, DispatchStatus, Dispatcher, Execute, HandlerResult, RegistrationError,
    RegistryBuilder, ReportRow,
};
pub use domain::{
    tokenize, Command, CommandSchema, ConverterRegistry, FailureChain, FailureRecord, OptionSpec,
    ParsedArguments, Value, ValueKind,
};
