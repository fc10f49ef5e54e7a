//! CLI layer: argument parsing, demo commands, and output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::{build_dispatcher, execute_command, GreetCommand, TestCommand};
pub use error::{CliError, CliResult};
