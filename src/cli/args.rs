//! CLI argument definitions using clap
//!
//! clap only handles the tool's own flags; everything from the verb on is
//! passed through untouched and bound by the dispatcher.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::config::ColorMode;

/// Bind command-line arguments to typed commands and run them
#[derive(Parser, Debug)]
#[command(name = "argbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (TOML)
    #[arg(short, long, env = "ARGBIND_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Color output (overrides config)
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// List registered verbs
    #[arg(short, long)]
    pub list: bool,

    /// Show the options of a verb
    #[arg(long, value_name = "VERB")]
    pub options: Option<String>,

    /// Print the effective configuration
    #[arg(long)]
    pub show_config: bool,

    /// Print a configuration template
    #[arg(long)]
    pub config_template: bool,

    /// Generate shell completions
    #[arg(long = "completions", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,

    /// Verb followed by its options, e.g. `test1 -p 5 -s 7`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}
