//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/argbind/argbind.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ARGBIND_*` prefix, `__` between nested keys

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::SettingsError;

/// When to color terminal output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide (honors NO_COLOR, CLICOLOR, CLICOLOR_FORCE)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Install this mode as the process-wide `colored` override.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Layout of report tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Spaces before each cell
    pub left_padding: usize,
    /// Spaces after each cell
    pub right_padding: usize,
    /// Cap on a column's text width; longer cells are cut with "... "
    pub max_column_width: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            left_padding: 4,
            right_padding: 5,
            max_column_width: None,
        }
    }
}

/// Unified configuration for argbind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub color: ColorMode,
    pub render: RenderSettings,
}

/// Get the XDG config directory for argbind.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "argbind").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("argbind.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(
                    File::from(global_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        if let Some(path) = config_file {
            debug!("load: explicit config {}", path.display());
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("ARGBIND")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize {
            message: e.to_string(),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# argbind configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/argbind/argbind.toml
#   Explicit: --config <FILE> (or ARGBIND_CONFIG)
#   Env:      ARGBIND_* environment variables, e.g. ARGBIND_RENDER__LEFT_PADDING=2

# auto | always | never
# color = "auto"

[render]
# left_padding = 4
# right_padding = 5
# max_column_width = 60
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Load {
        message: e.to_string(),
    }
}
