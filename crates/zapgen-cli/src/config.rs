//! Generator configuration.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/zapgen/config.toml`
//! - macOS: `~/Library/Application Support/zapgen/config.toml`
//! - Windows: `%APPDATA%\zapgen\config.toml`
//!
//! Every value can be overridden on the command line.

use crate::cli::InputArgs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use zapgen_core::{Error, Result};

/// Output directory used when neither the config file nor the command line
/// names one.
pub const DEFAULT_OUTPUT_DIR: &str = "../zap-api-python/src/zapv2/";

/// Generator configuration.
///
/// # Examples
///
/// ```toml
/// [input]
/// definitions = "zap-api.json"
/// messages = "Messages.properties"
///
/// [output]
/// dir = "../zap-api-python/src/zapv2/"
/// optional = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Input files
    #[serde(default)]
    pub input: InputConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input file locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InputConfig {
    /// API definition file
    pub definitions: Option<PathBuf>,

    /// Messages bundle
    pub messages: Option<PathBuf>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the generated modules
    pub dir: PathBuf,

    /// Whether the generated component is an optional add-on
    pub optional: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            optional: false,
        }
    }
}

/// Inputs resolved from the command line and the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// API definition file
    pub definitions: PathBuf,
    /// Messages bundle, if any
    pub messages: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present, otherwise the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("Config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or is not
    /// valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("failed to read config file {}: {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            message: format!("failed to parse config file {}: {e}", path.display()),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Merges command-line input paths over the configured ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no definition file is known.
    pub fn resolve_input(&self, args: &InputArgs) -> Result<ResolvedInput> {
        let definitions = args
            .definitions
            .clone()
            .or_else(|| self.input.definitions.clone())
            .ok_or_else(|| Error::Config {
                message: "no API definition file given: pass --definitions or set \
                          input.definitions in the config file"
                    .to_string(),
            })?;

        Ok(ResolvedInput {
            definitions,
            messages: args.messages.clone().or_else(|| self.input.messages.clone()),
        })
    }

    /// Output directory, preferring the command-line value.
    #[must_use]
    pub fn output_dir(&self, cli_dir: Option<PathBuf>) -> PathBuf {
        cli_dir.unwrap_or_else(|| self.output.dir.clone())
    }

    /// Optional-component mode; the command-line flag can only turn it on.
    #[must_use]
    pub const fn optional(&self, cli_flag: bool) -> bool {
        cli_flag || self.output.optional
    }
}

/// Default configuration file path, if the platform has a config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zapgen").join("config.toml"))
}
