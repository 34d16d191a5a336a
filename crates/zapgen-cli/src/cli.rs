//! CLI structure definitions.
//!
//! Contains the main CLI struct and the subcommand enum, separated from
//! main.rs so they can be tested from the library.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// ZAP API client generator.
///
/// Generates one Python client module per ZAP API component from an API
/// definition file and a messages bundle.
#[derive(Parser, Debug)]
#[command(name = "zapgen")]
#[command(version, about, long_about = None)]
#[command(author = "ZAP API Generator Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Input files shared by `generate` and `inspect`.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// API definition file (JSON)
    #[arg(short, long, env = "ZAPGEN_DEFINITIONS")]
    pub definitions: Option<PathBuf>,

    /// Messages bundle with endpoint descriptions (.properties)
    #[arg(short, long, env = "ZAPGEN_MESSAGES")]
    pub messages: Option<PathBuf>,

    /// Configuration file
    ///
    /// Defaults to `<config dir>/zapgen/config.toml` when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the Python client modules.
    ///
    /// Writes one module per component into the output directory, which
    /// must already exist.
    ///
    /// # Examples
    ///
    /// ```bash
    /// zapgen generate --definitions zap-api.json --messages Messages.properties
    ///
    /// # Add-on that may not be installed
    /// zapgen generate -d spider-api.json --output-dir out/ --optional
    /// ```
    Generate {
        /// Input files
        #[command(flatten)]
        input: InputArgs,

        /// Directory receiving the generated modules
        /// (default: ../zap-api-python/src/zapv2/)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Mark every endpoint as belonging to an optional component
        #[arg(long)]
        optional: bool,
    },

    /// Show what would be generated without writing anything.
    ///
    /// Lists each component with its module and class names, endpoint
    /// counts and the descriptions missing from the messages bundle.
    Inspect {
        /// Input files
        #[command(flatten)]
        input: InputArgs,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}
