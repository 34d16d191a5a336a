//! `zapgen`: generates the ZAP Python API client.
//!
//! # Examples
//!
//! ```bash
//! # Generate every component into ../zap-api-python/src/zapv2/
//! zapgen generate --definitions zap-api.json --messages Messages.properties
//!
//! # See what would be generated
//! zapgen --format text inspect -d zap-api.json -m Messages.properties
//! ```

use anyhow::Result;
use clap::Parser;
use zapgen_cli::Cli;
use zapgen_cli::runner::{execute_command, init_logging};
use zapgen_core::cli::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli.format.parse::<OutputFormat>()?;

    let exit_code = execute_command(cli.command, output_format)?;

    std::process::exit(exit_code.as_i32());
}
