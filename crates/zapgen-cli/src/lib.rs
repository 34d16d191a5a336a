//! ZAP API generator CLI library.
//!
//! Exposes the CLI definition, configuration, commands and formatters so
//! they can be tested outside the binary.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands, InputArgs};
pub use config::Config;
