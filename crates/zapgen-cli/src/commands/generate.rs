//! Generate command implementation.
//!
//! Writes one Python client module per API component:
//! 1. Checks the output directory exists (it is never created)
//! 2. Resolves the input files from flags and config
//! 3. Loads the API definitions and the messages bundle
//! 4. Generates and writes every component in order

use super::report_failure;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use zapgen_codegen::export::ensure_output_dir;
use zapgen_codegen::{GeneratorOptions, PythonGenerator};
use zapgen_core::cli::{ExitCode, OutputFormat};
use zapgen_core::{ApiRegistry, Error};
use zapgen_registry::{FileRegistry, PropertiesCatalog};

/// Summary of a generation run.
#[derive(Debug, Serialize)]
struct GenerationResult {
    /// Absolute output directory
    output_dir: String,
    /// Whether optional-component docstrings were emitted
    optional: bool,
    /// Number of components generated
    component_count: usize,
    /// Files written, in order
    files: Vec<String>,
}

/// Runs the generate command.
///
/// A missing output directory is reported on stderr and yields
/// [`ExitCode::ERROR`] before any input is resolved or file written.
/// Configuration problems yield [`ExitCode::INVALID_INPUT`].
///
/// # Errors
///
/// Returns an error if configuration or inputs cannot be loaded, or a
/// module cannot be rendered or written.
pub fn run(
    input: &InputArgs,
    output_dir: Option<PathBuf>,
    optional: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = match Config::load(input.config.as_deref()) {
        Ok(config) => config,
        Err(err) => return Ok(report_failure(&err)),
    };

    let dir = match ensure_output_dir(config.output_dir(output_dir)) {
        Ok(dir) => dir,
        Err(err @ Error::OutputDirMissing { .. }) => return Ok(report_failure(&err)),
        Err(err) => return Err(err).context("failed to resolve output directory"),
    };

    let resolved = match config.resolve_input(input) {
        Ok(resolved) => resolved,
        Err(err) => return Ok(report_failure(&err)),
    };
    let optional = config.optional(optional);

    let registry = FileRegistry::from_path(&resolved.definitions)
        .context("failed to load API definitions")?;
    let messages = match &resolved.messages {
        Some(path) => PropertiesCatalog::from_path(path).context("failed to load messages")?,
        None => {
            info!("No messages bundle given, functions will have no descriptions");
            PropertiesCatalog::default()
        }
    };

    let generator = PythonGenerator::with_options(GeneratorOptions::new().with_optional(optional))?;
    let written = generator
        .generate_all_to(&registry, &messages, &dir)
        .context("failed to generate client modules")?;

    let result = GenerationResult {
        output_dir: dir.display().to_string(),
        optional,
        component_count: registry.components().len(),
        files: written.iter().map(|p| p.display().to_string()).collect(),
    };
    println!("{}", format_output(&result, output_format)?);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(dir: &std::path::Path) -> InputArgs {
        let definitions = dir.join("zap-api.json");
        fs::write(
            &definitions,
            r#"{"components": [{"prefix": "core", "views": [{"name": "version"}]}]}"#,
        )
        .unwrap();
        let messages = dir.join("Messages.properties");
        fs::write(&messages, "core.api.view.version = Gets ZAP's version\n").unwrap();
        let config = dir.join("config.toml");
        fs::write(&config, "").unwrap();

        InputArgs {
            definitions: Some(definitions),
            messages: Some(messages),
            config: Some(config),
        }
    }

    #[test]
    fn test_generate_writes_modules() {
        let temp = TempDir::new().unwrap();
        let input = write_inputs(temp.path());
        let out = temp.path().join("zapv2");
        fs::create_dir(&out).unwrap();

        let code = run(&input, Some(out.clone()), false, OutputFormat::Json).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let core = fs::read_to_string(out.join("core.py")).unwrap();
        assert!(core.contains("        Gets ZAP's version\n"));
    }

    #[test]
    fn test_generate_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let input = write_inputs(temp.path());
        let out = temp.path().join("zapv2");

        let code = run(&input, Some(out.clone()), false, OutputFormat::Json).unwrap();

        assert_eq!(code, ExitCode::ERROR);
        assert!(!out.exists());
    }

    #[test]
    fn test_generate_missing_output_dir_checked_before_inputs() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        fs::write(&config, "").unwrap();
        let input = InputArgs {
            definitions: Some(temp.path().join("absent.json")),
            messages: None,
            config: Some(config),
        };

        let code = run(&input, Some(temp.path().join("zapv2")), false, OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::ERROR);
    }

    #[test]
    fn test_generate_bad_definitions_is_error() {
        let temp = TempDir::new().unwrap();
        let mut input = write_inputs(temp.path());
        let definitions = temp.path().join("broken.json");
        fs::write(&definitions, "{not json").unwrap();
        input.definitions = Some(definitions);

        let err = run(&input, Some(temp.path().to_path_buf()), false, OutputFormat::Json)
            .unwrap_err();
        assert!(err.to_string().contains("failed to load API definitions"));
    }

    #[test]
    fn test_generate_missing_output_dir_reported_without_definitions() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        fs::write(&config, "").unwrap();
        let input = InputArgs {
            config: Some(config),
            ..InputArgs::default()
        };
        let out = temp.path().join("zapv2");

        let code = run(&input, Some(out.clone()), false, OutputFormat::Json).unwrap();

        assert_eq!(code, ExitCode::ERROR);
        assert!(!out.exists());
    }

    #[test]
    fn test_generate_without_definitions_is_invalid_input() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        fs::write(&config, "").unwrap();
        let input = InputArgs {
            config: Some(config),
            ..InputArgs::default()
        };

        let code = run(&input, Some(temp.path().to_path_buf()), false, OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_generate_unreadable_config_is_invalid_input() {
        let temp = TempDir::new().unwrap();
        let mut input = write_inputs(temp.path());
        input.config = Some(temp.path().join("absent.toml"));

        let code = run(&input, Some(temp.path().to_path_buf()), false, OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
    }
}
