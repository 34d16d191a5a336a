//! Inspect command implementation.
//!
//! Loads the inputs and reports what `generate` would produce for each
//! component, without touching the output directory.

use super::report_failure;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use zapgen_codegen::IdentifierNormalizer;
use zapgen_core::cli::{ExitCode, OutputFormat};
use zapgen_core::{ApiRegistry, ComponentDescriptor, EmptyCatalog, MessageCatalog};
use zapgen_registry::{FileRegistry, PropertiesCatalog};

/// Report for a whole definition file.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Definition file that was read
    pub definitions: String,
    /// One entry per component, in definition order
    pub components: Vec<ComponentReport>,
}

/// What generation would produce for one component.
#[derive(Debug, Serialize)]
pub struct ComponentReport {
    /// Component prefix
    pub prefix: String,
    /// Module file name
    pub file: String,
    /// Python class name
    pub class_name: String,
    /// Number of views
    pub views: usize,
    /// Number of actions
    pub actions: usize,
    /// Number of other endpoints
    pub others: usize,
    /// Description keys with no message
    pub missing_descriptions: Vec<String>,
}

impl ComponentReport {
    /// Builds the report for `component`.
    #[must_use]
    pub fn new<M>(
        component: &ComponentDescriptor,
        normalizer: &IdentifierNormalizer,
        messages: &M,
    ) -> Self
    where
        M: MessageCatalog + ?Sized,
    {
        Self {
            prefix: component.prefix.clone(),
            file: normalizer.file_name(&component.prefix),
            class_name: normalizer.class_name(&component.prefix),
            views: component.views.len(),
            actions: component.actions.len(),
            others: component.others.len(),
            missing_descriptions: component
                .endpoints()
                .filter(|e| messages.message(&e.description_tag).is_none())
                .map(|e| e.description_tag.clone())
                .collect(),
        }
    }
}

/// Builds the report for every component in `registry`.
#[must_use]
pub fn inspect<R, M>(definitions: &str, registry: &R, messages: &M) -> InspectReport
where
    R: ApiRegistry + ?Sized,
    M: MessageCatalog + ?Sized,
{
    let normalizer = IdentifierNormalizer::python();
    InspectReport {
        definitions: definitions.to_string(),
        components: registry
            .components()
            .iter()
            .map(|c| ComponentReport::new(c, &normalizer, messages))
            .collect(),
    }
}

/// Runs the inspect command.
///
/// Configuration problems are reported on stderr and yield
/// [`ExitCode::INVALID_INPUT`].
///
/// # Errors
///
/// Returns an error if the definitions or messages cannot be loaded.
pub fn run(input: &InputArgs, output_format: OutputFormat) -> Result<ExitCode> {
    let resolved = match Config::load(input.config.as_deref())
        .and_then(|config| config.resolve_input(input))
    {
        Ok(resolved) => resolved,
        Err(err) => return Ok(report_failure(&err)),
    };

    let registry = FileRegistry::from_path(&resolved.definitions)
        .context("failed to load API definitions")?;
    let definitions = resolved.definitions.display().to_string();

    let report = match &resolved.messages {
        Some(path) => {
            let messages = PropertiesCatalog::from_path(path).context("failed to load messages")?;
            inspect(&definitions, &registry, &messages)
        }
        None => inspect(&definitions, &registry, &EmptyCatalog),
    };

    println!("{}", format_output(&report, output_format)?);
    Ok(ExitCode::SUCCESS)
}
