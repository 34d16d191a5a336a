//! Python client module generator.
//!
//! Produces one module per API component: a license header, the
//! `import six` bootstrap, and a class bound to the shared `zap` client
//! with one method per endpoint (views, then actions, then others).
//!
//! # Examples
//!
//! ```
//! use zapgen_codegen::python::{GeneratorOptions, PythonGenerator};
//! use zapgen_core::{ComponentDescriptor, EmptyCatalog, EndpointDescriptor, EndpointKind};
//!
//! let mut core = ComponentDescriptor::new("core");
//! core.add_endpoint(EndpointDescriptor::new("alerts", EndpointKind::View));
//!
//! let generator = PythonGenerator::with_options(GeneratorOptions::new().with_year(2024)).unwrap();
//! let file = generator.generate(&core, &EmptyCatalog).unwrap();
//!
//! assert_eq!(file.path, "core.py");
//! assert!(file.content.contains("    @property\n    def alerts(self):\n"));
//! ```

use super::planner::FunctionPlanner;
use crate::export;
use crate::naming::IdentifierNormalizer;
use crate::template_engine::TemplateEngine;
use crate::types::{GeneratedCode, GeneratedFile};
use chrono::Datelike;
use serde::Serialize;
use std::path::{Path, PathBuf};
use zapgen_core::{ApiRegistry, ComponentDescriptor, MessageCatalog, Result};

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Add the optional-component notice to every docstring
    pub optional: bool,
    /// Year printed in the license header
    pub year: i32,
}

impl GeneratorOptions {
    /// Defaults: not optional, current local year.
    #[must_use]
    pub fn new() -> Self {
        Self {
            optional: false,
            year: chrono::Local::now().year(),
        }
    }

    /// Sets optional-component mode.
    #[must_use]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Overrides the header year.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct ModuleContext {
    year: i32,
    class_name: String,
    functions: Vec<String>,
}

/// Generator for Python client modules.
#[derive(Debug)]
pub struct PythonGenerator<'a> {
    engine: TemplateEngine<'a>,
    normalizer: IdentifierNormalizer,
    options: GeneratorOptions,
}

impl PythonGenerator<'_> {
    /// Creates a generator with default options.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Self::with_options(GeneratorOptions::default())
    }

    /// Creates a generator with the given options.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn with_options(options: GeneratorOptions) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            normalizer: IdentifierNormalizer::python(),
            options,
        })
    }

    /// The options in use.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Renders the module for one component.
    ///
    /// Missing descriptions are logged and skipped; they never fail
    /// generation.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn generate<M>(
        &self,
        component: &ComponentDescriptor,
        messages: &M,
    ) -> Result<GeneratedFile>
    where
        M: MessageCatalog + ?Sized,
    {
        let planner = FunctionPlanner::new(&self.normalizer, messages, self.options.optional);

        let functions = component
            .endpoints()
            .map(|endpoint| {
                let function = planner.plan(&component.prefix, endpoint);
                tracing::debug!(
                    "Planned {}.{} as {}",
                    component.prefix,
                    endpoint.name,
                    function.name
                );
                function.render()
            })
            .collect();

        let context = ModuleContext {
            year: self.options.year,
            class_name: self.normalizer.class_name(&component.prefix),
            functions,
        };

        Ok(GeneratedFile {
            path: self.normalizer.file_name(&component.prefix),
            content: self.engine.render("python/module", &context)?,
        })
    }

    /// Renders the modules for every component in the registry.
    ///
    /// # Errors
    ///
    /// Returns the first rendering error.
    pub fn generate_all<R, M>(&self, registry: &R, messages: &M) -> Result<GeneratedCode>
    where
        R: ApiRegistry + ?Sized,
        M: MessageCatalog + ?Sized,
    {
        let mut code = GeneratedCode::new();
        for component in registry.components() {
            code.add_file(self.generate(component, messages)?);
        }
        Ok(code)
    }

    /// Generates one component and writes it into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`zapgen_core::Error::OutputDirMissing`] if `output_dir`
    /// does not exist, or the rendering/I/O error that stopped generation.
    pub fn generate_to<M>(
        &self,
        component: &ComponentDescriptor,
        messages: &M,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf>
    where
        M: MessageCatalog + ?Sized,
    {
        let dir = export::ensure_output_dir(output_dir)?;
        let file = self.generate(component, messages)?;
        export::write_file(&dir, &file)
    }

    /// Generates every component into `output_dir`, one file at a time.
    ///
    /// The directory is checked before anything is rendered or written.
    /// The first failure aborts the run; files already written are kept.
    ///
    /// # Errors
    ///
    /// Returns [`zapgen_core::Error::OutputDirMissing`] if `output_dir`
    /// does not exist, or the first rendering/I/O error.
    pub fn generate_all_to<R, M>(
        &self,
        registry: &R,
        messages: &M,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>>
    where
        R: ApiRegistry + ?Sized,
        M: MessageCatalog + ?Sized,
    {
        let dir = export::ensure_output_dir(output_dir)?;

        let mut written = Vec::with_capacity(registry.components().len());
        for component in registry.components() {
            let file = self.generate(component, messages)?;
            written.push(export::write_file(&dir, &file)?);
        }

        tracing::info!("Generated {} client modules in {}", written.len(), dir.display());
        Ok(written)
    }
}
