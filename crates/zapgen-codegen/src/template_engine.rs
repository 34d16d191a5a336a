//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars with the built-in module templates registered and HTML
//! escaping disabled, since the output is source code.
//!
//! # Examples
//!
//! ```
//! use zapgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"year": 2024, "class_name": "core", "functions": []});
//! let module = engine.render("python/module", &context).unwrap();
//! assert!(module.contains("class core(object):"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use zapgen_core::{Error, Result};

/// Template engine for code generation.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_python_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_python_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        // Module frame: license header, imports, class, then functions
        handlebars
            .register_template_string(
                "python/module",
                include_str!("../templates/python/module.py.hbs"),
            )
            .map_err(|e| Error::Template {
                message: format!("Failed to register python module template: {e}"),
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable the template uses is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("Template rendering failed: {e}"),
            })
    }
}
