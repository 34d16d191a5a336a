//! Output formatters for CLI reports.
//!
//! Every command reports through [`format_output`], so `--format` behaves
//! the same everywhere.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use zapgen_core::cli::OutputFormat;

/// Formats a report according to the output format.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use zapgen_cli::formatters::format_output;
/// use zapgen_core::cli::OutputFormat;
///
/// #[derive(Serialize)]
/// struct Summary {
///     files: usize,
/// }
///
/// let output = format_output(&Summary { files: 2 }, OutputFormat::Text)?;
/// assert_eq!(output, "files: 2");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(text::format(&serde_json::to_value(data)?)),
        OutputFormat::Pretty => Ok(pretty::format(&serde_json::to_value(data)?)),
    }
}

/// Plain `key: value` lines, suitable for grepping.
pub mod text {
    use super::Value;

    /// Flattens a value into one line per leaf, keyed by its dotted path.
    #[must_use]
    pub fn format(value: &Value) -> String {
        let mut lines = Vec::new();
        flatten(value, "", &mut lines);
        lines.join("\n")
    }

    fn flatten(value: &Value, path: &str, lines: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    flatten(child, &join(path, key), lines);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    flatten(child, &join(path, &index.to_string()), lines);
                }
            }
            Value::String(s) => lines.push(format!("{path}: {s}")),
            other => lines.push(format!("{path}: {other}")),
        }
    }

    fn join(path: &str, key: &str) -> String {
        if path.is_empty() {
            key.to_string()
        } else {
            format!("{path}.{key}")
        }
    }
}

/// Colorized, indented output for terminals.
pub mod pretty {
    use super::{Colorize, Value};

    /// Renders a value as an indented outline.
    #[must_use]
    pub fn format(value: &Value) -> String {
        let mut out = Vec::new();
        render(value, 0, &mut out);
        out.join("\n")
    }

    fn render(value: &Value, indent: usize, out: &mut Vec<String>) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    if is_scalar(child) {
                        out.push(format!("{pad}{}: {}", key.blue().bold(), scalar(child)));
                    } else if is_empty(child) {
                        out.push(format!("{pad}{}: {}", key.blue().bold(), "none".dimmed()));
                    } else {
                        out.push(format!("{pad}{}:", key.blue().bold()));
                        render(child, indent + 1, out);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if is_scalar(item) {
                        out.push(format!("{pad}- {}", scalar(item)));
                    } else {
                        out.push(format!("{pad}-"));
                        render(item, indent + 1, out);
                    }
                }
            }
            scalar_value => out.push(format!("{pad}{}", scalar(scalar_value))),
        }
    }

    fn is_scalar(value: &Value) -> bool {
        !matches!(value, Value::Object(_) | Value::Array(_))
    }

    fn is_empty(value: &Value) -> bool {
        match value {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Object(_) | Value::Array(_) => value.to_string(),
        }
    }
}
