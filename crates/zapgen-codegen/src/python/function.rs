//! Structured form of one generated Python method.
//!
//! Planners decide *what* a method contains; [`PyFunction::render`] is the
//! only place that decides how it is laid out.

/// Indentation of a method definition inside the class body.
const METHOD_INDENT: &str = "    ";
/// Indentation of statements inside a method body.
const BODY_INDENT: &str = "        ";

/// One parameter in a method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyParam {
    /// Python parameter name
    pub name: String,
    /// Default value expression, if any
    pub default: Option<String>,
}

impl PyParam {
    /// Parameter without a default.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Parameter with a default value expression.
    #[must_use]
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

/// A Python method of the generated component class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PyFunction {
    /// Method name
    pub name: String,
    /// Emit as a `@property` accessor
    pub property: bool,
    /// Parameters after `self`
    pub params: Vec<PyParam>,
    /// Docstring lines; `None` omits the docstring
    pub docstring: Option<Vec<String>>,
    /// Body statements, indented relative to the method body
    pub body: Vec<String>,
}

impl PyFunction {
    /// Renders the method, without a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use zapgen_codegen::python::{PyFunction, PyParam};
    ///
    /// let function = PyFunction {
    ///     name: "status".to_string(),
    ///     params: vec![PyParam::with_default("scanid", "None")],
    ///     body: vec!["return scanid".to_string()],
    ///     ..PyFunction::default()
    /// };
    ///
    /// assert_eq!(
    ///     function.render(),
    ///     "    def status(self, scanid=None):\n        return scanid"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.body.len() + 4);

        if self.property {
            lines.push(format!("{METHOD_INDENT}@property"));
        }

        let mut signature = format!("{METHOD_INDENT}def {}(self", self.name);
        for param in &self.params {
            signature.push_str(", ");
            signature.push_str(&param.name);
            if let Some(default) = &param.default {
                signature.push('=');
                signature.push_str(default);
            }
        }
        signature.push_str("):");
        lines.push(signature);

        if let Some(docstring) = &self.docstring {
            lines.push(format!("{BODY_INDENT}\"\"\""));
            lines.extend(docstring.iter().map(|line| format!("{BODY_INDENT}{line}")));
            lines.push(format!("{BODY_INDENT}\"\"\""));
        }

        lines.extend(self.body.iter().map(|stmt| format!("{BODY_INDENT}{stmt}")));

        lines.join("\n")
    }
}
