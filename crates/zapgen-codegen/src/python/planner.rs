//! Per-endpoint planning of Python methods.
//!
//! Each endpoint kind has its own planner:
//!
//! | kind   | signature                    | request                            | result    |
//! |--------|------------------------------|------------------------------------|-----------|
//! | view   | params (`@property` if none) | `_request(base + ...)`             | unwrapped |
//! | action | params + `apikey=''`         | `_request(base + ...)`             | unwrapped |
//! | other  | params + `apikey=''`         | `_request_other(base_other + ...)` | raw       |

use super::function::{PyFunction, PyParam};
use crate::naming::IdentifierNormalizer;
use zapgen_core::{EndpointDescriptor, EndpointKind, MessageCatalog};

/// Name of the implicit API key parameter.
pub const API_KEY_PARAM: &str = "apikey";

/// Docstring notice for components that are not always installed.
pub const OPTIONAL_MESSAGE: &str =
    "This component is optional and therefore the API will only work if it is installed";

/// Plans the methods of one component.
#[derive(Debug)]
pub struct FunctionPlanner<'a, M: MessageCatalog + ?Sized> {
    normalizer: &'a IdentifierNormalizer,
    messages: &'a M,
    optional: bool,
}

impl<'a, M: MessageCatalog + ?Sized> FunctionPlanner<'a, M> {
    /// Creates a planner.
    ///
    /// `optional` adds [`OPTIONAL_MESSAGE`] to every docstring.
    #[must_use]
    pub const fn new(
        normalizer: &'a IdentifierNormalizer,
        messages: &'a M,
        optional: bool,
    ) -> Self {
        Self {
            normalizer,
            messages,
            optional,
        }
    }

    /// Plans the method for `endpoint` of the component `prefix`.
    #[must_use]
    pub fn plan(&self, prefix: &str, endpoint: &EndpointDescriptor) -> PyFunction {
        match endpoint.kind {
            EndpointKind::View => self.plan_view(prefix, endpoint),
            EndpointKind::Action => self.plan_action(prefix, endpoint),
            EndpointKind::Other => self.plan_other(prefix, endpoint),
        }
    }

    fn plan_view(&self, prefix: &str, endpoint: &EndpointDescriptor) -> PyFunction {
        let mut function = self.skeleton(endpoint);
        function.property = !endpoint.has_parameters();

        let payload = endpoint
            .has_parameters()
            .then(|| build_payload(endpoint, &mut function.body));
        function.body.push(unwrapped_call(prefix, endpoint, payload.as_deref()));
        function
    }

    fn plan_action(&self, prefix: &str, endpoint: &EndpointDescriptor) -> PyFunction {
        let mut function = self.skeleton(endpoint);
        function.params.push(api_key_param());

        let payload = build_payload(endpoint, &mut function.body);
        function.body.push(unwrapped_call(prefix, endpoint, Some(&payload)));
        function
    }

    fn plan_other(&self, prefix: &str, endpoint: &EndpointDescriptor) -> PyFunction {
        let mut function = self.skeleton(endpoint);
        function.params.push(api_key_param());

        let payload = build_payload(endpoint, &mut function.body);
        function.body.push(raw_call(prefix, endpoint, Some(&payload)));
        function
    }

    /// Name, declared parameters and docstring, shared by every kind.
    fn skeleton(&self, endpoint: &EndpointDescriptor) -> PyFunction {
        let params = endpoint
            .parameters
            .iter()
            .map(|p| {
                let name = variable_name(&p.name);
                if p.required {
                    PyParam::required(name)
                } else {
                    PyParam::with_default(name, "None")
                }
            })
            .collect();

        PyFunction {
            name: self.normalizer.function_name(&endpoint.name),
            property: false,
            params,
            docstring: self.docstring(endpoint),
            body: Vec::new(),
        }
    }

    fn docstring(&self, endpoint: &EndpointDescriptor) -> Option<Vec<String>> {
        let tag = &endpoint.description_tag;
        if let Some(description) = self.messages.message(tag) {
            let mut lines = vec![description.to_string()];
            if self.optional {
                lines.push(OPTIONAL_MESSAGE.to_string());
            }
            return Some(lines);
        }

        tracing::warn!("No i18n for: {tag}");
        self.optional.then(|| vec![OPTIONAL_MESSAGE.to_string()])
    }
}

fn api_key_param() -> PyParam {
    PyParam::with_default(API_KEY_PARAM, "''")
}

/// Python variable for an API parameter name.
fn variable_name(name: &str) -> String {
    name.to_lowercase()
}

/// Emits the payload set-up statements and returns the payload expression.
///
/// Mandatory parameters go in a dict literal keyed by their wire names.
/// With optional parameters, the dict is bound to `params` and each
/// optional value is added only when the caller supplied it.
fn build_payload(endpoint: &EndpointDescriptor, body: &mut Vec<String>) -> String {
    let mandatory = endpoint
        .required_parameters()
        .map(|p| format!("'{}': {}", p.name, variable_name(&p.name)))
        .collect::<Vec<_>>()
        .join(", ");
    let literal = format!("{{{mandatory}}}");

    let mut optional = endpoint.optional_parameters().peekable();
    if optional.peek().is_none() {
        return literal;
    }

    body.push(format!("params = {literal}"));
    for param in optional {
        let var = variable_name(&param.name);
        body.push(format!("if {var} is not None:"));
        body.push(format!("    params['{}'] = {var}", param.name));
    }
    "params".to_string()
}

fn request_path(prefix: &str, endpoint: &EndpointDescriptor) -> String {
    format!("'{prefix}/{}/{}/'", endpoint.kind, endpoint.name)
}

/// View and action calls: the single-entry result is unwrapped.
fn unwrapped_call(prefix: &str, endpoint: &EndpointDescriptor, payload: Option<&str>) -> String {
    let path = request_path(prefix, endpoint);
    match payload {
        Some(payload) => format!(
            "return six.next(six.itervalues(self.zap._request(self.zap.base + {path}, {payload})))"
        ),
        None => format!(
            "return six.next(six.itervalues(self.zap._request(self.zap.base + {path})))"
        ),
    }
}

/// Other calls bypass the standard wrapper and return the raw result.
fn raw_call(prefix: &str, endpoint: &EndpointDescriptor, payload: Option<&str>) -> String {
    let path = request_path(prefix, endpoint);
    match payload {
        Some(payload) => {
            format!("return (self.zap._request_other(self.zap.base_other + {path}, {payload}))")
        }
        None => format!("return (self.zap._request_other(self.zap.base_other + {path}))"),
    }
}
