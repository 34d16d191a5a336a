//! API descriptors consumed by the generators.
//!
//! A [`ComponentDescriptor`] groups the endpoints of one API component
//! (`core`, `spider`, `ascan`, ...) into views, actions and others. The
//! descriptors are owned by whichever registry produced them; generators
//! only borrow them for the duration of one pass.
//!
//! # Examples
//!
//! ```
//! use zapgen_core::{ComponentDescriptor, EndpointDescriptor, EndpointKind, ParameterDescriptor};
//!
//! let mut core = ComponentDescriptor::new("core");
//! core.add_endpoint(EndpointDescriptor::new("alerts", EndpointKind::View));
//! core.add_endpoint(
//!     EndpointDescriptor::new("setMode", EndpointKind::Action)
//!         .with_parameter(ParameterDescriptor::required("Mode")),
//! );
//!
//! assert_eq!(core.endpoint_count(), 2);
//! assert_eq!(core.actions[0].description_tag, "core.api.action.setMode");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    /// Read-only call without side effects
    View,
    /// Call that mutates proxy state
    Action,
    /// Non-standard request shape (binary payloads, raw responses)
    Other,
}

impl EndpointKind {
    /// Returns the path segment used for this kind in API URLs.
    ///
    /// # Examples
    ///
    /// ```
    /// use zapgen_core::EndpointKind;
    ///
    /// assert_eq!(EndpointKind::View.as_str(), "view");
    /// assert_eq!(EndpointKind::Other.as_str(), "other");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Action => "action",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single endpoint parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name as sent on the wire
    pub name: String,
    /// Whether callers must supply the parameter
    #[serde(default)]
    pub required: bool,
}

impl ParameterDescriptor {
    /// Creates a mandatory parameter.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    /// Creates an optional parameter.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// One callable operation exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Endpoint name as it appears in the request path
    pub name: String,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,
    /// View, action or other
    pub kind: EndpointKind,
    /// Key used to look up the localized description
    pub description_tag: String,
}

impl EndpointDescriptor {
    /// Creates an endpoint with no parameters.
    ///
    /// The description tag is left empty and filled in with the default
    /// layout when the endpoint is added to a [`ComponentDescriptor`].
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EndpointKind) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            kind,
            description_tag: String::new(),
        }
    }

    /// Appends a parameter, keeping declaration order.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Overrides the description lookup key.
    #[must_use]
    pub fn with_description_tag(mut self, tag: impl Into<String>) -> Self {
        self.description_tag = tag.into();
        self
    }

    /// Returns `true` if the endpoint declares any parameter.
    #[inline]
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Iterates over the mandatory parameters in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// Iterates over the optional parameters in declaration order.
    pub fn optional_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| !p.required)
    }
}

/// Default description key for an endpoint of a component.
///
/// # Examples
///
/// ```
/// use zapgen_core::{default_description_tag, EndpointKind};
///
/// assert_eq!(
///     default_description_tag("spider", EndpointKind::View, "status"),
///     "spider.api.view.status"
/// );
/// ```
#[must_use]
pub fn default_description_tag(prefix: &str, kind: EndpointKind, name: &str) -> String {
    format!("{prefix}.api.{kind}.{name}")
}

/// A named group of endpoints sharing a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Component prefix, used in request paths and output names
    pub prefix: String,
    /// Read-only endpoints
    pub views: Vec<EndpointDescriptor>,
    /// State-changing endpoints
    pub actions: Vec<EndpointDescriptor>,
    /// Endpoints with non-standard request shapes
    pub others: Vec<EndpointDescriptor>,
}

impl ComponentDescriptor {
    /// Creates an empty component.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Adds an endpoint to the collection matching its kind.
    ///
    /// An empty description tag is replaced by
    /// [`default_description_tag`].
    pub fn add_endpoint(&mut self, mut endpoint: EndpointDescriptor) {
        if endpoint.description_tag.is_empty() {
            endpoint.description_tag =
                default_description_tag(&self.prefix, endpoint.kind, &endpoint.name);
        }
        match endpoint.kind {
            EndpointKind::View => self.views.push(endpoint),
            EndpointKind::Action => self.actions.push(endpoint),
            EndpointKind::Other => self.others.push(endpoint),
        }
    }

    /// Iterates over all endpoints: views, then actions, then others.
    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.views
            .iter()
            .chain(self.actions.iter())
            .chain(self.others.iter())
    }

    /// Total number of endpoints.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.views.len() + self.actions.len() + self.others.len()
    }
}
