//! API definitions loaded from a JSON file.
//!
//! The file lists components in generation order:
//!
//! ```json
//! {
//!   "components": [
//!     {
//!       "prefix": "core",
//!       "views": [{"name": "alerts", "parameters": [{"name": "baseurl"}]}],
//!       "actions": [{"name": "setMode", "parameters": [{"name": "Mode", "required": true}]}],
//!       "others": [{"name": "rootcert"}]
//!     }
//!   ]
//! }
//! ```
//!
//! Endpoints without a `description_tag` get the default
//! `{prefix}.api.{kind}.{name}` key.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use zapgen_core::{
    ApiRegistry, ComponentDescriptor, EndpointDescriptor, EndpointKind, Error,
    ParameterDescriptor, Result,
};

#[derive(Debug, Deserialize)]
struct DefinitionFile {
    components: Vec<ComponentDefinition>,
}

#[derive(Debug, Deserialize)]
struct ComponentDefinition {
    prefix: String,
    #[serde(default)]
    views: Vec<EndpointDefinition>,
    #[serde(default)]
    actions: Vec<EndpointDefinition>,
    #[serde(default)]
    others: Vec<EndpointDefinition>,
}

#[derive(Debug, Deserialize)]
struct EndpointDefinition {
    name: String,
    #[serde(default)]
    parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    description_tag: Option<String>,
}

impl ComponentDefinition {
    fn into_descriptor(self) -> ComponentDescriptor {
        let mut component = ComponentDescriptor::new(self.prefix);
        let grouped = [
            (EndpointKind::View, self.views),
            (EndpointKind::Action, self.actions),
            (EndpointKind::Other, self.others),
        ];
        for (kind, endpoints) in grouped {
            for def in endpoints {
                let mut endpoint = EndpointDescriptor::new(def.name, kind);
                endpoint.parameters = def.parameters;
                if let Some(tag) = def.description_tag {
                    endpoint.description_tag = tag;
                }
                component.add_endpoint(endpoint);
            }
        }
        component
    }
}

/// Registry backed by a JSON definition file.
///
/// # Examples
///
/// ```
/// use zapgen_core::ApiRegistry;
/// use zapgen_registry::FileRegistry;
///
/// let json = r#"{"components": [{"prefix": "core", "views": [{"name": "alerts"}]}]}"#;
/// let registry = FileRegistry::from_json_str(json, "inline").unwrap();
///
/// let core = registry.component("core").unwrap();
/// assert_eq!(core.views[0].description_tag, "core.api.view.alerts");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    components: Vec<ComponentDescriptor>,
}

impl FileRegistry {
    /// Reads and parses a definition file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::DefinitionParse`] if it is not a valid definition document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json_str(&content, &path.display().to_string())?;

        tracing::info!(
            "Loaded {} components from {}",
            registry.components.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parses definitions from a JSON string.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefinitionParse`] if the JSON is malformed or does
    /// not match the definition layout.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        let file: DefinitionFile =
            serde_json::from_str(json).map_err(|source| Error::DefinitionParse {
                path: origin.to_string(),
                source,
            })?;

        let components = file
            .components
            .into_iter()
            .map(ComponentDefinition::into_descriptor)
            .collect();
        Ok(Self { components })
    }
}

impl From<Vec<ComponentDescriptor>> for FileRegistry {
    fn from(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }
}

impl ApiRegistry for FileRegistry {
    fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE: &str = r#"{
        "components": [
            {
                "prefix": "core",
                "views": [
                    {"name": "alerts", "parameters": [{"name": "baseurl"}, {"name": "start"}]},
                    {"name": "version"}
                ],
                "actions": [
                    {
                        "name": "setMode",
                        "parameters": [{"name": "Mode", "required": true}],
                        "description_tag": "core.api.action.setMode.custom"
                    }
                ],
                "others": [{"name": "rootcert"}]
            },
            {"prefix": "spider"}
        ]
    }"#;

    #[test]
    fn test_parse_components_in_order() {
        let registry = FileRegistry::from_json_str(CORE, "test").unwrap();
        let prefixes: Vec<_> = registry.components().iter().map(|c| c.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["core", "spider"]);
    }

    #[test]
    fn test_parse_endpoints_by_kind() {
        let registry = FileRegistry::from_json_str(CORE, "test").unwrap();
        let core = registry.component("core").unwrap();

        assert_eq!(core.views.len(), 2);
        assert_eq!(core.actions.len(), 1);
        assert_eq!(core.others.len(), 1);
        assert_eq!(core.views[0].kind, EndpointKind::View);
        assert_eq!(core.others[0].kind, EndpointKind::Other);
    }

    #[test]
    fn test_parse_parameters_keep_order_and_flags() {
        let registry = FileRegistry::from_json_str(CORE, "test").unwrap();
        let core = registry.component("core").unwrap();

        let alerts = &core.views[0];
        assert_eq!(alerts.parameters[0].name, "baseurl");
        assert_eq!(alerts.parameters[1].name, "start");
        assert!(!alerts.parameters[0].required);
        assert!(core.actions[0].parameters[0].required);
    }

    #[test]
    fn test_description_tags() {
        let registry = FileRegistry::from_json_str(CORE, "test").unwrap();
        let core = registry.component("core").unwrap();

        assert_eq!(core.views[1].description_tag, "core.api.view.version");
        assert_eq!(core.actions[0].description_tag, "core.api.action.setMode.custom");
        assert_eq!(core.others[0].description_tag, "core.api.other.rootcert");
    }

    #[test]
    fn test_empty_component() {
        let registry = FileRegistry::from_json_str(CORE, "test").unwrap();
        let spider = registry.component("spider").unwrap();
        assert_eq!(spider.endpoint_count(), 0);
    }

    #[test]
    fn test_malformed_json() {
        let err = FileRegistry::from_json_str("{\"components\": [", "broken.json").unwrap_err();
        assert!(err.is_definition_error());
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        let err =
            FileRegistry::from_json_str(r#"{"components": [{"views": []}]}"#, "x").unwrap_err();
        assert!(err.is_definition_error());
    }

    #[test]
    fn test_from_missing_path() {
        let err = FileRegistry::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.is_io_error());
    }
}
