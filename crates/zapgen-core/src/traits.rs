//! Seams between the generator and the API model.
//!
//! The generator never knows where descriptors or localized strings come
//! from. It asks an [`ApiRegistry`] for components and a
//! [`MessageCatalog`] for descriptions.

use crate::ComponentDescriptor;
use std::collections::HashMap;

/// Source of API component descriptions.
pub trait ApiRegistry {
    /// Returns every known component, in generation order.
    fn components(&self) -> &[ComponentDescriptor];

    /// Finds a component by its exact prefix.
    fn component(&self, prefix: &str) -> Option<&ComponentDescriptor> {
        self.components().iter().find(|c| c.prefix == prefix)
    }
}

impl ApiRegistry for Vec<ComponentDescriptor> {
    fn components(&self) -> &[ComponentDescriptor] {
        self
    }
}

/// Localized message lookup keyed by description tag.
///
/// A missing key is an ordinary outcome, not an error.
pub trait MessageCatalog {
    /// Returns the message for `key`, if one is defined.
    fn message(&self, key: &str) -> Option<&str>;
}

impl MessageCatalog for HashMap<String, String> {
    fn message(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Catalog with no entries.
///
/// Useful when descriptions are not available; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl MessageCatalog for EmptyCatalog {
    fn message(&self, _key: &str) -> Option<&str> {
        None
    }
}
