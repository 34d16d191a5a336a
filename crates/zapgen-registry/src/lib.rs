//! File-backed API model for ZAP API client generation.
//!
//! Provides the two collaborators the generator reads from:
//! - [`FileRegistry`]: component descriptions from a JSON definition file
//! - [`PropertiesCatalog`]: localized descriptions from a `.properties` bundle

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod definitions;
pub mod messages;

pub use definitions::FileRegistry;
pub use messages::PropertiesCatalog;
