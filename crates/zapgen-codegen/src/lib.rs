//! Python client code generation for the ZAP API.
//!
//! Transforms component descriptors into Python modules using Handlebars
//! templates, one module per component.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod export;
pub mod naming;
pub mod python;
pub mod template_engine;
pub mod types;

pub use naming::{IdentifierNormalizer, NameSubstitutions};
pub use python::{GeneratorOptions, PythonGenerator};
pub use types::{GeneratedCode, GeneratedFile};
