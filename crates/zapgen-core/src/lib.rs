//! Core descriptors, traits, and errors for ZAP API client generation.
//!
//! This crate provides the types shared by every other crate in the
//! workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - API descriptors (`ComponentDescriptor`, `EndpointDescriptor`, `ParameterDescriptor`)
//! - The `ApiRegistry` and `MessageCatalog` seams the generator reads through
//! - The error type used by all library crates
//! - CLI value types (`ExitCode`, `OutputFormat`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod traits;
mod types;

pub mod cli;

pub use error::{Error, Result};
pub use traits::{ApiRegistry, EmptyCatalog, MessageCatalog};
pub use types::{
    ComponentDescriptor, EndpointDescriptor, EndpointKind, ParameterDescriptor,
    default_description_tag,
};
