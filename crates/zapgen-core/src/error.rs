//! Error types for ZAP API client generation.
//!
//! Every library crate in the workspace reports failures through the single
//! [`Error`] enum defined here. The CLI wraps these with `anyhow` context.
//!
//! # Examples
//!
//! ```
//! use zapgen_core::{Error, Result};
//!
//! fn check_prefix(prefix: &str) -> Result<()> {
//!     if prefix.is_empty() {
//!         return Err(Error::InvalidArgument(
//!             "component prefix cannot be empty".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_prefix("").unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use thiserror::Error;

/// Main error type for client generation.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured output directory does not exist. It is never created.
    #[error("The directory does not exist: {path}")]
    OutputDirMissing {
        /// Absolute path that was expected to exist
        path: String,
    },

    /// I/O failure while reading input or writing a generated file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
    },

    /// The API definition file could not be parsed.
    #[error("Failed to parse API definitions in {path}: {source}")]
    DefinitionParse {
        /// Definition file path
        path: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error.
    ///
    /// Raised when the configuration file is unreadable or contains
    /// invalid values.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if the output directory was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use zapgen_core::Error;
    ///
    /// let err = Error::OutputDirMissing {
    ///     path: "/nowhere".to_string(),
    /// };
    /// assert!(err.is_output_dir_missing());
    /// ```
    #[must_use]
    pub const fn is_output_dir_missing(&self) -> bool {
        matches!(self, Self::OutputDirMissing { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::Template { .. })
    }

    /// Returns `true` if the API definitions could not be parsed.
    #[must_use]
    pub const fn is_definition_error(&self) -> bool {
        matches!(self, Self::DefinitionParse { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use zapgen_core::Error;
    ///
    /// let err = Error::Config {
    ///     message: "unknown key".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
