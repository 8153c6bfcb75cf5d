//! Error types for the collection generator.
//!
//! One error hierarchy is shared by every crate in the workspace. Each
//! variant corresponds to a failure family: malformed descriptors, template
//! problems, filesystem writes and configuration loading.
//!
//! # Examples
//!
//! ```
//! use colgen_core::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::InvalidDescriptor {
//!             field: "name".to_string(),
//!             reason: "must not be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_name("").unwrap_err();
//! assert!(err.is_descriptor_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the collection generator.
///
/// All library operations return this type. A failure is always terminal
/// for the single descriptor being processed; callers driving a batch
/// decide whether to continue with the remaining descriptors.
#[derive(Error, Debug)]
pub enum Error {
    /// Descriptor failed eager validation.
    ///
    /// Raised when a required descriptor field (`name`, `entity`) is empty.
    #[error("Invalid descriptor: {field} {reason}")]
    InvalidDescriptor {
        /// The descriptor field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Positional path placeholders disagree with the declared arguments.
    ///
    /// Only produced by explicit checks; generation itself does not gate on it.
    #[error(
        "Collection '{collection}' declares arguments [{expected}] but its path has placeholders [{found}]"
    )]
    PlaceholderMismatch {
        /// Collection type name
        collection: String,
        /// Type tags of the declared arguments, comma separated
        expected: String,
        /// Type tags of the path placeholders, comma separated
        found: String,
    },

    /// Template registration or rendering failed.
    ///
    /// Covers syntax errors, unknown template names and missing bindings.
    #[error("Template '{template}' failed: {message}")]
    TemplateError {
        /// Name of the template involved
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Filesystem operation failed.
    ///
    /// Propagated unchanged from the underlying I/O call, no retry.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when a descriptor table cannot be parsed or is inconsistent.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when a value cannot be parsed, such as an unknown type tag.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a descriptor validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::Error;
    ///
    /// let err = Error::InvalidDescriptor {
    ///     field: "entity".to_string(),
    ///     reason: "must not be empty".to_string(),
    /// };
    /// assert!(err.is_descriptor_error());
    /// ```
    #[must_use]
    pub const fn is_descriptor_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDescriptor { .. } | Self::PlaceholderMismatch { .. }
        )
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     template: "collection".to_string(),
    ///     message: "unclosed tag".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a filesystem error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "duplicate output".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use colgen_core::{Error, Result};
///
/// fn parse_flag(value: &str) -> Result<bool> {
///     match value {
///         "yes" => Ok(true),
///         "no" => Ok(false),
///         other => Err(Error::InvalidArgument(format!("unexpected '{other}'"))),
///     }
/// }
///
/// assert!(parse_flag("yes").is_ok());
/// assert!(parse_flag("maybe").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
