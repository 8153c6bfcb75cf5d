//! Endpoint descriptors.
//!
//! A [`Descriptor`] is the declarative shape of one paginated collection
//! endpoint: its singular name, the entity it returns, the path template
//! with positional placeholders and the query parameters it accepts.
//!
//! Descriptors are immutable once built. Validation is eager: an empty
//! `name` or `entity` is rejected at construction time.
//!
//! # Examples
//!
//! ```
//! use colgen_core::{Descriptor, TypeTag};
//!
//! let descriptor = Descriptor::builder("RAMOption", "RAMOption")
//!     .path("/locations/%d/order_options/server_models/%d/ram")
//!     .arg("LocationID", TypeTag::Int64)
//!     .arg("ServerModelID", TypeTag::Int64)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(descriptor.args().len(), 2);
//! assert_eq!(descriptor.placeholders(), vec![TypeTag::Int64, TypeTag::Int64]);
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of a positional argument or query parameter.
///
/// The set is closed: these are the only types the generated client
/// code knows how to format into a path or a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// 64-bit signed integer
    Int64,
    /// UTF-8 string
    String,
}

impl TypeTag {
    /// Returns the type name as it appears in generated source.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::TypeTag;
    ///
    /// assert_eq!(TypeTag::Int64.as_str(), "int64");
    /// assert_eq!(TypeTag::String.as_str(), "string");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::String => "string",
        }
    }

    /// Returns the path placeholder consumed by a value of this type.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Int64 => "%d",
            Self::String => "%s",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int64" => Ok(Self::Int64),
            "string" => Ok(Self::String),
            _ => Err(Error::InvalidArgument(format!(
                "unknown type tag: '{s}' (expected: int64 or string)"
            ))),
        }
    }
}

/// Declarative description of one collection endpoint.
///
/// Constructed once per endpoint, consumed by a generator and discarded.
/// Use [`Descriptor::builder`] to create one.
///
/// # Examples
///
/// ```
/// use colgen_core::Descriptor;
///
/// let host = Descriptor::builder("Host", "Host").path("/hosts").build().unwrap();
///
/// assert_eq!(host.name(), "Host");
/// assert_eq!(host.plural_name(), None);
/// assert!(host.args().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub struct Descriptor {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    plural_name: Option<String>,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    var_prefix: Option<String>,
    entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    args: IndexMap<String, TypeTag>,
    params: IndexMap<String, TypeTag>,
}

impl Descriptor {
    /// Starts building a descriptor for the collection `name` of `entity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::Descriptor;
    ///
    /// let networks = Descriptor::builder("L2Network", "Network")
    ///     .path("/l2_segments/%s/networks")
    ///     .var_prefix("l2Networks")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(networks.entity(), "Network");
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>, entity: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder {
            name: name.into(),
            entity: entity.into(),
            ..DescriptorBuilder::default()
        }
    }

    /// Singular collection type name, e.g. `SSLCertificate`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit plural form, if one was declared.
    #[must_use]
    pub fn plural_name(&self) -> Option<&str> {
        self.plural_name.as_deref()
    }

    /// Path template with `%d` / `%s` placeholders left unresolved.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Explicit variable prefix, if one was declared.
    #[must_use]
    pub fn var_prefix(&self) -> Option<&str> {
        self.var_prefix.as_deref()
    }

    /// Element type returned by the collection.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Documentation reference carried into the generated source.
    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Positional path arguments in declaration order.
    #[must_use]
    pub const fn args(&self) -> &IndexMap<String, TypeTag> {
        &self.args
    }

    /// Query parameters in declaration order, keyed by wire name.
    #[must_use]
    pub const fn params(&self) -> &IndexMap<String, TypeTag> {
        &self.params
    }

    /// Parses the positional placeholders out of the path template.
    ///
    /// `%d` yields [`TypeTag::Int64`], `%s` yields [`TypeTag::String`],
    /// `%%` is a literal percent sign. Any other `%` sequence is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::{Descriptor, TypeTag};
    ///
    /// let d = Descriptor::builder("HostConnection", "HostConnection")
    ///     .path("/hosts/%s/%s/connections")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(d.placeholders(), vec![TypeTag::String, TypeTag::String]);
    /// ```
    #[must_use]
    pub fn placeholders(&self) -> Vec<TypeTag> {
        let mut tags = Vec::new();
        let mut chars = self.path.chars();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                continue;
            }
            match chars.next() {
                Some('d') => tags.push(TypeTag::Int64),
                Some('s') => tags.push(TypeTag::String),
                _ => {}
            }
        }

        tags
    }

    /// Verifies that `args` match the path placeholders in count and order.
    ///
    /// Generation does not depend on this check; a mismatch only produces
    /// client source that fails to compile downstream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaceholderMismatch`] when the declared argument
    /// types differ from the placeholder sequence.
    pub fn check_placeholders(&self) -> Result<()> {
        let declared: Vec<TypeTag> = self.args.values().copied().collect();
        let found = self.placeholders();

        if declared == found {
            return Ok(());
        }

        Err(Error::PlaceholderMismatch {
            collection: self.name.clone(),
            expected: join_tags(&declared),
            found: join_tags(&found),
        })
    }
}

fn join_tags(tags: &[TypeTag]) -> String {
    tags.iter()
        .map(TypeTag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for [`Descriptor`].
///
/// # Examples
///
/// ```
/// use colgen_core::{Descriptor, TypeTag};
///
/// let certs = Descriptor::builder("SSLCertificate", "SSLCertificate")
///     .path("/ssl_certificates")
///     .var_prefix("sslCertificate")
///     .param("search_pattern", TypeTag::String)
///     .param("type", TypeTag::String)
///     .build()
///     .unwrap();
///
/// assert_eq!(certs.params().len(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct DescriptorBuilder {
    name: String,
    plural_name: Option<String>,
    path: String,
    var_prefix: Option<String>,
    entity: String,
    api_url: Option<String>,
    args: IndexMap<String, TypeTag>,
    params: IndexMap<String, TypeTag>,
}

impl DescriptorBuilder {
    /// Sets the path template.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the default `name + "s"` plural form.
    #[must_use]
    pub fn plural_name(mut self, plural_name: impl Into<String>) -> Self {
        self.plural_name = Some(plural_name.into());
        self
    }

    /// Overrides the variable prefix derived from the entity.
    #[must_use]
    pub fn var_prefix(mut self, var_prefix: impl Into<String>) -> Self {
        self.var_prefix = Some(var_prefix.into());
        self
    }

    /// Sets the documentation URL.
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Appends a positional path argument.
    ///
    /// Re-declaring an existing name replaces its type and keeps its position.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.args.insert(name.into(), tag);
        self
    }

    /// Appends a query parameter by wire name.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.params.insert(name.into(), tag);
        self
    }

    /// Builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDescriptor`] if `name` or `entity` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_core::Descriptor;
    ///
    /// assert!(Descriptor::builder("", "Host").build().is_err());
    /// assert!(Descriptor::builder("Host", "").build().is_err());
    /// ```
    pub fn build(self) -> Result<Descriptor> {
        require_non_empty("name", &self.name)?;
        require_non_empty("entity", &self.entity)?;

        Ok(Descriptor {
            name: self.name,
            plural_name: self.plural_name,
            path: self.path,
            var_prefix: self.var_prefix,
            entity: self.entity,
            api_url: self.api_url,
            args: self.args,
            params: self.params,
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidDescriptor {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Wire form of a descriptor before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDescriptor {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) plural_name: Option<String>,
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) var_prefix: Option<String>,
    pub(crate) entity: String,
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    #[serde(default)]
    pub(crate) args: IndexMap<String, TypeTag>,
    #[serde(default)]
    pub(crate) params: IndexMap<String, TypeTag>,
}

impl TryFrom<RawDescriptor> for Descriptor {
    type Error = Error;

    fn try_from(raw: RawDescriptor) -> Result<Self> {
        DescriptorBuilder {
            name: raw.name,
            plural_name: raw.plural_name,
            path: raw.path,
            var_prefix: raw.var_prefix,
            entity: raw.entity,
            api_url: raw.api_url,
            args: raw.args,
            params: raw.params,
        }
        .build()
    }
}
