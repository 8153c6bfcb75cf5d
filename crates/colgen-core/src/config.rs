//! Descriptor table configuration.
//!
//! The descriptor table is plain data: an ordered list of collection
//! descriptors, each paired with the output file it is rendered into. It is
//! stored as TOML so the generator engine stays independent of the concrete
//! endpoint list.
//!
//! ```toml
//! [reserved_words]
//! range = "r"
//!
//! [[collection]]
//! output = "pkg/hosts_collection.go"
//! name = "Host"
//! path = "/hosts"
//! entity = "Host"
//! ```
//!
//! # Examples
//!
//! ```
//! use colgen_core::DescriptorTable;
//!
//! let table = DescriptorTable::from_toml_str(r#"
//!     [[collection]]
//!     output = "pkg/locations_collection.go"
//!     name = "Location"
//!     path = "/locations"
//!     entity = "Location"
//! "#).unwrap();
//!
//! assert_eq!(table.len(), 1);
//! assert!(table.find("Location").is_some());
//! ```

use crate::descriptor::{RawDescriptor, TypeTag};
use crate::{Descriptor, Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One row of the descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    output: PathBuf,
    descriptor: Descriptor,
}

impl TableEntry {
    /// Creates an entry rendering `descriptor` into `output`.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>, descriptor: Descriptor) -> Self {
        Self {
            output: output.into(),
            descriptor,
        }
    }

    /// Destination file, relative to the output root chosen by the caller.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The endpoint descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

/// Ordered list of collection descriptors and generation settings.
///
/// Table order is document order, which is also the generation order.
#[derive(Debug, Clone, Default)]
pub struct DescriptorTable {
    template: Option<PathBuf>,
    reserved_words: IndexMap<String, String>,
    entries: Vec<TableEntry>,
}

impl DescriptorTable {
    /// Builds a table from already constructed entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if two entries share a name or an output path.
    pub fn from_entries(entries: Vec<TableEntry>) -> Result<Self> {
        check_unique(&entries)?;
        Ok(Self {
            template: None,
            reserved_words: IndexMap::new(),
            entries,
        })
    }

    /// Parses a table from TOML text.
    ///
    /// A relative `template` path is kept as written; use [`DescriptorTable::load`]
    /// to resolve it against the table file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML, an entry
    /// fails descriptor validation, or names/outputs are duplicated.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawTable = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("failed to parse descriptor table: {e}"),
        })?;

        let mut entries = Vec::with_capacity(raw.collections.len());
        for (index, raw_entry) in raw.collections.into_iter().enumerate() {
            let (output, raw_descriptor) = raw_entry.into_parts();
            let descriptor =
                Descriptor::try_from(raw_descriptor).map_err(|e| Error::ConfigError {
                    message: format!("collection #{}: {e}", index + 1),
                })?;
            entries.push(TableEntry::new(output, descriptor));
        }

        check_unique(&entries)?;

        Ok(Self {
            template: raw.template,
            reserved_words: raw.reserved_words,
            entries,
        })
    }

    /// Reads and parses a table file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the same
    /// errors as [`DescriptorTable::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut table = Self::from_toml_str(&text)?;

        if let (Some(template), Some(base)) = (table.template.as_ref(), path.parent())
            && template.is_relative()
        {
            table.template = Some(base.join(template));
        }

        tracing::debug!(
            "Loaded {} collection descriptors from {}",
            table.len(),
            path.display()
        );

        Ok(table)
    }

    /// Entries in generation order.
    #[must_use]
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Looks up an entry by collection type name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TableEntry> {
        self.entries.iter().find(|e| e.descriptor.name() == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extra reserved-word remaps declared by the table.
    #[must_use]
    pub const fn reserved_words(&self) -> &IndexMap<String, String> {
        &self.reserved_words
    }

    /// Custom template file overriding the built-in one, if any.
    #[must_use]
    pub fn template(&self) -> Option<&Path> {
        self.template.as_deref()
    }
}

fn check_unique(entries: &[TableEntry]) -> Result<()> {
    let mut names = HashSet::new();
    let mut outputs = HashSet::new();

    for entry in entries {
        let name = entry.descriptor.name();
        if !names.insert(name) {
            return Err(Error::ConfigError {
                message: format!("duplicate collection name: '{name}'"),
            });
        }
        if !outputs.insert(entry.output.as_path()) {
            return Err(Error::ConfigError {
                message: format!("duplicate output path: '{}'", entry.output.display()),
            });
        }
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default)]
    template: Option<PathBuf>,
    #[serde(default)]
    reserved_words: IndexMap<String, String>,
    #[serde(default, rename = "collection")]
    collections: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    output: PathBuf,
    name: String,
    #[serde(default)]
    plural_name: Option<String>,
    path: String,
    #[serde(default)]
    var_prefix: Option<String>,
    entity: String,
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    args: IndexMap<String, TypeTag>,
    #[serde(default)]
    params: IndexMap<String, TypeTag>,
}

impl RawEntry {
    fn into_parts(self) -> (PathBuf, RawDescriptor) {
        (
            self.output,
            RawDescriptor {
                name: self.name,
                plural_name: self.plural_name,
                path: self.path,
                var_prefix: self.var_prefix,
                entity: self.entity,
                api_url: self.api_url,
                args: self.args,
                params: self.params,
            },
        )
    }
}
