//! Batch generation over a descriptor table.
//!
//! Renders every entry of a [`DescriptorTable`] in table order. Each entry
//! is independent: a failure is terminal for that entry only, and the
//! caller decides through [`BatchOptions::fail_fast`] whether the rest of
//! the table is still processed.
//!
//! # Examples
//!
//! ```
//! use colgen_codegen::batch::{BatchOptions, generate_table};
//! use colgen_codegen::TemplateEngine;
//! use colgen_core::DescriptorTable;
//!
//! let table = DescriptorTable::from_toml_str(r#"
//!     [[collection]]
//!     output = "locations_collection.go"
//!     name = "Location"
//!     path = "/locations"
//!     entity = "Location"
//! "#).unwrap();
//!
//! let engine = TemplateEngine::new().unwrap();
//! let options = BatchOptions { dry_run: true, ..BatchOptions::default() };
//!
//! let report = generate_table(&table, &engine, &options).unwrap();
//! assert_eq!(report.generated.len(), 1);
//! assert!(report.is_success());
//! ```

use crate::generator::CollectionGenerator;
use crate::naming::ReservedWords;
use crate::template_engine::TemplateEngine;
use colgen_core::{DescriptorTable, Error, Result, TableEntry};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options controlling a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory each entry's `output` path is resolved against
    pub output_root: PathBuf,
    /// Restrict generation to these collection names (empty means all)
    pub only: Vec<String>,
    /// Render without writing any file
    pub dry_run: bool,
    /// Abort on the first failing entry
    pub fail_fast: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            only: Vec::new(),
            dry_run: false,
            fail_fast: true,
        }
    }
}

/// An entry that rendered (and, unless dry-run, was written) successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedEntry {
    /// Collection type name
    pub name: String,
    /// Resolved output path
    pub output: PathBuf,
    /// Size of the rendered source in bytes
    pub bytes: usize,
}

/// An entry that failed to render or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    /// Collection type name
    pub name: String,
    /// Resolved output path
    pub output: PathBuf,
    /// Error message
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Successfully generated entries, in table order
    pub generated: Vec<GeneratedEntry>,
    /// Failed entries, in table order
    pub failed: Vec<FailedEntry>,
    /// Whether files were left untouched
    pub dry_run: bool,
}

impl BatchReport {
    /// Returns `true` if no entry failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Reserved-word table for a descriptor table: the defaults plus any
/// remaps the table declares.
#[must_use]
pub fn table_reserved_words(table: &DescriptorTable) -> ReservedWords {
    let mut words = ReservedWords::default();
    words.extend(
        table
            .reserved_words()
            .iter()
            .map(|(word, replacement)| (word.as_str(), replacement.as_str())),
    );
    words
}

/// Renders every selected entry of `table`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `options.only` names a collection
/// the table does not contain. With `fail_fast`, returns the first entry's
/// error; otherwise entry failures are recorded in the report.
pub fn generate_table(
    table: &DescriptorTable,
    engine: &TemplateEngine,
    options: &BatchOptions,
) -> Result<BatchReport> {
    if let Some(unknown) = options.only.iter().find(|name| table.find(name).is_none()) {
        return Err(Error::InvalidArgument(format!(
            "unknown collection '{unknown}'"
        )));
    }

    let words = table_reserved_words(table);
    let mut report = BatchReport {
        dry_run: options.dry_run,
        ..BatchReport::default()
    };

    let selected = table.entries().iter().filter(|entry| {
        options.only.is_empty() || options.only.iter().any(|n| n == entry.descriptor().name())
    });

    for entry in selected {
        let output = options.output_root.join(entry.output());
        let name = entry.descriptor().name().to_string();

        match generate_entry(entry, engine, &words, &output, options.dry_run) {
            Ok(bytes) => report.generated.push(GeneratedEntry {
                name,
                output,
                bytes,
            }),
            Err(e) if options.fail_fast => return Err(e),
            Err(e) => {
                tracing::warn!("Failed to generate {name}: {e}");
                report.failed.push(FailedEntry {
                    name,
                    output,
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Generated {} collections ({} failed)",
        report.generated.len(),
        report.failed.len()
    );

    Ok(report)
}

fn generate_entry(
    entry: &TableEntry,
    engine: &TemplateEngine,
    words: &ReservedWords,
    output: &Path,
    dry_run: bool,
) -> Result<usize> {
    let generator = CollectionGenerator::new(engine, entry.descriptor().clone())
        .with_reserved_words(words.clone());

    if dry_run {
        return generator.render().map(|source| source.len());
    }

    generator.render_to_file(output)?;
    let bytes = fs::metadata(output)
        .map_err(|source| Error::Io {
            path: output.to_path_buf(),
            source,
        })?
        .len();

    Ok(usize::try_from(bytes).unwrap_or(usize::MAX))
}
