//! Render command implementation.
//!
//! Renders a single collection and prints the generated source to stdout
//! without touching any file.

use super::common::{build_engine, load_table};
use anyhow::{Context, Result};
use colgen_codegen::CollectionGenerator;
use colgen_codegen::batch::table_reserved_words;
use colgen_core::DescriptorTable;
use colgen_core::cli::ExitCode;
use std::path::Path;
use tracing::error;

/// Renders the collection named `name` from `table`.
///
/// Returns `None` if the table has no such collection.
///
/// # Errors
///
/// Returns an error if the template cannot be built or rendering fails.
pub fn render_collection(table: &DescriptorTable, name: &str) -> Result<Option<String>> {
    let Some(entry) = table.find(name) else {
        return Ok(None);
    };

    let engine = build_engine(table)?;
    let source = CollectionGenerator::new(&engine, entry.descriptor().clone())
        .with_reserved_words(table_reserved_words(table))
        .render()
        .with_context(|| format!("failed to render collection '{name}'"))?;

    Ok(Some(source))
}

/// Runs the render command.
///
/// # Returns
///
/// `ExitCode::INVALID_INPUT` if the table has no collection named `name`.
///
/// # Errors
///
/// Returns an error if the table cannot be loaded or rendering fails.
pub fn run(config: &Path, name: &str) -> Result<ExitCode> {
    let table = load_table(config)?;

    match render_collection(&table, name)? {
        Some(source) => {
            print!("{source}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            error!("Unknown collection '{name}' in {}", config.display());
            Ok(ExitCode::INVALID_INPUT)
        }
    }
}
