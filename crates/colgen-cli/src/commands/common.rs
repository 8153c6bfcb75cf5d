//! Common utilities shared across CLI commands.
//!
//! Loading the descriptor table and building the template engine it asks for.

use anyhow::{Context, Result};
use colgen_codegen::TemplateEngine;
use colgen_core::DescriptorTable;
use std::path::Path;

/// Descriptor table used when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "collections.toml";

/// Loads the descriptor table at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid table.
pub fn load_table(path: &Path) -> Result<DescriptorTable> {
    DescriptorTable::load(path)
        .with_context(|| format!("failed to load descriptor table from {}", path.display()))
}

/// Builds the template engine for `table`.
///
/// Uses the table's `template` file when one is declared, the built-in
/// collection template otherwise.
///
/// # Errors
///
/// Returns an error if the custom template cannot be read or parsed.
///
/// # Examples
///
/// ```
/// use colgen_cli::commands::common::build_engine;
/// use colgen_codegen::template_engine::COLLECTION_TEMPLATE;
/// use colgen_core::DescriptorTable;
///
/// let table = DescriptorTable::default();
/// let engine = build_engine(&table).unwrap();
/// assert!(engine.has_template(COLLECTION_TEMPLATE));
/// ```
pub fn build_engine(table: &DescriptorTable) -> Result<TemplateEngine> {
    match table.template() {
        Some(path) => TemplateEngine::from_file(path)
            .with_context(|| format!("failed to load template {}", path.display())),
        None => TemplateEngine::new().context("failed to initialize template engine"),
    }
}
