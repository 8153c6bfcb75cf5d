//! List command implementation.
//!
//! Shows the names derived for every collection in the table, which is the
//! quickest way to see what a descriptor change does to the generated API.

use super::common::load_table;
use anyhow::Result;
use colgen_codegen::batch::table_reserved_words;
use colgen_codegen::{CollectionGenerator, TemplateEngine};
use colgen_core::DescriptorTable;
use colgen_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::Path;

/// Derived names for one collection.
#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    /// Collection type name
    pub name: String,
    /// Plural type name
    pub plural: String,
    /// Element type
    pub entity: String,
    /// Prefix of the generated path constant
    pub var_prefix: String,
    /// Path template
    pub path: String,
    /// Output file, relative to the output directory
    pub output: String,
    /// Constructor argument fragments
    pub args: Vec<String>,
    /// Setter method per query parameter
    pub setters: Vec<String>,
}

/// Summarizes every entry of `table` in table order.
///
/// # Errors
///
/// Returns an error if the template engine cannot be initialized.
pub fn summarize(table: &DescriptorTable) -> Result<Vec<CollectionSummary>> {
    let engine = TemplateEngine::new()?;
    let words = table_reserved_words(table);

    let summaries = table
        .entries()
        .iter()
        .map(|entry| {
            let generator = CollectionGenerator::new(&engine, entry.descriptor().clone())
                .with_reserved_words(words.clone());

            CollectionSummary {
                name: generator.collection_type_name().to_string(),
                plural: generator.collection_type_name_plural(),
                entity: generator.collection_element_type().to_string(),
                var_prefix: generator
                    .collection_var_prefix()
                    .unwrap_or_else(|| generator.collection_element_uncapitalized())
                    .to_string(),
                path: generator.resource_path().to_string(),
                output: entry.output().display().to_string(),
                args: generator.collection_args_prepared(),
                setters: generator
                    .collection_params()
                    .into_iter()
                    .map(|p| format!("Set{}({} {})", p.method_name, p.variable_name, p.param_type))
                    .collect(),
            }
        })
        .collect();

    Ok(summaries)
}

/// Runs the list command.
///
/// # Errors
///
/// Returns an error if the table cannot be loaded or output formatting fails.
pub fn run(config: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let table = load_table(config)?;
    let summaries = summarize(&table)?;

    let formatted = crate::formatters::format_output(&summaries, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
