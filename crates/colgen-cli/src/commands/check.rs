//! Check command implementation.
//!
//! Verifies that each collection's declared arguments match the positional
//! placeholders of its path. Generation itself never checks this; a mismatch
//! surfaces only when the generated Go code is compiled or run.

use super::common::load_table;
use anyhow::Result;
use colgen_core::cli::{ExitCode, OutputFormat};
use colgen_core::{DescriptorTable, Error};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// One collection whose arguments disagree with its path.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Mismatch {
    /// Collection type name
    pub name: String,
    /// Declared argument types, comma separated
    pub expected: String,
    /// Placeholder types found in the path, comma separated
    pub found: String,
}

/// Result of checking a descriptor table.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Number of collections checked
    pub checked: usize,
    /// Collections with mismatching placeholders
    pub mismatches: Vec<Mismatch>,
}

/// Checks every entry of `table`.
#[must_use]
pub fn check_table(table: &DescriptorTable) -> CheckReport {
    let mismatches = table
        .entries()
        .iter()
        .filter_map(|entry| match entry.descriptor().check_placeholders() {
            Err(Error::PlaceholderMismatch {
                collection,
                expected,
                found,
            }) => Some(Mismatch {
                name: collection,
                expected,
                found,
            }),
            _ => None,
        })
        .collect();

    CheckReport {
        checked: table.len(),
        mismatches,
    }
}

/// Runs the check command.
///
/// # Returns
///
/// `ExitCode::INVALID_INPUT` if any collection has a mismatch.
///
/// # Errors
///
/// Returns an error if the table cannot be loaded or output formatting fails.
pub fn run(config: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let table = load_table(config)?;
    let report = check_table(&table);

    for mismatch in &report.mismatches {
        warn!(
            "{}: arguments [{}] vs placeholders [{}]",
            mismatch.name, mismatch.expected, mismatch.found
        );
    }

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    if report.mismatches.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::INVALID_INPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_clean_table() {
        let table = DescriptorTable::from_toml_str(
            r#"
[[collection]]
output = "a.go"
name = "RAMOption"
path = "/locations/%d/order_options/server_models/%d/ram"
entity = "RAMOption"
args = { LocationID = "int64", ServerModelID = "int64" }
"#,
        )
        .unwrap();

        let report = check_table(&table);
        assert_eq!(report.checked, 1);
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn test_check_reports_mismatch() {
        let table = DescriptorTable::from_toml_str(
            r#"
[[collection]]
output = "a.go"
name = "HostConnection"
path = "/hosts/%s/%s/connections"
entity = "HostConnection"
args = { hostType = "string", hostID = "int64" }

[[collection]]
output = "b.go"
name = "Location"
path = "/locations"
entity = "Location"
"#,
        )
        .unwrap();

        let report = check_table(&table);
        assert_eq!(report.checked, 2);
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                name: "HostConnection".to_string(),
                expected: "string, int64".to_string(),
                found: "string, string".to_string(),
            }]
        );
    }

    #[test]
    fn test_run_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("collections.toml");

        std::fs::write(
            &config,
            "[[collection]]\noutput = \"a.go\"\nname = \"Rack\"\npath = \"/racks/%d\"\nentity = \"Rack\"\n",
        )
        .unwrap();
        assert_eq!(
            run(&config, OutputFormat::Text).unwrap(),
            ExitCode::INVALID_INPUT
        );

        std::fs::write(
            &config,
            "[[collection]]\noutput = \"a.go\"\nname = \"Rack\"\npath = \"/racks\"\nentity = \"Rack\"\n",
        )
        .unwrap();
        assert_eq!(run(&config, OutputFormat::Text).unwrap(), ExitCode::SUCCESS);
    }
}
