//! Generate command implementation.
//!
//! Renders every collection in the descriptor table into its output file:
//! 1. Loads the descriptor table
//! 2. Builds the template engine (built-in or table-declared template)
//! 3. Renders each selected entry in table order
//! 4. Prints the batch report

use super::common::{build_engine, load_table};
use anyhow::Result;
use colgen_codegen::batch::{BatchOptions, generate_table};
use colgen_core::Error;
use colgen_core::cli::{ExitCode, OutputFormat};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Runs the generate command.
///
/// # Arguments
///
/// * `config` - Descriptor table file
/// * `output_dir` - Directory entry output paths are resolved against
/// * `only` - Restrict generation to these collection names
/// * `dry_run` - Render without writing files
/// * `keep_going` - Continue past failing entries instead of aborting
/// * `output_format` - Output format (json, text, pretty)
///
/// # Returns
///
/// - `ExitCode::SUCCESS` when every selected entry was generated
/// - `ExitCode::INVALID_INPUT` when `only` names an unknown collection
/// - `ExitCode::GENERATION_FAILED` when any entry failed
///
/// # Errors
///
/// Returns an error if the table or template cannot be loaded.
pub fn run(
    config: &Path,
    output_dir: PathBuf,
    only: Vec<String>,
    dry_run: bool,
    keep_going: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let table = load_table(config)?;
    let engine = build_engine(&table)?;

    info!(
        "Generating {} collections into {}",
        if only.is_empty() { table.len() } else { only.len() },
        output_dir.display()
    );

    let options = BatchOptions {
        output_root: output_dir,
        only,
        dry_run,
        fail_fast: !keep_going,
    };

    let report = match generate_table(&table, &engine, &options) {
        Ok(report) => report,
        Err(e @ Error::InvalidArgument(_)) => {
            error!("{e}");
            return Ok(ExitCode::INVALID_INPUT);
        }
        Err(e) => {
            error!("Generation aborted: {e}");
            return Ok(ExitCode::GENERATION_FAILED);
        }
    };

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::GENERATION_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TABLE: &str = r#"
[[collection]]
output = "pkg/locations_collection.go"
name = "Location"
path = "/locations"
entity = "Location"

[[collection]]
output = "pkg/racks_collection.go"
name = "Rack"
path = "/racks"
entity = "Rack"
"#;

    fn setup() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("collections.toml");
        fs::write(&config, TABLE).unwrap();
        (dir, config)
    }

    #[test]
    fn test_generate_writes_files() {
        let (dir, config) = setup();
        fs::create_dir(dir.path().join("pkg")).unwrap();

        let code = run(
            &config,
            dir.path().to_path_buf(),
            vec![],
            false,
            false,
            OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(dir.path().join("pkg/locations_collection.go").exists());
        assert!(dir.path().join("pkg/racks_collection.go").exists());
    }

    #[test]
    fn test_generate_only_selected() {
        let (dir, config) = setup();
        fs::create_dir(dir.path().join("pkg")).unwrap();

        let code = run(
            &config,
            dir.path().to_path_buf(),
            vec!["Rack".to_string()],
            false,
            false,
            OutputFormat::Text,
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(!dir.path().join("pkg/locations_collection.go").exists());
        assert!(dir.path().join("pkg/racks_collection.go").exists());
    }

    #[test]
    fn test_generate_unknown_only() {
        let (dir, config) = setup();
        let code = run(
            &config,
            dir.path().to_path_buf(),
            vec!["Nope".to_string()],
            true,
            false,
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_generate_missing_output_directory() {
        let (dir, config) = setup();

        let aborted = run(
            &config,
            dir.path().to_path_buf(),
            vec![],
            false,
            false,
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(aborted, ExitCode::GENERATION_FAILED);

        let kept_going = run(
            &config,
            dir.path().to_path_buf(),
            vec![],
            false,
            true,
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(kept_going, ExitCode::GENERATION_FAILED);
    }

    #[test]
    fn test_generate_dry_run() {
        let (dir, config) = setup();
        let code = run(
            &config,
            dir.path().to_path_buf(),
            vec![],
            true,
            false,
            OutputFormat::Pretty,
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(!dir.path().join("pkg").exists());
    }

    #[test]
    fn test_generate_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &dir.path().join("missing.toml"),
            dir.path().to_path_buf(),
            vec![],
            false,
            false,
            OutputFormat::Json,
        );
        assert!(result.is_err());
    }
}
