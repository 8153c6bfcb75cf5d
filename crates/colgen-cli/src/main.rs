//! Collection generator CLI.
//!
//! Renders Go client wrappers for paginated API collections from a TOML
//! descriptor table.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Render every collection into its output file
//! - `render` - Print one rendered collection to stdout
//! - `list` - Show the names derived for each collection
//! - `check` - Verify path placeholders against declared arguments
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Regenerate all collections under ./pkg
//! colgen generate
//!
//! # Preview a single collection
//! colgen render HostNetwork
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colgen_cli::commands;
use colgen_cli::commands::common::DEFAULT_CONFIG;
use colgen_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Paginated collection client generator.
///
/// Reads collection descriptors and renders one Go source file per
/// collection.
#[derive(Parser, Debug)]
#[command(name = "colgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every collection in the descriptor table.
    ///
    /// Output paths in the table are resolved against `--output-dir`.
    /// Directories are not created; a missing directory fails that entry.
    ///
    /// # Examples
    ///
    /// ```bash
    /// colgen generate --config collections.toml --output-dir ../go-serverscom-client
    /// colgen generate --only Location --only Host --dry-run
    /// ```
    Generate {
        /// Descriptor table file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Directory output paths are resolved against
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Only generate the named collection (repeatable)
        #[arg(long = "only", num_args = 1)]
        only: Vec<String>,

        /// Render without writing files
        #[arg(long)]
        dry_run: bool,

        /// Continue with remaining collections after a failure
        #[arg(long)]
        keep_going: bool,
    },

    /// Print one rendered collection to stdout.
    Render {
        /// Collection type name, e.g. `HostNetwork`
        name: String,

        /// Descriptor table file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Show the names derived for each collection.
    List {
        /// Descriptor table file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Verify path placeholders against declared arguments.
    ///
    /// Exits with status 2 when any collection disagrees.
    Check {
        /// Descriptor table file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command, output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging to stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honoured with
/// `info` as the fallback.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes a command to its handler.
///
/// # Errors
///
/// Returns an error if command execution fails.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            config,
            output_dir,
            only,
            dry_run,
            keep_going,
        } => commands::generate::run(
            &config,
            output_dir,
            only,
            dry_run,
            keep_going,
            output_format,
        ),
        Commands::Render { name, config } => commands::render::run(&config, &name),
        Commands::List { config } => commands::list::run(&config, output_format),
        Commands::Check { config } => commands::check::run(&config, output_format),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
