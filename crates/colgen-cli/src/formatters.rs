//! Output formatters for CLI commands.
//!
//! Every command result is printed through [`format_output`], so `--format`
//! behaves the same for all subcommands.

use anyhow::Result;
use colored::Colorize;
use colgen_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use colgen_cli::formatters::format_output;
/// use colgen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Generated {
///     name: String,
///     bytes: usize,
/// }
///
/// let item = Generated { name: "Location".to_string(), bytes: 7421 };
///
/// let output = format_output(&item, OutputFormat::Text)?;
/// assert_eq!(output, "name=Location\nbytes=7421");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
///
/// One `path=value` line per scalar, e.g. `generated[0].name=Location`,
/// suitable for `grep` and `cut`.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::Value;

    /// Format data as flattened `path=value` lines.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, String::new(), &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: String, lines: &mut Vec<String>) {
        match value {
            Value::Object(obj) => {
                for (key, val) in obj {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(val, child, lines);
                }
            }
            Value::Array(arr) => {
                for (i, item) in arr.iter().enumerate() {
                    flatten(item, format!("{path}[{i}]"), lines);
                }
            }
            Value::String(s) => lines.push(format!("{path}={s}")),
            Value::Null => lines.push(format!("{path}=")),
            other => lines.push(format!("{path}={other}")),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Format data as colorized, indented output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(format_value(&value, 0).trim_start().to_string())
    }

    /// Containers start with a newline so they nest under their key.
    fn format_value(value: &Value, indent: usize) -> String {
        let indent_str = "  ".repeat(indent);

        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(arr) if arr.is_empty() => "(none)".dimmed().to_string(),
            Value::Object(obj) if obj.is_empty() => "{}".to_string(),
            Value::Array(arr) => arr
                .iter()
                .map(|item| {
                    let rendered = format_value(item, indent + 1);
                    format!("\n{indent_str}- {}", rendered.trim_start())
                })
                .collect(),
            Value::Object(obj) => obj
                .iter()
                .map(|(key, val)| {
                    format!(
                        "\n{indent_str}{}: {}",
                        key.blue().bold(),
                        format_value(val, indent + 1)
                    )
                })
                .collect(),
        }
    }
}
