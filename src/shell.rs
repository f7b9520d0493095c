//! Rendering variables as shell `export` statements.
//!
//! Output lines have the form `export KEY="VALUE"` and are meant to be
//! consumed with `eval "$(gitlab_env <url>)"`.
//!
//! Escaping is intentionally narrow: only literal double quotes in the
//! value are escaped. Backslashes, dollar signs and backticks pass
//! through untouched and will be interpreted by the evaluating shell.
//! This mirrors the export format the pipeline has always produced; it is
//! not a general-purpose shell quoting routine.

use std::io::{self, Write};

use crate::models::Variable;

/// Escapes a variable value for embedding in a double-quoted shell string.
///
/// Every literal `"` becomes `\"`. No other characters are touched.
pub fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Formats one variable as an `export` line (without trailing newline).
pub fn format_export(key: &str, value: &str) -> String {
    format!("export {}=\"{}\"", key, escape_value(value))
}

/// Writes one `export` line per variable, in order.
///
/// Returns the number of lines written.
pub fn write_exports<W: Write>(out: &mut W, variables: &[Variable]) -> io::Result<usize> {
    for variable in variables {
        writeln!(out, "{}", format_export(&variable.key, &variable.value))?;
    }
    Ok(variables.len())
}
