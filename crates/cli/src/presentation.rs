// crates/cli/src/presentation.rs
use crate::error::{AppError, Result};
use filestats_engine::error::EngineError;
use filestats_engine::stats::Report;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pretty JSON with two-space indentation and a trailing newline.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Write the report to `output`, or stdout when `None`.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn print_report(report: &Report, output: Option<&Path>) -> Result<()> {
    let json = render_json(report)?;
    match output {
        Some(path) => std::fs::write(path, json).map_err(|source| AppError::Output {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

pub fn print_errors(errors: &[(PathBuf, EngineError)]) {
    for (path, err) in errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
}
