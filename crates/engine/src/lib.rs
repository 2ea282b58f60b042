// crates/engine/src/lib.rs
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::RunResult;

/// Run the walk-and-scan pipeline.
///
/// Every selector is walked against every root, in that nesting order, so a
/// file reached by two pairs is counted twice. Files are scanned one at a time
/// and merged into the returned tally.
///
/// # Errors
///
/// Only in strict mode: the first walk, open or scan error aborts the run.
/// Otherwise those errors are collected in `RunResult::errors` and the run
/// continues with the next path.
pub fn run(config: &Config) -> Result<RunResult> {
    let ignored = config.ignore_set();
    let mut result = RunResult::default();

    for selector in &config.selectors {
        for root in &config.roots {
            info!("scanning {} for '{selector}'", root.display());
            for candidate in filesystem::walk_candidates(root, selector, &ignored) {
                match candidate {
                    Ok(path) => scan_candidate(path, config, &mut result)?,
                    Err(err) => {
                        let path = walk_error_path(&err, root);
                        record_failure(&mut result, path, err, config.strict)?;
                    }
                }
            }
        }
    }

    Ok(result)
}

fn scan_candidate(path: PathBuf, config: &Config, result: &mut RunResult) -> Result<()> {
    match processor::process_file(&path, config.max_line_bytes) {
        Ok(Some(stats)) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            let key = classify::classification_key(&name);
            debug!("{} -> {key} ({} lines)", path.display(), stats.lines);
            result.tally.add(&key, &stats);
            Ok(())
        }
        Ok(None) => {
            debug!("skipping non-UTF-8 file {}", path.display());
            Ok(())
        }
        Err(err) => record_failure(result, path, err, config.strict),
    }
}

fn walk_error_path(err: &EngineError, root: &Path) -> PathBuf {
    let path = match err {
        EngineError::Walk(inner) => filesystem::error_path(inner).unwrap_or(root),
        _ => root,
    };
    path.to_path_buf()
}

fn record_failure(
    result: &mut RunResult,
    path: PathBuf,
    err: EngineError,
    strict: bool,
) -> Result<()> {
    if strict {
        return Err(err);
    }
    warn!("skipping {}: {err}", path.display());
    result.errors.push((path, err));
    Ok(())
}
