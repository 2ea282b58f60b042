use crate::error::{EngineError, Result};
use crate::stats::FileStats;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Number of leading bytes that must decode as UTF-8 for a file to be scanned.
pub const BINARY_SNIFF_BYTES: usize = 1024;

/// The single category a line is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Class,
    Function,
    Comment,
    Import,
    Export,
    Struct,
    Empty,
    /// Matched nothing; only counts toward `lines`.
    Code,
}

/// Substring heuristics, checked in priority order. First match wins.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    let has_any = |needles: &[&str]| needles.iter().any(|n| line.contains(n));

    if line.contains("class") {
        LineKind::Class
    } else if has_any(&["function", "def", "func"]) {
        LineKind::Function
    } else if has_any(&["//", "#", "/*"]) {
        LineKind::Comment
    } else if line.contains("import") {
        LineKind::Import
    } else if line.contains("export") {
        LineKind::Export
    } else if line.contains("struct") {
        LineKind::Struct
    } else if line.trim().is_empty() {
        LineKind::Empty
    } else {
        LineKind::Code
    }
}

/// Scan a single file.
///
/// Returns `Ok(None)` when the first [`BINARY_SNIFF_BYTES`] bytes are not
/// UTF-8 text; such files are skipped without an error.
///
/// # Errors
/// Fails when the file cannot be opened or read, or a line is longer than
/// `max_line_bytes`. Partial counts are discarded in both cases.
pub fn process_file(path: &Path, max_line_bytes: usize) -> Result<Option<FileStats>> {
    let read_err = |source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let size = file.metadata().map_err(read_err)?.len();
    let mut reader = BufReader::new(file);

    let mut head = Vec::with_capacity(BINARY_SNIFF_BYTES);
    (&mut reader)
        .take(BINARY_SNIFF_BYTES as u64)
        .read_to_end(&mut head)
        .map_err(read_err)?;
    if !looks_like_text(&head) {
        return Ok(None);
    }

    let mut stats = scan_lines(head.as_slice().chain(reader), path, max_line_bytes)?;
    stats.size = size;
    Ok(Some(stats))
}

/// The whole window must decode, including its last character.
fn looks_like_text(head: &[u8]) -> bool {
    std::str::from_utf8(head).is_ok()
}

/// Split `reader` on `\n` (dropping a trailing `\r`) and classify every line.
///
/// # Errors
/// Returns [`EngineError::LineTooLong`] for a line over `max_line_bytes` and
/// [`EngineError::FileRead`] on I/O failure.
pub fn scan_lines<R: BufRead>(
    mut reader: R,
    path: &Path,
    max_line_bytes: usize,
) -> Result<FileStats> {
    let mut stats = FileStats::default();
    // room for the line plus "\r\n"
    let limit = (max_line_bytes as u64).saturating_add(2);
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        let read = (&mut reader)
            .take(limit)
            .read_until(b'\n', &mut line_buf)
            .map_err(|source| EngineError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        if line_buf.last() == Some(&b'\n') {
            line_buf.pop();
            if line_buf.last() == Some(&b'\r') {
                line_buf.pop();
            }
        }
        if line_buf.len() > max_line_bytes {
            return Err(EngineError::LineTooLong {
                path: path.to_path_buf(),
                line: stats.lines + 1,
                limit: max_line_bytes,
            });
        }

        let line = String::from_utf8_lossy(&line_buf);
        stats.record(classify_line(&line));
    }

    Ok(stats)
}
