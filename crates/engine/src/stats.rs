use crate::error::EngineError;
use crate::processor::LineKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key of the grand-total bucket.
pub const OVERALL_KEY: &str = "overall";

/// Counts produced by scanning one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    pub classes: usize,
    pub functions: usize,
    pub comments: usize,
    pub empty_lines: usize,
    pub imports: usize,
    pub exports: usize,
    pub structs: usize,
    /// Size in bytes from filesystem metadata, not bytes read.
    pub size: u64,
}

impl FileStats {
    /// Count one line under `kind`. `lines` always increments.
    pub fn record(&mut self, kind: LineKind) {
        self.lines += 1;
        match kind {
            LineKind::Class => self.classes += 1,
            LineKind::Function => self.functions += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Import => self.imports += 1,
            LineKind::Export => self.exports += 1,
            LineKind::Struct => self.structs += 1,
            LineKind::Empty => self.empty_lines += 1,
            LineKind::Code => {}
        }
    }
}

/// Aggregated statistics for one classification key.
///
/// Zero counters are left out of the JSON, `files` and `fileSize` never are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub files: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub lines: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub classes: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub functions: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub comments: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub empty_lines: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub imports: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub exports: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub structs: usize,
    /// Filled in by [`Tally::finalize`].
    pub file_size: String,
    #[serde(skip)]
    pub size_bytes: u64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Bucket {
    pub fn add_file(&mut self, file: &FileStats) {
        self.files += 1;
        self.lines += file.lines;
        self.classes += file.classes;
        self.functions += file.functions;
        self.comments += file.comments;
        self.empty_lines += file.empty_lines;
        self.imports += file.imports;
        self.exports += file.exports;
        self.structs += file.structs;
        self.size_bytes += file.size;
    }

    pub fn merge(&mut self, other: &Self) {
        self.files += other.files;
        self.lines += other.lines;
        self.classes += other.classes;
        self.functions += other.functions;
        self.comments += other.comments;
        self.empty_lines += other.empty_lines;
        self.imports += other.imports;
        self.exports += other.exports;
        self.structs += other.structs;
        self.size_bytes += other.size_bytes;
    }

    /// True when every numeric field is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files == 0
            && self.lines == 0
            && self.classes == 0
            && self.functions == 0
            && self.comments == 0
            && self.empty_lines == 0
            && self.imports == 0
            && self.exports == 0
            && self.structs == 0
            && self.size_bytes == 0
    }
}

/// In-progress buckets of one run, owned by the run loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    buckets: BTreeMap<String, Bucket>,
}

impl Tally {
    /// Merge one scanned file into the bucket for `key`, creating it on first use.
    pub fn add(&mut self, key: &str, file: &FileStats) {
        if let Some(bucket) = self.buckets.get_mut(key) {
            bucket.add_file(file);
        } else {
            let mut bucket = Bucket::default();
            bucket.add_file(file);
            self.buckets.insert(key.to_string(), bucket);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Bucket> {
        self.buckets.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Build `overall`, render sizes, drop per-key buckets unless
    /// `include_all`, then prune all-zero buckets.
    #[must_use]
    pub fn finalize(self, include_all: bool) -> Report {
        let mut buckets = self.buckets;
        let mut overall = Bucket::default();
        for bucket in buckets.values_mut() {
            bucket.file_size = format_size(bucket.size_bytes);
            overall.merge(bucket);
        }
        overall.file_size = format_size(overall.size_bytes);

        if !include_all {
            buckets.clear();
        }
        buckets.insert(OVERALL_KEY.to_string(), overall);
        buckets.retain(|_, bucket| !bucket.is_empty());

        Report { buckets }
    }
}

/// Finalized buckets, serialized as a key-ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    buckets: BTreeMap<String, Bucket>,
}

impl Report {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Bucket> {
        self.buckets.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Outcome of [`crate::run`]: the tally plus every path that was reported and skipped.
#[derive(Debug, Default)]
pub struct RunResult {
    pub tally: Tally,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Human-readable size with 1024-based units: `"512 bytes"`, `"1.50 KB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;
    const UNITS: &[(u64, &str)] = &[(TB, "TB"), (GB, "GB"), (MB, "MB"), (KB, "KB")];

    for &(unit, suffix) in UNITS {
        if bytes >= unit {
            return format!("{:.2} {suffix}", bytes as f64 / unit as f64);
        }
    }
    format!("{bytes} bytes")
}
