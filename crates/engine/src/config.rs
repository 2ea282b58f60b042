use crate::options::Selector;
use derive_builder::Builder;
use std::path::PathBuf;

/// Directory fragments that are always pruned from the walk.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules", ".git", ".cache", "vendor"];

/// Longest line the scanner accepts by default (512 KiB). Also the lowest
/// limit a caller may configure.
pub const DEFAULT_MAX_LINE_BYTES: usize = 512 * 1024;

/// Immutable settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub roots: Vec<PathBuf>,
    pub selectors: Vec<Selector>,
    /// Extra fragments from the command line, merged with
    /// [`DEFAULT_IGNORED_DIRS`] by [`Config::ignore_set`].
    #[builder(default)]
    pub ignore: Vec<String>,
    /// Keep per-extension buckets in the report instead of only `overall`.
    #[builder(default)]
    pub include_all: bool,
    #[builder(default = "DEFAULT_MAX_LINE_BYTES")]
    pub max_line_bytes: usize,
    /// Abort on the first walk, open or scan error.
    #[builder(default)]
    pub strict: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.roots.as_ref().is_some_and(Vec::is_empty) {
            return Err("at least one directory is required".to_string());
        }
        if self.selectors.as_ref().is_some_and(Vec::is_empty) {
            return Err("at least one file extension is required".to_string());
        }
        if let Some(max) = self.max_line_bytes
            && max < DEFAULT_MAX_LINE_BYTES
        {
            return Err(format!(
                "maximum line length must be at least {DEFAULT_MAX_LINE_BYTES} bytes, got {max}"
            ));
        }
        Ok(())
    }
}

impl Config {
    /// User-supplied fragments followed by the built-in ones, without duplicates.
    #[must_use]
    pub fn ignore_set(&self) -> Vec<String> {
        let mut set: Vec<String> = Vec::with_capacity(self.ignore.len() + DEFAULT_IGNORED_DIRS.len());
        let user = self.ignore.iter().map(String::as_str);
        for fragment in user.chain(DEFAULT_IGNORED_DIRS.iter().copied()) {
            if !fragment.is_empty() && !set.iter().any(|s| s == fragment) {
                set.push(fragment.to_string());
            }
        }
        set
    }
}
