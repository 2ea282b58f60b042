use crate::error::{EngineError, Result};
use crate::options::Selector;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Sequential depth-first walk of `root` yielding the files `selector` accepts.
///
/// A directory is pruned when its traversed path contains any `ignored`
/// fragment as a plain substring, so `vendor` also prunes `src/vendored-notes`.
/// The root itself is subject to the same rule. Hidden files and
/// `.gitignore` rules are not applied, and symlinks are not followed.
///
/// Walk failures are yielded as errors and the walk moves on to the next entry.
pub fn walk_candidates(
    root: &Path,
    selector: &Selector,
    ignored: &[String],
) -> impl Iterator<Item = Result<PathBuf>> + use<> {
    let selector = selector.clone();
    let root_pruned = root.is_dir() && is_pruned(root, ignored);

    let mut builder = WalkBuilder::new(root);
    let ignored = ignored.to_vec();
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_pruned_dir(entry, &ignored));

    let walk = (!root_pruned).then(|| builder.build());
    if root_pruned {
        log::debug!("pruned root {}", root.display());
    }

    walk.into_iter().flatten().filter_map(move |entry| match entry {
        Ok(entry) => {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return None;
            }
            let matched = selector.matches(&entry.file_name().to_string_lossy());
            matched.then(|| Ok(entry.into_path()))
        }
        Err(err) => Some(Err(EngineError::Walk(err))),
    })
}

fn is_pruned_dir(entry: &DirEntry, ignored: &[String]) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir()) && is_pruned(entry.path(), ignored)
}

/// Substring match against the whole path, not individual components.
#[must_use]
pub fn is_pruned(path: &Path, ignored: &[String]) -> bool {
    let path = path.to_string_lossy();
    ignored.iter().any(|fragment| path.contains(fragment.as_str()))
}

/// Best-effort path behind a walk error.
#[must_use]
pub fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
