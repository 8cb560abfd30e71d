//! Test file discovery
//!
//! Recursively enumerates candidate test files under a root directory,
//! matching filenames against suffix patterns and pruning excluded
//! directories (build output, dependency vendors) entirely.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect test files under `root`.
///
/// A missing or unreadable root yields an empty list rather than an error:
/// one bad directory must not abort analysis of the rest of the project.
/// Results are sorted for a stable secondary order across filesystems.
pub fn locate_test_files(root: &Path, patterns: &[String], exclude_dirs: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry.path(), entry.file_type().is_dir(), exclude_dirs))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_test_file(entry.path(), patterns))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// True when the filename ends with one of the configured test suffixes.
pub fn is_test_file(path: &Path, patterns: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    patterns.iter().any(|p| name.ends_with(p.as_str()))
}

fn is_excluded_dir(path: &Path, is_dir: bool, exclude_dirs: &[String]) -> bool {
    if !is_dir {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    exclude_dirs.iter().any(|ex| name.contains(ex.as_str()))
}
