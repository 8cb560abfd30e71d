//! Chaff: fake-test detector for TypeScript
//!
//! This library statically scans test files and flags ones that look like
//! they provide no real verification value: tests that mock everything,
//! re-implement the code under test inline, only check language built-ins,
//! or never exercise the thing they claim to test.
//!
//! The heuristics are textual (regex over the raw file contents) by design.
//! Chaff is advisory — it is not a test runner or a type checker.

pub mod analyzer;
pub mod config;
pub mod locator;
pub mod reporter;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Confidence that a flagged file is a fake test, derived from the number
/// of anti-patterns it triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Numeric rank for filtering and sorting (High=3, Low=1).
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::High => 3,
            Confidence::Medium => 2,
            Confidence::Low => 1,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Error for unrecognized confidence levels in config files or CLI input.
#[derive(Debug, thiserror::Error)]
#[error("unknown confidence level '{0}' (expected high, medium, or low)")]
pub struct ParseConfidenceError(String);

impl FromStr for Confidence {
    type Err = ParseConfidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(ParseConfidenceError(other.to_string())),
        }
    }
}

/// One test file flagged by the scan.
///
/// Files with an empty reason list are never surfaced; a `FlaggedFile`
/// always carries at least one reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedFile {
    /// Path to the flagged test file
    pub path: PathBuf,
    /// Total number of lines in the file
    pub line_count: usize,
    /// Triggered anti-patterns, in detector evaluation order
    pub reasons: Vec<String>,
    /// Verdict derived from `reasons.len()`
    pub confidence: Confidence,
}

/// Scan configuration. Created fresh per invocation; the engine is a pure
/// function of (filesystem snapshot, configuration).
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directories to search, in order. Duplicates are not deduplicated:
    /// a file reachable from two roots is analyzed twice.
    pub directories: Vec<PathBuf>,
    /// Minimum confidence to include in the report
    pub min_confidence: Confidence,
    /// Filename suffixes that mark a file as a test file
    pub test_patterns: Vec<String>,
    /// Directory-name substrings pruned during traversal
    pub exclude_dirs: Vec<String>,
}

impl ScanConfig {
    /// Default test file suffixes: `.test.` / `.spec.` times the common
    /// TypeScript/JavaScript extensions.
    pub fn default_test_patterns() -> Vec<String> {
        [
            ".test.ts",
            ".test.tsx",
            ".spec.ts",
            ".spec.tsx",
            ".test.js",
            ".test.jsx",
            ".spec.js",
            ".spec.jsx",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Default pruned directories: build output and dependency vendors.
    pub fn default_exclude_dirs() -> Vec<String> {
        ["node_modules", "dist", "build", "coverage", ".next", ".git"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directories: vec![PathBuf::from("src"), PathBuf::from("api")],
            min_confidence: Confidence::Low,
            test_patterns: Self::default_test_patterns(),
            exclude_dirs: Self::default_exclude_dirs(),
        }
    }
}

/// Public API: run a full scan with the given configuration.
///
/// Returns flagged files filtered by `min_confidence`, sorted by confidence
/// rank descending then line count descending.
pub fn scan(config: &ScanConfig) -> Vec<FlaggedFile> {
    analyzer::engine::SuiteScanner::new().scan(config)
}
