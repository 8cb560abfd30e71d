//! Configuration loading for Chaff
//!
//! An optional `.chaffrc.json` supplies scan defaults; CLI flags always take
//! precedence. The file is searched from the working directory upward.

use crate::{Confidence, ScanConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".chaffrc.json";

/// On-disk config schema. All fields optional; missing fields fall back to
/// the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Root directories to scan
    #[serde(default)]
    pub directories: Option<Vec<PathBuf>>,

    /// Minimum confidence to report: "high", "medium", or "low"
    #[serde(default)]
    pub min_confidence: Option<String>,

    /// Test filename suffixes (e.g. ".test.ts")
    #[serde(default)]
    pub test_patterns: Option<Vec<String>>,

    /// Directory-name substrings to prune during traversal
    #[serde(default)]
    pub exclude_dirs: Option<Vec<String>>,
}

impl FileConfig {
    /// Resolve into a full [`ScanConfig`], validating the confidence level.
    /// An unrecognized level is rejected here rather than silently excluding
    /// every file downstream.
    pub fn into_scan_config(self) -> Result<ScanConfig> {
        let mut config = ScanConfig::default();
        if let Some(dirs) = self.directories {
            config.directories = dirs;
        }
        if let Some(level) = self.min_confidence {
            config.min_confidence = level
                .parse::<Confidence>()
                .context("invalid minConfidence in config file")?;
        }
        if let Some(patterns) = self.test_patterns {
            config.test_patterns = patterns;
        }
        if let Some(excludes) = self.exclude_dirs {
            config.exclude_dirs = excludes;
        }
        Ok(config)
    }
}

/// Load configuration, searching `work_dir` and its parents for
/// `.chaffrc.json` unless an explicit path is given. No file means defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<ScanConfig> {
    let path = match custom_path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found: {}", p.display());
            }
            Some(p.to_path_buf())
        }
        None => find_config_in_parents(work_dir),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let file_config: FileConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            file_config.into_scan_config()
        }
        None => Ok(ScanConfig::default()),
    }
}

fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}
