//! Suite scanner - orchestrates locator, detectors, and scoring
//!
//! The scan is synchronous and read-only: each file is read and analyzed
//! independently, with no shared mutable state between analyses. Running the
//! same scan twice against an unchanged filesystem yields identical results.

use crate::analyzer::detectors::{default_detectors, Detector};
use crate::analyzer::scoring::confidence_for;
use crate::locator::locate_test_files;
use crate::{FlaggedFile, ScanConfig};
use std::fs;
use std::path::Path;

/// Runs the full scan pipeline over a [`ScanConfig`].
pub struct SuiteScanner {
    detectors: Vec<Box<dyn Detector>>,
}

impl SuiteScanner {
    /// Scanner with the canonical detector set.
    pub fn new() -> Self {
        Self {
            detectors: default_detectors(),
        }
    }

    /// Scanner with a custom detector set (evaluation order preserved).
    pub fn with_detectors(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    /// Run the scan: locate, analyze, filter, sort.
    pub fn scan(&self, config: &ScanConfig) -> Vec<FlaggedFile> {
        let mut flagged = Vec::new();

        // Configured directories are walked in order and never deduplicated:
        // a file reachable from two roots is analyzed twice.
        for root in &config.directories {
            for path in locate_test_files(root, &config.test_patterns, &config.exclude_dirs) {
                if let Some(record) = self.analyze_file(&path) {
                    flagged.push(record);
                }
            }
        }

        let min_rank = config.min_confidence.rank();
        flagged.retain(|record| record.confidence.rank() >= min_rank);

        // High confidence first; among equals, larger files first (more
        // wasted effort). Stable sort keeps discovery order as a final tie.
        flagged.sort_by(|a, b| {
            b.confidence
                .rank()
                .cmp(&a.confidence.rank())
                .then(b.line_count.cmp(&a.line_count))
        });

        flagged
    }

    /// Analyze one file. Returns `None` when the file cannot be read (it may
    /// have vanished between enumeration and read) or triggers no detector.
    fn analyze_file(&self, path: &Path) -> Option<FlaggedFile> {
        let source = fs::read_to_string(path).ok()?;

        let reasons: Vec<String> = self
            .detectors
            .iter()
            .filter_map(|detector| detector.check(&source, path))
            .collect();

        let confidence = confidence_for(reasons.len())?;
        Some(FlaggedFile {
            path: path.to_path_buf(),
            line_count: source.lines().count(),
            reasons,
            confidence,
        })
    }
}

impl Default for SuiteScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Confidence;
    use std::path::PathBuf;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn config_for(dirs: Vec<PathBuf>, min: Confidence) -> ScanConfig {
        ScanConfig {
            directories: dirs,
            min_confidence: min,
            ..ScanConfig::default()
        }
    }

    const REIMPLEMENTED: &str = "\
class MockEventBuffer {}
function TestParser() {}
const mockHandler = () => {};
it('x', () => { expect(parse('a')).toEqual([]); });
";

    #[test]
    fn clean_file_never_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "ok.test.ts",
            "import { add } from '../math';\nit('adds', () => { expect(add(1, 2)).toBe(3); });\n",
        );
        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::Low));
        assert!(results.is_empty());
    }

    #[test]
    fn scenario_a_single_detector_is_low_confidence() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "buffer.test.ts", REIMPLEMENTED);
        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::Low));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, Confidence::Low);
        assert_eq!(results[0].reasons.len(), 1);
        assert!(results[0].reasons[0].contains('3'));
    }

    #[test]
    fn scenario_b_two_detectors_is_medium() {
        let dir = tempfile::tempdir().unwrap();
        // Five hardcode-and-assert pairs plus a testing-library import with
        // no source import: detectors 3 and 4.
        let mut source = String::from("import { render } from '@testing-library/react';\n");
        for ident in ["a", "b", "c", "d", "e"] {
            source.push_str(&format!(
                "const {ident}: Cart = {{ total: 1 }};\nexpect({ident}.total).toBe(1);\n"
            ));
        }
        write(dir.path(), "cart.test.ts", &source);
        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::Low));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, Confidence::Medium);
        assert_eq!(results[0].reasons.len(), 2);
    }

    #[test]
    fn scenario_c_fake_integration() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "checkout.integration.test.ts",
            "it('checks out', () => { expect(cart.total).toBe(10); });\n",
        );
        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::Low));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, Confidence::Low);
        assert!(results[0].reasons[0].contains("integration"));
    }

    #[test]
    fn scenario_d_builtin_only_assertions() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "shape.test.ts",
            &"expect(typeof x).toBe('string');\n".repeat(4),
        );
        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::Low));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, Confidence::Low);
    }

    #[test]
    fn scenario_e_empty_directory_list() {
        let results = SuiteScanner::new().scan(&config_for(vec![], Confidence::Low));
        assert!(results.is_empty());
    }

    #[test]
    fn min_confidence_filters_low_and_medium() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "low.test.ts", REIMPLEMENTED);
        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::High));
        assert!(results.is_empty());
    }

    #[test]
    fn filtering_is_monotonic() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "low.test.ts", REIMPLEMENTED);
        write(
            dir.path(),
            "medium.integration.test.ts",
            "// In a real test this would hit the API\nexpect(cart.total).toBe(10);\n",
        );

        let scanner = SuiteScanner::new();
        let dirs = vec![dir.path().to_path_buf()];
        let low = scanner.scan(&config_for(dirs.clone(), Confidence::Low));
        let medium = scanner.scan(&config_for(dirs.clone(), Confidence::Medium));
        let high = scanner.scan(&config_for(dirs, Confidence::High));

        assert!(high.len() <= medium.len());
        assert!(medium.len() <= low.len());
        for record in &medium {
            assert!(low.iter().any(|r| r.path == record.path));
        }
        for record in &high {
            assert!(medium.iter().any(|r| r.path == record.path));
        }
    }

    #[test]
    fn sorted_by_confidence_then_line_count() {
        let dir = tempfile::tempdir().unwrap();
        // Low confidence, many lines.
        let mut big = String::from(REIMPLEMENTED);
        big.push_str(&"// padding\n".repeat(50));
        write(dir.path(), "big-low.test.ts", &big);
        // Low confidence, few lines.
        write(dir.path(), "small-low.test.ts", REIMPLEMENTED);
        // Medium confidence.
        write(
            dir.path(),
            "medium.integration.test.ts",
            "// In a real test this would hit the API\nexpect(cart.total).toBe(10);\n",
        );

        let results = SuiteScanner::new()
            .scan(&config_for(vec![dir.path().to_path_buf()], Confidence::Low));
        assert_eq!(results.len(), 3);

        let ranks: Vec<u8> = results.iter().map(|r| r.confidence.rank()).collect();
        let mut sorted_ranks = ranks.clone();
        sorted_ranks.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted_ranks, "confidence rank must be non-increasing");

        let lows: Vec<_> = results
            .iter()
            .filter(|r| r.confidence == Confidence::Low)
            .collect();
        assert!(lows[0].line_count >= lows[1].line_count);
    }

    #[test]
    fn duplicate_directories_analyzed_twice() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "buffer.test.ts", REIMPLEMENTED);
        let results = SuiteScanner::new().scan(&config_for(
            vec![dir.path().to_path_buf(), dir.path().to_path_buf()],
            Confidence::Low,
        ));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].path, results[1].path);
    }

    #[test]
    fn scan_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "buffer.test.ts", REIMPLEMENTED);
        write(
            dir.path(),
            "medium.integration.test.ts",
            "// In a real test this would hit the API\nexpect(cart.total).toBe(10);\n",
        );
        let config = config_for(vec![dir.path().to_path_buf()], Confidence::Low);
        let scanner = SuiteScanner::new();
        let first = scanner.scan(&config);
        let second = scanner.scan(&config);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.reasons, b.reasons);
            assert_eq!(a.confidence, b.confidence);
        }
    }
}
