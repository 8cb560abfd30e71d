//! Anti-pattern detectors for fake tests
//!
//! Each detector is an independent textual heuristic over one file: it sees
//! the full source and the path, and emits at most one human-readable reason.
//! Detectors never depend on each other's outcomes. The order of
//! [`default_detectors`] is fixed and determines the order of reasons in the
//! report; it does not affect the verdict, which depends only on the count.

pub mod admission_comment;
pub mod builtin_assertions;
pub mod fake_integration;
pub mod inline_reimplementation;
pub mod mock_and_hardcode;
pub mod no_source_import;
pub mod type_only;

pub use admission_comment::AdmissionComment;
pub use builtin_assertions::BuiltinOnlyAssertions;
pub use fake_integration::FakeIntegration;
pub use inline_reimplementation::InlineReimplementation;
pub use mock_and_hardcode::MockAndHardcode;
pub use no_source_import::NoSourceImport;
pub use type_only::TypeOnlyTest;

use std::path::Path;

/// A single fake-test heuristic.
pub trait Detector {
    /// Stable kebab-case identifier for the detector
    fn name(&self) -> &'static str;

    /// Inspect one file's text; return a reason string if the anti-pattern
    /// is present, `None` otherwise.
    fn check(&self, source: &str, path: &Path) -> Option<String>;
}

/// The canonical detector set, in evaluation order.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(InlineReimplementation),
        Box::new(TypeOnlyTest),
        Box::new(MockAndHardcode),
        Box::new(NoSourceImport),
        Box::new(AdmissionComment),
        Box::new(BuiltinOnlyAssertions),
        Box::new(FakeIntegration),
    ]
}

/// True when the filename marks the file as an integration or e2e test.
pub(crate) fn is_integration_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    name.contains(".integration.") || name.contains(".e2e.")
}
