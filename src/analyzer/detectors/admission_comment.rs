//! Admission comment: the author said it themselves.

use super::Detector;
use std::path::Path;

const ADMISSIONS: &[&str] = &["In a real test", "would be actual"];

pub struct AdmissionComment;

impl Detector for AdmissionComment {
    fn name(&self) -> &'static str {
        "admission-comment"
    }

    fn check(&self, source: &str, _path: &Path) -> Option<String> {
        if ADMISSIONS.iter().any(|phrase| source.contains(phrase)) {
            Some("Author-acknowledged placeholder (\"In a real test\" / \"would be actual\")".to_string())
        } else {
            None
        }
    }
}
