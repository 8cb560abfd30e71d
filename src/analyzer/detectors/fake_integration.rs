//! Fake integration test: labeled integration/e2e by filename but never
//! crosses a real boundary (no network call, no render).

use super::{is_integration_file, Detector};
use std::path::Path;

const NETWORK_MARKERS: &[&str] = &["fetch(", "request(", "axios", "supertest", "XMLHttpRequest"];

pub struct FakeIntegration;

impl FakeIntegration {
    fn crosses_boundary(source: &str) -> bool {
        NETWORK_MARKERS.iter().any(|m| source.contains(m)) || source.contains("render(")
    }
}

impl Detector for FakeIntegration {
    fn name(&self) -> &'static str {
        "fake-integration-test"
    }

    fn check(&self, source: &str, path: &Path) -> Option<String> {
        if is_integration_file(path) && !Self::crosses_boundary(source) {
            Some(
                "Named as an integration test but performs no network call and renders nothing"
                    .to_string(),
            )
        } else {
            None
        }
    }
}
