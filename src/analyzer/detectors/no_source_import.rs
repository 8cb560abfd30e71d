//! No source import: a "unit test" that pulls in testing utilities but never
//! imports any production module cannot be testing production code.

use super::{is_integration_file, Detector};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Packages that mark the file as using a test-utility/UI-testing helper.
const TEST_UTILITY_PACKAGES: &[&str] = &[
    "@testing-library",
    "enzyme",
    "@vue/test-utils",
    "vitest",
    "@jest/globals",
];

fn import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Covers `import x from 'm'`, `import { a } from 'm'`, `import 'm'`,
        // and `require('m')`.
        Regex::new(r#"(?m)^\s*import\s+(?:[^'"]*from\s+)?['"]([^'"]+)['"]|require\(\s*['"]([^'"]+)['"]\s*\)"#)
            .unwrap()
    })
}

fn imported_modules(source: &str) -> Vec<&str> {
    import_re()
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}

/// A relative import of something that is not itself a test artifact.
fn is_source_module(module: &str) -> bool {
    if !(module.starts_with("./") || module.starts_with("../")) {
        return false;
    }
    !(module.contains(".test") || module.contains(".spec") || module.contains(".mock"))
}

pub struct NoSourceImport;

impl Detector for NoSourceImport {
    fn name(&self) -> &'static str {
        "no-source-import"
    }

    fn check(&self, source: &str, path: &Path) -> Option<String> {
        // Integration/e2e tests legitimately exercise deployed surfaces
        // without importing source modules.
        if is_integration_file(path) {
            return None;
        }

        let modules = imported_modules(source);
        let uses_test_utilities = modules
            .iter()
            .any(|m| TEST_UTILITY_PACKAGES.iter().any(|pkg| m.starts_with(pkg)));
        let imports_source = modules.iter().any(|m| is_source_module(m));

        if uses_test_utilities && !imports_source {
            Some("Imports test utilities but no production source module".to_string())
        } else {
            None
        }
    }
}
