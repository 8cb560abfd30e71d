//! Inline re-implementation: the test defines its own miniature version of
//! the production abstraction it claims to test, so it validates the mock.

use super::Detector;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Name suffixes that mark a definition as playing a production role.
const ROLE_SUFFIXES: &[&str] = &[
    "Buffer", "Parser", "Handler", "Manager", "Service", "Client", "Builder", "Strategy",
];

fn definition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Top-level definitions only: no leading indentation.
        Regex::new(r"(?m)^(?:export\s+)?(?:default\s+)?(?:abstract\s+)?(?:async\s+)?(?:function|class|const|let|var)\s+(\w+)")
            .unwrap()
    })
}

pub struct InlineReimplementation;

impl Detector for InlineReimplementation {
    fn name(&self) -> &'static str {
        "inline-reimplementation"
    }

    fn check(&self, source: &str, _path: &Path) -> Option<String> {
        let count = definition_re()
            .captures_iter(source)
            .filter(|caps| {
                let name = &caps[1];
                ROLE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
            })
            .count();

        if count >= 1 {
            Some(format!(
                "Defines {} production-role implementation(s) inline (names ending in Parser/Handler/Service/...) instead of importing the real one",
                count
            ))
        } else {
            None
        }
    }
}
