//! Built-in-only assertions: tests that only confirm "a string is a string"
//! via `typeof` checks or primitive type-name literals add no domain coverage.

use super::Detector;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn typeof_expect_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^expect\(\s*typeof\s").unwrap())
}

fn primitive_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"\.toBe\(\s*['"](?:string|number|boolean|object|function|undefined|symbol|bigint)['"]\s*\)"#,
        )
        .unwrap()
    })
}

pub struct BuiltinOnlyAssertions;

impl BuiltinOnlyAssertions {
    /// Split the source into one slice per `expect(` occurrence, each running
    /// to the end of its statement (or a bounded window).
    fn assertion_slices(source: &str) -> Vec<&str> {
        let mut slices = Vec::new();
        let mut search_from = 0;
        while let Some(offset) = source[search_from..].find("expect(") {
            let start = search_from + offset;
            let rest = &source[start..];
            let end = rest
                .find(|c| c == ';' || c == '\n')
                .map(|i| i + 1)
                .unwrap_or(rest.len());
            slices.push(&rest[..end]);
            search_from = start + "expect(".len();
        }
        slices
    }

    fn is_builtin_only(assertion: &str) -> bool {
        typeof_expect_re().is_match(assertion) || primitive_name_re().is_match(assertion)
    }
}

impl Detector for BuiltinOnlyAssertions {
    fn name(&self) -> &'static str {
        "builtin-only-assertions"
    }

    fn check(&self, source: &str, _path: &Path) -> Option<String> {
        let assertions = Self::assertion_slices(source);
        let total = assertions.len();
        if total == 0 {
            return None;
        }

        let builtin = assertions
            .iter()
            .filter(|a| Self::is_builtin_only(a))
            .count();

        // Strictly more than half.
        if builtin * 2 > total {
            Some(format!(
                "{} of {} assertions only check built-in type tags (typeof / primitive type names)",
                builtin, total
            ))
        } else {
            None
        }
    }
}
