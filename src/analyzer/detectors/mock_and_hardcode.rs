//! Mock-and-hardcode: a typed object literal is declared, then a property of
//! that same identifier is asserted. The test checks a hand-built object
//! against itself.

use super::Detector;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// More than this many declare-then-assert pairs triggers the detector.
const PAIR_THRESHOLD: usize = 3;

fn typed_literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // `const user: User = {` — a typed object literal declaration.
        Regex::new(r"const\s+(\w+)\s*:\s*[A-Za-z_][\w.<>\[\], ]*\s*=\s*\{").unwrap()
    })
}

pub struct MockAndHardcode;

impl Detector for MockAndHardcode {
    fn name(&self) -> &'static str {
        "mock-and-hardcode"
    }

    fn check(&self, source: &str, _path: &Path) -> Option<String> {
        let mut count = 0;
        for caps in typed_literal_re().captures_iter(source) {
            let ident = &caps[1];
            let decl_end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let assert_on_same = format!("expect({}.", ident);
            if source[decl_end..].contains(&assert_on_same) {
                count += 1;
            }
        }

        if count > PAIR_THRESHOLD {
            Some(format!(
                "{} hardcoded-object-then-assert patterns: asserting a hand-built object equals itself is tautological",
                count
            ))
        } else {
            None
        }
    }
}
