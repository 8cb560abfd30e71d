//! Type-only test: the file declares or imports types but never exercises
//! anything at runtime. The type checker already does this work.

use super::Detector;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn type_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*(?:export\s+)?(?:interface\s+\w+|type\s+\w+(?:<[^>]*>)?\s*=)|import\s+type\s")
            .unwrap()
    })
}

fn instantiation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bnew\s+[A-Z_]\w*\s*[(<]").unwrap())
}

pub struct TypeOnlyTest;

impl TypeOnlyTest {
    /// Any marker that code actually runs: render calls, hook renders,
    /// object instantiation, or a was-called spy assertion.
    fn has_runtime_exercise(source: &str) -> bool {
        source.contains("render(")
            || source.contains("renderHook(")
            || source.contains("toHaveBeenCalled")
            || instantiation_re().is_match(source)
    }
}

impl Detector for TypeOnlyTest {
    fn name(&self) -> &'static str {
        "type-only-test"
    }

    fn check(&self, source: &str, _path: &Path) -> Option<String> {
        if type_decl_re().is_match(source) && !Self::has_runtime_exercise(source) {
            Some(
                "Only verifies compile-time types; nothing is exercised at runtime".to_string(),
            )
        } else {
            None
        }
    }
}
