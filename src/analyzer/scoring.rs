//! Confidence scoring: reason count → verdict
//!
//! The thresholds are fixed and non-configurable on purpose: the verdict is
//! fully explainable by listing the reasons. No detector identity affects
//! the verdict, only the count.

use crate::Confidence;

/// Map a reason count to a confidence verdict.
///
/// Returns `None` for zero reasons; such files are dropped from the report
/// rather than surfaced as "clean".
pub fn confidence_for(reason_count: usize) -> Option<Confidence> {
    match reason_count {
        0 => None,
        1 => Some(Confidence::Low),
        2 => Some(Confidence::Medium),
        _ => Some(Confidence::High),
    }
}
