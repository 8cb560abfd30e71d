//! Analysis engine: detectors, confidence scoring, and scan orchestration

pub mod detectors;
pub mod engine;
pub mod scoring;

pub use engine::SuiteScanner;
pub use scoring::confidence_for;
