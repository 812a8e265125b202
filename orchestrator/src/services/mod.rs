//! Service implementations
//!
//! This module contains the production implementations of the orchestrator
//! traits: the scoring engine backed by the pure core functions, the
//! reference data loader and the tracing observer.

pub mod observer;
pub mod reference_source;
pub mod scoring_engine;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use observer::TracingObserver;
pub use reference_source::RealReferenceSource;
pub use scoring_engine::StandardScoringEngine;
