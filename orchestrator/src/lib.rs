//! Intelligence scoring and report assembly engine
//!
//! This library scores one organization/jurisdiction profile across several
//! independent analytical modules, runs them concurrently against an
//! immutable reference dataset, and assembles their results into a single
//! report payload with an advisory completeness check.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{AssemblyConfig, EngineConfig, TimeoutPolicy};
pub use core::{ModuleResults, NeutralResult, ReferenceDataStore, ReferenceDataset};
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::ReportOrchestrator;
pub use services::{RealReferenceSource, StandardScoringEngine, TracingObserver};
pub use traits::{AssemblyObserver, ReferenceSource, ScoringEngine};

// Re-export mock types for testing
pub use traits::{MockAssemblyObserver, MockReferenceSource, MockScoringEngine};
