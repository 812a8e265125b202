//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod diversification;
pub mod ethics;
pub mod fallback;
pub mod mapping;
pub mod opportunity;
pub mod partners;
pub mod reference;
pub mod rroi;
pub mod seam;
pub mod spi;
pub mod validator;

pub use diversification::{analyze_concentration, classify, effective_shares, placeholder_shares, DiversificationAnalyzer};
pub use ethics::screen_ethics;
pub use fallback::NeutralResult;
pub use mapping::{assemble_payload, ModuleResults};
pub use opportunity::{build_region_profile, orchestrate_opportunities};
pub use partners::match_partners;
pub use reference::{ReferenceDataStore, ReferenceDataset, ResolvedRecord};
pub use rroi::calculate_rroi;
pub use seam::build_seam_blueprint;
pub use spi::calculate_spi;
pub use validator::validate;

/// Weighted arithmetic mean of `(value, weight)` pairs; zero total weight yields 0
pub(crate) fn weighted_mean(parts: &[(f64, f64)]) -> f64 {
    let total_weight: f64 = parts.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    parts.iter().map(|(v, w)| v * w).sum::<f64>() / total_weight
}
