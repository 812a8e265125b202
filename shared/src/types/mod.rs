//! Core types used throughout the report engine
//!
//! The boundary types live in submodules: the caller-owned input profile,
//! the per-jurisdiction reference records, the raw scoring results and the
//! assembled report payload. Identifiers shared by all of them live here.

pub mod intelligence;
pub mod payload;
pub mod profile;
pub mod reference;

pub use intelligence::*;
pub use payload::*;
pub use profile::*;
pub use reference::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::SharedError;

/// Identifier attached to every report and to its log lines
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Generate a fresh identifier for a profile that arrived without one
    pub fn generate() -> Self {
        Self(format!("RPT-{}", Uuid::new_v4().simple()).to_uppercase())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self(String::new())
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "unassigned")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The independent computations dispatched for every assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// Symbiotic Partnership Index
    Spi,
    /// Regional Readiness/Opportunity Index
    Rroi,
    /// Ecosystem ally blueprint
    Seam,
    PartnerMatcher,
    EthicalScreener,
    OpportunityOrchestration,
    Diversification,
}

impl ModuleKind {
    /// Every module in dispatch order
    pub const ALL: [ModuleKind; 7] = [
        ModuleKind::Spi,
        ModuleKind::Rroi,
        ModuleKind::Seam,
        ModuleKind::PartnerMatcher,
        ModuleKind::EthicalScreener,
        ModuleKind::OpportunityOrchestration,
        ModuleKind::Diversification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Spi => "Symbiotic Partnership Index",
            ModuleKind::Rroi => "Regional Readiness/Opportunity Index",
            ModuleKind::Seam => "Ecosystem Ally Blueprint",
            ModuleKind::PartnerMatcher => "Symbiotic Partner Matcher",
            ModuleKind::EthicalScreener => "Ethical Safeguards Screener",
            ModuleKind::OpportunityOrchestration => "Opportunity Orchestration",
            ModuleKind::Diversification => "Market Diversification Analyzer",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleKind::Spi => write!(f, "spi"),
            ModuleKind::Rroi => write!(f, "rroi"),
            ModuleKind::Seam => write!(f, "seam"),
            ModuleKind::PartnerMatcher => write!(f, "partner_matcher"),
            ModuleKind::EthicalScreener => write!(f, "ethical_screener"),
            ModuleKind::OpportunityOrchestration => write!(f, "opportunity_orchestration"),
            ModuleKind::Diversification => write!(f, "diversification"),
        }
    }
}

impl std::str::FromStr for ModuleKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "spi" => Ok(ModuleKind::Spi),
            "rroi" => Ok(ModuleKind::Rroi),
            "seam" => Ok(ModuleKind::Seam),
            "partner_matcher" | "partners" => Ok(ModuleKind::PartnerMatcher),
            "ethical_screener" | "ethics" => Ok(ModuleKind::EthicalScreener),
            "opportunity_orchestration" | "orchestration" => Ok(ModuleKind::OpportunityOrchestration),
            "diversification" => Ok(ModuleKind::Diversification),
            _ => Err(SharedError::UnknownModule { input: s.to_string() }),
        }
    }
}

/// Clamp a score into the 0-100 band, mapping non-finite values to `fallback`
pub fn bounded_score(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        fallback.clamp(0.0, 100.0)
    }
}

/// Lowercase alphanumeric words of `text`, joined by single spaces
pub fn word_key(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `phrase` appears in `text` as a run of whole words
///
/// A blank phrase never matches.
pub fn contains_words(text: &str, phrase: &str) -> bool {
    let phrase = word_key(phrase);
    if phrase.is_empty() {
        return false;
    }
    format!(" {} ", word_key(text)).contains(&format!(" {phrase} "))
}

/// Round to one decimal place for presentation-stable values
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
