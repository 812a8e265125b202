//! Raw scoring results
//!
//! One value object per module, created fresh for each assembly. These are
//! carried verbatim in the payload's computed-intelligence bag.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DataCoverage;

/// Labels of the SPI breakdown that feed the payload confidence scores
pub mod spi_labels {
    pub const ECONOMIC_READINESS: &str = "Economic Readiness";
    pub const SYMBIOTIC_FIT: &str = "Symbiotic Fit";
    pub const POLITICAL_STABILITY: &str = "Political Stability";
    pub const PARTNER_RELIABILITY: &str = "Partner Reliability";
    pub const ETHICAL_ALIGNMENT: &str = "Ethical Alignment";
    pub const ACTIVATION_VELOCITY: &str = "Activation Velocity";
    pub const TRANSPARENCY: &str = "Transparency";

    pub const ALL: [&str; 7] = [
        ECONOMIC_READINESS,
        SYMBIOTIC_FIT,
        POLITICAL_STABILITY,
        PARTNER_RELIABILITY,
        ETHICAL_ALIGNMENT,
        ACTIVATION_VELOCITY,
        TRANSPARENCY,
    ];
}

// ---------------------------------------------------------------------------
// SPI
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiResult {
    /// Overall index, 0-100
    pub spi: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub breakdown: Vec<SpiFactor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiFactor {
    pub label: String,
    pub value: f64,
    pub weight: f64,
}

impl SpiResult {
    /// Breakdown value by exact label
    pub fn factor(&self, label: &str) -> Option<f64> {
        self.breakdown.iter().find(|f| f.label == label).map(|f| f.value)
    }

    pub fn band_width(&self) -> f64 {
        self.ci_high - self.ci_low
    }
}

// ---------------------------------------------------------------------------
// RROI
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RroiResult {
    pub overall_score: f64,
    pub components: RroiComponents,
}

/// The four fixed RROI components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RroiComponents {
    pub infrastructure: RroiComponent,
    pub talent: RroiComponent,
    pub regulatory: RroiComponent,
    pub market: RroiComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RroiComponent {
    pub score: f64,
    pub rationale: String,
}

// ---------------------------------------------------------------------------
// SEAM
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeamBlueprint {
    pub score: f64,
    pub ecosystem_health: EcosystemHealth,
    /// Ranked by synergy, descending
    pub partners: Vec<EcosystemPartner>,
    /// Capability needs the jurisdiction does not cover
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcosystemHealth {
    Thriving,
    Healthy,
    Developing,
    Fragile,
}

impl EcosystemHealth {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => EcosystemHealth::Thriving,
            s if s >= 65.0 => EcosystemHealth::Healthy,
            s if s >= 50.0 => EcosystemHealth::Developing,
            _ => EcosystemHealth::Fragile,
        }
    }
}

impl fmt::Display for EcosystemHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcosystemHealth::Thriving => write!(f, "Thriving"),
            EcosystemHealth::Healthy => write!(f, "Healthy"),
            EcosystemHealth::Developing => write!(f, "Developing"),
            EcosystemHealth::Fragile => write!(f, "Fragile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemPartner {
    pub name: String,
    pub role: String,
    pub synergy_score: f64,
}

// ---------------------------------------------------------------------------
// Symbiotic partner matcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbioticPartner {
    pub entity_name: String,
    pub entity_type: String,
    pub location: String,
    pub symbiosis_score: f64,
    pub asymmetry_analysis: AsymmetryAnalysis,
    pub mutual_benefit: String,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsymmetryAnalysis {
    pub requester_strength: f64,
    pub partner_strength: f64,
    pub balance: LeverageBalance,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageBalance {
    Balanced,
    PartnerLeaning,
    RequesterLeaning,
}

// ---------------------------------------------------------------------------
// Ethical safeguards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicsScreening {
    pub passed: bool,
    pub score: f64,
    pub overall_flag: EthicsVerdict,
    pub flags: Vec<EthicalFlag>,
    pub mitigation: Vec<MitigationStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EthicsVerdict {
    Pass,
    Caution,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlagSeverity {
    Caution,
    Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicalFlag {
    pub name: String,
    pub severity: FlagSeverity,
    pub rationale: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationStep {
    pub step: String,
    pub description: String,
}

impl EthicsScreening {
    pub fn blocking_flags(&self) -> impl Iterator<Item = &EthicalFlag> {
        self.flags.iter().filter(|f| f.severity == FlagSeverity::Block)
    }
}

// ---------------------------------------------------------------------------
// Opportunity orchestration
// ---------------------------------------------------------------------------

/// Derived view of the target region, built before dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub country: String,
    pub region: String,
    pub population: u64,
    pub gdp_total_usd: f64,
    pub gdp_growth_rate: f64,
    pub infrastructure_score: f64,
    pub talent_score: f64,
    pub market_access_score: f64,
    pub key_sectors: Vec<String>,
    pub high_risk_region: bool,
    pub coverage: DataCoverage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityOrchestration {
    pub market_gravity: MarketGravityDetail,
    pub activation_pathway: ActivationPathwayDetail,
    pub capital_alignment: CapitalAlignmentDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketGravityDetail {
    pub index: f64,
    pub scale_component: f64,
    pub growth_component: f64,
    pub access_component: f64,
    pub drivers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationPathwayDetail {
    pub index: f64,
    pub estimated_months: u32,
    pub phases: Vec<ActivationPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationPhase {
    pub name: String,
    pub months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalAlignmentDetail {
    pub index: f64,
    pub equity_share: f64,
    pub debt_share: f64,
    pub grant_share: f64,
    /// Budget cap relative to the region's per-capita output; absent without a cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_adequacy: Option<f64>,
    pub note: String,
}

// ---------------------------------------------------------------------------
// Market diversification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationAnalysis {
    /// Sum of squared percentage shares, 0-10000
    pub concentration_index: f64,
    pub risk_level: ConcentrationRisk,
    pub market_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_market: Option<String>,
    /// Ranked by opportunity score, descending
    pub recommended_markets: Vec<MarketRecommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConcentrationRisk {
    #[serde(rename = "Diversified")]
    Diversified,
    #[serde(rename = "Moderate Concentration")]
    ModerateConcentration,
    #[serde(rename = "High Concentration")]
    HighConcentration,
    #[serde(rename = "Critical Dependency")]
    CriticalDependency,
}

impl fmt::Display for ConcentrationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcentrationRisk::Diversified => write!(f, "Diversified"),
            ConcentrationRisk::ModerateConcentration => write!(f, "Moderate Concentration"),
            ConcentrationRisk::HighConcentration => write!(f, "High Concentration"),
            ConcentrationRisk::CriticalDependency => write!(f, "Critical Dependency"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecommendation {
    pub country: String,
    pub growth_rate: f64,
    pub ease_of_entry: f64,
    pub talent_availability: f64,
    pub innovation_index: f64,
    pub regulatory_friction: f64,
    pub opportunity_score: f64,
}
