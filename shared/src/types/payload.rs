//! Report payload consumed by the rendering layer
//!
//! Field names and nesting are a stable contract: the renderer binds to the
//! camelCase JSON shape directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BusinessEnvironment, DataCoverage, DemographicIndicators, DiversificationAnalysis, EconomicIndicators,
    EthicsScreening, InfrastructureIndicators, MarketAccess, MarketRecommendation, OpportunityOrchestration,
    RroiResult, SeamBlueprint, SpiResult, SymbioticPartner, TalentIndicators,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub metadata: ReportMetadata,
    pub problem_definition: ProblemDefinition,
    pub regional_profile: RegionalProfileSection,
    pub economic_signals: EconomicSignals,
    pub opportunity_matches: OpportunityMatches,
    pub risks: RiskSection,
    pub recommendations: Recommendations,
    pub confidence_scores: ConfidenceScores,
    pub computed_intelligence: ComputedIntelligence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub report_id: String,
    pub organization_name: String,
    pub requester_type: String,
    pub country: String,
    pub region: String,
    pub timestamp: DateTime<Utc>,
    pub engine_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinition {
    pub stated_problem: String,
    pub strategic_intents: Vec<String>,
    pub industries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalProfileSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demographics: Option<DemographicIndicators>,
    pub economy: EconomicIndicators,
    pub infrastructure: InfrastructureIndicators,
    pub talent: TalentIndicators,
    pub business_environment: BusinessEnvironment,
    pub market_access: MarketAccess,
    pub data_coverage: DataCoverage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicSignals {
    pub trade_exposure: f64,
    pub tariff_sensitivity: f64,
    pub bottleneck_relief_potential: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityMatches {
    pub sectors: Vec<String>,
    pub partner_types: Vec<String>,
    #[serde(rename = "riskAdjustedROI")]
    pub risk_adjusted_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSection {
    pub political: PoliticalRisk,
    pub regulatory: RegulatoryRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticalRisk {
    pub stability_score: f64,
    pub regional_conflict_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryRisk {
    pub corruption_index: f64,
    pub regulatory_friction: f64,
    pub compliance_roadmap: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub ecosystem_partners: Vec<String>,
    pub capability_gaps: Vec<String>,
    pub alternative_markets: Vec<MarketRecommendation>,
    pub concentration_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceScores {
    pub economic_readiness: f64,
    pub symbiotic_fit: f64,
    pub political_stability: f64,
    pub partner_reliability: f64,
    pub ethical_alignment: f64,
    pub activation_velocity: f64,
    pub transparency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
}

impl ConfidenceScores {
    /// The seven labeled sub-scores, in label order
    pub fn sub_scores(&self) -> [f64; 7] {
        [
            self.economic_readiness,
            self.symbiotic_fit,
            self.political_stability,
            self.partner_reliability,
            self.ethical_alignment,
            self.activation_velocity,
            self.transparency,
        ]
    }
}

/// Every raw scoring result, unmapped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedIntelligence {
    pub spi: SpiResult,
    pub rroi: RroiResult,
    pub seam: SeamBlueprint,
    pub symbiotic_partners: Vec<SymbioticPartner>,
    pub diversification: DiversificationAnalysis,
    pub ethics: EthicsScreening,
    pub orchestration: OpportunityOrchestration,
}

/// Outcome of the advisory completeness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_complete: bool,
    pub missing_fields: Vec<String>,
}
