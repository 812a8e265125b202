//! Projection of raw scoring results into payload sections
//!
//! Every function here is pure and reads only raw results, the profile and
//! the reference data. No section depends on another section's mapped value.

use shared::{
    round1, spi_labels, ComputedIntelligence, ConfidenceScores, DiversificationAnalysis, EconomicSignals,
    EthicsScreening, InputProfile, OpportunityMatches, OpportunityOrchestration, PoliticalRisk, ProblemDefinition,
    Recommendations, RegionalProfileSection, RegulatoryRisk, ReportMetadata, ReportPayload, RiskSection, RroiResult,
    SeamBlueprint, SpiResult, SymbioticPartner,
};

use super::reference::ReferenceDataStore;

/// Used for any confidence label missing from the SPI breakdown
pub const CONFIDENCE_FALLBACK: f64 = 70.0;
/// Coarse binary conflict heuristic
pub const HIGH_RISK_CONFLICT: f64 = 80.0;
pub const BASELINE_CONFLICT: f64 = 30.0;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw results joined from the concurrent dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleResults {
    pub spi: SpiResult,
    pub rroi: RroiResult,
    pub seam: SeamBlueprint,
    pub partners: Vec<SymbioticPartner>,
    pub ethics: EthicsScreening,
    pub orchestration: OpportunityOrchestration,
    pub diversification: DiversificationAnalysis,
}

pub fn assemble_payload(profile: &InputProfile, reference: &ReferenceDataStore, results: ModuleResults) -> ReportPayload {
    ReportPayload {
        metadata: map_metadata(profile),
        problem_definition: map_problem_definition(profile),
        regional_profile: map_regional_profile(profile, reference),
        economic_signals: map_economic_signals(&results.rroi),
        opportunity_matches: map_opportunity_matches(&results.partners, &results.spi),
        risks: map_risks(profile, reference, &results.ethics),
        recommendations: map_recommendations(&results.seam, &results.diversification),
        confidence_scores: map_confidence_scores(&results.spi),
        computed_intelligence: ComputedIntelligence {
            spi: results.spi,
            rroi: results.rroi,
            seam: results.seam,
            symbiotic_partners: results.partners,
            diversification: results.diversification,
            ethics: results.ethics,
            orchestration: results.orchestration,
        },
    }
}

pub fn map_metadata(profile: &InputProfile) -> ReportMetadata {
    ReportMetadata {
        report_id: profile.report_id().as_str().to_string(),
        organization_name: profile.identity.name.trim().to_string(),
        requester_type: profile.identity.organization_type.trim().to_string(),
        country: profile.country().trim().to_string(),
        region: profile.region().trim().to_string(),
        timestamp: profile.metadata.created_at,
        engine_version: ENGINE_VERSION.to_string(),
    }
}

pub fn map_problem_definition(profile: &InputProfile) -> ProblemDefinition {
    ProblemDefinition {
        stated_problem: profile.mandate.problem_statement.trim().to_string(),
        strategic_intents: profile.intents().into_iter().map(String::from).collect(),
        industries: profile.industries().into_iter().map(String::from).collect(),
        timeline: profile.mandate.timeline.map(|t| t.label().to_string()),
    }
}

pub fn map_regional_profile(profile: &InputProfile, reference: &ReferenceDataStore) -> RegionalProfileSection {
    let resolved = reference.resolve(profile.country());
    let r = resolved.record;
    RegionalProfileSection {
        demographics: Some(r.demographics.clone()),
        economy: r.economy.clone(),
        infrastructure: r.infrastructure.clone(),
        talent: r.talent.clone(),
        business_environment: r.business_environment.clone(),
        market_access: r.market_access.clone(),
        data_coverage: resolved.coverage,
    }
}

pub fn map_economic_signals(rroi: &RroiResult) -> EconomicSignals {
    EconomicSignals {
        trade_exposure: rroi.components.market.score,
        tariff_sensitivity: round1(100.0 - rroi.components.regulatory.score),
        bottleneck_relief_potential: rroi.overall_score,
    }
}

pub fn map_opportunity_matches(partners: &[SymbioticPartner], spi: &SpiResult) -> OpportunityMatches {
    OpportunityMatches {
        sectors: partners.iter().map(|p| p.entity_type.clone()).collect(),
        partner_types: partners.iter().map(|p| p.location.clone()).collect(),
        risk_adjusted_roi: spi.spi,
    }
}

pub fn map_risks(profile: &InputProfile, reference: &ReferenceDataStore, ethics: &EthicsScreening) -> RiskSection {
    let env = &reference.lookup(profile.country()).business_environment;
    let regional_conflict_risk = if reference.is_high_risk_region(profile.region()) {
        HIGH_RISK_CONFLICT
    } else {
        BASELINE_CONFLICT
    };

    RiskSection {
        political: PoliticalRisk {
            stability_score: env.regulatory_quality,
            regional_conflict_risk,
        },
        regulatory: RegulatoryRisk {
            corruption_index: env.corruption_index,
            regulatory_friction: round1(env.regulatory_friction()),
            compliance_roadmap: ethics.mitigation.iter().map(|m| m.description.clone()).collect(),
        },
    }
}

pub fn map_recommendations(seam: &SeamBlueprint, diversification: &DiversificationAnalysis) -> Recommendations {
    Recommendations {
        ecosystem_partners: seam.partners.iter().map(|p| p.name.clone()).collect(),
        capability_gaps: seam.gaps.clone(),
        alternative_markets: diversification.recommended_markets.clone(),
        concentration_summary: format!(
            "{} (concentration index {:.0} across {} markets)",
            diversification.risk_level, diversification.concentration_index, diversification.market_count
        ),
    }
}

pub fn map_confidence_scores(spi: &SpiResult) -> ConfidenceScores {
    let score = |label: &str| spi.factor(label).unwrap_or(CONFIDENCE_FALLBACK);
    ConfidenceScores {
        economic_readiness: score(spi_labels::ECONOMIC_READINESS),
        symbiotic_fit: score(spi_labels::SYMBIOTIC_FIT),
        political_stability: score(spi_labels::POLITICAL_STABILITY),
        partner_reliability: score(spi_labels::PARTNER_RELIABILITY),
        ethical_alignment: score(spi_labels::ETHICAL_ALIGNMENT),
        activation_velocity: score(spi_labels::ACTIVATION_VELOCITY),
        transparency: score(spi_labels::TRANSPARENCY),
        overall: Some(spi.spi),
    }
}
