//! End-to-end tests for report assembly
//!
//! These tests run the standard scoring engine over the built-in reference
//! dataset and check the assembled payload against the mapping rules and
//! the range invariants of every score.

use std::sync::Arc;

use report_orchestrator::{
    MockReferenceSource, ReferenceDataStore, ReferenceSource, ReportOrchestrator, StandardScoringEngine,
    TracingObserver,
};
use shared::{ConcentrationRisk, DataCoverage, EthicsVerdict, InputProfile, ReportPayload};
use tokio_test::assert_ok;

mod common;
use common::{TestFixtures, TestHelpers};

fn standard_orchestrator() -> ReportOrchestrator<StandardScoringEngine, TracingObserver> {
    ReportOrchestrator::standard(Arc::new(ReferenceDataStore::builtin()))
}

async fn assemble(profile: &InputProfile) -> ReportPayload {
    standard_orchestrator().assemble(profile).await.expect("assembly succeeds")
}

fn varied_profiles() -> Vec<InputProfile> {
    let mut blocked = TestFixtures::complete_profile();
    blocked.identity.industries = vec!["Arms Manufacturing".to_string(), "Coal".to_string()];

    vec![
        TestFixtures::complete_profile(),
        TestFixtures::high_risk_profile(),
        TestFixtures::minimal_profile("Kenya", "Nairobi"),
        TestFixtures::minimal_profile(TestFixtures::UNKNOWN_COUNTRY, "Coast"),
        TestFixtures::minimal_profile("North Korea", "Pyongyang"),
        blocked,
    ]
}

/// Test that every confidence score is finite and within 0-100 for varied profiles
#[tokio::test]
async fn test_confidence_scores_are_bounded() {
    for profile in varied_profiles() {
        let payload = assemble(&profile).await;
        TestHelpers::assert_confidence_in_range(&payload);
        TestHelpers::assert_spi_band(&payload);
    }
}

/// Test that assembling the same profile twice yields identical payloads
#[tokio::test]
async fn test_assembly_is_idempotent() {
    let orchestrator = standard_orchestrator();
    for profile in varied_profiles() {
        let first = orchestrator.assemble(&profile).await.unwrap();
        let second = orchestrator.assemble(&profile).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.metadata.timestamp, profile.metadata.created_at);
    }
}

/// Test that payload sections follow the raw results they are mapped from
#[tokio::test]
async fn test_mapping_rules_hold_end_to_end() {
    // Arrange
    let profile = TestFixtures::complete_profile();
    let reference = ReferenceDataStore::builtin();

    // Act
    let payload = assemble(&profile).await;
    let intel = &payload.computed_intelligence;

    // Assert - Economic signals come from RROI
    assert_eq!(payload.economic_signals.trade_exposure, intel.rroi.components.market.score);
    assert!(
        (payload.economic_signals.tariff_sensitivity - (100.0 - intel.rroi.components.regulatory.score)).abs() < 0.051
    );
    assert_eq!(payload.economic_signals.bottleneck_relief_potential, intel.rroi.overall_score);

    // Opportunity matches project the partner list
    let types: Vec<_> = intel.symbiotic_partners.iter().map(|p| p.entity_type.clone()).collect();
    let locations: Vec<_> = intel.symbiotic_partners.iter().map(|p| p.location.clone()).collect();
    assert_eq!(payload.opportunity_matches.sectors, types);
    assert_eq!(payload.opportunity_matches.partner_types, locations);
    assert_eq!(payload.opportunity_matches.risk_adjusted_roi, intel.spi.spi);

    // Risks come from reference data and the ethics mitigation steps
    let env = &reference.lookup(TestFixtures::HOME_COUNTRY).business_environment;
    assert_eq!(payload.risks.political.stability_score, env.regulatory_quality);
    assert_eq!(payload.risks.political.regional_conflict_risk, 30.0);
    assert_eq!(payload.risks.regulatory.corruption_index, env.corruption_index);
    assert_eq!(payload.risks.regulatory.regulatory_friction, 100.0 - env.ease_of_doing_business);
    let steps: Vec<_> = intel.ethics.mitigation.iter().map(|m| m.description.clone()).collect();
    assert_eq!(payload.risks.regulatory.compliance_roadmap, steps);

    // Confidence scores are looked up by label
    for factor in &intel.spi.breakdown {
        let mapped = match factor.label.as_str() {
            "Economic Readiness" => payload.confidence_scores.economic_readiness,
            "Symbiotic Fit" => payload.confidence_scores.symbiotic_fit,
            "Political Stability" => payload.confidence_scores.political_stability,
            "Partner Reliability" => payload.confidence_scores.partner_reliability,
            "Ethical Alignment" => payload.confidence_scores.ethical_alignment,
            "Activation Velocity" => payload.confidence_scores.activation_velocity,
            "Transparency" => payload.confidence_scores.transparency,
            other => panic!("unexpected label {other}"),
        };
        assert_eq!(mapped, factor.value);
    }
    assert_eq!(payload.confidence_scores.overall, Some(intel.spi.spi));
}

/// Test that a designated higher-risk region raises the conflict heuristic
#[tokio::test]
async fn test_high_risk_region_conflict_heuristic() {
    let payload = assemble(&TestFixtures::high_risk_profile()).await;
    assert_eq!(payload.risks.political.regional_conflict_risk, 80.0);
    assert!(payload
        .computed_intelligence
        .ethics
        .flags
        .iter()
        .any(|f| f.name == "Conflict-Affected Area"));
}

/// Test that a region merely containing a designated name is not treated as higher-risk
#[tokio::test]
async fn test_region_names_match_designations_as_whole_words() {
    let payload = assemble(&TestFixtures::minimal_profile("Tanzania", "Kasulu")).await;

    assert_eq!(payload.risks.political.regional_conflict_risk, 30.0);
    assert!(!payload
        .computed_intelligence
        .ethics
        .flags
        .iter()
        .any(|f| f.name == "Conflict-Affected Area"));
}

/// Test that a short industry name does not match a priority sector containing it mid-word
#[tokio::test]
async fn test_short_industry_names_do_not_inflate_symbiotic_fit() {
    let mut unrelated = TestFixtures::minimal_profile("Indonesia", "Jakarta");
    unrelated.identity.industries = vec!["Tourism".to_string()];
    let mut short_name = unrelated.clone();
    short_name.identity.industries = vec!["IT".to_string()];

    let baseline = assemble(&unrelated).await.confidence_scores.symbiotic_fit;
    let payload = assemble(&short_name).await;

    assert_eq!(payload.confidence_scores.symbiotic_fit, baseline);
    assert!(payload.confidence_scores.symbiotic_fit < 100.0);
}

/// Test that an unknown jurisdiction is scored from fallback values rather than zeros
#[tokio::test]
async fn test_unknown_jurisdiction_uses_fallback_values() {
    let payload = assemble(&TestFixtures::minimal_profile(TestFixtures::UNKNOWN_COUNTRY, "Coast")).await;

    let regional = &payload.regional_profile;
    assert_eq!(regional.data_coverage, DataCoverage::Fallback);
    assert_eq!(regional.infrastructure.overall_score, 70.0);
    assert_eq!(regional.talent.overall_score, 70.0);
    assert_eq!(regional.economy.gdp_total_usd, 100_000_000_000.0);
    assert_eq!(payload.risks.political.stability_score, 70.0);
    assert_eq!(payload.risks.regulatory.corruption_index, 50.0);
    assert_eq!(payload.risks.regulatory.regulatory_friction, 30.0);
    TestHelpers::assert_confidence_in_range(&payload);
}

/// Test that a restricted jurisdiction is blocked but still produces a complete payload
#[tokio::test]
async fn test_restricted_jurisdiction_is_blocked() {
    let payload = assemble(&TestFixtures::minimal_profile("North Korea", "Pyongyang")).await;
    let ethics = &payload.computed_intelligence.ethics;

    assert!(!ethics.passed);
    assert_eq!(ethics.overall_flag, EthicsVerdict::Block);
    assert!(!payload.risks.regulatory.compliance_roadmap.is_empty());
}

/// Test that caller-supplied market shares drive the diversification analysis
#[tokio::test]
async fn test_supplied_market_shares_are_analyzed() {
    let mut profile = TestFixtures::complete_profile();
    profile.market_shares = Some(TestFixtures::single_market_shares());
    let payload = assemble(&profile).await;

    let diversification = &payload.computed_intelligence.diversification;
    assert_eq!(diversification.concentration_index, 10_000.0);
    assert_eq!(diversification.risk_level, ConcentrationRisk::CriticalDependency);
    assert!(diversification
        .recommended_markets
        .iter()
        .all(|m| m.country != TestFixtures::HOME_COUNTRY));
    assert_eq!(payload.recommendations.alternative_markets, diversification.recommended_markets);

    profile.market_shares = Some(TestFixtures::balanced_shares());
    let payload = assemble(&profile).await;
    assert_eq!(payload.computed_intelligence.diversification.concentration_index, 2_500.0);
    assert_eq!(
        payload.computed_intelligence.diversification.risk_level,
        ConcentrationRisk::HighConcentration
    );
}

/// Test that the placeholder distribution is analyzed when no shares are supplied
#[tokio::test]
async fn test_placeholder_shares_when_none_supplied() {
    let payload = assemble(&TestFixtures::complete_profile()).await;
    let diversification = &payload.computed_intelligence.diversification;

    // 60^2 + 25^2 + 15^2
    assert_eq!(diversification.concentration_index, 4_450.0);
    assert_eq!(diversification.market_count, 3);
    assert_eq!(diversification.dominant_market.as_deref(), Some(TestFixtures::HOME_COUNTRY));
}

/// Test the validator round trip on an assembled payload
#[tokio::test]
async fn test_validator_round_trip_on_assembled_payload() {
    let orchestrator = standard_orchestrator();
    let mut payload = orchestrator.assemble(&TestFixtures::complete_profile()).await.unwrap();
    assert!(orchestrator.validate(&payload).is_complete);

    let country = std::mem::take(&mut payload.metadata.country);
    let report = orchestrator.validate(&payload);
    assert!(!report.is_complete);
    assert_eq!(report.missing_fields, vec!["metadata.country".to_string()]);

    payload.metadata.country = country;
    assert!(orchestrator.validate(&payload).is_complete);
}

/// Test that a minimal profile reports the fields the caller never supplied
#[tokio::test]
async fn test_minimal_profile_is_incomplete() {
    let orchestrator = standard_orchestrator();
    let payload = orchestrator
        .assemble(&TestFixtures::minimal_profile("Japan", "Osaka"))
        .await
        .unwrap();

    let report = orchestrator.validate(&payload);
    assert!(!report.is_complete);
    assert_eq!(
        report.missing_fields,
        vec!["metadata.requesterType".to_string(), "problemDefinition.statedProblem".to_string()]
    );
}

/// Test the serialized payload shape that the rendering layer binds to
#[tokio::test]
async fn test_payload_serializes_with_stable_field_names() {
    let payload = assemble(&TestFixtures::complete_profile()).await;
    let json = serde_json::to_value(&payload).unwrap();

    for section in [
        "metadata",
        "problemDefinition",
        "regionalProfile",
        "economicSignals",
        "opportunityMatches",
        "risks",
        "recommendations",
        "confidenceScores",
        "computedIntelligence",
    ] {
        assert!(json.get(section).is_some(), "missing section {section}");
    }
    assert!(json["metadata"]["requesterType"].is_string());
    assert!(json["opportunityMatches"]["riskAdjustedROI"].is_number());
    assert!(json["economicSignals"]["bottleneckReliefPotential"].is_number());
    assert!(json["risks"]["political"]["regionalConflictRisk"].is_number());
    assert!(json["risks"]["regulatory"]["complianceRoadmap"].is_array());
    assert_eq!(json["regionalProfile"]["dataCoverage"], "reference");

    let round_trip: ReportPayload = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip.metadata, payload.metadata);
    assert_eq!(round_trip.problem_definition, payload.problem_definition);
    assert_eq!(round_trip.computed_intelligence.diversification.risk_level, payload.computed_intelligence.diversification.risk_level);
}

/// Test that an orchestrator built from an injected reference source uses that data
#[tokio::test]
async fn test_injected_reference_source_is_used() {
    // Arrange
    let mut source = MockReferenceSource::new();
    source
        .expect_load()
        .times(1)
        .returning(|| Ok(ReferenceDataStore::empty().with_high_risk_region("Coast")));

    // Act
    let reference = assert_ok!(source.load().await);
    let orchestrator = ReportOrchestrator::standard(Arc::new(reference));
    let payload = orchestrator
        .assemble(&TestFixtures::minimal_profile("Philippines", "Coast"))
        .await
        .unwrap();

    // Assert - The empty dataset knows nothing about the Philippines
    assert_eq!(payload.regional_profile.data_coverage, DataCoverage::Fallback);
    assert_eq!(payload.risks.political.regional_conflict_risk, 80.0);
}
