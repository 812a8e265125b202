//! Symbiotic Partnership Index
//!
//! Seven weighted sub-factors collapsed into one 0-100 index. The confidence
//! band widens with every optional input left blank and when the country is
//! served from the fallback reference record.

use shared::{
    bounded_score, round1, spi_labels, DataCoverage, InputProfile, SpiFactor, SpiResult, Timeline, NEUTRAL_SCORE,
};

use super::reference::ReferenceDataStore;
use super::weighted_mean;

const BASE_HALF_WIDTH: f64 = 4.0;
const PER_MISSING_FIELD: f64 = 1.5;
const FALLBACK_PENALTY: f64 = 8.0;
const HIGH_RISK_STABILITY_PENALTY: f64 = 15.0;

/// Label and weight of every breakdown entry; weights sum to 1
const FACTOR_WEIGHTS: [(&str, f64); 7] = [
    (spi_labels::ECONOMIC_READINESS, 0.20),
    (spi_labels::SYMBIOTIC_FIT, 0.20),
    (spi_labels::POLITICAL_STABILITY, 0.15),
    (spi_labels::PARTNER_RELIABILITY, 0.15),
    (spi_labels::ETHICAL_ALIGNMENT, 0.10),
    (spi_labels::ACTIVATION_VELOCITY, 0.10),
    (spi_labels::TRANSPARENCY, 0.10),
];

pub fn calculate_spi(profile: &InputProfile, reference: &ReferenceDataStore) -> SpiResult {
    let resolved = reference.resolve(profile.country());
    let r = resolved.record;
    let env = &r.business_environment;

    let economic_readiness = weighted_mean(&[
        (r.growth_score(), 0.4),
        (r.infrastructure.overall_score, 0.3),
        (r.market_access.composite(), 0.3),
    ]);

    let symbiotic_fit = symbiotic_fit(profile, reference);

    let mut political_stability = env.political_stability;
    if reference.is_high_risk_region(profile.region()) {
        political_stability -= HIGH_RISK_STABILITY_PENALTY;
    }

    let partner_reliability = weighted_mean(&[
        (env.regulatory_quality, 0.5),
        (env.corruption_index, 0.3),
        (r.talent.skills_availability, 0.2),
    ]);

    let mut ethical_alignment = weighted_mean(&[(env.corruption_index, 0.6), (env.regulatory_quality, 0.4)]);
    if reference.is_restricted(profile.country()) {
        ethical_alignment = ethical_alignment.min(10.0);
    }

    let timeline_adjustment = match profile.timeline_or_default() {
        Timeline::Immediate => -8.0,
        Timeline::ShortTerm => 0.0,
        Timeline::MediumTerm => 4.0,
        Timeline::LongTerm => 6.0,
    };
    let activation_velocity =
        weighted_mean(&[(env.ease_of_doing_business, 0.6), (r.infrastructure.logistics_score, 0.4)])
            + timeline_adjustment;

    let transparency = weighted_mean(&[(env.corruption_index, 0.5), (disclosure_score(profile), 0.5)]);

    let values = [
        economic_readiness,
        symbiotic_fit,
        political_stability,
        partner_reliability,
        ethical_alignment,
        activation_velocity,
        transparency,
    ];

    let breakdown: Vec<SpiFactor> = FACTOR_WEIGHTS
        .iter()
        .zip(values)
        .map(|((label, weight), value)| SpiFactor {
            label: label.to_string(),
            value: round1(bounded_score(value, NEUTRAL_SCORE)),
            weight: *weight,
        })
        .collect();

    let spi = round1(bounded_score(
        weighted_mean(&breakdown.iter().map(|f| (f.value, f.weight)).collect::<Vec<_>>()),
        NEUTRAL_SCORE,
    ));

    let mut half_width = BASE_HALF_WIDTH + PER_MISSING_FIELD * profile.missing_optional_fields() as f64;
    if resolved.coverage == DataCoverage::Fallback {
        half_width += FALLBACK_PENALTY;
    }

    SpiResult {
        spi,
        ci_low: round1((spi - half_width).max(0.0)),
        ci_high: round1((spi + half_width).min(100.0)),
        breakdown,
    }
}

/// Share of declared industries the jurisdiction actively promotes
fn symbiotic_fit(profile: &InputProfile, reference: &ReferenceDataStore) -> f64 {
    let industries = profile.industries();
    if industries.is_empty() {
        return NEUTRAL_SCORE;
    }
    let record = reference.lookup(profile.country());
    let matched = industries.iter().filter(|sector| record.prioritizes(sector)).count();
    45.0 + 55.0 * matched as f64 / industries.len() as f64
}

/// How much the requester has disclosed about the problem it wants solved
fn disclosure_score(profile: &InputProfile) -> f64 {
    if !profile.has_problem_statement() {
        return 40.0;
    }
    let words = profile.mandate.problem_statement.split_whitespace().count();
    (60.0 + words.min(40) as f64).min(100.0)
}
