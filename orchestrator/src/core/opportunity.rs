//! Opportunity orchestration
//!
//! Builds the region profile consumed by this module and derives three
//! auxiliary sub-indices: market gravity, activation pathway and capital
//! alignment. The results only travel in the computed-intelligence bag.

use shared::{
    bounded_score, round1, ActivationPathwayDetail, ActivationPhase, CapitalAlignmentDetail, InputProfile,
    MarketGravityDetail, OpportunityOrchestration, RegionProfile, RiskHorizon, NEUTRAL_SCORE,
};

use super::reference::ReferenceDataStore;
use super::weighted_mean;

/// GDP (log10 USD) mapped to 0 and 100 on the scale component
const GDP_LOG_FLOOR: f64 = 10.0;
const GDP_LOG_CEILING: f64 = 13.5;
const DRIVER_THRESHOLD: f64 = 60.0;
/// Smallest viable program budget before market-size scaling
const MIN_PROGRAM_USD: f64 = 500_000.0;

/// Derive the region view from the profile and its reference record
pub fn build_region_profile(profile: &InputProfile, reference: &ReferenceDataStore) -> RegionProfile {
    let resolved = reference.resolve(profile.country());
    let r = resolved.record;
    RegionProfile {
        country: profile.country().trim().to_string(),
        region: profile.region().trim().to_string(),
        population: r.demographics.population,
        gdp_total_usd: r.economy.gdp_total_usd,
        gdp_growth_rate: r.economy.gdp_growth_rate,
        infrastructure_score: r.infrastructure.overall_score,
        talent_score: r.talent.overall_score,
        market_access_score: round1(r.market_access.composite()),
        key_sectors: r.priority_sectors.clone(),
        high_risk_region: reference.is_high_risk_region(profile.region()),
        coverage: resolved.coverage,
    }
}

pub fn orchestrate_opportunities(
    profile: &InputProfile,
    region: &RegionProfile,
    reference: &ReferenceDataStore,
) -> OpportunityOrchestration {
    let market_gravity = market_gravity(region);
    let activation_pathway = activation_pathway(profile, region, reference);
    let capital_alignment = capital_alignment(profile, market_gravity.scale_component);

    OpportunityOrchestration {
        market_gravity,
        activation_pathway,
        capital_alignment,
    }
}

fn market_gravity(region: &RegionProfile) -> MarketGravityDetail {
    let scale = if region.gdp_total_usd.is_finite() && region.gdp_total_usd > 0.0 {
        ((region.gdp_total_usd.log10() - GDP_LOG_FLOOR) / (GDP_LOG_CEILING - GDP_LOG_FLOOR) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let growth = if region.gdp_growth_rate.is_finite() {
        ((region.gdp_growth_rate + 2.0) * 10.0).clamp(0.0, 100.0)
    } else {
        50.0
    };
    let access = bounded_score(region.market_access_score, NEUTRAL_SCORE);

    let mut drivers = Vec::new();
    if scale >= DRIVER_THRESHOLD {
        drivers.push("Large domestic market".to_string());
    }
    if growth >= DRIVER_THRESHOLD {
        drivers.push("Strong growth momentum".to_string());
    }
    if access >= DRIVER_THRESHOLD {
        drivers.push("Open trade access".to_string());
    }
    drivers.extend(region.key_sectors.iter().take(2).map(|s| format!("Priority sector: {s}")));
    if drivers.is_empty() {
        drivers.push("No dominant gravity driver".to_string());
    }

    MarketGravityDetail {
        index: round1(bounded_score(
            weighted_mean(&[(scale, 0.35), (growth, 0.35), (access, 0.30)]),
            NEUTRAL_SCORE,
        )),
        scale_component: round1(scale),
        growth_component: round1(growth),
        access_component: round1(access),
        drivers,
    }
}

fn activation_pathway(
    profile: &InputProfile,
    region: &RegionProfile,
    reference: &ReferenceDataStore,
) -> ActivationPathwayDetail {
    let ease = reference
        .lookup(profile.country())
        .business_environment
        .ease_of_doing_business;

    let mut alignment_months = 3;
    if region.talent_score < DRIVER_THRESHOLD {
        alignment_months += 2;
    }
    let clearance_months = (((100.0 - bounded_score(ease, NEUTRAL_SCORE)) / 10.0).round() as u32).max(1);
    let mut mobilization_months = 3;
    if region.infrastructure_score < DRIVER_THRESHOLD {
        mobilization_months += 3;
    }
    if region.high_risk_region {
        mobilization_months += 3;
    }

    let phases = vec![
        ActivationPhase { name: "Scoping".to_string(), months: 2 },
        ActivationPhase { name: "Partner alignment".to_string(), months: alignment_months },
        ActivationPhase { name: "Regulatory clearance".to_string(), months: clearance_months },
        ActivationPhase { name: "Mobilization".to_string(), months: mobilization_months },
    ];
    let estimated_months: u32 = phases.iter().map(|p| p.months).sum();
    let declared_months = profile.timeline_or_default().months();
    let slack = declared_months as f64 - estimated_months as f64;

    ActivationPathwayDetail {
        index: round1(bounded_score(60.0 + 2.0 * slack, NEUTRAL_SCORE)),
        estimated_months,
        phases,
    }
}

fn capital_alignment(profile: &InputProfile, scale_component: f64) -> CapitalAlignmentDetail {
    let mix = profile.capital_mix_or_default();
    let target_equity = match profile.risk_horizon_or_default() {
        RiskHorizon::Conservative => 30.0,
        RiskHorizon::Balanced => 50.0,
        RiskHorizon::Aggressive => 70.0,
    };
    let alignment = bounded_score(100.0 - 1.2 * (mix.equity - target_equity).abs(), NEUTRAL_SCORE);

    let budget_adequacy = profile.budget_cap().map(|budget| {
        let minimum = MIN_PROGRAM_USD * (1.0 + scale_component / 100.0);
        round1((budget / minimum * 50.0).min(100.0))
    });

    let index = weighted_mean(&[(alignment, 0.7), (budget_adequacy.unwrap_or(NEUTRAL_SCORE), 0.3)]);

    let note = match budget_adequacy {
        Some(adequacy) if adequacy < 50.0 => "Budget cap is below a viable program size for this market".to_string(),
        Some(_) => format!("Capital stack aligned to a {target_equity:.0}% equity target"),
        None => "No budget cap declared; adequacy assumed neutral".to_string(),
    };

    CapitalAlignmentDetail {
        index: round1(bounded_score(index, NEUTRAL_SCORE)),
        equity_share: round1(mix.equity),
        debt_share: round1(mix.debt),
        grant_share: round1(mix.grants),
        budget_adequacy,
        note,
    }
}
