//! Market diversification analyzer
//!
//! Concentration is the Herfindahl-Hirschman index over percentage shares
//! (0-100 each, index 0-10000). Alternative markets come from the reference
//! data and are ranked by a blended opportunity score.

use std::collections::HashSet;

use shared::{
    round1, ConcentrationRisk, DiversificationAnalysis, InputProfile, MarketRecommendation, MarketShare,
    ReferenceRecord,
};

use super::reference::{normalize_key, ReferenceDataStore};
use super::weighted_mean;

/// Upper bounds (exclusive) of the first three risk bands
pub const DIVERSIFIED_BELOW: f64 = 1_500.0;
pub const MODERATE_BELOW: f64 = 2_500.0;
pub const HIGH_BELOW: f64 = 5_000.0;
pub const MAX_INDEX: f64 = 10_000.0;

const MAX_RECOMMENDATIONS: usize = 5;

/// Label for the non-home slices of the placeholder distribution
pub const REGIONAL_NEIGHBORS: &str = "Regional Neighbors";
pub const REST_OF_WORLD: &str = "Rest of World";

/// Classify an index into its risk band; monotonic and total over 0-10000
pub fn classify(index: f64) -> ConcentrationRisk {
    match index {
        i if i < DIVERSIFIED_BELOW => ConcentrationRisk::Diversified,
        i if i < MODERATE_BELOW => ConcentrationRisk::ModerateConcentration,
        i if i < HIGH_BELOW => ConcentrationRisk::HighConcentration,
        _ => ConcentrationRisk::CriticalDependency,
    }
}

/// Share breakdown used when the caller supplied none: 60/25/15 weighted toward the home country
pub fn placeholder_shares(profile: &InputProfile) -> Vec<MarketShare> {
    vec![
        MarketShare::new(profile.country().trim(), 60.0),
        MarketShare::new(REGIONAL_NEIGHBORS, 25.0),
        MarketShare::new(REST_OF_WORLD, 15.0),
    ]
}

/// Caller-supplied shares when present and non-empty, else the placeholder distribution
pub fn effective_shares(profile: &InputProfile) -> Vec<MarketShare> {
    match &profile.market_shares {
        Some(shares) if !shares.is_empty() => shares.clone(),
        _ => placeholder_shares(profile),
    }
}

fn sanitize(share: f64) -> f64 {
    if share.is_finite() {
        share.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Concentration analysis against a reference dataset
pub struct DiversificationAnalyzer<'a> {
    reference: &'a ReferenceDataStore,
}

impl<'a> DiversificationAnalyzer<'a> {
    pub fn new(reference: &'a ReferenceDataStore) -> Self {
        Self { reference }
    }

    pub fn analyze_concentration(&self, shares: &[MarketShare]) -> DiversificationAnalysis {
        if shares.is_empty() {
            return DiversificationAnalysis {
                concentration_index: 0.0,
                risk_level: ConcentrationRisk::Diversified,
                market_count: 0,
                dominant_market: None,
                recommended_markets: Vec::new(),
            };
        }

        let index = shares
            .iter()
            .map(|s| sanitize(s.share).powi(2))
            .sum::<f64>()
            .clamp(0.0, MAX_INDEX);

        let dominant_market = shares
            .iter()
            .filter(|s| sanitize(s.share) > 0.0)
            .fold(None::<&MarketShare>, |best, s| match best {
                Some(b) if sanitize(b.share) >= sanitize(s.share) => Some(b),
                _ => Some(s),
            })
            .map(|s| s.country.trim().to_string());

        DiversificationAnalysis {
            concentration_index: round1(index),
            risk_level: classify(index),
            market_count: shares.len(),
            dominant_market,
            recommended_markets: self.recommend_markets(shares),
        }
    }

    /// Known jurisdictions not already in the share list, best opportunity first
    fn recommend_markets(&self, shares: &[MarketShare]) -> Vec<MarketRecommendation> {
        let present: HashSet<String> = shares.iter().map(|s| normalize_key(&s.country)).collect();

        let mut recommendations: Vec<MarketRecommendation> = self
            .reference
            .jurisdictions()
            .filter(|(name, _)| !present.contains(&normalize_key(name)) && !self.reference.is_restricted(name))
            .map(|(name, record)| score_market(name, record))
            .collect();

        recommendations.sort_by(|a, b| {
            b.opportunity_score
                .total_cmp(&a.opportunity_score)
                .then_with(|| a.country.cmp(&b.country))
        });
        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}

fn score_market(name: &str, record: &ReferenceRecord) -> MarketRecommendation {
    let env = &record.business_environment;
    let regulatory_friction = env.regulatory_friction();
    // Growth is reported as the raw percentage but ranked on its 0-100 mapping
    let opportunity = weighted_mean(&[
        (record.growth_score(), 0.25),
        (env.ease_of_doing_business, 0.20),
        (record.talent.overall_score, 0.20),
        (record.talent.innovation_index, 0.20),
        (100.0 - regulatory_friction, 0.15),
    ]);

    MarketRecommendation {
        country: name.to_string(),
        growth_rate: record.economy.gdp_growth_rate,
        ease_of_entry: env.ease_of_doing_business,
        talent_availability: record.talent.overall_score,
        innovation_index: record.talent.innovation_index,
        regulatory_friction: round1(regulatory_friction),
        opportunity_score: round1(opportunity.clamp(0.0, 100.0)),
    }
}

/// Convenience wrapper over [`DiversificationAnalyzer::analyze_concentration`]
pub fn analyze_concentration(shares: &[MarketShare], reference: &ReferenceDataStore) -> DiversificationAnalysis {
    DiversificationAnalyzer::new(reference).analyze_concentration(shares)
}
