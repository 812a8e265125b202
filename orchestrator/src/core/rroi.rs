//! Regional Readiness/Opportunity Index

use shared::{bounded_score, round1, InputProfile, RroiComponent, RroiComponents, RroiResult, NEUTRAL_SCORE};

use super::reference::ReferenceDataStore;
use super::weighted_mean;

const INFRASTRUCTURE_WEIGHT: f64 = 0.30;
const TALENT_WEIGHT: f64 = 0.25;
const REGULATORY_WEIGHT: f64 = 0.20;
const MARKET_WEIGHT: f64 = 0.25;

pub fn calculate_rroi(profile: &InputProfile, reference: &ReferenceDataStore) -> RroiResult {
    let r = reference.lookup(profile.country());
    let env = &r.business_environment;
    let location = describe_location(profile);

    let infrastructure = bounded_score(r.infrastructure.overall_score, NEUTRAL_SCORE);
    let talent = bounded_score(r.talent.overall_score, NEUTRAL_SCORE);
    let regulatory = bounded_score(
        weighted_mean(&[(env.ease_of_doing_business, 0.5), (env.regulatory_quality, 0.5)]),
        NEUTRAL_SCORE,
    );
    let market = bounded_score(r.market_access.composite(), NEUTRAL_SCORE);

    let components = RroiComponents {
        infrastructure: RroiComponent {
            score: round1(infrastructure),
            rationale: format!(
                "{} infrastructure in {location}: logistics {:.0}, digital {:.0}, energy {:.0}",
                grade(infrastructure),
                r.infrastructure.logistics_score,
                r.infrastructure.digital_score,
                r.infrastructure.energy_score
            ),
        },
        talent: RroiComponent {
            score: round1(talent),
            rationale: format!(
                "{} talent base: skills availability {:.0}, higher education {:.0}",
                grade(talent),
                r.talent.skills_availability,
                r.talent.higher_education_score
            ),
        },
        regulatory: RroiComponent {
            score: round1(regulatory),
            rationale: format!(
                "{} regulatory climate: ease of doing business {:.0}, regulatory quality {:.0}",
                grade(regulatory),
                env.ease_of_doing_business,
                env.regulatory_quality
            ),
        },
        market: RroiComponent {
            score: round1(market),
            rationale: format!(
                "{} market access: trade openness {:.0}, FTA coverage {:.0}, investment climate {:.0}",
                grade(market),
                r.market_access.trade_openness,
                r.market_access.fta_coverage,
                r.market_access.investment_climate
            ),
        },
    };

    let overall = weighted_mean(&[
        (components.infrastructure.score, INFRASTRUCTURE_WEIGHT),
        (components.talent.score, TALENT_WEIGHT),
        (components.regulatory.score, REGULATORY_WEIGHT),
        (components.market.score, MARKET_WEIGHT),
    ]);

    RroiResult {
        overall_score: round1(bounded_score(overall, NEUTRAL_SCORE)),
        components,
    }
}

fn describe_location(profile: &InputProfile) -> String {
    match (profile.region().trim(), profile.country().trim()) {
        ("", country) => country.to_string(),
        (region, country) => format!("{region}, {country}"),
    }
}

fn grade(score: f64) -> &'static str {
    match score {
        s if s >= 85.0 => "World-class",
        s if s >= 70.0 => "Strong",
        s if s >= 55.0 => "Adequate",
        _ => "Constrained",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_follow_reference_scores() {
        let store = ReferenceDataStore::builtin();
        let result = calculate_rroi(&InputProfile::new("Singapore", "Central"), &store);
        let r = store.lookup("Singapore");

        assert_eq!(result.components.infrastructure.score, r.infrastructure.overall_score);
        assert_eq!(result.components.talent.score, r.talent.overall_score);
        assert!(result.components.infrastructure.rationale.starts_with("World-class"));
        assert!(result.components.infrastructure.rationale.contains("Central, Singapore"));
    }

    #[test]
    fn test_unknown_country_scores_neutral() {
        let result = calculate_rroi(&InputProfile::new("Atlantis", ""), &ReferenceDataStore::builtin());

        assert_eq!(result.components.infrastructure.score, 70.0);
        assert_eq!(result.components.talent.score, 70.0);
        assert_eq!(result.components.regulatory.score, 70.0);
        assert_eq!(result.components.market.score, 70.0);
        assert_eq!(result.overall_score, 70.0);
        assert!(result.components.market.rationale.starts_with("Strong"));
    }

    #[test]
    fn test_overall_is_within_component_range() {
        let store = ReferenceDataStore::builtin();
        for (name, _) in store.jurisdictions() {
            let result = calculate_rroi(&InputProfile::new(name, "Capital"), &store);
            let c = &result.components;
            let scores = [c.infrastructure.score, c.talent.score, c.regulatory.score, c.market.score];
            let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(result.overall_score >= min - 0.1 && result.overall_score <= max + 0.1);
        }
    }
}
