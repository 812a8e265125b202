//! Symbiotic partner matcher
//!
//! Pairs each declared industry with the home jurisdiction and the strongest
//! foreign jurisdictions in the reference data, then ranks the candidates by
//! symbiosis score.

use shared::{
    bounded_score, round1, AsymmetryAnalysis, InputProfile, LeverageBalance, ReferenceRecord, SymbioticPartner,
    NEUTRAL_SCORE,
};

use super::reference::{normalize_key, ReferenceDataStore};
use super::weighted_mean;

const MAX_INDUSTRIES: usize = 3;
const FOREIGN_CANDIDATES: usize = 3;
const MAX_PARTNERS: usize = 6;
const BALANCE_TOLERANCE: f64 = 10.0;
const DEPENDENCY_GAP: f64 = 25.0;
const GENERAL_INDUSTRY: &str = "General Industry";

pub fn match_partners(profile: &InputProfile, reference: &ReferenceDataStore) -> Vec<SymbioticPartner> {
    let home = reference.lookup(profile.country());
    let requester_strength = strength(home);

    let mut industries: Vec<&str> = profile.industries();
    if industries.is_empty() {
        industries.push(GENERAL_INDUSTRY);
    }
    industries.truncate(MAX_INDUSTRIES);

    let mut partners = Vec::new();
    for (location, record) in candidate_locations(profile, reference) {
        for industry in &industries {
            partners.push(score_candidate(
                industry,
                &location,
                record,
                requester_strength,
                reference.is_restricted(&location),
            ));
        }
    }

    partners.sort_by(|a, b| {
        b.symbiosis_score
            .total_cmp(&a.symbiosis_score)
            .then_with(|| a.entity_name.cmp(&b.entity_name))
    });
    partners.truncate(MAX_PARTNERS);
    partners
}

/// Home jurisdiction first, then the most attractive foreign ones
fn candidate_locations<'a>(
    profile: &InputProfile,
    reference: &'a ReferenceDataStore,
) -> Vec<(String, &'a ReferenceRecord)> {
    let home_key = normalize_key(profile.country());
    let mut foreign: Vec<(&str, &ReferenceRecord)> = reference
        .jurisdictions()
        .filter(|(name, _)| normalize_key(name) != home_key && !reference.is_restricted(name))
        .collect();
    foreign.sort_by(|a, b| strength(b.1).total_cmp(&strength(a.1)).then_with(|| a.0.cmp(b.0)));

    let mut locations = vec![(profile.country().trim().to_string(), reference.lookup(profile.country()))];
    locations.extend(
        foreign
            .into_iter()
            .take(FOREIGN_CANDIDATES)
            .map(|(name, record)| (name.to_string(), record)),
    );
    locations
}

fn strength(record: &ReferenceRecord) -> f64 {
    weighted_mean(&[
        (record.infrastructure.overall_score, 1.0),
        (record.talent.overall_score, 1.0),
        (record.market_access.composite(), 1.0),
    ])
}

fn score_candidate(
    industry: &str,
    location: &str,
    record: &ReferenceRecord,
    requester_strength: f64,
    restricted: bool,
) -> SymbioticPartner {
    let env = &record.business_environment;
    let partner_strength = strength(record);
    let sector_alignment = if record.prioritizes(industry) { 100.0 } else { 55.0 };
    let governance = (env.regulatory_quality + env.corruption_index) / 2.0;

    let mut score = weighted_mean(&[(sector_alignment, 0.4), (partner_strength, 0.3), (governance, 0.3)]);
    if restricted {
        score *= 0.3;
    }

    let gap = partner_strength - requester_strength;
    let balance = if gap.abs() <= BALANCE_TOLERANCE {
        LeverageBalance::Balanced
    } else if gap > 0.0 {
        LeverageBalance::PartnerLeaning
    } else {
        LeverageBalance::RequesterLeaning
    };

    let summary = match balance {
        LeverageBalance::Balanced => format!("Comparable capability base (gap {gap:+.0}); negotiate as peers"),
        LeverageBalance::PartnerLeaning => {
            format!("{location} brings the stronger capability base (gap {gap:+.0}); secure knowledge-transfer terms")
        }
        LeverageBalance::RequesterLeaning => {
            format!("Requester holds the stronger position (gap {gap:+.0}); anchor the partner with local commitments")
        }
    };

    let mutual_benefit = match balance {
        LeverageBalance::Balanced => format!("Shared {industry} pipeline and co-investment in {location}"),
        LeverageBalance::PartnerLeaning => {
            format!("Requester gains {industry} capability from {location}; partner gains market entry")
        }
        LeverageBalance::RequesterLeaning => {
            format!("Partner gains {industry} know-how; requester gains a foothold in {location}")
        }
    };

    let mut risk_factors = Vec::new();
    if restricted {
        risk_factors.push("Restricted jurisdiction: sanctions screening required".to_string());
    }
    if env.corruption_index < 40.0 {
        risk_factors.push(format!("Elevated corruption perception ({:.0}/100)", env.corruption_index));
    }
    if env.political_stability < 55.0 {
        risk_factors.push(format!("Political volatility ({:.0}/100)", env.political_stability));
    }
    if env.regulatory_quality < 55.0 {
        risk_factors.push(format!("Regulatory unpredictability ({:.0}/100)", env.regulatory_quality));
    }
    if gap.abs() > DEPENDENCY_GAP {
        risk_factors.push("Dependency risk from capability asymmetry".to_string());
    }

    SymbioticPartner {
        entity_name: format!("{location} {industry} Partners"),
        entity_type: industry.to_string(),
        location: location.to_string(),
        symbiosis_score: round1(bounded_score(score, NEUTRAL_SCORE)),
        asymmetry_analysis: AsymmetryAnalysis {
            requester_strength: round1(requester_strength),
            partner_strength: round1(partner_strength),
            balance,
            summary,
        },
        mutual_benefit,
        risk_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partners_are_ranked_and_capped() {
        let mut profile = InputProfile::new("Philippines", "Central Luzon");
        profile.identity.industries = vec![
            "Agribusiness".to_string(),
            "Logistics".to_string(),
            "Tourism".to_string(),
            "Textiles".to_string(),
        ];
        let partners = match_partners(&profile, &ReferenceDataStore::builtin());

        assert_eq!(partners.len(), MAX_PARTNERS);
        assert!(partners
            .windows(2)
            .all(|pair| pair[0].symbiosis_score >= pair[1].symbiosis_score));
        // Only the first three industries are considered
        assert!(partners.iter().all(|p| p.entity_type != "Textiles"));
    }

    #[test]
    fn test_missing_industries_use_general_candidates() {
        let partners = match_partners(&InputProfile::new("Kenya", "Nairobi"), &ReferenceDataStore::builtin());

        assert!(!partners.is_empty());
        assert!(partners.iter().all(|p| p.entity_type == GENERAL_INDUSTRY));
    }

    #[test]
    fn test_empty_store_still_matches_home_jurisdiction() {
        let partners = match_partners(&InputProfile::new("Atlantis", "North"), &ReferenceDataStore::empty());

        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].location, "Atlantis");
        assert_eq!(partners[0].asymmetry_analysis.balance, LeverageBalance::Balanced);
    }

    #[test]
    fn test_restricted_jurisdictions_are_not_proposed_abroad() {
        let store = ReferenceDataStore::builtin().with_restricted_jurisdiction("Singapore");
        let partners = match_partners(&InputProfile::new("Vietnam", "Hanoi"), &store);
        assert!(partners.iter().all(|p| p.location != "Singapore"));
    }

    #[test]
    fn test_stronger_partner_is_partner_leaning() {
        let partners = match_partners(&InputProfile::new("Kenya", "Nairobi"), &ReferenceDataStore::builtin());
        let singapore = partners.iter().find(|p| p.location == "Singapore").unwrap();

        assert_eq!(singapore.asymmetry_analysis.balance, LeverageBalance::PartnerLeaning);
        assert!(singapore
            .risk_factors
            .iter()
            .any(|r| r == "Dependency risk from capability asymmetry"));
    }
}
