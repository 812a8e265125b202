//! Ecosystem ally blueprint (SEAM)
//!
//! Scores a fixed catalog of ecosystem roles against the jurisdiction's
//! capabilities and the requester's stated intents and industries.

use shared::{
    bounded_score, round1, EcosystemHealth, EcosystemPartner, InputProfile, ReferenceRecord, SeamBlueprint,
    NEUTRAL_SCORE,
};

use super::reference::ReferenceDataStore;

/// Capabilities below this are reported as gaps
const GAP_THRESHOLD: f64 = 60.0;
const GAP_PENALTY: f64 = 3.0;
const MAX_PARTNERS: usize = 5;
const RELEVANT: f64 = 100.0;
const NOT_RELEVANT: f64 = 60.0;

struct EcosystemRole {
    role: &'static str,
    network: &'static str,
    gap: &'static str,
    keywords: &'static [&'static str],
    capability: fn(&ReferenceRecord) -> f64,
}

const ROLES: &[EcosystemRole] = &[
    EcosystemRole {
        role: "Anchor Investor",
        network: "Investment Consortium",
        gap: "Anchor investment appetite",
        keywords: &["invest", "capital", "expansion", "market"],
        capability: |r| r.market_access.investment_climate,
    },
    EcosystemRole {
        role: "Technology Partner",
        network: "Technology Alliance",
        gap: "Digital and innovation capacity",
        keywords: &["technology", "digital", "innovation", "software", "automation"],
        capability: |r| (r.infrastructure.digital_score + r.talent.innovation_index) / 2.0,
    },
    EcosystemRole {
        role: "Academic & Skills Institution",
        network: "Skills Consortium",
        gap: "Skilled workforce pipeline",
        keywords: &["talent", "workforce", "skills", "education", "training"],
        capability: |r| r.talent.higher_education_score,
    },
    EcosystemRole {
        role: "Government Investment Agency",
        network: "Investment Promotion Office",
        gap: "Regulatory facilitation",
        keywords: &["policy", "government", "public", "incentive", "regulat"],
        capability: |r| r.business_environment.regulatory_quality,
    },
    EcosystemRole {
        role: "Logistics Provider",
        network: "Logistics Network",
        gap: "Logistics and distribution reach",
        keywords: &["logistics", "supply", "export", "trade", "distribution"],
        capability: |r| r.infrastructure.logistics_score,
    },
    EcosystemRole {
        role: "Development Finance Institution",
        network: "Development Finance Facility",
        gap: "Blended and concessional finance",
        keywords: &["finance", "funding", "grant", "development", "impact"],
        capability: |r| (r.market_access.investment_climate + r.business_environment.regulatory_quality) / 2.0,
    },
    EcosystemRole {
        role: "Energy Utility",
        network: "Energy Cooperative",
        gap: "Reliable energy supply",
        keywords: &["energy", "power", "renewable", "utility", "manufactur"],
        capability: |r| r.infrastructure.energy_score,
    },
];

pub fn build_seam_blueprint(profile: &InputProfile, reference: &ReferenceDataStore) -> SeamBlueprint {
    let record = reference.lookup(profile.country());
    let signals: Vec<String> = profile
        .intents()
        .into_iter()
        .chain(profile.industries())
        .map(|s| s.to_lowercase())
        .collect();
    let place = if profile.region().trim().is_empty() {
        profile.country().trim()
    } else {
        profile.region().trim()
    };

    let mut partners = Vec::with_capacity(ROLES.len());
    let mut gaps = Vec::new();

    for role in ROLES {
        let capability = bounded_score((role.capability)(record), NEUTRAL_SCORE);
        let relevance = if role.keywords.iter().any(|k| signals.iter().any(|s| s.contains(k))) {
            RELEVANT
        } else {
            NOT_RELEVANT
        };

        if capability < GAP_THRESHOLD {
            gaps.push(format!("{} (capability {:.0}/100)", role.gap, capability));
        }

        partners.push(EcosystemPartner {
            name: format!("{place} {}", role.network),
            role: role.role.to_string(),
            synergy_score: round1(0.7 * capability + 0.3 * relevance),
        });
    }

    let mean_synergy = partners.iter().map(|p| p.synergy_score).sum::<f64>() / partners.len() as f64;
    let score = round1(bounded_score(mean_synergy - GAP_PENALTY * gaps.len() as f64, NEUTRAL_SCORE));

    partners.sort_by(|a, b| {
        b.synergy_score
            .total_cmp(&a.synergy_score)
            .then_with(|| a.role.cmp(&b.role))
    });
    partners.truncate(MAX_PARTNERS);

    SeamBlueprint {
        score,
        ecosystem_health: EcosystemHealth::from_score(score),
        partners,
        gaps,
    }
}
