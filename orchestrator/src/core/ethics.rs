//! Ethical safeguards screener
//!
//! Produces BLOCK/CAUTION flags from the declared industries, the target
//! jurisdiction's designations and governance scores, and the completeness
//! of the requester's disclosure. Any BLOCK fails the screen.

use shared::{
    bounded_score, contains_words, round1, EthicalFlag, EthicsScreening, EthicsVerdict, FlagSeverity, InputProfile,
    MitigationStep, NEUTRAL_SCORE,
};

use super::reference::ReferenceDataStore;

const BLOCKED_SECTORS: &[&str] = &["weapons", "arms", "munitions", "narcotics", "human trafficking"];
const CAUTION_SECTORS: &[&str] = &["tobacco", "gambling", "coal", "mining", "extractive", "palm oil", "logging"];

const GOVERNANCE_CAUTION_BELOW: f64 = 40.0;
const BLOCK_PENALTY: f64 = 40.0;
const CAUTION_PENALTY: f64 = 12.0;

pub fn screen_ethics(profile: &InputProfile, reference: &ReferenceDataStore) -> EthicsScreening {
    let record = reference.lookup(profile.country());
    let env = &record.business_environment;
    let mut flags = Vec::new();

    if reference.is_restricted(profile.country()) {
        flags.push(EthicalFlag {
            name: "Restricted Jurisdiction".to_string(),
            severity: FlagSeverity::Block,
            rationale: "Target jurisdiction is subject to sanctions or trade restrictions".to_string(),
            evidence: vec![format!("Country: {}", profile.country().trim())],
        });
    }

    let industries = profile.industries();
    let blocked = matching_sectors(&industries, BLOCKED_SECTORS);
    if !blocked.is_empty() {
        flags.push(EthicalFlag {
            name: "Prohibited Sector".to_string(),
            severity: FlagSeverity::Block,
            rationale: "Declared activity falls under a prohibited sector".to_string(),
            evidence: blocked,
        });
    }

    let sensitive = matching_sectors(&industries, CAUTION_SECTORS);
    if !sensitive.is_empty() {
        flags.push(EthicalFlag {
            name: "Sensitive Sector".to_string(),
            severity: FlagSeverity::Caution,
            rationale: "Declared activity carries elevated environmental or social impact".to_string(),
            evidence: sensitive,
        });
    }

    if env.corruption_index < GOVERNANCE_CAUTION_BELOW {
        flags.push(EthicalFlag {
            name: "Governance Risk".to_string(),
            severity: FlagSeverity::Caution,
            rationale: "Corruption perception in the target jurisdiction is weak".to_string(),
            evidence: vec![format!("Corruption index {:.0}/100", env.corruption_index)],
        });
    }

    if reference.is_high_risk_region(profile.region()) {
        flags.push(EthicalFlag {
            name: "Conflict-Affected Area".to_string(),
            severity: FlagSeverity::Caution,
            rationale: "Target region is designated higher-risk".to_string(),
            evidence: vec![format!("Region: {}", profile.region().trim())],
        });
    }

    if !profile.has_problem_statement() {
        flags.push(EthicalFlag {
            name: "Disclosure Gap".to_string(),
            severity: FlagSeverity::Caution,
            rationale: "No problem statement was provided for review".to_string(),
            evidence: vec!["Problem statement is empty".to_string()],
        });
    }

    let blocks = flags.iter().filter(|f| f.severity == FlagSeverity::Block).count();
    let cautions = flags.len() - blocks;
    let overall_flag = if blocks > 0 {
        EthicsVerdict::Block
    } else if cautions > 0 {
        EthicsVerdict::Caution
    } else {
        EthicsVerdict::Pass
    };
    let score = 100.0 - BLOCK_PENALTY * blocks as f64 - CAUTION_PENALTY * cautions as f64;

    EthicsScreening {
        passed: overall_flag != EthicsVerdict::Block,
        score: round1(bounded_score(score, NEUTRAL_SCORE)),
        overall_flag,
        mitigation: mitigation_steps(&flags),
        flags,
    }
}

/// Declared industries containing any of the given sector terms as whole words
fn matching_sectors(industries: &[&str], keywords: &[&str]) -> Vec<String> {
    industries
        .iter()
        .filter(|industry| keywords.iter().any(|k| contains_words(industry, k)))
        .map(|industry| format!("Industry: {industry}"))
        .collect()
}

fn mitigation_steps(flags: &[EthicalFlag]) -> Vec<MitigationStep> {
    let mut steps = vec![MitigationStep {
        step: "Baseline due diligence".to_string(),
        description: "Complete KYC and beneficial-ownership checks on every counterparty".to_string(),
    }];

    for flag in flags {
        let (step, description) = match flag.name.as_str() {
            "Restricted Jurisdiction" => (
                "Sanctions clearance",
                "Obtain legal sanctions clearance before any engagement in the jurisdiction",
            ),
            "Prohibited Sector" => (
                "Sector exclusion review",
                "Remove prohibited activities from scope or halt the engagement",
            ),
            "Sensitive Sector" => (
                "Impact assessment",
                "Commission an independent environmental and social impact assessment",
            ),
            "Governance Risk" => (
                "Anti-corruption controls",
                "Adopt anti-bribery policies and third-party payment monitoring",
            ),
            "Conflict-Affected Area" => (
                "Conflict sensitivity analysis",
                "Run a conflict-sensitivity review and security plan for on-site operations",
            ),
            "Disclosure Gap" => (
                "Disclosure completion",
                "Provide a full problem statement and stakeholder map for review",
            ),
            _ => continue,
        };
        steps.push(MitigationStep {
            step: step.to_string(),
            description: description.to_string(),
        });
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_profile() -> InputProfile {
        let mut profile = InputProfile::new("Singapore", "Central");
        profile.identity.industries = vec!["Financial Services".to_string()];
        profile.mandate.problem_statement = "Regional treasury hub for SME lending".to_string();
        profile
    }

    #[test]
    fn test_clean_profile_passes() {
        let screening = screen_ethics(&clean_profile(), &ReferenceDataStore::builtin());

        assert!(screening.passed);
        assert_eq!(screening.overall_flag, EthicsVerdict::Pass);
        assert!(screening.flags.is_empty());
        assert_eq!(screening.score, 100.0);
        assert_eq!(screening.mitigation.len(), 1);
    }

    #[test]
    fn test_prohibited_sector_blocks() {
        let mut profile = clean_profile();
        profile.identity.industries.push("Small Arms Manufacturing".to_string());
        let screening = screen_ethics(&profile, &ReferenceDataStore::builtin());

        assert!(!screening.passed);
        assert_eq!(screening.overall_flag, EthicsVerdict::Block);
        assert_eq!(screening.blocking_flags().count(), 1);
        assert!(screening.mitigation.iter().any(|m| m.step == "Sector exclusion review"));
    }

    #[test]
    fn test_cautions_accumulate_without_blocking() {
        let mut profile = InputProfile::new("Philippines", "Mindanao");
        profile.identity.industries = vec!["Coal Mining".to_string()];
        let screening = screen_ethics(&profile, &ReferenceDataStore::builtin());

        assert!(screening.passed);
        assert_eq!(screening.overall_flag, EthicsVerdict::Caution);
        // Sensitive sector, governance, conflict area, disclosure gap
        assert_eq!(screening.flags.len(), 4);
        assert!(screening.flags.iter().all(|f| f.severity == FlagSeverity::Caution));
        assert_eq!(screening.score, 52.0);
        assert_eq!(screening.mitigation.len(), 5);
    }

    #[test]
    fn test_sector_terms_match_whole_words_only() {
        let mut profile = clean_profile();
        profile.identity.industries = vec!["Solar Farms".to_string(), "Charming Boutique Hotels".to_string()];
        let screening = screen_ethics(&profile, &ReferenceDataStore::builtin());

        assert_eq!(screening.overall_flag, EthicsVerdict::Pass);
    }

    #[test]
    fn test_restricted_jurisdiction_blocks() {
        let store = ReferenceDataStore::builtin();
        let mut profile = clean_profile();
        profile.identity.country = "North Korea".to_string();
        let screening = screen_ethics(&profile, &store);

        assert_eq!(screening.overall_flag, EthicsVerdict::Block);
        assert!(screening.flags.iter().any(|f| f.name == "Restricted Jurisdiction"));
        assert!((0.0..=100.0).contains(&screening.score));
    }
}
