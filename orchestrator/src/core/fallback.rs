//! Neutral results substituted for a timed-out module
//!
//! Only used when the orchestrator runs with a module timeout and the
//! neutral-fallback policy. Strict join-all never produces these.

use shared::{
    spi_labels, ActivationPathwayDetail, CapitalAlignmentDetail, CapitalMix, ConcentrationRisk,
    DiversificationAnalysis, EcosystemHealth, EthicalFlag, EthicsScreening, EthicsVerdict, FlagSeverity,
    MarketGravityDetail, MitigationStep, OpportunityOrchestration, RroiComponent, RroiComponents, RroiResult,
    SeamBlueprint, SpiFactor, SpiResult, SymbioticPartner, NEUTRAL_SCORE,
};

/// Half-width of the neutral SPI band
const NEUTRAL_BAND: f64 = 15.0;

pub trait NeutralResult: Sized {
    fn neutral() -> Self;
}

impl NeutralResult for SpiResult {
    fn neutral() -> Self {
        let weight = 1.0 / spi_labels::ALL.len() as f64;
        SpiResult {
            spi: NEUTRAL_SCORE,
            ci_low: NEUTRAL_SCORE - NEUTRAL_BAND,
            ci_high: NEUTRAL_SCORE + NEUTRAL_BAND,
            breakdown: spi_labels::ALL
                .iter()
                .map(|label| SpiFactor {
                    label: label.to_string(),
                    value: NEUTRAL_SCORE,
                    weight,
                })
                .collect(),
        }
    }
}

impl NeutralResult for RroiResult {
    fn neutral() -> Self {
        let component = || RroiComponent {
            score: NEUTRAL_SCORE,
            rationale: "Neutral estimate: scoring did not complete in time".to_string(),
        };
        RroiResult {
            overall_score: NEUTRAL_SCORE,
            components: RroiComponents {
                infrastructure: component(),
                talent: component(),
                regulatory: component(),
                market: component(),
            },
        }
    }
}

impl NeutralResult for SeamBlueprint {
    fn neutral() -> Self {
        SeamBlueprint {
            score: NEUTRAL_SCORE,
            ecosystem_health: EcosystemHealth::from_score(NEUTRAL_SCORE),
            partners: Vec::new(),
            gaps: Vec::new(),
        }
    }
}

impl NeutralResult for Vec<SymbioticPartner> {
    fn neutral() -> Self {
        Vec::new()
    }
}

impl NeutralResult for EthicsScreening {
    fn neutral() -> Self {
        EthicsScreening {
            passed: true,
            score: NEUTRAL_SCORE,
            overall_flag: EthicsVerdict::Caution,
            flags: vec![EthicalFlag {
                name: "Screening Incomplete".to_string(),
                severity: FlagSeverity::Caution,
                rationale: "Ethical screening did not complete in time".to_string(),
                evidence: Vec::new(),
            }],
            mitigation: vec![MitigationStep {
                step: "Manual screening".to_string(),
                description: "Re-run the ethical safeguards screen before finalizing".to_string(),
            }],
        }
    }
}

impl NeutralResult for OpportunityOrchestration {
    fn neutral() -> Self {
        OpportunityOrchestration {
            market_gravity: MarketGravityDetail {
                index: NEUTRAL_SCORE,
                scale_component: NEUTRAL_SCORE,
                growth_component: NEUTRAL_SCORE,
                access_component: NEUTRAL_SCORE,
                drivers: Vec::new(),
            },
            activation_pathway: ActivationPathwayDetail {
                index: NEUTRAL_SCORE,
                estimated_months: 0,
                phases: Vec::new(),
            },
            capital_alignment: CapitalAlignmentDetail {
                index: NEUTRAL_SCORE,
                equity_share: CapitalMix::NEUTRAL.equity,
                debt_share: CapitalMix::NEUTRAL.debt,
                grant_share: CapitalMix::NEUTRAL.grants,
                budget_adequacy: None,
                note: "Neutral estimate: orchestration did not complete in time".to_string(),
            },
        }
    }
}

impl NeutralResult for DiversificationAnalysis {
    fn neutral() -> Self {
        DiversificationAnalysis {
            concentration_index: 0.0,
            risk_level: ConcentrationRisk::Diversified,
            market_count: 0,
            dominant_market: None,
            recommended_markets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_spi_satisfies_band_invariant() {
        let spi = SpiResult::neutral();
        assert!(spi.ci_low <= spi.spi && spi.spi <= spi.ci_high);
        for label in spi_labels::ALL {
            assert_eq!(spi.factor(label), Some(NEUTRAL_SCORE));
        }
    }

    #[test]
    fn test_neutral_ethics_is_a_caution() {
        let ethics = EthicsScreening::neutral();
        assert!(ethics.passed);
        assert_eq!(ethics.overall_flag, EthicsVerdict::Caution);
        assert_eq!(ethics.mitigation.len(), 1);
    }
}
