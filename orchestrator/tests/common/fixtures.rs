//! Test fixtures and data for orchestrator tests
//!
//! This module provides consistent test data and fixtures used across all test suites.

use chrono::{TimeZone, Utc};
use report_orchestrator::NeutralResult;
use shared::{
    spi_labels, AsymmetryAnalysis, CalibrationConstraints, CapitalMix, InputProfile, LeverageBalance, MarketShare,
    OrganizationIdentity, ProfileMetadata, ReportId, RiskHorizon, RroiComponent, RroiComponents, RroiResult,
    StrategicMandate, SpiFactor, SpiResult, SymbioticPartner, Timeline,
};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard report identifier
    pub const REPORT_ID: &'static str = "RPT-TEST-0001";

    /// Jurisdictions present in the built-in reference dataset
    pub const HOME_COUNTRY: &'static str = "Philippines";
    pub const HOME_REGION: &'static str = "Central Luzon";
    pub const HIGH_RISK_REGION: &'static str = "Mindanao";

    /// Jurisdiction absent from every dataset
    pub const UNKNOWN_COUNTRY: &'static str = "Atlantis";

    /// Fully populated profile for a known jurisdiction
    pub fn complete_profile() -> InputProfile {
        InputProfile {
            identity: OrganizationIdentity {
                name: "Luzon Agri-Logistics Consortium".to_string(),
                organization_type: "Private Consortium".to_string(),
                country: Self::HOME_COUNTRY.to_string(),
                region: Self::HOME_REGION.to_string(),
                industries: vec!["Agribusiness".to_string(), "Logistics".to_string()],
            },
            mandate: StrategicMandate {
                intents: vec!["Market Expansion".to_string(), "Supply Chain Resilience".to_string()],
                problem_statement: "Post-harvest losses exceed thirty percent because cold storage near the farms \
                                    is scarce and the port links are congested"
                    .to_string(),
                timeline: Some(Timeline::MediumTerm),
            },
            calibration: CalibrationConstraints {
                budget_cap_usd: Some(2_500_000.0),
                capital_mix: Some(CapitalMix {
                    equity: 45.0,
                    debt: 40.0,
                    grants: 15.0,
                }),
                risk_horizon: Some(RiskHorizon::Balanced),
            },
            metadata: ProfileMetadata {
                report_id: ReportId::new(Self::REPORT_ID),
                created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            },
            market_shares: None,
        }
    }

    /// Profile carrying only the caller-side precondition fields
    pub fn minimal_profile(country: &str, region: &str) -> InputProfile {
        InputProfile::new(country, region)
    }

    /// Profile located in a designated higher-risk region
    pub fn high_risk_profile() -> InputProfile {
        let mut profile = Self::complete_profile();
        profile.identity.region = Self::HIGH_RISK_REGION.to_string();
        profile
    }

    /// Share breakdown held entirely by one market
    pub fn single_market_shares() -> Vec<MarketShare> {
        vec![MarketShare::new(Self::HOME_COUNTRY, 100.0)]
    }

    /// Four equal shares (index 2500)
    pub fn balanced_shares() -> Vec<MarketShare> {
        ["Philippines", "Vietnam", "Japan", "Australia"]
            .into_iter()
            .map(|c| MarketShare::new(c, 25.0))
            .collect()
    }

    /// Canned SPI with every labeled factor present
    pub fn canned_spi() -> SpiResult {
        let values = [64.0, 71.0, 58.0, 66.0, 80.0, 62.0, 77.0];
        SpiResult {
            spi: 67.3,
            ci_low: 60.3,
            ci_high: 74.3,
            breakdown: spi_labels::ALL
                .iter()
                .zip(values)
                .map(|(label, value)| SpiFactor {
                    label: label.to_string(),
                    value,
                    weight: 1.0 / 7.0,
                })
                .collect(),
        }
    }

    /// Canned RROI with distinct component scores
    pub fn canned_rroi() -> RroiResult {
        let component = |score: f64| RroiComponent {
            score,
            rationale: "canned".to_string(),
        };
        RroiResult {
            overall_score: 63.5,
            components: RroiComponents {
                infrastructure: component(58.0),
                talent: component(66.0),
                regulatory: component(57.0),
                market: component(72.0),
            },
        }
    }

    pub fn canned_partners() -> Vec<SymbioticPartner> {
        [("Logistics", "Singapore"), ("Agribusiness", "Vietnam"), ("Logistics", "Japan")]
            .into_iter()
            .map(|(industry, location)| SymbioticPartner {
                entity_name: format!("{location} {industry} Partners"),
                entity_type: industry.to_string(),
                location: location.to_string(),
                symbiosis_score: 74.0,
                asymmetry_analysis: AsymmetryAnalysis {
                    requester_strength: 60.0,
                    partner_strength: 70.0,
                    balance: LeverageBalance::Balanced,
                    summary: "canned".to_string(),
                },
                mutual_benefit: "canned".to_string(),
                risk_factors: Vec::new(),
            })
            .collect()
    }

    /// Neutral value for any module result
    pub fn neutral<T: NeutralResult>() -> T {
        T::neutral()
    }
}
