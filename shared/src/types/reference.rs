//! Per-jurisdiction reference indicators
//!
//! Every qualitative score is normalized to 0-100. Absolute magnitudes
//! (population, GDP) are carried as raw values.

use serde::{Deserialize, Serialize};

use super::contains_words;

/// Indicator bundle for a single jurisdiction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    pub demographics: DemographicIndicators,
    pub economy: EconomicIndicators,
    pub infrastructure: InfrastructureIndicators,
    pub talent: TalentIndicators,
    pub business_environment: BusinessEnvironment,
    pub market_access: MarketAccess,
    /// Sectors the jurisdiction actively promotes
    #[serde(default)]
    pub priority_sectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicIndicators {
    pub population: u64,
    pub median_age: f64,
    pub urbanization_rate: f64,
    pub labor_force_participation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicIndicators {
    pub gdp_total_usd: f64,
    /// Annual real growth, percent
    pub gdp_growth_rate: f64,
    pub gdp_per_capita_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureIndicators {
    pub overall_score: f64,
    pub digital_score: f64,
    pub logistics_score: f64,
    pub energy_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentIndicators {
    pub overall_score: f64,
    pub higher_education_score: f64,
    pub skills_availability: f64,
    pub innovation_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEnvironment {
    pub ease_of_doing_business: f64,
    pub regulatory_quality: f64,
    /// Perception index, higher is cleaner
    pub corruption_index: f64,
    pub political_stability: f64,
}

impl BusinessEnvironment {
    /// Cost of operating under local rules: the inverse of ease of doing business
    pub fn regulatory_friction(&self) -> f64 {
        100.0 - self.ease_of_doing_business
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAccess {
    pub trade_openness: f64,
    pub fta_coverage: f64,
    pub investment_climate: f64,
}

impl MarketAccess {
    pub fn composite(&self) -> f64 {
        (self.trade_openness + self.fta_coverage + self.investment_climate) / 3.0
    }
}

impl ReferenceRecord {
    /// Record returned for jurisdictions missing from the dataset
    pub fn fallback() -> Self {
        Self {
            demographics: DemographicIndicators {
                population: 50_000_000,
                median_age: 30.0,
                urbanization_rate: 50.0,
                labor_force_participation: 60.0,
            },
            economy: EconomicIndicators {
                gdp_total_usd: 100_000_000_000.0,
                gdp_growth_rate: 3.0,
                gdp_per_capita_usd: 2_000.0,
            },
            infrastructure: InfrastructureIndicators {
                overall_score: 70.0,
                digital_score: 70.0,
                logistics_score: 70.0,
                energy_score: 70.0,
            },
            talent: TalentIndicators {
                overall_score: 70.0,
                higher_education_score: 70.0,
                skills_availability: 70.0,
                innovation_index: 50.0,
            },
            business_environment: BusinessEnvironment {
                ease_of_doing_business: 70.0,
                regulatory_quality: 70.0,
                corruption_index: 50.0,
                political_stability: 70.0,
            },
            market_access: MarketAccess {
                trade_openness: 70.0,
                fta_coverage: 70.0,
                investment_climate: 70.0,
            },
            priority_sectors: Vec::new(),
        }
    }

    /// Growth rate mapped onto 0-100 (-2% -> 0, 8% -> 100)
    pub fn growth_score(&self) -> f64 {
        let rate = self.economy.gdp_growth_rate;
        if !rate.is_finite() {
            return 50.0;
        }
        ((rate + 2.0) * 10.0).clamp(0.0, 100.0)
    }

    /// Whether the jurisdiction promotes the given sector
    ///
    /// Either name must contain the other as whole words, case-insensitively.
    /// Blank sectors on either side never match.
    pub fn prioritizes(&self, sector: &str) -> bool {
        self.priority_sectors
            .iter()
            .any(|p| contains_words(p, sector) || contains_words(sector, p))
    }
}

/// Whether a lookup was served from the dataset or from the fallback record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCoverage {
    Reference,
    Fallback,
}
