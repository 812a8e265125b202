//! Reference data store
//!
//! An immutable, keyed table of per-jurisdiction indicators. The store is
//! built once (from JSON or the built-in dataset) and shared by `Arc` across
//! every concurrent scoring task. Lookups never fail: unknown keys resolve to
//! the fallback record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use shared::{
    contains_words, BusinessEnvironment, DataCoverage, DemographicIndicators, EconomicIndicators, InfrastructureIndicators,
    MarketAccess, ReferenceRecord, TalentIndicators,
};

use crate::error::{OrchestratorError, OrchestratorResult};

/// Serialized form of a reference dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDataset {
    pub jurisdictions: BTreeMap<String, ReferenceRecord>,
    #[serde(default)]
    pub high_risk_regions: Vec<String>,
    #[serde(default)]
    pub restricted_jurisdictions: Vec<String>,
}

/// Result of a store lookup
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRecord<'a> {
    pub record: &'a ReferenceRecord,
    pub coverage: DataCoverage,
}

#[derive(Debug, Clone, PartialEq)]
struct NamedRecord {
    name: String,
    record: ReferenceRecord,
}

/// Read-only jurisdiction lookup table
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataStore {
    /// Keyed by normalized jurisdiction name; BTreeMap keeps iteration deterministic
    records: BTreeMap<String, NamedRecord>,
    high_risk_regions: BTreeSet<String>,
    restricted_jurisdictions: BTreeSet<String>,
    fallback: ReferenceRecord,
}

fn designation(name: &str) -> Option<String> {
    let key = normalize_key(name);
    (!key.is_empty()).then_some(key)
}

fn designations(names: &[String]) -> BTreeSet<String> {
    names.iter().filter_map(|name| designation(name)).collect()
}

/// Normalize a jurisdiction or region key: trimmed, lowercase, single-spaced
pub fn normalize_key(key: &str) -> String {
    key.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for ReferenceDataStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ReferenceDataStore {
    /// Store with no records; every lookup resolves to the fallback
    pub fn empty() -> Self {
        Self {
            records: BTreeMap::new(),
            high_risk_regions: BTreeSet::new(),
            restricted_jurisdictions: BTreeSet::new(),
            fallback: ReferenceRecord::fallback(),
        }
    }

    pub fn from_dataset(dataset: ReferenceDataset) -> Self {
        let records = dataset
            .jurisdictions
            .into_iter()
            .map(|(name, record)| {
                let key = normalize_key(&name);
                (key, NamedRecord { name: name.trim().to_string(), record })
            })
            .collect();

        Self {
            records,
            high_risk_regions: designations(&dataset.high_risk_regions),
            restricted_jurisdictions: designations(&dataset.restricted_jurisdictions),
            fallback: ReferenceRecord::fallback(),
        }
    }

    pub fn from_json_str(json: &str) -> OrchestratorResult<Self> {
        let dataset: ReferenceDataset = serde_json::from_str(json)?;
        let store = Self::from_dataset(dataset);
        store.check_bounds()?;
        Ok(store)
    }

    /// Add or replace a single record
    pub fn with_record(mut self, name: &str, record: ReferenceRecord) -> Self {
        self.records.insert(
            normalize_key(name),
            NamedRecord {
                name: name.trim().to_string(),
                record,
            },
        );
        self
    }

    /// Designate a higher-risk region; blank names are ignored
    pub fn with_high_risk_region(mut self, region: &str) -> Self {
        self.high_risk_regions.extend(designation(region));
        self
    }

    /// Designate a restricted jurisdiction; blank names are ignored
    pub fn with_restricted_jurisdiction(mut self, jurisdiction: &str) -> Self {
        self.restricted_jurisdictions.extend(designation(jurisdiction));
        self
    }

    /// Resolve a jurisdiction, falling back to the default record on a miss
    pub fn resolve(&self, key: &str) -> ResolvedRecord<'_> {
        match self.records.get(&normalize_key(key)) {
            Some(named) => ResolvedRecord {
                record: &named.record,
                coverage: DataCoverage::Reference,
            },
            None => ResolvedRecord {
                record: &self.fallback,
                coverage: DataCoverage::Fallback,
            },
        }
    }

    pub fn lookup(&self, key: &str) -> &ReferenceRecord {
        self.resolve(key).record
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(&normalize_key(key))
    }

    /// All known jurisdictions with their display names, in key order
    pub fn jurisdictions(&self) -> impl Iterator<Item = (&str, &ReferenceRecord)> {
        self.records.values().map(|named| (named.name.as_str(), &named.record))
    }

    /// Whether the region names a designated higher-risk area
    ///
    /// The designation must appear in the region name as whole words, so
    /// "Northern Mindanao" matches "Mindanao" but "Kasulu" does not match "Sulu".
    pub fn is_high_risk_region(&self, region: &str) -> bool {
        self.high_risk_regions
            .iter()
            .any(|designated| contains_words(region, designated))
    }

    pub fn is_restricted(&self, jurisdiction: &str) -> bool {
        self.restricted_jurisdictions.contains(&normalize_key(jurisdiction))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reject datasets whose normalized scores are outside 0-100 or not finite
    fn check_bounds(&self) -> OrchestratorResult<()> {
        for named in self.records.values() {
            let r = &named.record;
            let scores = [
                r.demographics.urbanization_rate,
                r.demographics.labor_force_participation,
                r.infrastructure.overall_score,
                r.infrastructure.digital_score,
                r.infrastructure.logistics_score,
                r.infrastructure.energy_score,
                r.talent.overall_score,
                r.talent.higher_education_score,
                r.talent.skills_availability,
                r.talent.innovation_index,
                r.business_environment.ease_of_doing_business,
                r.business_environment.regulatory_quality,
                r.business_environment.corruption_index,
                r.business_environment.political_stability,
                r.market_access.trade_openness,
                r.market_access.fta_coverage,
                r.market_access.investment_climate,
            ];
            if let Some(bad) = scores.iter().find(|s| !s.is_finite() || **s < 0.0 || **s > 100.0) {
                return Err(OrchestratorError::ReferenceDataError {
                    source_name: named.name.clone(),
                    message: format!("normalized score {bad} outside 0-100"),
                });
            }
            if !r.economy.gdp_total_usd.is_finite() || r.economy.gdp_total_usd < 0.0 {
                return Err(OrchestratorError::ReferenceDataError {
                    source_name: named.name.clone(),
                    message: "GDP total must be a finite, non-negative amount".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Dataset bundled with the engine
    pub fn builtin() -> Self {
        let mut store = Self::empty();
        for (name, record) in builtin_records() {
            store = store.with_record(name, record);
        }
        for region in BUILTIN_HIGH_RISK_REGIONS {
            store = store.with_high_risk_region(region);
        }
        for jurisdiction in BUILTIN_RESTRICTED_JURISDICTIONS {
            store = store.with_restricted_jurisdiction(jurisdiction);
        }
        store
    }
}

const BUILTIN_HIGH_RISK_REGIONS: &[&str] = &[
    "Mindanao",
    "Bangsamoro",
    "BARMM",
    "Sulu",
    "Papua",
    "Rakhine",
    "Kashmir",
    "Balochistan",
    "Cabo Delgado",
];

const BUILTIN_RESTRICTED_JURISDICTIONS: &[&str] = &["North Korea", "Iran", "Syria"];

/// Compact constructor for the bundled dataset
#[allow(clippy::too_many_arguments)]
fn record(
    population: u64,
    gdp_billion_usd: f64,
    growth: f64,
    infrastructure: [f64; 4],
    talent: [f64; 4],
    business: [f64; 4],
    access: [f64; 3],
    sectors: &[&str],
) -> ReferenceRecord {
    let gdp_total_usd = gdp_billion_usd * 1_000_000_000.0;
    ReferenceRecord {
        demographics: DemographicIndicators {
            population,
            median_age: 30.0,
            urbanization_rate: 55.0,
            labor_force_participation: 62.0,
        },
        economy: EconomicIndicators {
            gdp_total_usd,
            gdp_growth_rate: growth,
            gdp_per_capita_usd: if population == 0 { 0.0 } else { gdp_total_usd / population as f64 },
        },
        infrastructure: InfrastructureIndicators {
            overall_score: infrastructure[0],
            digital_score: infrastructure[1],
            logistics_score: infrastructure[2],
            energy_score: infrastructure[3],
        },
        talent: TalentIndicators {
            overall_score: talent[0],
            higher_education_score: talent[1],
            skills_availability: talent[2],
            innovation_index: talent[3],
        },
        business_environment: BusinessEnvironment {
            ease_of_doing_business: business[0],
            regulatory_quality: business[1],
            corruption_index: business[2],
            political_stability: business[3],
        },
        market_access: MarketAccess {
            trade_openness: access[0],
            fta_coverage: access[1],
            investment_climate: access[2],
        },
        priority_sectors: sectors.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_records() -> Vec<(&'static str, ReferenceRecord)> {
    vec![
        (
            "Philippines",
            record(
                114_000_000, 437.0, 5.6,
                [58.0, 62.0, 55.0, 57.0],
                [66.0, 60.0, 70.0, 38.0],
                [62.0, 55.0, 34.0, 52.0],
                [68.0, 64.0, 63.0],
                &["Business Process Outsourcing", "Renewable Energy", "Agribusiness", "Logistics", "Tourism"],
            ),
        ),
        (
            "Vietnam",
            record(
                99_000_000, 430.0, 5.0,
                [64.0, 66.0, 62.0, 65.0],
                [68.0, 61.0, 72.0, 45.0],
                [69.0, 52.0, 41.0, 74.0],
                [86.0, 82.0, 72.0],
                &["Electronics Manufacturing", "Textiles", "Agribusiness", "Renewable Energy"],
            ),
        ),
        (
            "Indonesia",
            record(
                277_000_000, 1_371.0, 5.0,
                [60.0, 61.0, 58.0, 62.0],
                [62.0, 57.0, 64.0, 40.0],
                [66.0, 58.0, 34.0, 58.0],
                [66.0, 70.0, 67.0],
                &["Nickel Processing", "Electric Vehicles", "Digital Economy", "Agribusiness"],
            ),
        ),
        (
            "Thailand",
            record(
                71_000_000, 515.0, 1.9,
                [72.0, 73.0, 74.0, 71.0],
                [65.0, 62.0, 66.0, 44.0],
                [78.0, 60.0, 35.0, 55.0],
                [78.0, 74.0, 70.0],
                &["Automotive", "Electric Vehicles", "Tourism", "Food Processing"],
            ),
        ),
        (
            "Malaysia",
            record(
                34_000_000, 400.0, 3.7,
                [76.0, 78.0, 75.0, 77.0],
                [72.0, 70.0, 71.0, 52.0],
                [81.0, 70.0, 50.0, 66.0],
                [84.0, 80.0, 75.0],
                &["Semiconductors", "Islamic Finance", "Palm Oil", "Digital Economy"],
            ),
        ),
        (
            "Singapore",
            record(
                5_900_000, 501.0, 1.1,
                [94.0, 96.0, 95.0, 90.0],
                [88.0, 90.0, 84.0, 78.0],
                [95.0, 97.0, 83.0, 92.0],
                [98.0, 92.0, 95.0],
                &["Financial Services", "Biomedical Sciences", "Logistics", "Digital Economy"],
            ),
        ),
        (
            "India",
            record(
                1_428_000_000, 3_550.0, 7.2,
                [60.0, 68.0, 57.0, 60.0],
                [70.0, 66.0, 73.0, 55.0],
                [63.0, 56.0, 39.0, 45.0],
                [58.0, 55.0, 68.0],
                &["Information Technology", "Pharmaceuticals", "Renewable Energy", "Electronics Manufacturing"],
            ),
        ),
        (
            "Japan",
            record(
                124_000_000, 4_210.0, 1.0,
                [90.0, 88.0, 91.0, 86.0],
                [82.0, 85.0, 74.0, 75.0],
                [86.0, 88.0, 73.0, 85.0],
                [76.0, 84.0, 72.0],
                &["Robotics", "Automotive", "Semiconductors", "Healthcare"],
            ),
        ),
        (
            "Australia",
            record(
                26_600_000, 1_720.0, 2.0,
                [84.0, 82.0, 83.0, 80.0],
                [84.0, 86.0, 80.0, 66.0],
                [88.0, 90.0, 75.0, 86.0],
                [80.0, 82.0, 84.0],
                &["Critical Minerals", "Education", "Agribusiness", "Renewable Energy"],
            ),
        ),
        (
            "United States",
            record(
                335_000_000, 27_360.0, 2.5,
                [86.0, 90.0, 85.0, 84.0],
                [88.0, 92.0, 82.0, 82.0],
                [84.0, 86.0, 69.0, 68.0],
                [72.0, 66.0, 86.0],
                &["Software", "Biotechnology", "Aerospace", "Financial Services"],
            ),
        ),
        (
            "Germany",
            record(
                84_000_000, 4_460.0, -0.3,
                [86.0, 80.0, 88.0, 82.0],
                [84.0, 84.0, 80.0, 72.0],
                [82.0, 88.0, 78.0, 80.0],
                [88.0, 90.0, 80.0],
                &["Automotive", "Industrial Machinery", "Chemicals", "Renewable Energy"],
            ),
        ),
        (
            "Kenya",
            record(
                55_000_000, 108.0, 5.4,
                [50.0, 58.0, 48.0, 52.0],
                [56.0, 50.0, 58.0, 34.0],
                [60.0, 45.0, 31.0, 44.0],
                [60.0, 62.0, 58.0],
                &["Fintech", "Agribusiness", "Renewable Energy", "Tourism"],
            ),
        ),
        (
            "Mexico",
            record(
                128_000_000, 1_790.0, 3.2,
                [66.0, 64.0, 68.0, 63.0],
                [64.0, 60.0, 66.0, 42.0],
                [70.0, 58.0, 31.0, 42.0],
                [80.0, 76.0, 70.0],
                &["Automotive", "Aerospace", "Electronics Manufacturing", "Agribusiness"],
            ),
        ),
    ]
}
