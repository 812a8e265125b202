//! Input profile produced by the form-collection layer
//!
//! The profile is read-only to the engine. `country` and `region` are a
//! caller-side precondition; every other field may be absent and the scoring
//! modules substitute neutral defaults through the accessors below.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ReportId;
use crate::errors::{SharedError, SharedResult};

/// Neutral mid-range score used whenever an optional input is missing
pub const NEUTRAL_SCORE: f64 = 70.0;

/// Organization / jurisdiction pairing submitted for analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProfile {
    pub identity: OrganizationIdentity,
    #[serde(default)]
    pub mandate: StrategicMandate,
    #[serde(default)]
    pub calibration: CalibrationConstraints,
    #[serde(default)]
    pub metadata: ProfileMetadata,
    /// Revenue / market share breakdown, when the caller has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_shares: Option<Vec<MarketShare>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization_type: String,
    pub country: String,
    pub region: String,
    #[serde(default)]
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicMandate {
    #[serde(default)]
    pub intents: Vec<String>,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

/// Declared activation horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    /// Under 6 months
    Immediate,
    /// 6 to 18 months
    ShortTerm,
    /// 18 to 36 months
    MediumTerm,
    /// Beyond 36 months
    LongTerm,
}

impl Timeline {
    /// Midpoint of the horizon in months
    pub fn months(&self) -> u32 {
        match self {
            Timeline::Immediate => 3,
            Timeline::ShortTerm => 12,
            Timeline::MediumTerm => 27,
            Timeline::LongTerm => 48,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Immediate => "0-6 months",
            Timeline::ShortTerm => "6-18 months",
            Timeline::MediumTerm => "18-36 months",
            Timeline::LongTerm => "36+ months",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationConstraints {
    /// Budget ceiling in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_cap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_mix: Option<CapitalMix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_horizon: Option<RiskHorizon>,
}

/// Percentage split of the capital stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalMix {
    pub equity: f64,
    pub debt: f64,
    pub grants: f64,
}

impl CapitalMix {
    /// Balanced mix assumed when none was declared
    pub const NEUTRAL: CapitalMix = CapitalMix {
        equity: 50.0,
        debt: 40.0,
        grants: 10.0,
    };

    /// Shares rescaled to sum to 100; degenerate input yields the neutral mix
    pub fn normalized(&self) -> CapitalMix {
        let parts = [self.equity, self.debt, self.grants].map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 });
        let total: f64 = parts.iter().sum();
        if total <= f64::EPSILON {
            return Self::NEUTRAL;
        }
        CapitalMix {
            equity: parts[0] / total * 100.0,
            debt: parts[1] / total * 100.0,
            grants: parts[2] / total * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskHorizon {
    Conservative,
    Balanced,
    Aggressive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    #[serde(default)]
    pub report_id: ReportId,
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
}

impl Default for ProfileMetadata {
    fn default() -> Self {
        Self {
            report_id: ReportId::default(),
            created_at: unix_epoch(),
        }
    }
}

fn unix_epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(0, 0).single().unwrap_or_default()
}

/// One country's share of revenue or market exposure, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketShare {
    pub country: String,
    pub share: f64,
}

impl MarketShare {
    pub fn new(country: impl Into<String>, share: f64) -> Self {
        Self {
            country: country.into(),
            share,
        }
    }
}

impl InputProfile {
    /// Minimal profile for a country/region pairing
    pub fn new(country: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            identity: OrganizationIdentity {
                country: country.into(),
                region: region.into(),
                ..Default::default()
            },
            mandate: StrategicMandate::default(),
            calibration: CalibrationConstraints::default(),
            metadata: ProfileMetadata::default(),
            market_shares: None,
        }
    }

    /// Parse a profile submitted by the form-collection layer
    pub fn from_json(json: &str) -> SharedResult<Self> {
        serde_json::from_str(json).map_err(|e| SharedError::DeserializationError { message: e.to_string() })
    }

    pub fn country(&self) -> &str {
        &self.identity.country
    }

    pub fn region(&self) -> &str {
        &self.identity.region
    }

    pub fn report_id(&self) -> &ReportId {
        &self.metadata.report_id
    }

    /// Declared industries, trimmed, with blanks dropped
    pub fn industries(&self) -> Vec<&str> {
        self.identity
            .industries
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn intents(&self) -> Vec<&str> {
        self.mandate
            .intents
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn has_problem_statement(&self) -> bool {
        !self.mandate.problem_statement.trim().is_empty()
    }

    /// Timeline, defaulting to the short-term horizon
    pub fn timeline_or_default(&self) -> Timeline {
        self.mandate.timeline.unwrap_or(Timeline::ShortTerm)
    }

    /// Capital mix, defaulting to the neutral split
    pub fn capital_mix_or_default(&self) -> CapitalMix {
        self.calibration
            .capital_mix
            .map(|mix| mix.normalized())
            .unwrap_or(CapitalMix::NEUTRAL)
    }

    pub fn risk_horizon_or_default(&self) -> RiskHorizon {
        self.calibration.risk_horizon.unwrap_or(RiskHorizon::Balanced)
    }

    /// Budget cap when it is a usable positive amount
    pub fn budget_cap(&self) -> Option<f64> {
        self.calibration
            .budget_cap_usd
            .filter(|budget| budget.is_finite() && *budget > 0.0)
    }

    /// Count of optional fields left blank, used to widen confidence bands
    pub fn missing_optional_fields(&self) -> usize {
        [
            self.identity.name.trim().is_empty(),
            self.identity.organization_type.trim().is_empty(),
            self.industries().is_empty(),
            self.intents().is_empty(),
            !self.has_problem_statement(),
            self.mandate.timeline.is_none(),
            self.budget_cap().is_none(),
            self.calibration.capital_mix.is_none(),
            self.calibration.risk_horizon.is_none(),
        ]
        .iter()
        .filter(|missing| **missing)
        .count()
    }
}
