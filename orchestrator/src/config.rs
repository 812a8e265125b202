//! Engine configuration
//!
//! Values come from the environment (a `.env` file is honored through
//! `dotenv`) and may be overridden by command-line flags.
//!
//! ## Environment
//! - `REPORT_REFERENCE_DATA`: path to a JSON reference dataset
//! - `REPORT_MODULE_TIMEOUT_MS`: per-module timeout in milliseconds
//! - `REPORT_TIMEOUT_POLICY`: `fail` or `neutral`
//! - `REPORT_LOG_LEVEL`: base tracing level

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use shared::logging::parse_log_level;

use crate::error::{OrchestratorError, OrchestratorResult};

pub const ENV_REFERENCE_DATA: &str = "REPORT_REFERENCE_DATA";
pub const ENV_MODULE_TIMEOUT_MS: &str = "REPORT_MODULE_TIMEOUT_MS";
pub const ENV_TIMEOUT_POLICY: &str = "REPORT_TIMEOUT_POLICY";
pub const ENV_LOG_LEVEL: &str = "REPORT_LOG_LEVEL";

/// What happens when a module exceeds its timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// The whole assembly fails with `ModuleTimeout`
    #[default]
    Fail,
    /// The module's neutral result is used instead
    NeutralFallback,
}

impl FromStr for TimeoutPolicy {
    type Err = OrchestratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(TimeoutPolicy::Fail),
            "neutral" | "neutral-fallback" => Ok(TimeoutPolicy::NeutralFallback),
            other => Err(OrchestratorError::config(format!(
                "{ENV_TIMEOUT_POLICY}: expected 'fail' or 'neutral', got '{other}'"
            ))),
        }
    }
}

/// Per-assembly behavior of the orchestrator
///
/// The default has no timeout: every module runs to completion and any
/// failure fails the assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyConfig {
    pub module_timeout: Option<Duration>,
    pub timeout_policy: TimeoutPolicy,
}

impl AssemblyConfig {
    pub fn with_timeout(timeout: Duration, policy: TimeoutPolicy) -> Self {
        Self {
            module_timeout: Some(timeout),
            timeout_policy: policy,
        }
    }
}

/// Process-level configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub reference_data: Option<PathBuf>,
    pub assembly: AssemblyConfig,
    pub log_level: Option<String>,
}

impl EngineConfig {
    /// Load from the process environment after reading any `.env` file
    pub fn from_env() -> OrchestratorResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> OrchestratorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let module_timeout = get(ENV_MODULE_TIMEOUT_MS).map(|v| parse_timeout_ms(&v)).transpose()?;
        let timeout_policy = get(ENV_TIMEOUT_POLICY)
            .map(|v| v.parse::<TimeoutPolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            reference_data: get(ENV_REFERENCE_DATA).map(PathBuf::from),
            assembly: AssemblyConfig {
                module_timeout,
                timeout_policy,
            },
            log_level: get(ENV_LOG_LEVEL).map(|level| parse_log_level(&level)).transpose()?,
        })
    }

    pub fn with_reference_data(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.reference_data = path;
        }
        self
    }

    pub fn with_module_timeout_ms(mut self, millis: Option<u64>) -> OrchestratorResult<Self> {
        if let Some(ms) = millis {
            self.assembly.module_timeout = Some(timeout_from_ms(ms)?);
        }
        Ok(self)
    }

    pub fn with_timeout_policy(mut self, policy: Option<TimeoutPolicy>) -> Self {
        if let Some(policy) = policy {
            self.assembly.timeout_policy = policy;
        }
        self
    }

    pub fn with_log_level(mut self, level: Option<&str>) -> OrchestratorResult<Self> {
        if let Some(level) = level {
            self.log_level = Some(parse_log_level(level)?);
        }
        Ok(self)
    }
}

fn parse_timeout_ms(raw: &str) -> OrchestratorResult<Duration> {
    let ms = raw
        .parse::<u64>()
        .map_err(|_| OrchestratorError::config(format!("{ENV_MODULE_TIMEOUT_MS}: '{raw}' is not a whole number")))?;
    timeout_from_ms(ms)
}

fn timeout_from_ms(ms: u64) -> OrchestratorResult<Duration> {
    if ms == 0 {
        return Err(OrchestratorError::config(format!(
            "{ENV_MODULE_TIMEOUT_MS}: timeout must be greater than zero"
        )));
    }
    Ok(Duration::from_millis(ms))
}
