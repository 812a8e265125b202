//! Shared logging utilities for consistent tracing across the engine

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::errors::{SharedError, SharedResult};

/// Crates whose events are shown at the requested level
const ENGINE_TARGETS: &[&str] = &["report_orchestrator", "shared"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Normalize a base log level name, rejecting anything tracing would not accept
pub fn parse_log_level(level: &str) -> SharedResult<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(SharedError::InvalidConfig {
            field: "log_level".to_string(),
            value: level.to_string(),
        })
    }
}

/// Build the filter directive string for the given base level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    ENGINE_TARGETS
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing subscriber with an optional base log level
///
/// `RUST_LOG` takes precedence when set. Repeated initialization is ignored.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let directives = filter_directives(log_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for report-aware info logging
#[macro_export]
macro_rules! report_info {
    ($report_id:expr, $($arg:tt)*) => {
        tracing::info!(
            report = %$report_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for report-aware warning logging
#[macro_export]
macro_rules! report_warn {
    ($report_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            report = %$report_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for report-aware error logging
#[macro_export]
macro_rules! report_error {
    ($report_id:expr, $($arg:tt)*) => {
        tracing::error!(
            report = %$report_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for report-aware debug logging
#[macro_export]
macro_rules! report_debug {
    ($report_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            report = %$report_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(component: &str, action: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}
