//! Main entry point for the report orchestrator binary
//!
//! Reads an input profile from disk, assembles the report payload with the
//! standard scoring engine and prints it as JSON on stdout. Diagnostics go
//! to stderr through tracing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use report_orchestrator::{
    EngineConfig, RealReferenceSource, ReferenceSource, ReportOrchestrator, StandardScoringEngine, TimeoutPolicy,
    TracingObserver,
};
use shared::{logging, report_info, report_warn, InputProfile, MarketShare, ReportId};

/// Exit status when `--validate` finds missing required fields
const EXIT_INCOMPLETE: i32 = 2;

/// Intelligence scoring and report assembly engine
#[derive(Parser)]
#[command(name = "report-orchestrator")]
#[command(about = "Scores an organization/jurisdiction profile and assembles the report payload")]
pub struct Args {
    /// Input profile JSON file
    #[arg(long)]
    pub profile: PathBuf,

    /// Reference dataset JSON file (defaults to REPORT_REFERENCE_DATA, then the built-in dataset)
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Market share breakdown JSON file, overriding any shares in the profile
    #[arg(long)]
    pub market_shares: Option<PathBuf>,

    /// Per-module timeout in milliseconds (no timeout unless set)
    #[arg(long)]
    pub module_timeout_ms: Option<u64>,

    /// What a module timeout does: fail the report or use a neutral result
    #[arg(long, value_parser = parse_policy)]
    pub timeout_policy: Option<TimeoutPolicy>,

    /// Run the completeness check and exit non-zero when fields are missing
    #[arg(long)]
    pub validate: bool,

    /// Pretty-print the payload
    #[arg(long)]
    pub pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_policy(raw: &str) -> Result<TimeoutPolicy, String> {
    raw.parse().map_err(|e: report_orchestrator::OrchestratorError| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let config = EngineConfig::from_env()?
        .with_reference_data(args.reference.clone())
        .with_module_timeout_ms(args.module_timeout_ms)?
        .with_timeout_policy(args.timeout_policy)
        .with_log_level(args.log_level.as_deref())?;

    logging::init_tracing_with_level(config.log_level.as_deref());
    logging::log_startup("report-orchestrator", "report assembly");

    let mut profile = read_profile(&args.profile).await?;
    if let Some(path) = &args.market_shares {
        profile.market_shares = Some(read_market_shares(path).await?);
    }
    if profile.metadata.report_id.is_empty() {
        profile.metadata.report_id = ReportId::generate();
    }
    if profile.metadata.created_at.timestamp() == 0 {
        profile.metadata.created_at = Utc::now();
    }

    let source = RealReferenceSource::from_optional_path(config.reference_data.clone());
    let origin = source
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in dataset".to_string());
    logging::log_progress("reference", "Loading reference data", &origin);
    let reference = source.load().await?;
    report_info!(
        profile.report_id(),
        jurisdictions = reference.len(),
        timeout = ?config.assembly.module_timeout,
        "Reference data ready"
    );

    let orchestrator = ReportOrchestrator::new(StandardScoringEngine::new(), TracingObserver, Arc::new(reference))
        .with_config(config.assembly);

    let payload = match orchestrator.assemble(&profile).await {
        Ok(payload) => payload,
        Err(err) => {
            logging::log_error("orchestrator", "Report assembly", &err);
            return Err(anyhow::Error::new(err).context(format!("Assembling report {}", profile.report_id())));
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    println!("{json}");

    if args.validate {
        let report = orchestrator.validate(&payload);
        if !report.is_complete {
            report_warn!(
                profile.report_id(),
                missing = ?report.missing_fields,
                "Report payload is incomplete"
            );
            std::process::exit(EXIT_INCOMPLETE);
        }
        logging::log_success("validator", "All required fields present");
    }

    Ok(())
}

async fn read_profile(path: &Path) -> anyhow::Result<InputProfile> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading profile {}", path.display()))?;
    InputProfile::from_json(&raw).with_context(|| format!("Parsing profile {}", path.display()))
}

async fn read_market_shares(path: &Path) -> anyhow::Result<Vec<MarketShare>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading market shares {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parsing market shares {}", path.display()))
}
