//! Default assembly observer emitting structured tracing events

use std::time::Duration;

use shared::{report_debug, report_error, report_info, ModuleKind, ReportId};

use crate::error::OrchestratorError;
use crate::traits::AssemblyObserver;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AssemblyObserver for TracingObserver {
    fn on_assembly_started(&self, report_id: &ReportId, module_count: usize) {
        report_info!(report_id, modules = module_count, "📋 Assembling report");
    }

    fn on_module_completed(&self, report_id: &ReportId, module: ModuleKind, elapsed: Duration) {
        report_debug!(
            report_id,
            module = %module,
            elapsed_ms = elapsed.as_millis() as u64,
            "{} complete",
            module.label()
        );
    }

    fn on_assembly_completed(&self, report_id: &ReportId, elapsed: Duration) {
        report_info!(report_id, elapsed_ms = elapsed.as_millis() as u64, "✅ Report assembled");
    }

    fn on_assembly_failed(&self, report_id: &ReportId, error: &OrchestratorError) {
        let module = error.failed_module().map(|m| m.to_string()).unwrap_or_else(|| "none".to_string());
        report_error!(report_id, module = %module, error = %error, "❌ Report assembly failed");
    }
}
