//! Trait definitions with mockall annotations for testing
//!
//! These are the injection seams of the orchestrator: where the scoring
//! computations come from, where reference data is loaded from, and who
//! observes an assembly. Tests swap each of them for a generated mock.

use std::time::Duration;

use shared::{
    DiversificationAnalysis, EthicsScreening, InputProfile, MarketShare, ModuleKind, OpportunityOrchestration,
    RegionProfile, ReportId, RroiResult, SeamBlueprint, SpiResult, SymbioticPartner,
};

use crate::core::ReferenceDataStore;
use crate::error::{OrchestratorError, OrchestratorResult};

/// Scoring computations dispatched by the orchestrator
///
/// Every method is an independent function of its inputs. None may observe
/// another's output, mutate the profile, or touch anything beyond the
/// read-only reference data.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ScoringEngine: Send + Sync {
    /// Symbiotic Partnership Index with confidence band and labeled breakdown
    async fn calculate_spi(&self, profile: &InputProfile, reference: &ReferenceDataStore)
        -> OrchestratorResult<SpiResult>;

    /// Regional readiness over infrastructure, talent, regulatory and market components
    async fn calculate_rroi(
        &self,
        profile: &InputProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<RroiResult>;

    /// Ecosystem partners and capability gaps
    async fn build_seam_blueprint(
        &self,
        profile: &InputProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<SeamBlueprint>;

    /// Ranked candidate partners
    async fn match_partners(
        &self,
        profile: &InputProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<Vec<SymbioticPartner>>;

    /// BLOCK/CAUTION flags and mitigation steps
    async fn screen_ethics(
        &self,
        profile: &InputProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<EthicsScreening>;

    /// Auxiliary sub-indices for the computed-intelligence bag
    async fn orchestrate_opportunities(
        &self,
        profile: &InputProfile,
        region: &RegionProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<OpportunityOrchestration>;

    /// Concentration index and alternative markets for a share breakdown
    async fn analyze_diversification(
        &self,
        shares: &[MarketShare],
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<DiversificationAnalysis>;
}

/// Reference data source abstraction for dependency injection
#[mockall::automock]
#[async_trait::async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Load an immutable reference snapshot
    async fn load(&self) -> OrchestratorResult<ReferenceDataStore>;
}

/// Diagnostic hook invoked around each assembly
///
/// Implementations must not influence the payload.
#[mockall::automock]
pub trait AssemblyObserver: Send + Sync {
    fn on_assembly_started(&self, report_id: &ReportId, module_count: usize);

    fn on_module_completed(&self, report_id: &ReportId, module: ModuleKind, elapsed: Duration);

    fn on_assembly_completed(&self, report_id: &ReportId, elapsed: Duration);

    fn on_assembly_failed(&self, report_id: &ReportId, error: &OrchestratorError);
}
