//! Scoring engine backed by the deterministic core functions
//!
//! Every call is a pure computation over borrowed inputs, so this engine
//! never fails. Alternative engines (remote scorers, test doubles) plug in
//! through the same trait and may.

use shared::{
    DiversificationAnalysis, EthicsScreening, InputProfile, MarketShare, OpportunityOrchestration, RegionProfile,
    RroiResult, SeamBlueprint, SpiResult, SymbioticPartner,
};

use crate::core::{self, DiversificationAnalyzer, ReferenceDataStore};
use crate::error::OrchestratorResult;
use crate::traits::ScoringEngine;

/// Production scoring engine
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScoringEngine;

impl StandardScoringEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ScoringEngine for StandardScoringEngine {
    async fn calculate_spi(&self, profile: &InputProfile, reference: &ReferenceDataStore) -> OrchestratorResult<SpiResult> {
        Ok(core::calculate_spi(profile, reference))
    }

    async fn calculate_rroi(&self, profile: &InputProfile, reference: &ReferenceDataStore) -> OrchestratorResult<RroiResult> {
        Ok(core::calculate_rroi(profile, reference))
    }

    async fn build_seam_blueprint(
        &self,
        profile: &InputProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<SeamBlueprint> {
        Ok(core::build_seam_blueprint(profile, reference))
    }

    async fn match_partners(
        &self,
        profile: &InputProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<Vec<SymbioticPartner>> {
        Ok(core::match_partners(profile, reference))
    }

    async fn screen_ethics(&self, profile: &InputProfile, reference: &ReferenceDataStore) -> OrchestratorResult<EthicsScreening> {
        Ok(core::screen_ethics(profile, reference))
    }

    async fn orchestrate_opportunities(
        &self,
        profile: &InputProfile,
        region: &RegionProfile,
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<OpportunityOrchestration> {
        Ok(core::orchestrate_opportunities(profile, region, reference))
    }

    async fn analyze_diversification(
        &self,
        shares: &[MarketShare],
        reference: &ReferenceDataStore,
    ) -> OrchestratorResult<DiversificationAnalysis> {
        Ok(DiversificationAnalyzer::new(reference).analyze_concentration(shares))
    }
}
