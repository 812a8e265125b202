//! Test helpers and builder patterns for orchestrator tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate and improve maintainability.

use std::sync::Arc;

use report_orchestrator::*;
use shared::{ModuleKind, ReportPayload};

use super::fixtures::TestFixtures;

/// Builder pattern for creating test orchestrators with sensible defaults
pub struct OrchestratorBuilder {
    engine: MockScoringEngine,
    observer: MockAssemblyObserver,
    reference: ReferenceDataStore,
    config: AssemblyConfig,
}

impl OrchestratorBuilder {
    /// Create a new builder with an unconfigured engine and a permissive observer
    pub fn new() -> Self {
        let mut observer = MockAssemblyObserver::new();

        // Set up default behaviors to prevent panics
        observer.expect_on_assembly_started().return_const(()).times(0..);
        observer.expect_on_module_completed().return_const(()).times(0..);
        observer.expect_on_assembly_completed().return_const(()).times(0..);
        observer.expect_on_assembly_failed().return_const(()).times(0..);

        Self {
            engine: MockScoringEngine::new(),
            observer,
            reference: ReferenceDataStore::builtin(),
            config: AssemblyConfig::default(),
        }
    }

    /// Configure the scoring engine mock with a setup function
    pub fn with_engine<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockScoringEngine),
    {
        setup(&mut self.engine);
        self
    }

    /// Replace the observer mock entirely
    pub fn with_observer<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockAssemblyObserver),
    {
        let mut observer = MockAssemblyObserver::new();
        setup(&mut observer);
        self.observer = observer;
        self
    }

    pub fn with_reference(mut self, reference: ReferenceDataStore) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_config(mut self, config: AssemblyConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the orchestrator with all configured mocks
    pub fn build(self) -> TestOrchestrator {
        ReportOrchestrator::new(self.engine, self.observer, Arc::new(self.reference)).with_config(self.config)
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for test orchestrator with all mocks
pub type TestOrchestrator = ReportOrchestrator<MockScoringEngine, MockAssemblyObserver>;

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Expect every module exactly once, each returning canned results
    pub fn expect_all_modules_once(engine: &mut MockScoringEngine) {
        Self::expect_modules(engine, None, 1..=1);
    }

    /// Canned results for every module except `failing`, which returns an error
    ///
    /// The other modules may or may not run before the failure cancels them.
    pub fn expect_failure_in(engine: &mut MockScoringEngine, failing: ModuleKind) {
        Self::expect_modules(engine, Some(failing), 0..=1);
    }

    fn expect_modules(engine: &mut MockScoringEngine, failing: Option<ModuleKind>, times: std::ops::RangeInclusive<usize>) {
        let fails = |module: ModuleKind| failing == Some(module);
        let times_for = |module: ModuleKind| if fails(module) { 1..=1 } else { times.clone() };
        let failure = |module: ModuleKind| OrchestratorError::module_failed(module, "forced failure");

        let spi_fails = fails(ModuleKind::Spi);
        engine
            .expect_calculate_spi()
            .times(times_for(ModuleKind::Spi))
            .returning(move |_, _| {
                if spi_fails {
                    Err(failure(ModuleKind::Spi))
                } else {
                    Ok(TestFixtures::canned_spi())
                }
            });

        let rroi_fails = fails(ModuleKind::Rroi);
        engine
            .expect_calculate_rroi()
            .times(times_for(ModuleKind::Rroi))
            .returning(move |_, _| {
                if rroi_fails {
                    Err(failure(ModuleKind::Rroi))
                } else {
                    Ok(TestFixtures::canned_rroi())
                }
            });

        let seam_fails = fails(ModuleKind::Seam);
        engine
            .expect_build_seam_blueprint()
            .times(times_for(ModuleKind::Seam))
            .returning(move |_, _| {
                if seam_fails {
                    Err(failure(ModuleKind::Seam))
                } else {
                    Ok(TestFixtures::neutral())
                }
            });

        let partners_fail = fails(ModuleKind::PartnerMatcher);
        engine
            .expect_match_partners()
            .times(times_for(ModuleKind::PartnerMatcher))
            .returning(move |_, _| {
                if partners_fail {
                    // Unattributed errors are attributed by the orchestrator
                    Err(OrchestratorError::config("partner catalog unavailable"))
                } else {
                    Ok(TestFixtures::canned_partners())
                }
            });

        let ethics_fails = fails(ModuleKind::EthicalScreener);
        engine
            .expect_screen_ethics()
            .times(times_for(ModuleKind::EthicalScreener))
            .returning(move |_, _| {
                if ethics_fails {
                    Err(failure(ModuleKind::EthicalScreener))
                } else {
                    Ok(TestFixtures::neutral())
                }
            });

        let orchestration_fails = fails(ModuleKind::OpportunityOrchestration);
        engine
            .expect_orchestrate_opportunities()
            .times(times_for(ModuleKind::OpportunityOrchestration))
            .returning(move |_, _, _| {
                if orchestration_fails {
                    Err(failure(ModuleKind::OpportunityOrchestration))
                } else {
                    Ok(TestFixtures::neutral())
                }
            });

        let diversification_fails = fails(ModuleKind::Diversification);
        engine
            .expect_analyze_diversification()
            .times(times_for(ModuleKind::Diversification))
            .returning(move |_, _| {
                if diversification_fails {
                    Err(failure(ModuleKind::Diversification))
                } else {
                    Ok(TestFixtures::neutral())
                }
            });
    }

    /// Orchestrator whose engine returns canned results exactly once per module
    pub fn canned_orchestrator() -> TestOrchestrator {
        OrchestratorBuilder::new()
            .with_engine(Self::expect_all_modules_once)
            .build()
    }

    /// Assert the confidence scores are all within 0-100
    pub fn assert_confidence_in_range(payload: &ReportPayload) {
        for score in payload.confidence_scores.sub_scores() {
            assert!((0.0..=100.0).contains(&score), "confidence score {score} out of range");
        }
        let overall = payload.confidence_scores.overall.expect("overall confidence");
        assert!((0.0..=100.0).contains(&overall));
    }

    /// Assert the SPI band brackets the index
    pub fn assert_spi_band(payload: &ReportPayload) {
        let spi = &payload.computed_intelligence.spi;
        assert!(spi.ci_low <= spi.spi, "ci_low {} above spi {}", spi.ci_low, spi.spi);
        assert!(spi.spi <= spi.ci_high, "spi {} above ci_high {}", spi.spi, spi.ci_high);
    }
}
