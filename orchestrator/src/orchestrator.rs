//! Report orchestrator
//!
//! Fans one input profile out to every scoring module concurrently, joins
//! all of them, and maps the joined results into a single report payload.
//! Assembly is all-or-nothing: the first module failure fails the whole
//! report and no partial payload is ever produced.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::{AbortHandle, JoinHandle};

use shared::{report_debug, report_warn, InputProfile, ModuleKind, ReportId, ReportPayload, ValidationReport};

use crate::{
    config::{AssemblyConfig, TimeoutPolicy},
    core::{self, assemble_payload, build_region_profile, effective_shares, ModuleResults, NeutralResult, ReferenceDataStore},
    error::{OrchestratorError, OrchestratorResult},
    services::{StandardScoringEngine, TracingObserver},
    traits::{AssemblyObserver, ScoringEngine},
};

/// Coordinates one assembly per call over shared, read-only inputs
pub struct ReportOrchestrator<E, O = TracingObserver>
where
    E: ScoringEngine + 'static,
    O: AssemblyObserver + 'static,
{
    /// Injected services
    engine: Arc<E>,
    observer: Arc<O>,

    /// Immutable snapshot shared by every scoring task
    reference: Arc<ReferenceDataStore>,

    config: AssemblyConfig,
}

impl ReportOrchestrator<StandardScoringEngine, TracingObserver> {
    /// Orchestrator backed by the core scoring functions and tracing diagnostics
    pub fn standard(reference: Arc<ReferenceDataStore>) -> Self {
        Self::new(StandardScoringEngine::new(), TracingObserver, reference)
    }
}

impl<E, O> ReportOrchestrator<E, O>
where
    E: ScoringEngine + 'static,
    O: AssemblyObserver + 'static,
{
    pub fn new(engine: E, observer: O, reference: Arc<ReferenceDataStore>) -> Self {
        Self {
            engine: Arc::new(engine),
            observer: Arc::new(observer),
            reference,
            config: AssemblyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AssemblyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceDataStore {
        &self.reference
    }

    /// Assemble a report payload for one profile
    ///
    /// Every module is dispatched exactly once and runs independently of the
    /// others. Calling this twice with the same profile and reference data
    /// yields identical payloads.
    ///
    /// # Returns
    /// The assembled payload, or the first module failure, attributed to the
    /// module that caused it.
    pub async fn assemble(&self, profile: &InputProfile) -> OrchestratorResult<ReportPayload> {
        let report_id = profile.report_id().clone();
        let started = Instant::now();
        self.observer.on_assembly_started(&report_id, ModuleKind::ALL.len());

        let profile = Arc::new(profile.clone());
        match self.dispatch(&report_id, Arc::clone(&profile)).await {
            Ok(results) => {
                let payload = assemble_payload(&profile, &self.reference, results);
                self.observer.on_assembly_completed(&report_id, started.elapsed());
                Ok(payload)
            }
            Err(e) => {
                self.observer.on_assembly_failed(&report_id, &e);
                Err(e)
            }
        }
    }

    /// Advisory completeness check; never alters the payload
    pub fn validate(&self, payload: &ReportPayload) -> ValidationReport {
        core::validate(payload)
    }

    async fn dispatch(&self, report_id: &ReportId, profile: Arc<InputProfile>) -> OrchestratorResult<ModuleResults> {
        // Derived inputs are computed up front so no module reads another's output
        let region = build_region_profile(&profile, &self.reference);
        let shares = effective_shares(&profile);
        report_debug!(
            report_id,
            coverage = ?region.coverage,
            markets = shares.len(),
            "Dispatching {} scoring modules",
            ModuleKind::ALL.len()
        );

        let spi = self.spawn_module(ModuleKind::Spi, report_id, &profile, |engine, profile, reference| async move {
            engine.calculate_spi(&profile, &reference).await
        });
        let rroi = self.spawn_module(ModuleKind::Rroi, report_id, &profile, |engine, profile, reference| async move {
            engine.calculate_rroi(&profile, &reference).await
        });
        let seam = self.spawn_module(ModuleKind::Seam, report_id, &profile, |engine, profile, reference| async move {
            engine.build_seam_blueprint(&profile, &reference).await
        });
        let partners =
            self.spawn_module(ModuleKind::PartnerMatcher, report_id, &profile, |engine, profile, reference| async move {
                engine.match_partners(&profile, &reference).await
            });
        let ethics =
            self.spawn_module(ModuleKind::EthicalScreener, report_id, &profile, |engine, profile, reference| async move {
                engine.screen_ethics(&profile, &reference).await
            });
        let orchestration = self.spawn_module(
            ModuleKind::OpportunityOrchestration,
            report_id,
            &profile,
            move |engine, profile, reference| async move {
                engine.orchestrate_opportunities(&profile, &region, &reference).await
            },
        );
        let diversification =
            self.spawn_module(ModuleKind::Diversification, report_id, &profile, move |engine, _profile, reference| async move {
                engine.analyze_diversification(&shares, &reference).await
            });

        // Covers both a failed join and the caller dropping this future mid-join
        let _siblings = AbortOnDrop(vec![
            spi.abort_handle(),
            rroi.abort_handle(),
            seam.abort_handle(),
            partners.abort_handle(),
            ethics.abort_handle(),
            orchestration.abort_handle(),
            diversification.abort_handle(),
        ]);

        let joined = tokio::try_join!(
            join_module(ModuleKind::Spi, spi),
            join_module(ModuleKind::Rroi, rroi),
            join_module(ModuleKind::Seam, seam),
            join_module(ModuleKind::PartnerMatcher, partners),
            join_module(ModuleKind::EthicalScreener, ethics),
            join_module(ModuleKind::OpportunityOrchestration, orchestration),
            join_module(ModuleKind::Diversification, diversification),
        );

        let (spi, rroi, seam, partners, ethics, orchestration, diversification) = joined?;
        Ok(ModuleResults {
            spi,
            rroi,
            seam,
            partners,
            ethics,
            orchestration,
            diversification,
        })
    }

    /// Spawn one module on the runtime with its own handles to the shared inputs
    fn spawn_module<T, F, Fut>(
        &self,
        module: ModuleKind,
        report_id: &ReportId,
        profile: &Arc<InputProfile>,
        run: F,
    ) -> JoinHandle<OrchestratorResult<T>>
    where
        T: NeutralResult + Send + 'static,
        F: FnOnce(Arc<E>, Arc<InputProfile>, Arc<ReferenceDataStore>) -> Fut + Send + 'static,
        Fut: Future<Output = OrchestratorResult<T>> + Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        let observer = Arc::clone(&self.observer);
        let reference = Arc::clone(&self.reference);
        let profile = Arc::clone(profile);
        let report_id = report_id.clone();
        let config = self.config;

        tokio::spawn(async move {
            let started = Instant::now();
            let work = run(engine, profile, reference);

            let outcome = match config.module_timeout {
                None => work.await,
                Some(limit) => match tokio::time::timeout(limit, work).await {
                    Ok(result) => result,
                    Err(_) => match config.timeout_policy {
                        TimeoutPolicy::Fail => Err(OrchestratorError::ModuleTimeout { module, timeout: limit }),
                        TimeoutPolicy::NeutralFallback => {
                            report_warn!(report_id, module = %module, "{} timed out, using neutral result", module.label());
                            Ok(T::neutral())
                        }
                    },
                },
            };

            let value = outcome.map_err(|e| attribute(module, e))?;
            observer.on_module_completed(&report_id, module, started.elapsed());
            Ok(value)
        })
    }
}

/// Aborts the wrapped module tasks when dropped
///
/// Aborting a task that already finished is a no-op, so the guard can
/// outlive a successful join.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

async fn join_module<T>(module: ModuleKind, handle: JoinHandle<OrchestratorResult<T>>) -> OrchestratorResult<T> {
    handle.await.map_err(|e| OrchestratorError::TaskJoinFailed {
        module,
        message: e.to_string(),
    })?
}

/// Make sure every failure leaving a task names the module it came from
fn attribute(module: ModuleKind, error: OrchestratorError) -> OrchestratorError {
    if error.failed_module() == Some(module) {
        error
    } else {
        OrchestratorError::module_failed(module, error.to_string())
    }
}
