//! Production reference data loader
//!
//! Reads a JSON dataset from disk when a path is configured, otherwise
//! serves the built-in dataset. The loaded store is validated before it is
//! handed out, so a malformed file fails here rather than mid-assembly.

use std::path::{Path, PathBuf};

use shared::logging;

use crate::core::ReferenceDataStore;
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::ReferenceSource;

/// Real reference source using the file system or the built-in dataset
#[derive(Debug, Clone, Default)]
pub struct RealReferenceSource {
    path: Option<PathBuf>,
}

impl RealReferenceSource {
    /// Source serving the built-in dataset
    pub fn builtin() -> Self {
        Self { path: None }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// File-backed when a path is given, built-in otherwise
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[async_trait::async_trait]
impl ReferenceSource for RealReferenceSource {
    async fn load(&self) -> OrchestratorResult<ReferenceDataStore> {
        let Some(path) = &self.path else {
            let store = ReferenceDataStore::builtin();
            tracing::debug!(jurisdictions = store.len(), "Using built-in reference dataset");
            return Ok(store);
        };

        let source_name = path.display().to_string();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| OrchestratorError::ReferenceDataError {
                source_name: source_name.clone(),
                message: e.to_string(),
            })?;

        let store = ReferenceDataStore::from_json_str(&contents).map_err(|e| match e {
            OrchestratorError::ReferenceDataError {
                source_name: jurisdiction,
                message,
            } => OrchestratorError::ReferenceDataError {
                source_name: source_name.clone(),
                message: format!("{jurisdiction}: {message}"),
            },
            other => OrchestratorError::ReferenceDataError {
                source_name: source_name.clone(),
                message: other.to_string(),
            },
        })?;

        logging::log_success(
            "reference",
            &format!("Loaded {} jurisdictions from {}", store.len(), source_name),
        );
        Ok(store)
    }
}
