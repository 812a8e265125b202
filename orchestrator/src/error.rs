//! Orchestrator-specific error types

use shared::{ModuleKind, SharedError};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Scoring module '{module}' failed: {reason}")]
    ModuleFailed { module: ModuleKind, reason: String },

    #[error("Scoring module '{module}' timed out after {timeout:?}")]
    ModuleTimeout { module: ModuleKind, timeout: Duration },

    #[error("Scoring task for '{module}' could not be joined: {message}")]
    TaskJoinFailed { module: ModuleKind, message: String },

    #[error("Reference data error ({source_name}): {message}")]
    ReferenceDataError { source_name: String, message: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OrchestratorError {
    pub fn config(field: impl Into<String>) -> Self {
        OrchestratorError::ConfigurationError { field: field.into() }
    }

    pub fn module_failed(module: ModuleKind, reason: impl Into<String>) -> Self {
        OrchestratorError::ModuleFailed {
            module,
            reason: reason.into(),
        }
    }

    /// Module responsible for an assembly failure, if any
    pub fn failed_module(&self) -> Option<ModuleKind> {
        match self {
            OrchestratorError::ModuleFailed { module, .. }
            | OrchestratorError::ModuleTimeout { module, .. }
            | OrchestratorError::TaskJoinFailed { module, .. } => Some(*module),
            _ => None,
        }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
