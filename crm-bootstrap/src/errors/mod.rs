//! Error types for the CRM bootstrap application.
//! Consolidates configuration, remote-operation, verification and
//! state-absence failures for the two orchestrators.
use thiserror::Error;

use notion::NotionError;

/// A required startup value is absent. Raised before any remote call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required in the environment (.env)")]
    Missing(&'static str),
}

/// Failures of a provisioning run. Any variant aborts the whole run;
/// no rollback is attempted, and reruns recover via the create-or-get
/// idempotency.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("notion error: {0}")]
    Notion(#[from] NotionError),

    /// The post-run verification found expected entries missing from
    /// the produced identifier map. This indicates an ordering bug or a
    /// previously aborted run rather than a transport fault.
    #[error("verification failed, missing from workspace map: {}", .missing.join(", "))]
    Verification { missing: Vec<String> },
}

/// Failures of a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("notion error: {0}")]
    Notion(#[from] NotionError),

    #[error("no workspace ids found at {0}; run the provision binary first")]
    MissingState(String),

    #[error("database {0:?} missing from the workspace ids; rerun provisioning")]
    MissingDatabase(String),
}
