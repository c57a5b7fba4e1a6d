//! # CRM Bootstrap
//!
//! Provisions and seeds a research CRM inside a Notion workspace:
//! six interrelated databases (Companies, Contacts, Interviews,
//! Insights, Research Projects and an optional Tasks database), the
//! cross-database relations and rollups between them, a dashboard
//! page, and a set of interlinked sample records.
//!
//! Two binaries drive it: `provision` builds the database topology and
//! persists the resulting identifiers, `seed` reads those identifiers
//! back and creates the sample content. Both are safe to rerun.
pub mod catalog;
pub mod config;
pub mod content;
pub mod errors;
pub mod provision;
pub mod seed;

pub use config::Config;
pub use errors::{ConfigError, ProvisionError, SeedError};
pub use provision::ProvisionOrchestrator;
pub use seed::{SeedOrchestrator, SeedSummary};
