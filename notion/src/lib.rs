//! Notion client for workspace provisioning and seeding.
//!
//! This crate provides:
//! - [`NotionApi`] trait for abstracting access to the remote workspace API
//! - [`NotionClient`] production client over the Notion REST API
//! - [`MockNotionClient`] in-memory client for testing without network access
//! - [`ApiSource`] config enum for choosing between mock and live clients
//! - [`Workspace`] façade with the idempotent create-or-get operations and
//!   identifier-map persistence both orchestrators depend on
//!
//! ## Usage with ApiSource
//!
//! ```ignore
//! use notion::{ApiSource, Workspace};
//!
//! // Development/testing: in-memory workspace
//! let api = ApiSource::Mock.into_api();
//!
//! // Production: live API with a bearer token
//! let api = ApiSource::live(token).into_api();
//!
//! let workspace = Workspace::new(api, root_page_id, "output/notion-ids.json");
//! let companies = workspace.create_or_get_database("Companies", &properties).await?;
//! ```

mod client;
mod mock;
mod workspace;

pub use client::NotionClient;
pub use mock::MockNotionClient;
pub use workspace::Workspace;

use async_trait::async_trait;
use serde::Serialize;

use notion_types::{Block, Database, Filter, Page, PageHit, PropertyMap, ValueMap};

#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("api error (status {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("property \"{property}\" not found on database {database_id}")]
    MissingProperty {
        database_id: String,
        property: String,
    },
}

pub type Result<T> = std::result::Result<T, NotionError>;

/// Parent container for a new page: either a root page or a database.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parent {
    PageId(String),
    DatabaseId(String),
}

/// Trait for talking to the remote workspace API.
///
/// This trait abstracts the API client to enable dependency injection
/// and mocking for testing. Production code uses [`NotionClient`], while
/// tests can use [`MockNotionClient`].
///
/// Every operation maps to exactly one remote call; idempotency and
/// ordering live a layer up, in [`Workspace`] and the orchestrators.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Search databases whose title matches the query.
    async fn search_databases(&self, query: &str) -> Result<Vec<Database>>;

    /// Search pages whose title matches the query.
    async fn search_pages(&self, query: &str) -> Result<Vec<PageHit>>;

    /// Create a database under a root page with the given properties.
    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        properties: &PropertyMap,
    ) -> Result<Database>;

    /// Additively update a database's properties, keyed by name.
    async fn update_database(
        &self,
        database_id: &str,
        properties: &PropertyMap,
    ) -> Result<Database>;

    /// Fetch the live state of a database, including server-assigned
    /// property ids.
    async fn retrieve_database(&self, database_id: &str) -> Result<Database>;

    /// Create a page with the given property values and content blocks.
    async fn create_page(
        &self,
        parent: &Parent,
        properties: &ValueMap,
        children: &[Block],
    ) -> Result<Page>;

    /// Query a database's records with a filter.
    async fn query_database(&self, database_id: &str, filter: &Filter) -> Result<Vec<Page>>;

    /// Append content blocks to an existing page or block.
    async fn append_blocks(&self, block_id: &str, children: &[Block]) -> Result<()>;
}

/// Configuration for the workspace API source.
///
/// Use this to explicitly choose between mock and live clients.
#[derive(Debug, Clone)]
pub enum ApiSource {
    /// In-memory workspace for testing and local development.
    Mock,
    /// Connect to the live Notion REST API.
    Live {
        /// Integration bearer token.
        token: String,
    },
}

impl ApiSource {
    pub fn live(token: impl Into<String>) -> Self {
        Self::Live {
            token: token.into(),
        }
    }

    /// Create the appropriate [`NotionApi`] implementation.
    pub fn into_api(self) -> Box<dyn NotionApi> {
        match self {
            Self::Mock => Box::new(MockNotionClient::new()),
            Self::Live { token } => Box::new(NotionClient::new(&token)),
        }
    }
}
