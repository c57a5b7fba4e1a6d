//! Workspace façade: idempotent create-or-get operations and local
//! identifier-map persistence.
//!
//! This is the only component that talks to the remote API on behalf of
//! the orchestrators. Idempotency for databases and pages is by exact
//! title match, never fuzzy; if duplicate titles already exist in the
//! workspace the first match is adopted.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use notion_types::{Block, DatabaseInfo, Filter, Page, PageInfo, PropertyMap, PropertyValue,
    ValueMap, WorkspaceIds};

use crate::{NotionApi, NotionError, Parent, Result};

pub struct Workspace {
    api: Box<dyn NotionApi>,
    root_page_id: String,
    ids_path: PathBuf,
}

impl Workspace {
    pub fn new(
        api: Box<dyn NotionApi>,
        root_page_id: impl Into<String>,
        ids_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api,
            root_page_id: root_page_id.into(),
            ids_path: ids_path.into(),
        }
    }

    pub fn ids_path(&self) -> &Path {
        &self.ids_path
    }

    /// Find a database by exact name or create it under the root page.
    ///
    /// The lookup is the core idempotency guarantee: an existing
    /// database is adopted as-is, with no mutation, so reruns after a
    /// partial failure skip completed steps.
    pub async fn create_or_get_database(
        &self,
        name: &str,
        properties: &PropertyMap,
    ) -> Result<DatabaseInfo> {
        let candidates = self.api.search_databases(name).await?;
        if let Some(existing) = candidates
            .into_iter()
            .find(|database| database.title_plain() == name)
        {
            info!("database \"{}\" already exists, using {}", name, existing.id);
            return Ok(DatabaseInfo::from(&existing));
        }

        info!("creating database: {}", name);
        let created = self
            .api
            .create_database(&self.root_page_id, name, properties)
            .await?;
        Ok(DatabaseInfo::from(&created))
    }

    /// Additively update a database's properties. Never deletes fields.
    pub async fn update_database(&self, database_id: &str, properties: &PropertyMap) -> Result<()> {
        info!("updating database properties: {}", database_id);
        self.api.update_database(database_id, properties).await?;
        Ok(())
    }

    /// Create one record with optional nested content blocks.
    pub async fn create_record(
        &self,
        database_id: &str,
        values: &ValueMap,
        children: &[Block],
    ) -> Result<PageInfo> {
        let page = self
            .api
            .create_page(&Parent::DatabaseId(database_id.to_string()), values, children)
            .await?;
        Ok(PageInfo::from(&page))
    }

    /// Append content blocks to an existing record's body.
    pub async fn append_content(&self, page_id: &str, blocks: &[Block]) -> Result<()> {
        self.api.append_blocks(page_id, blocks).await
    }

    /// Find a page by exact title or create it under the root page with
    /// the given content.
    pub async fn create_or_get_page(&self, title: &str, children: &[Block]) -> Result<PageInfo> {
        let candidates = self.api.search_pages(title).await?;
        if let Some(existing) = candidates.into_iter().find(|page| page.title == title) {
            info!("page \"{}\" already exists, using {}", title, existing.id);
            return Ok(PageInfo {
                id: existing.id,
                url: existing.url,
            });
        }

        info!("creating page: {}", title);
        let mut values = ValueMap::new();
        values.insert("title".to_string(), PropertyValue::title(title));
        let page = self
            .api
            .create_page(&Parent::PageId(self.root_page_id.clone()), &values, children)
            .await?;
        Ok(PageInfo::from(&page))
    }

    /// Fetch the live server-assigned id of a named property.
    ///
    /// Rollup and formula attachment needs the relation property's id,
    /// which only exists after the relation has been created and the
    /// database fetched back.
    pub async fn resolve_property_id(&self, database_id: &str, property: &str) -> Result<String> {
        let database = self.api.retrieve_database(database_id).await?;
        database
            .properties
            .get(property)
            .map(|descriptor| descriptor.id.clone())
            .ok_or_else(|| NotionError::MissingProperty {
                database_id: database_id.to_string(),
                property: property.to_string(),
            })
    }

    /// Query a database's records.
    pub async fn query(&self, database_id: &str, filter: &Filter) -> Result<Vec<Page>> {
        self.api.query_database(database_id, filter).await
    }

    /// Overwrite the persisted identifier map.
    pub fn save_ids(&self, ids: &WorkspaceIds) -> Result<()> {
        if let Some(parent) = self.ids_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.ids_path, serde_json::to_string_pretty(ids)?)?;
        info!("saved workspace ids to {}", self.ids_path.display());
        Ok(())
    }

    /// Best-effort read of the persisted identifier map. Any failure is
    /// treated as "no prior state" rather than an error.
    pub fn load_ids(&self) -> Option<WorkspaceIds> {
        let raw = fs::read_to_string(&self.ids_path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(ids) => Some(ids),
            Err(error) => {
                warn!(
                    "could not parse workspace ids at {}: {}",
                    self.ids_path.display(),
                    error
                );
                None
            }
        }
    }
}
