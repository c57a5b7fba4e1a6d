//! Mock workspace client for testing and local development.
//!
//! The `MockNotionClient` keeps databases and pages in memory, assigns
//! uuid identifiers the way the server would, and enforces the one
//! server-side invariant the provisioning order depends on: a rollup
//! must reference an already-existing relation property id. Cloning the
//! client shares the underlying state, so a test can hand a clone to a
//! `Workspace` and inspect the results afterwards.
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use notion_types::{
    Block, Database, Filter, Page, PageHit, PropertyDescriptor, PropertyMap, PropertySpec,
    PropertyValue, RelationDescriptor, RichText, ValueMap,
};

use crate::{NotionApi, NotionError, Parent, Result};

/// In-memory stand-in for the remote workspace.
#[derive(Clone, Default)]
pub struct MockNotionClient {
    state: Arc<RwLock<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Databases by id, in creation order.
    databases: Vec<MockDatabase>,
    /// Standalone pages created under a page parent.
    pages: Vec<MockPage>,
    database_create_calls: usize,
    page_create_calls: usize,
}

struct MockDatabase {
    id: String,
    url: String,
    title: String,
    properties: BTreeMap<String, MockProperty>,
    records: Vec<MockRecord>,
}

struct MockProperty {
    id: String,
    spec: PropertySpec,
}

struct MockRecord {
    id: String,
    url: String,
    values: ValueMap,
    children: Vec<Block>,
}

struct MockPage {
    id: String,
    url: String,
    title: String,
    children: Vec<Block>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn fake_url(id: &str) -> String {
    format!("https://www.notion.so/{}", id.replace('-', ""))
}

fn property_id() -> String {
    // Short opaque ids, like the server's url-encoded property ids.
    Uuid::new_v4().simple().to_string()[..6].to_string()
}

impl MockDatabase {
    fn as_database(&self) -> Database {
        let properties = self
            .properties
            .iter()
            .map(|(name, property)| {
                let relation = match &property.spec {
                    PropertySpec::Relation(spec) => Some(RelationDescriptor {
                        database_id: spec.database_id.clone(),
                    }),
                    _ => None,
                };
                (
                    name.clone(),
                    PropertyDescriptor {
                        id: property.id.clone(),
                        kind: property.spec.kind().to_string(),
                        relation,
                    },
                )
            })
            .collect();
        Database {
            id: self.id.clone(),
            url: self.url.clone(),
            title: vec![RichText::text(&self.title)],
            properties,
        }
    }

    /// Apply an additive property update. Existing names keep their
    /// server-assigned ids; new names get fresh ones.
    fn apply(&mut self, properties: &PropertyMap) -> Result<()> {
        for (name, spec) in properties {
            if let PropertySpec::Rollup(rollup) = spec {
                let known = self
                    .properties
                    .values()
                    .any(|property| property.id == rollup.relation_property_id);
                if !known {
                    return Err(NotionError::InvalidRequest(format!(
                        "rollup \"{}\" references unknown relation property id \"{}\" on database {}",
                        name, rollup.relation_property_id, self.id
                    )));
                }
            }
            match self.properties.get_mut(name) {
                Some(existing) => existing.spec = spec.clone(),
                None => {
                    self.properties.insert(
                        name.clone(),
                        MockProperty {
                            id: property_id(),
                            spec: spec.clone(),
                        },
                    );
                }
            }
        }
        Ok(())
    }
}

fn record_matches(record: &MockRecord, filter: &Filter) -> bool {
    match filter {
        Filter::And { and } => and.iter().all(|clause| record_matches(record, clause)),
        Filter::Title { property, title } => record
            .values
            .get(property)
            .and_then(PropertyValue::title_text)
            .is_some_and(|text| text == title.equals),
        Filter::Relation { property, relation } => record
            .values
            .get(property)
            .and_then(PropertyValue::relation_ids)
            .is_some_and(|refs| refs.iter().any(|r| r.id == relation.contains)),
    }
}

impl MockNotionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of underlying database create calls issued so far.
    pub fn database_create_calls(&self) -> usize {
        self.state.read().unwrap().database_create_calls
    }

    /// Number of underlying page create calls issued so far.
    pub fn page_create_calls(&self) -> usize {
        self.state.read().unwrap().page_create_calls
    }

    /// Records currently stored in the given database.
    pub fn record_count(&self, database_id: &str) -> usize {
        self.state
            .read()
            .unwrap()
            .databases
            .iter()
            .find(|db| db.id == database_id)
            .map_or(0, |db| db.records.len())
    }

    /// Standalone pages (created under a page parent).
    pub fn standalone_page_count(&self) -> usize {
        self.state.read().unwrap().pages.len()
    }

    /// Look up a database snapshot by exact title.
    pub fn database_by_title(&self, title: &str) -> Option<Database> {
        self.state
            .read()
            .unwrap()
            .databases
            .iter()
            .find(|db| db.title == title)
            .map(MockDatabase::as_database)
    }
}

#[async_trait]
impl NotionApi for MockNotionClient {
    async fn search_databases(&self, query: &str) -> Result<Vec<Database>> {
        let state = self.state.read().unwrap();
        Ok(state
            .databases
            .iter()
            .filter(|db| db.title.contains(query))
            .map(MockDatabase::as_database)
            .collect())
    }

    async fn search_pages(&self, query: &str) -> Result<Vec<PageHit>> {
        let state = self.state.read().unwrap();
        Ok(state
            .pages
            .iter()
            .filter(|page| page.title.contains(query))
            .map(|page| PageHit {
                id: page.id.clone(),
                url: page.url.clone(),
                title: page.title.clone(),
            })
            .collect())
    }

    async fn create_database(
        &self,
        _parent_page_id: &str,
        title: &str,
        properties: &PropertyMap,
    ) -> Result<Database> {
        let mut state = self.state.write().unwrap();
        state.database_create_calls += 1;
        let id = new_id();
        let mut database = MockDatabase {
            url: fake_url(&id),
            id,
            title: title.to_string(),
            properties: BTreeMap::new(),
            records: Vec::new(),
        };
        database.apply(properties)?;
        let snapshot = database.as_database();
        state.databases.push(database);
        Ok(snapshot)
    }

    async fn update_database(
        &self,
        database_id: &str,
        properties: &PropertyMap,
    ) -> Result<Database> {
        let mut state = self.state.write().unwrap();
        let database = state
            .databases
            .iter_mut()
            .find(|db| db.id == database_id)
            .ok_or_else(|| NotionError::NotFound(format!("database {database_id}")))?;
        database.apply(properties)?;
        Ok(database.as_database())
    }

    async fn retrieve_database(&self, database_id: &str) -> Result<Database> {
        let state = self.state.read().unwrap();
        state
            .databases
            .iter()
            .find(|db| db.id == database_id)
            .map(MockDatabase::as_database)
            .ok_or_else(|| NotionError::NotFound(format!("database {database_id}")))
    }

    async fn create_page(
        &self,
        parent: &Parent,
        properties: &ValueMap,
        children: &[Block],
    ) -> Result<Page> {
        let mut state = self.state.write().unwrap();
        state.page_create_calls += 1;
        let id = new_id();
        let url = fake_url(&id);
        match parent {
            Parent::DatabaseId(database_id) => {
                let database = state
                    .databases
                    .iter_mut()
                    .find(|db| db.id == *database_id)
                    .ok_or_else(|| NotionError::NotFound(format!("database {database_id}")))?;
                database.records.push(MockRecord {
                    id: id.clone(),
                    url: url.clone(),
                    values: properties.clone(),
                    children: children.to_vec(),
                });
            }
            Parent::PageId(_) => {
                let title = properties
                    .values()
                    .find_map(PropertyValue::title_text)
                    .unwrap_or_default()
                    .to_string();
                state.pages.push(MockPage {
                    id: id.clone(),
                    url: url.clone(),
                    title,
                    children: children.to_vec(),
                });
            }
        }
        Ok(Page { id, url })
    }

    async fn query_database(&self, database_id: &str, filter: &Filter) -> Result<Vec<Page>> {
        let state = self.state.read().unwrap();
        let database = state
            .databases
            .iter()
            .find(|db| db.id == database_id)
            .ok_or_else(|| NotionError::NotFound(format!("database {database_id}")))?;
        Ok(database
            .records
            .iter()
            .filter(|record| record_matches(record, filter))
            .map(|record| Page {
                id: record.id.clone(),
                url: record.url.clone(),
            })
            .collect())
    }

    async fn append_blocks(&self, block_id: &str, children: &[Block]) -> Result<()> {
        let mut state = self.state.write().unwrap();
        if let Some(page) = state.pages.iter_mut().find(|page| page.id == block_id) {
            page.children.extend_from_slice(children);
            return Ok(());
        }
        for database in state.databases.iter_mut() {
            if let Some(record) = database
                .records
                .iter_mut()
                .find(|record| record.id == block_id)
            {
                record.children.extend_from_slice(children);
                return Ok(());
            }
        }
        Err(NotionError::NotFound(format!("block {block_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notion_types::{Color, RollupFunction, SelectOption};

    fn title_only() -> PropertyMap {
        PropertyMap::from([("Name".to_string(), PropertySpec::Title {})])
    }

    #[tokio::test]
    async fn create_assigns_ids_and_urls() {
        let client = MockNotionClient::new();
        let db = client
            .create_database("root", "Companies", &title_only())
            .await
            .unwrap();

        assert!(!db.id.is_empty());
        assert!(db.url.starts_with("https://www.notion.so/"));
        assert_eq!(db.title_plain(), "Companies");
        assert!(!db.properties["Name"].id.is_empty());
        assert_eq!(client.database_create_calls(), 1);
    }

    #[tokio::test]
    async fn search_matches_on_substring() {
        let client = MockNotionClient::new();
        client
            .create_database("root", "Research Projects", &title_only())
            .await
            .unwrap();

        let hits = client.search_databases("Research").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(client.search_databases("Tasks").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_preserves_existing_property_ids() {
        let client = MockNotionClient::new();
        let db = client
            .create_database("root", "Contacts", &title_only())
            .await
            .unwrap();
        let original_id = db.properties["Name"].id.clone();

        let mut update = title_only();
        update.insert(
            "Status".to_string(),
            PropertySpec::select(vec![SelectOption::new("Target", Color::Gray)]),
        );
        let updated = client.update_database(&db.id, &update).await.unwrap();

        assert_eq!(updated.properties["Name"].id, original_id);
        assert!(!updated.properties["Status"].id.is_empty());
    }

    #[tokio::test]
    async fn rollup_with_unknown_relation_id_is_rejected() {
        let client = MockNotionClient::new();
        let db = client
            .create_database("root", "Companies", &title_only())
            .await
            .unwrap();

        let rollup = PropertyMap::from([(
            "Total Contacts".to_string(),
            PropertySpec::rollup("does-not-exist", "title", RollupFunction::Count),
        )]);
        let result = client.update_database(&db.id, &rollup).await;
        assert!(matches!(result, Err(NotionError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn query_filters_by_title_and_relation() {
        let client = MockNotionClient::new();
        let db = client
            .create_database("root", "Tasks", &title_only())
            .await
            .unwrap();

        let mut values = ValueMap::new();
        values.insert("Name".to_string(), PropertyValue::title("Send email"));
        values.insert("Interview".to_string(), PropertyValue::relation("page-9"));
        client
            .create_page(&Parent::DatabaseId(db.id.clone()), &values, &[])
            .await
            .unwrap();

        let both = Filter::and(vec![
            Filter::title_equals("Name", "Send email"),
            Filter::relation_contains("Interview", "page-9"),
        ]);
        assert_eq!(client.query_database(&db.id, &both).await.unwrap().len(), 1);

        let wrong_relation = Filter::relation_contains("Interview", "other");
        assert!(client
            .query_database(&db.id, &wrong_relation)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn append_blocks_to_record() {
        let client = MockNotionClient::new();
        let db = client
            .create_database("root", "Interviews", &title_only())
            .await
            .unwrap();
        let mut values = ValueMap::new();
        values.insert("Name".to_string(), PropertyValue::title("Deep Dive"));
        let page = client
            .create_page(&Parent::DatabaseId(db.id.clone()), &values, &[])
            .await
            .unwrap();

        client
            .append_blocks(&page.id, &[Block::heading_2("Notes")])
            .await
            .unwrap();
        assert!(matches!(
            client.append_blocks("missing", &[]).await,
            Err(NotionError::NotFound(_))
        ));
    }
}
