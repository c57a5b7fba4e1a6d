//! The persisted workspace identifier map.
//!
//! Provisioning writes this file wholesale after every full run;
//! seeding reads it at startup. The JSON shape is the data contract:
//! `{"databases": {name: {id, url, properties}}, "pages": {name: {id, url}}}`.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::object::{Database, Page};

/// Identifiers produced by a full provisioning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceIds {
    pub databases: BTreeMap<String, DatabaseInfo>,
    pub pages: BTreeMap<String, PageInfo>,
}

impl WorkspaceIds {
    pub fn insert_database(&mut self, name: impl Into<String>, info: DatabaseInfo) {
        self.databases.insert(name.into(), info);
    }

    pub fn insert_page(&mut self, name: impl Into<String>, info: PageInfo) {
        self.pages.insert(name.into(), info);
    }

    pub fn database(&self, name: &str) -> Option<&DatabaseInfo> {
        self.databases.get(name)
    }
}

/// Cached identifiers for one database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub id: String,
    pub url: String,
    pub properties: BTreeMap<String, String>,
}

impl From<&Database> for DatabaseInfo {
    fn from(database: &Database) -> Self {
        Self {
            id: database.id.clone(),
            url: database.url.clone(),
            properties: database.property_ids(),
        }
    }
}

/// Cached identifiers for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub id: String,
    pub url: String,
}

impl From<&Page> for PageInfo {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            url: page.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip_preserves_structure() {
        let mut ids = WorkspaceIds::default();
        ids.insert_database(
            "Companies",
            DatabaseInfo {
                id: "db-1".to_string(),
                url: "https://www.notion.so/db1".to_string(),
                properties: BTreeMap::from([("Company Name".to_string(), "title".to_string())]),
            },
        );
        ids.insert_page(
            "Research Dashboard",
            PageInfo {
                id: "page-1".to_string(),
                url: "https://www.notion.so/page1".to_string(),
            },
        );

        let json = serde_json::to_string_pretty(&ids).unwrap();
        let restored: WorkspaceIds = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ids);
    }

    #[test]
    fn json_shape_matches_contract() {
        let mut ids = WorkspaceIds::default();
        ids.insert_database("Contacts", DatabaseInfo::default());

        let value = serde_json::to_value(&ids).unwrap();
        assert!(value["databases"]["Contacts"].get("id").is_some());
        assert!(value["databases"]["Contacts"].get("properties").is_some());
        assert!(value.get("pages").is_some());
    }
}
