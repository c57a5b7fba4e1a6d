//! Normalized API response shapes.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value::RichText;

/// A database as returned by create, update, retrieve and search calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDescriptor>,
}

impl Database {
    /// Plain text of the first title segment. Used for the exact-match
    /// idempotency lookup.
    pub fn title_plain(&self) -> &str {
        self.title.first().map(RichText::plain).unwrap_or_default()
    }

    /// Property name to server-assigned property id.
    pub fn property_ids(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .map(|(name, descriptor)| (name.clone(), descriptor.id.clone()))
            .collect()
    }
}

/// Live state of a single property on a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationDescriptor>,
}

/// Relation configuration as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    #[serde(default)]
    pub database_id: String,
}

/// A page as returned by create and query calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub url: String,
}

/// A page search result, with its title already extracted for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHit {
    pub id: String,
    pub url: String,
    pub title: String,
}
