//! Query filters for database record lookups.
//!
//! Only the clauses the seeding idempotency check needs are modeled:
//! title equality, relation containment, and conjunction.
use serde::{Deserialize, Serialize};

/// A database query filter.
///
/// Untagged so each variant serializes to its API shape directly:
/// `{"and": [...]}`, `{"property": ..., "title": {"equals": ...}}`,
/// `{"property": ..., "relation": {"contains": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    And {
        and: Vec<Filter>,
    },
    Title {
        property: String,
        title: TextCondition,
    },
    Relation {
        property: String,
        relation: RelationCondition,
    },
}

impl Filter {
    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And { and: filters }
    }

    pub fn title_equals(property: impl Into<String>, equals: impl Into<String>) -> Self {
        Filter::Title {
            property: property.into(),
            title: TextCondition {
                equals: equals.into(),
            },
        }
    }

    pub fn relation_contains(property: impl Into<String>, contains: impl Into<String>) -> Self {
        Filter::Relation {
            property: property.into(),
            relation: RelationCondition {
                contains: contains.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCondition {
    pub equals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationCondition {
    pub contains: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_filter_shape() {
        let filter = Filter::title_equals("Task", "Send thank-you email");
        assert_eq!(
            serde_json::to_value(filter).unwrap(),
            json!({ "property": "Task", "title": { "equals": "Send thank-you email" } })
        );
    }

    #[test]
    fn and_filter_nests_clauses() {
        let filter = Filter::and(vec![
            Filter::title_equals("Task", "Schedule follow-up"),
            Filter::relation_contains("Interview", "page-1"),
        ]);
        assert_eq!(
            serde_json::to_value(filter).unwrap(),
            json!({
                "and": [
                    { "property": "Task", "title": { "equals": "Schedule follow-up" } },
                    { "property": "Interview", "relation": { "contains": "page-1" } }
                ]
            })
        );
    }
}
