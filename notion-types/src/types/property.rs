//! Typed database property specifications.
//!
//! Each variant carries only the configuration valid for its field kind,
//! so a relation can never be built with rollup options or vice versa.
//! The enum is externally tagged, which makes serde emit exactly the
//! shape the API expects, e.g. `{"select": {"options": [...]}}`.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map of property name to specification, as sent on database create
/// and update calls.
pub type PropertyMap = BTreeMap<String, PropertySpec>;

/// Specification for a single database property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertySpec {
    Title {},
    RichText {},
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Date {},
    Url {},
    Number {},
    People {},
    Files {},
    CreatedTime {},
    Relation(RelationSpec),
    Rollup(RollupSpec),
    Formula { expression: String },
}

impl PropertySpec {
    /// The API type tag for this specification.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertySpec::Title {} => "title",
            PropertySpec::RichText {} => "rich_text",
            PropertySpec::Select { .. } => "select",
            PropertySpec::MultiSelect { .. } => "multi_select",
            PropertySpec::Date {} => "date",
            PropertySpec::Url {} => "url",
            PropertySpec::Number {} => "number",
            PropertySpec::People {} => "people",
            PropertySpec::Files {} => "files",
            PropertySpec::CreatedTime {} => "created_time",
            PropertySpec::Relation(_) => "relation",
            PropertySpec::Rollup(_) => "rollup",
            PropertySpec::Formula { .. } => "formula",
        }
    }

    /// A single-sided relation to the given database.
    pub fn relation(database_id: impl Into<String>) -> Self {
        PropertySpec::Relation(RelationSpec {
            database_id: database_id.into(),
            kind: RelationKind::SingleProperty {},
        })
    }

    /// A dual relation to the given database. The server creates a
    /// mirrored property on the target.
    pub fn dual_relation(database_id: impl Into<String>) -> Self {
        PropertySpec::Relation(RelationSpec {
            database_id: database_id.into(),
            kind: RelationKind::DualProperty {},
        })
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        PropertySpec::Select { options }
    }

    pub fn multi_select(options: Vec<SelectOption>) -> Self {
        PropertySpec::MultiSelect { options }
    }

    pub fn rollup(
        relation_property_id: impl Into<String>,
        rollup_property_id: impl Into<String>,
        function: RollupFunction,
    ) -> Self {
        PropertySpec::Rollup(RollupSpec {
            relation_property_id: relation_property_id.into(),
            rollup_property_id: rollup_property_id.into(),
            function,
        })
    }

    pub fn formula(expression: impl Into<String>) -> Self {
        PropertySpec::Formula {
            expression: expression.into(),
        }
    }
}

/// Configuration of a relation property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationSpec {
    pub database_id: String,
    #[serde(flatten)]
    pub kind: RelationKind,
}

/// Whether a relation is single-sided or mirrored on the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    SingleProperty {},
    DualProperty {},
}

/// Configuration of a rollup property.
///
/// `relation_property_id` is the server-assigned id of the relation
/// property the rollup aggregates over. It only exists after the
/// relation has been created and fetched back, which is why rollups are
/// attached in a separate pass during provisioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupSpec {
    pub relation_property_id: String,
    pub rollup_property_id: String,
    pub function: RollupFunction,
}

/// Aggregation function applied by a rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupFunction {
    Count,
    Sum,
}

/// A select / multi-select option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    pub color: Color,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The API's select option color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_serializes_with_empty_config() {
        let value = serde_json::to_value(PropertySpec::Title {}).unwrap();
        assert_eq!(value, json!({ "title": {} }));
    }

    #[test]
    fn select_serializes_options() {
        let spec = PropertySpec::select(vec![SelectOption::new("Active", Color::Yellow)]);
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({ "select": { "options": [{ "name": "Active", "color": "yellow" }] } })
        );
    }

    #[test]
    fn relation_flattens_kind() {
        let spec = PropertySpec::relation("db-1");
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({ "relation": { "database_id": "db-1", "single_property": {} } })
        );

        let dual = PropertySpec::dual_relation("db-2");
        assert_eq!(
            serde_json::to_value(dual).unwrap(),
            json!({ "relation": { "database_id": "db-2", "dual_property": {} } })
        );
    }

    #[test]
    fn rollup_serializes_function_tag() {
        let spec = PropertySpec::rollup("rel-id", "title", RollupFunction::Count);
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({
                "rollup": {
                    "relation_property_id": "rel-id",
                    "rollup_property_id": "title",
                    "function": "count"
                }
            })
        );
    }

    #[test]
    fn formula_serializes_expression() {
        let spec = PropertySpec::formula("if(prop(\"Status\") == \"Completed\", 1, 0)");
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({ "formula": { "expression": "if(prop(\"Status\") == \"Completed\", 1, 0)" } })
        );
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let spec = PropertySpec::multi_select(vec![]);
        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get(spec.kind()).is_some());
    }
}
