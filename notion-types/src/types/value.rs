//! Property values and rich text, as sent when creating records.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map of property name to value, as sent on page create calls.
pub type ValueMap = BTreeMap<String, PropertyValue>;

/// A value for a single page property.
///
/// Externally tagged, matching the API shape, e.g.
/// `{"select": {"name": "Active"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Select(SelectValue),
    MultiSelect(Vec<SelectValue>),
    Date(DateValue),
    Number(f64),
    Url(String),
    Relation(Vec<RelationRef>),
}

impl PropertyValue {
    pub fn title(content: impl Into<String>) -> Self {
        PropertyValue::Title(vec![RichText::text(content)])
    }

    pub fn rich_text(content: impl Into<String>) -> Self {
        PropertyValue::RichText(vec![RichText::text(content)])
    }

    pub fn select(name: impl Into<String>) -> Self {
        PropertyValue::Select(SelectValue { name: name.into() })
    }

    pub fn multi_select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValue::MultiSelect(
            names
                .into_iter()
                .map(|name| SelectValue { name: name.into() })
                .collect(),
        )
    }

    pub fn date(start: impl Into<String>) -> Self {
        PropertyValue::Date(DateValue {
            start: start.into(),
            end: None,
        })
    }

    pub fn date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        PropertyValue::Date(DateValue {
            start: start.into(),
            end: Some(end.into()),
        })
    }

    pub fn number(value: f64) -> Self {
        PropertyValue::Number(value)
    }

    pub fn url(value: impl Into<String>) -> Self {
        PropertyValue::Url(value.into())
    }

    pub fn relation(id: impl Into<String>) -> Self {
        PropertyValue::Relation(vec![RelationRef { id: id.into() }])
    }

    /// Plain text of the first title segment, if this is a title value.
    pub fn title_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Title(segments) => segments.first().map(RichText::plain),
            _ => None,
        }
    }

    /// Referenced page ids, if this is a relation value.
    pub fn relation_ids(&self) -> Option<&[RelationRef]> {
        match self {
            PropertyValue::Relation(refs) => Some(refs),
            _ => None,
        }
    }
}

/// One segment of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: TextContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl RichText {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: TextContent {
                content: content.into(),
            },
            plain_text: None,
        }
    }

    /// The rendered text of this segment. Responses carry `plain_text`;
    /// locally built segments fall back to the raw content.
    pub fn plain(&self) -> &str {
        self.plain_text.as_deref().unwrap_or(&self.text.content)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectValue {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_value_serializes_rich_text() {
        let value = PropertyValue::title("Companies");
        assert_eq!(
            serde_json::to_value(value).unwrap(),
            json!({ "title": [{ "type": "text", "text": { "content": "Companies" } }] })
        );
    }

    #[test]
    fn select_and_relation_values() {
        assert_eq!(
            serde_json::to_value(PropertyValue::select("Active")).unwrap(),
            json!({ "select": { "name": "Active" } })
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::relation("page-1")).unwrap(),
            json!({ "relation": [{ "id": "page-1" }] })
        );
    }

    #[test]
    fn date_range_includes_end() {
        assert_eq!(
            serde_json::to_value(PropertyValue::date_range("2025-01-01", "2026-12-31")).unwrap(),
            json!({ "date": { "start": "2025-01-01", "end": "2026-12-31" } })
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::date("2025-08-10")).unwrap(),
            json!({ "date": { "start": "2025-08-10" } })
        );
    }

    #[test]
    fn title_text_reads_first_segment() {
        let value = PropertyValue::title("Send thank-you email");
        assert_eq!(value.title_text(), Some("Send thank-you email"));
        assert_eq!(PropertyValue::number(25.0).title_text(), None);
    }
}
