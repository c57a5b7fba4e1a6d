//! Content blocks for page bodies.
//!
//! The API envelope for a block repeats the type tag as a key, e.g.
//! `{"type": "to_do", "to_do": {"rich_text": [...], "checked": false}}`,
//! so `Block` carries a hand-written `Serialize` instead of a derive.
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::RichText;

/// A single content block. Toggles nest child blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading1 { rich_text: Vec<RichText> },
    Heading2 { rich_text: Vec<RichText> },
    Paragraph { rich_text: Vec<RichText> },
    BulletedListItem { rich_text: Vec<RichText> },
    ToDo { rich_text: Vec<RichText>, checked: bool },
    Toggle { rich_text: Vec<RichText>, children: Vec<Block> },
    Callout { rich_text: Vec<RichText>, icon: Icon },
}

impl Block {
    pub fn heading_1(text: impl Into<String>) -> Self {
        Block::Heading1 {
            rich_text: vec![RichText::text(text)],
        }
    }

    pub fn heading_2(text: impl Into<String>) -> Self {
        Block::Heading2 {
            rich_text: vec![RichText::text(text)],
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            rich_text: vec![RichText::text(text)],
        }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Block::BulletedListItem {
            rich_text: vec![RichText::text(text)],
        }
    }

    pub fn todo(text: impl Into<String>, checked: bool) -> Self {
        Block::ToDo {
            rich_text: vec![RichText::text(text)],
            checked,
        }
    }

    pub fn toggle(text: impl Into<String>, children: Vec<Block>) -> Self {
        Block::Toggle {
            rich_text: vec![RichText::text(text)],
            children,
        }
    }

    pub fn callout(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Block::Callout {
            rich_text: vec![RichText::text(text)],
            icon: Icon {
                emoji: emoji.into(),
            },
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::ToDo { .. } => "to_do",
            Block::Toggle { .. } => "toggle",
            Block::Callout { .. } => "callout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Icon {
    pub emoji: String,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct TextBody<'a> {
            rich_text: &'a [RichText],
        }

        #[derive(serde::Serialize)]
        struct ToDoBody<'a> {
            rich_text: &'a [RichText],
            checked: bool,
        }

        #[derive(serde::Serialize)]
        struct ToggleBody<'a> {
            rich_text: &'a [RichText],
            children: &'a [Block],
        }

        #[derive(serde::Serialize)]
        struct CalloutBody<'a> {
            rich_text: &'a [RichText],
            icon: &'a Icon,
        }

        let tag = self.tag();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", tag)?;
        match self {
            Block::Heading1 { rich_text }
            | Block::Heading2 { rich_text }
            | Block::Paragraph { rich_text }
            | Block::BulletedListItem { rich_text } => {
                map.serialize_entry(tag, &TextBody { rich_text })?;
            }
            Block::ToDo { rich_text, checked } => {
                map.serialize_entry(
                    tag,
                    &ToDoBody {
                        rich_text,
                        checked: *checked,
                    },
                )?;
            }
            Block::Toggle {
                rich_text,
                children,
            } => {
                map.serialize_entry(
                    tag,
                    &ToggleBody {
                        rich_text,
                        children,
                    },
                )?;
            }
            Block::Callout { rich_text, icon } => {
                map.serialize_entry(tag, &CalloutBody { rich_text, icon })?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heading_serializes_with_type_envelope() {
        let block = Block::heading_2("Pre-Interview Checklist");
        assert_eq!(
            serde_json::to_value(block).unwrap(),
            json!({
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [{ "type": "text", "text": { "content": "Pre-Interview Checklist" } }]
                }
            })
        );
    }

    #[test]
    fn todo_carries_checked_flag() {
        let block = Block::todo("Draft follow-up email template", false);
        let value = serde_json::to_value(block).unwrap();
        assert_eq!(value["type"], "to_do");
        assert_eq!(value["to_do"]["checked"], false);
    }

    #[test]
    fn toggle_nests_children() {
        let block = Block::toggle("Opening (5 minutes)", vec![Block::bullet("Introductions")]);
        let value = serde_json::to_value(block).unwrap();
        assert_eq!(value["toggle"]["children"][0]["type"], "bulleted_list_item");
    }

    #[test]
    fn callout_carries_emoji_icon() {
        let block = Block::callout("Record key insights here.", "💡");
        let value = serde_json::to_value(block).unwrap();
        assert_eq!(value["callout"]["icon"]["emoji"], "💡");
    }
}
