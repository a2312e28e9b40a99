//! Notion API request and response models.
//!
//! Pages are decoded through the typed [`PropertyValue`] enum; request
//! bodies are built as JSON values since their shape varies per property.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::models::{MappedStatus, NewRecord, Record, RecordUpdate, Tag};

/// Property names used in the records and tags databases.
pub mod properties {
    pub const TITLE: &str = "Title";
    pub const JIRA_ID: &str = "Jira Id";
    pub const STATUS: &str = "Status";
    pub const SPRINT: &str = "Sprint";
    pub const TAGS: &str = "Tags";
    /// Title property of the tags database.
    pub const TAG_NAME: &str = "Name";
}

/// Database query filter.
///
/// Covers what the sync needs: equality on a single property and the AND
/// of several filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionFilter {
    SelectEquals { property: String, value: String },
    RichTextEquals { property: String, value: String },
    TitleEquals { property: String, value: String },
    And(Vec<NotionFilter>),
}

impl NotionFilter {
    pub fn select(property: &str, value: &str) -> Self {
        Self::SelectEquals {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub fn rich_text(property: &str, value: &str) -> Self {
        Self::RichTextEquals {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub fn title(property: &str, value: &str) -> Self {
        Self::TitleEquals {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::SelectEquals { property, value } => {
                json!({ "property": property, "select": { "equals": value } })
            }
            Self::RichTextEquals { property, value } => {
                json!({ "property": property, "rich_text": { "equals": value } })
            }
            Self::TitleEquals { property, value } => {
                json!({ "property": property, "title": { "equals": value } })
            }
            Self::And(filters) => {
                json!({ "and": filters.iter().map(Self::to_json).collect::<Vec<_>>() })
            }
        }
    }
}

/// Response of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionQueryResponse {
    #[serde(default)]
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
}

/// A Notion page.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A page property value, tagged by its `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    Relation {
        #[serde(default)]
        relation: Vec<RelationRef>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub text: Option<TextContent>,
    #[serde(default)]
    pub plain_text: Option<String>,
}

impl RichText {
    fn content(&self) -> Option<&str> {
        self.text
            .as_ref()
            .map(|text| text.content.as_str())
            .or(self.plain_text.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

impl NotionPage {
    /// Content of the first text segment of a title or rich-text property.
    pub fn text(&self, property: &str) -> Option<&str> {
        let segments = match self.properties.get(property)? {
            PropertyValue::Title { title } => title,
            PropertyValue::RichText { rich_text } => rich_text,
            _ => return None,
        };
        segments.first().and_then(RichText::content)
    }

    pub fn select(&self, property: &str) -> Option<&str> {
        match self.properties.get(property)? {
            PropertyValue::Select { select } => select.as_ref().map(|s| s.name.as_str()),
            _ => None,
        }
    }

    pub fn relation_ids(&self, property: &str) -> Vec<String> {
        match self.properties.get(property) {
            Some(PropertyValue::Relation { relation }) => {
                relation.iter().map(|r| r.id.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Convert a records-database page into a [`Record`].
    ///
    /// Returns `None` for pages without a ticket id.
    pub fn into_record(self) -> Option<Record> {
        let ticket_id = self.text(properties::JIRA_ID)?.to_string();
        Some(Record {
            title: self.text(properties::TITLE).unwrap_or_default().to_string(),
            status: MappedStatus::parse(self.select(properties::STATUS).unwrap_or_default()),
            sprint: self.select(properties::SPRINT).unwrap_or_default().to_string(),
            tag_ids: self.relation_ids(properties::TAGS),
            ticket_id,
            id: self.id,
        })
    }

    /// Convert a tags-database page into a [`Tag`].
    pub fn into_tag(self) -> Tag {
        Tag {
            name: self.text(properties::TAG_NAME).unwrap_or_default().to_string(),
            id: self.id,
        }
    }
}

/// Body of a `POST /databases/{id}/query` request.
pub fn query_body(filter: &NotionFilter) -> Value {
    json!({ "filter": filter.to_json() })
}

fn relation(ids: &[String]) -> Value {
    json!({ "relation": ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>() })
}

/// Body of a `POST /pages` request creating a record.
pub fn create_record_body(database_id: &str, record: &NewRecord) -> Value {
    let mut props = json!({
        properties::TITLE: { "title": [{ "text": { "content": record.title } }] },
        properties::JIRA_ID: {
            "rich_text": [{
                "text": { "content": record.ticket_id, "link": { "url": record.url } }
            }]
        },
        properties::STATUS: { "select": { "name": record.status.ranked() } },
        properties::SPRINT: { "select": { "name": record.sprint } },
    });
    if let Some(tag_id) = &record.tag_id {
        props[properties::TAGS] = relation(std::slice::from_ref(tag_id));
    }

    json!({
        "parent": { "database_id": database_id },
        "properties": props,
    })
}

/// Body of a `PATCH /pages/{id}` request updating a record.
pub fn update_record_body(update: &RecordUpdate) -> Value {
    let mut props = json!({
        properties::STATUS: { "select": { "name": update.status.ranked() } },
    });
    if let Some(tag_ids) = &update.tag_ids {
        props[properties::TAGS] = relation(tag_ids);
    }
    json!({ "properties": props })
}

/// Body of a `POST /pages` request creating a tag.
pub fn create_tag_body(tags_database_id: &str, name: &str) -> Value {
    json!({
        "parent": { "database_id": tags_database_id },
        "properties": {
            properties::TAG_NAME: { "title": [{ "text": { "content": name } }] }
        },
    })
}
