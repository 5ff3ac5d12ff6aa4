use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::models::{Stack, Student};
use crate::store::Record;

/// A portfolio project as stored in the external store's Projects table.
/// Slug and likes are owned by the store: the slug is assigned on creation
/// and likes are only ever written through the like endpoint.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub published: bool,
    pub likes: u64,
    pub slug: String,
    /// Referenced stack record ids (may dangle after a stack is deleted)
    pub stacks: Vec<String>,
    /// Referenced student record ids (same dangling behavior)
    pub authors: Vec<String>,
    /// Asset URLs, unwrapped from the store's attachment shape
    pub assets: Vec<String>,
}

impl From<Record> for Project {
    fn from(record: Record) -> Self {
        Self {
            name: record.str_field("Name"),
            description: record.str_field("Description"),
            published: record.bool_field("Published"),
            likes: record.u64_field("Likes"),
            slug: record.str_field("Slug"),
            stacks: record.id_list("Stacks"),
            authors: record.id_list("Authors"),
            assets: record.attachment_urls("Assets"),
            id: record.id,
        }
    }
}

/// A project with its stack and author references resolved
#[derive(Debug, Clone)]
pub struct ProjectDetail {
    pub project: Project,
    pub stacks: Vec<Stack>,
    pub authors: Vec<Student>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub published: bool,
    pub stacks: Vec<String>,
    pub authors: Vec<String>,
    pub assets: Vec<String>,
}

impl CreateProject {
    /// Field map sent to the store on creation. Slug and Likes are never
    /// included; the store assigns both.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("Name".to_string(), json!(self.name));
        fields.insert(
            "Description".to_string(),
            json!(self.description.clone().unwrap_or_default()),
        );
        fields.insert("Published".to_string(), json!(self.published));

        if !self.stacks.is_empty() {
            fields.insert("Stacks".to_string(), json!(self.stacks));
        }
        if !self.authors.is_empty() {
            fields.insert("Authors".to_string(), json!(self.authors));
        }
        if !self.assets.is_empty() {
            fields.insert("Assets".to_string(), attachment_list(&self.assets));
        }

        fields
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub description: Option<String>,
    pub published: bool,
    /// None leaves the field untouched in the store
    pub stacks: Option<Vec<String>>,
    pub authors: Option<Vec<String>>,
    pub assets: Option<Vec<String>>,
}

impl UpdateProject {
    /// Field map sent to the store on update. Likes is deliberately never
    /// part of the payload so concurrent like writes are not overwritten.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("Name".to_string(), json!(self.name));
        fields.insert(
            "Description".to_string(),
            json!(self.description.clone().unwrap_or_default()),
        );
        fields.insert("Published".to_string(), json!(self.published));

        if let Some(stacks) = &self.stacks {
            fields.insert("Stacks".to_string(), json!(stacks));
        }
        if let Some(authors) = &self.authors {
            fields.insert("Authors".to_string(), json!(authors));
        }
        if let Some(assets) = &self.assets {
            fields.insert("Assets".to_string(), attachment_list(assets));
        }

        fields
    }
}

/// Wrap bare URLs in the store's attachment shape
pub fn attachment_list(urls: &[String]) -> Value {
    json!(urls.iter().map(|url| json!({ "url": url })).collect::<Vec<_>>())
}
