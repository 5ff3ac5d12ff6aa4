use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::store::Record;

/// A technology stack entry. Logo lives in the store as an attachment list
/// but is exposed everywhere as the first attachment's URL.
#[derive(Debug, Clone)]
pub struct Stack {
    pub id: String,
    pub name: String,
    pub logo: String,
}

impl From<Record> for Stack {
    fn from(record: Record) -> Self {
        Self {
            name: record.str_field("Name"),
            logo: record.first_attachment_url("Logo"),
            id: record.id,
        }
    }
}

impl Stack {
    /// Placeholder for a reference whose record no longer exists
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: "Unknown stack".to_string(),
            logo: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StackInput {
    pub name: String,
    pub logo: Option<String>,
}

impl StackInput {
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("Name".to_string(), json!(self.name));
        if let Some(logo) = &self.logo {
            fields.insert("Logo".to_string(), json!([{ "url": logo }]));
        }
        fields
    }
}
