use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::store::Record;

#[derive(Debug, Clone)]
pub struct Student {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub class: String,
}

impl From<Record> for Student {
    fn from(record: Record) -> Self {
        Self {
            firstname: record.str_field("Firstname"),
            lastname: record.str_field("Lastname"),
            email: record.str_field("Email"),
            class: record.str_field("Class"),
            id: record.id,
        }
    }
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Placeholder for an author reference whose record no longer exists
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            firstname: "Unknown".to_string(),
            lastname: "author".to_string(),
            email: String::new(),
            class: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StudentInput {
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub class: Option<String>,
}

impl StudentInput {
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("Firstname".to_string(), json!(self.firstname));
        fields.insert("Lastname".to_string(), json!(self.lastname));
        fields.insert(
            "Email".to_string(),
            json!(self.email.clone().unwrap_or_default()),
        );
        fields.insert(
            "Class".to_string(),
            json!(self.class.clone().unwrap_or_default()),
        );
        fields
    }
}
