use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row in the external store: an opaque identifier plus a field bag.
/// Typed entity structs are produced from this at the boundary, in `models`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// List envelope returned by the store for table reads and batch writes
#[derive(Debug, Deserialize)]
pub struct RecordList {
    pub records: Vec<Record>,
}

/// Attachment shape used by the store for file/url fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
}

impl Record {
    /// String field, empty when absent or of another type
    pub fn str_field(&self, name: &str) -> String {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Checkbox field, false when absent
    pub fn bool_field(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Numeric field, 0 when absent
    pub fn u64_field(&self, name: &str) -> u64 {
        self.fields
            .get(name)
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    /// Linked-record field: list of referenced record ids
    pub fn id_list(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attachment field: list of attachment URLs
    pub fn attachment_urls(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|files| {
                files
                    .iter()
                    .filter_map(|file| file.get("url").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First attachment URL, or "" when the field is empty
    pub fn first_attachment_url(&self, name: &str) -> String {
        self.attachment_urls(name).into_iter().next().unwrap_or_default()
    }
}

/// Quote a string for use inside a store filter formula.
/// Only embedded double quotes need escaping in the formula grammar.
pub fn quote_formula_str(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> Record {
        serde_json::from_value(json!({ "id": "rec001", "fields": fields })).unwrap()
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let r = record(json!({}));
        assert_eq!(r.str_field("Name"), "");
        assert!(!r.bool_field("Published"));
        assert_eq!(r.u64_field("Likes"), 0);
        assert!(r.id_list("Stacks").is_empty());
        assert_eq!(r.first_attachment_url("Logo"), "");
    }

    #[test]
    fn attachment_urls_are_extracted() {
        let r = record(json!({
            "Assets": [{ "url": "https://cdn.example.com/a.png", "size": 12 }]
        }));
        assert_eq!(r.attachment_urls("Assets"), vec!["https://cdn.example.com/a.png"]);
    }

    #[test]
    fn formula_quoting_escapes_embedded_quotes() {
        assert_eq!(quote_formula_str(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
