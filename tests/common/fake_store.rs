//! In-memory stand-in for the hosted store, exposing the same REST surface
//! the application client talks to. Formula handling covers exactly the
//! shapes the application emits.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: String,
    pub fields: Map<String, Value>,
}

#[derive(Clone, Default)]
pub struct FakeStore {
    tables: Arc<Mutex<HashMap<String, Vec<StoredRecord>>>>,
    next_id: Arc<AtomicUsize>,
}

impl FakeStore {
    /// Seed one record, assigning an id (and a slug for Projects, which the
    /// real store computes on creation)
    pub fn insert(&self, table: &str, mut fields: Map<String, Value>) -> String {
        let id = format!("rec{:06}", self.next_id.fetch_add(1, Ordering::SeqCst));

        if table == "Projects" && !fields.contains_key("Slug") {
            let name = fields
                .get("Name")
                .and_then(Value::as_str)
                .unwrap_or_default();
            fields.insert("Slug".to_string(), json!(slugify(name)));
        }

        let mut tables = self.tables.lock().unwrap();
        tables.entry(table.to_string()).or_default().push(StoredRecord {
            id: id.clone(),
            fields,
        });

        id
    }

    /// Direct read for assertions
    pub fn record(&self, table: &str, id: &str) -> Option<StoredRecord> {
        let tables = self.tables.lock().unwrap();
        tables
            .get(table)
            .and_then(|records| records.iter().find(|r| r.id == id))
            .cloned()
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/{base}/{table}", get(list_records).post(create_records))
            .route(
                "/{base}/{table}/{record}",
                get(get_record).patch(patch_record).delete(delete_record),
            )
            .with_state(self)
    }
}

/// Spawn the fake store on an OS-assigned port and return its base URL
pub async fn spawn() -> (FakeStore, String) {
    let store = FakeStore::default();
    let router = store.clone().router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake store");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake store stopped");
    });

    (store, format!("http://{}", addr))
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "NOT_FOUND" }))).into_response()
}

fn record_json(record: &StoredRecord) -> Value {
    json!({ "id": record.id, "fields": record.fields })
}

/// Evaluate the filter formulas the application actually sends:
/// published-only, published + substring search, slug lookup, email lookup.
fn formula_matches(formula: &str, record: &StoredRecord) -> bool {
    let str_field = |name: &str| {
        record
            .fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let published = record
        .fields
        .get("Published")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if formula == "Published = TRUE()" {
        return published;
    }

    if let Some(rest) = formula.strip_prefix("Slug = \"") {
        return rest.strip_suffix('"') == Some(str_field("Slug").as_str());
    }

    if let Some(rest) = formula.strip_prefix("Email = \"") {
        return rest.strip_suffix('"') == Some(str_field("Email").as_str());
    }

    // AND(Published = TRUE(), OR(FIND(LOWER("term"), ...), ...))
    if let Some(rest) = formula.strip_prefix(r#"AND(Published = TRUE(), OR(FIND(LOWER(""#) {
        let term = rest.split('"').next().unwrap_or_default().to_lowercase();
        let name = str_field("Name").to_lowercase();
        let description = str_field("Description").to_lowercase();
        return published && (name.contains(&term) || description.contains(&term));
    }

    false
}

async fn list_records(
    State(store): State<FakeStore>,
    Path((_base, table)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let tables = store.tables.lock().unwrap();
    let records = tables.get(&table).cloned().unwrap_or_default();

    let mut matched: Vec<&StoredRecord> = match params.get("filterByFormula") {
        Some(formula) => records
            .iter()
            .filter(|r| formula_matches(formula, r))
            .collect(),
        None => records.iter().collect(),
    };

    if let Some(max) = params.get("maxRecords").and_then(|m| m.parse::<usize>().ok()) {
        matched.truncate(max);
    }

    Json(json!({ "records": matched.iter().map(|r| record_json(r)).collect::<Vec<_>>() }))
}

async fn get_record(
    State(store): State<FakeStore>,
    Path((_base, table, record)): Path<(String, String, String)>,
) -> Response {
    match store.record(&table, &record) {
        Some(found) => Json(record_json(&found)).into_response(),
        None => not_found(),
    }
}

async fn create_records(
    State(store): State<FakeStore>,
    Path((_base, table)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let incoming = body["records"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let created: Vec<Value> = incoming
        .into_iter()
        .map(|entry| {
            let fields = entry["fields"].as_object().cloned().unwrap_or_default();
            let id = store.insert(&table, fields);
            let stored = store.record(&table, &id).unwrap();
            record_json(&stored)
        })
        .collect();

    Json(json!({ "records": created }))
}

async fn patch_record(
    State(store): State<FakeStore>,
    Path((_base, table, record)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let incoming = body["fields"].as_object().cloned().unwrap_or_default();

    let mut tables = store.tables.lock().unwrap();
    let Some(found) = tables
        .get_mut(&table)
        .and_then(|records| records.iter_mut().find(|r| r.id == record))
    else {
        return not_found();
    };

    for (key, value) in incoming {
        found.fields.insert(key, value);
    }

    Json(record_json(found)).into_response()
}

async fn delete_record(
    State(store): State<FakeStore>,
    Path((_base, table, record)): Path<(String, String, String)>,
) -> Response {
    let mut tables = store.tables.lock().unwrap();
    let Some(records) = tables.get_mut(&table) else {
        return not_found();
    };

    let before = records.len();
    records.retain(|r| r.id != record);

    if records.len() == before {
        return not_found();
    }

    Json(json!({ "deleted": true, "id": record })).into_response()
}
