pub mod record;

pub use record::{quote_formula_str, Attachment, Record, RecordList};

use reqwest::StatusCode;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Table names in the external store
pub const PROJECTS: &str = "Projects";
pub const STACKS: &str = "Stacks";
pub const STUDENTS: &str = "Students";
pub const ADMINS: &str = "Admins";

/// Query options for table reads
#[derive(Debug, Default)]
pub struct ListQuery {
    pub filter_by_formula: Option<String>,
    pub max_records: Option<u32>,
}

impl ListQuery {
    pub fn filtered(formula: impl Into<String>) -> Self {
        Self {
            filter_by_formula: Some(formula.into()),
            ..Self::default()
        }
    }

    pub fn with_max(mut self, max: u32) -> Self {
        self.max_records = Some(max);
        self
    }
}

/// Thin HTTP client for the external store. Every call is single-attempt
/// and authenticated with a static bearer credential; any non-success
/// response propagates as `AppError::Upstream`.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!(
                "{}/{}",
                config.store_api_base.trim_end_matches('/'),
                config.store_base_id
            ),
            api_key: config.store_api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    fn record_url(&self, table: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, table, id)
    }

    /// List records, optionally filtered by a formula string
    pub async fn list(&self, table: &str, query: &ListQuery) -> AppResult<Vec<Record>> {
        let mut request = self.http.get(self.table_url(table)).bearer_auth(&self.api_key);

        if let Some(formula) = &query.filter_by_formula {
            request = request.query(&[("filterByFormula", formula.as_str())]);
        }
        if let Some(max) = query.max_records {
            request = request.query(&[("maxRecords", max.to_string())]);
        }

        let response = request.send().await?;
        let response = check_status(table, response)?;
        let body: RecordList = response.json().await?;

        Ok(body.records)
    }

    /// Fetch one record by id; 404 from the store maps to NotFound
    pub async fn get(&self, table: &str, id: &str) -> AppResult<Record> {
        let response = self
            .http
            .get(self.record_url(table, id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("{} record", table)));
        }

        let response = check_status(table, response)?;
        Ok(response.json().await?)
    }

    /// Create one record; the store assigns the id (and any computed fields)
    pub async fn create(&self, table: &str, fields: Map<String, Value>) -> AppResult<Record> {
        let response = self
            .http
            .post(self.table_url(table))
            .bearer_auth(&self.api_key)
            .json(&json!({ "records": [{ "fields": fields }] }))
            .send()
            .await?;

        let response = check_status(table, response)?;
        let body: RecordList = response.json().await?;

        body.records
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream(format!("{}: empty create response", table)))
    }

    /// Update fields on one record; fields absent from the map are left
    /// untouched in the store
    pub async fn update(
        &self,
        table: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> AppResult<Record> {
        let response = self
            .http
            .patch(self.record_url(table, id))
            .bearer_auth(&self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("{} record", table)));
        }

        let response = check_status(table, response)?;
        Ok(response.json().await?)
    }

    /// Hard-delete one record
    pub async fn delete(&self, table: &str, id: &str) -> AppResult<()> {
        let response = self
            .http
            .delete(self.record_url(table, id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("{} record", table)));
        }

        check_status(table, response)?;
        Ok(())
    }
}

fn check_status(table: &str, response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!(
            "{}: store responded with {}",
            table, status
        )));
    }
    Ok(response)
}
