//! The data provider contract and its in-memory implementation.

use async_trait::async_trait;
use catalog_query::Record;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::request::ListParams;
use crate::response::ListResponse;

/// Operations a list screen can ask of its data source.
///
/// Only [`get_list`](DataProvider::get_list) is answered from data. The
/// single-record operations are part of the contract but every
/// implementation in this crate fails them with
/// [`ProviderError::NotImplemented`].
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Lists one page of a resource.
    async fn get_list(&self, params: &ListParams) -> Result<ListResponse>;

    /// Reads one record by id.
    async fn get_one(&self, resource: &str, id: &JsonValue) -> Result<JsonValue>;

    /// Creates a record.
    async fn create(&self, resource: &str, record: JsonValue) -> Result<JsonValue>;

    /// Replaces the fields of one record.
    async fn update(&self, resource: &str, id: &JsonValue, record: JsonValue) -> Result<JsonValue>;

    /// Deletes one record.
    async fn delete_one(&self, resource: &str, id: &JsonValue) -> Result<JsonValue>;

    /// Base URL of the backing service.
    fn api_url(&self) -> &str;
}

/// Serves one resource from records held in memory.
///
/// ```
/// use catalog_provider::{DataProvider, ListParams, MemoryProvider, ProviderConfig};
/// use serde_json::json;
///
/// let provider = MemoryProvider::new(
///     ProviderConfig::default(),
///     vec![json!({"id": 1, "code": "CS101"}), json!({"id": 2, "code": "MATH201"})],
/// );
/// let response = provider.list(&ListParams::new("subjects").page(1, 1));
/// assert_eq!(response.total, 2);
/// assert_eq!(response.data.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    config: ProviderConfig,
    records: Vec<JsonValue>,
}

impl MemoryProvider {
    /// Creates a provider over `records`.
    pub fn new(config: ProviderConfig, records: Vec<JsonValue>) -> Self {
        MemoryProvider { config, records }
    }

    /// Creates a provider from a JSON array of records.
    pub fn from_json_str(config: ProviderConfig, text: &str) -> Result<Self> {
        let store: JsonValue = serde_json::from_str(text).map_err(ProviderError::InvalidRecords)?;
        match store {
            JsonValue::Array(records) => Ok(MemoryProvider::new(config, records)),
            other => Err(ProviderError::RecordsNotArray {
                found: json_kind(&other),
            }),
        }
    }

    /// The provider configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The record store, in its original order.
    pub fn records(&self) -> &[JsonValue] {
        &self.records
    }

    /// Answers a list request synchronously.
    ///
    /// A request for any resource other than the configured one gets an
    /// empty response, whatever its filters and sorters.
    pub fn list(&self, params: &ListParams) -> ListResponse {
        if params.resource != self.config.resource {
            debug!(
                requested = %params.resource,
                served = %self.config.resource,
                "unknown resource, returning empty list"
            );
            return ListResponse::empty();
        }

        let query = params.clone().into_query();
        let response = ListResponse::from(query.execute(&self.records, JsonValue::accessor));
        debug!(
            resource = %params.resource,
            total = response.total,
            returned = response.data.len(),
            "listed records"
        );
        response
    }

    fn unsupported<T>(&self, operation: &'static str, resource: &str) -> Result<T> {
        debug!(operation, resource, "unsupported operation");
        Err(ProviderError::NotImplemented { operation })
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn get_list(&self, params: &ListParams) -> Result<ListResponse> {
        Ok(self.list(params))
    }

    async fn get_one(&self, resource: &str, _id: &JsonValue) -> Result<JsonValue> {
        self.unsupported("get_one", resource)
    }

    async fn create(&self, resource: &str, _record: JsonValue) -> Result<JsonValue> {
        self.unsupported("create", resource)
    }

    async fn update(
        &self,
        resource: &str,
        _id: &JsonValue,
        _record: JsonValue,
    ) -> Result<JsonValue> {
        self.unsupported("update", resource)
    }

    async fn delete_one(&self, resource: &str, _id: &JsonValue) -> Result<JsonValue> {
        self.unsupported("delete_one", resource)
    }

    fn api_url(&self) -> &str {
        &self.config.api_url
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
