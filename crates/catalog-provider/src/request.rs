//! List requests.

use catalog_query::{FilterNode, Pagination, Query, Sorter};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{ProviderError, Result};

/// A list request for one resource.
///
/// On the wire this is
/// `{resource, pagination?: {currentPage, pageSize}, filters?, sorters?}`.
/// Filters and sorters decode permissively: unknown operators, malformed
/// combinators and unknown sort orders all turn into nodes or keys that
/// never fail.
///
/// ```
/// use catalog_provider::ListParams;
///
/// let params = ListParams::from_json_str(r#"{
///     "resource": "subjects",
///     "pagination": {"currentPage": 1, "pageSize": 10},
///     "filters": [{"field": "department", "operator": "eq", "value": "CS"}],
///     "sorters": [{"field": "code", "order": "asc"}]
/// }"#).unwrap();
/// assert_eq!(params.filters.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Name of the resource to list.
    #[serde(default)]
    pub resource: String,
    /// Page request. `None` returns every match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Top-level filters, combined with an implicit `and`.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterNode>,
    /// Sort keys, most significant first.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub sorters: Vec<Sorter>,
}

impl ListParams {
    /// Creates a request for every record of `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        ListParams {
            resource: resource.into(),
            ..ListParams::default()
        }
    }

    /// Adds a top-level filter.
    pub fn filter(mut self, node: impl Into<FilterNode>) -> Self {
        self.filters.push(node.into());
        self
    }

    /// Adds a sort key after the existing ones.
    pub fn sort(mut self, sorter: Sorter) -> Self {
        self.sorters.push(sorter);
        self
    }

    /// Requests one page.
    pub fn page(mut self, current_page: usize, page_size: usize) -> Self {
        self.pagination = Some(Pagination::new(current_page, page_size));
        self
    }

    /// Decodes a request from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ProviderError::InvalidRequest)
    }

    /// Decodes a request from a JSON document.
    pub fn from_json(value: JsonValue) -> Result<Self> {
        serde_json::from_value(value).map_err(ProviderError::InvalidRequest)
    }

    /// Converts this request into an engine query.
    pub fn into_query(self) -> Query {
        Query::from_parts(
            self.filters,
            self.sorters,
            self.pagination.unwrap_or_default(),
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
