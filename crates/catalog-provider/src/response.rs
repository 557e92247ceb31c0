//! List responses.

use catalog_query::QueryResult;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The records on one page plus the number of records that matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Records on the requested page.
    pub data: Vec<JsonValue>,
    /// Match count before pagination.
    pub total: usize,
}

impl ListResponse {
    /// `{data: [], total: 0}`.
    pub fn empty() -> Self {
        ListResponse::default()
    }

    /// Returns `true` if no record matched, on any page.
    ///
    /// A page past the end has no `data` but still reports its matches.
    pub fn no_matches(&self) -> bool {
        self.total == 0
    }
}

impl From<QueryResult<'_, JsonValue>> for ListResponse {
    fn from(result: QueryResult<'_, JsonValue>) -> Self {
        let total = result.total;
        ListResponse {
            data: result.into_cloned(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_query::{Query, Record};
    use serde_json::json;

    #[test]
    fn empty_response_shape() {
        let response = ListResponse::empty();
        assert!(response.no_matches());
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({"data": [], "total": 0}));
    }

    #[test]
    fn from_query_result_keeps_total() {
        let records = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];
        let result = Query::new()
            .order_desc("id")
            .page(1, 2)
            .execute(&records, JsonValue::accessor);
        let response = ListResponse::from(result);
        assert_eq!(response.total, 3);
        assert_eq!(response.data, vec![json!({"id": 3}), json!({"id": 2})]);
        assert!(!response.no_matches());
    }

    #[test]
    fn page_past_the_end_still_has_matches() {
        let records = vec![json!({"id": 1}), json!({"id": 2})];
        let result = Query::new().page(5, 2).execute(&records, JsonValue::accessor);
        let response = ListResponse::from(result);
        assert!(response.data.is_empty());
        assert_eq!(response.total, 2);
        assert!(!response.no_matches());
    }
}
