//! The list contract end to end: JSON request in, `{data, total}` out.

use catalog_provider::{
    DataProvider, ListParams, ListResponse, MemoryProvider, ProviderConfig, ProviderError,
};
use catalog_query::{FilterNode, Sorter};
use futures::executor::block_on;
use proptest::prelude::*;
use serde_json::{json, Value};

const STORE: &str = r#"[
    {"id": 1,  "code": "CS301", "name": "Operating Systems",     "department": {"code": "CS",   "name": "Computer Science"}},
    {"id": 2,  "code": "MA101", "name": "Calculus I",            "department": {"code": "MATH", "name": "Mathematics"}},
    {"id": 3,  "code": "CS101", "name": "Intro to Programming",  "department": {"code": "CS",   "name": "Computer Science"}},
    {"id": 4,  "code": "PH101", "name": "Mechanics",             "department": {"code": "PHYS", "name": "Physics"}},
    {"id": 5,  "code": "CS220", "name": "Data Structures",       "department": {"code": "CS",   "name": "Computer Science"}},
    {"id": 6,  "code": "MA220", "name": "Discrete Mathematics",  "department": {"code": "MATH", "name": "Mathematics"}},
    {"id": 7,  "code": "EN101", "name": "Composition",           "department": {"code": "ENG",  "name": "English"}},
    {"id": 8,  "code": "CS150", "name": "Computer Architecture", "department": {"code": "CS",   "name": "Computer Science"}},
    {"id": 9,  "code": "PH210", "name": "Electromagnetism",      "department": {"code": "PHYS", "name": "Physics"}},
    {"id": 10, "code": "CS410", "name": "Compilers",             "department": {"code": "CS",   "name": "Computer Science"}},
    {"id": 11, "code": "MA310", "name": "Applied Mathematics",   "department": {"code": "MATH", "name": "Mathematics"}},
    {"id": 12, "code": "EN210", "name": "Technical Writing",     "department": {"code": "ENG",  "name": "English"}}
]"#;

fn provider() -> MemoryProvider {
    MemoryProvider::from_json_str(ProviderConfig::default(), STORE).unwrap()
}

fn list(provider: &MemoryProvider, request: Value) -> ListResponse {
    let params = ListParams::from_json(request).unwrap();
    block_on(provider.get_list(&params)).unwrap()
}

fn ids(response: &ListResponse) -> Vec<i64> {
    response
        .data
        .iter()
        .filter_map(|record| record["id"].as_i64())
        .collect()
}

#[test]
fn list_screen_request() {
    let response = list(
        &provider(),
        json!({
            "resource": "subjects",
            "pagination": {"currentPage": 1, "pageSize": 10},
            "filters": [{"field": "department.code", "operator": "eq", "value": "CS"}],
            "sorters": [{"field": "code", "order": "asc"}]
        }),
    );

    assert_eq!(response.total, 5);
    assert_eq!(ids(&response), vec![3, 8, 5, 1, 10]);
}

#[test]
fn search_box_and_department_select() {
    let response = list(
        &provider(),
        json!({
            "resource": "subjects",
            "filters": [
                {"field": "name", "operator": "contains", "value": "MATH"},
                {"field": "department.name", "operator": "eq", "value": "Mathematics"}
            ],
            "sorters": [{"field": "id", "order": "desc"}]
        }),
    );

    assert_eq!(response.total, 2);
    assert_eq!(ids(&response), vec![11, 6]);
}

#[test]
fn no_request_parts_returns_the_store() {
    let response = list(&provider(), json!({"resource": "subjects"}));
    assert_eq!(response.total, 12);
    assert_eq!(ids(&response), (1..=12).collect::<Vec<_>>());
}

#[test]
fn pages_share_the_total() {
    let provider = provider();
    let base = ListParams::new("subjects").sort(Sorter::asc("code"));

    let mut seen = Vec::new();
    for page in 1..=4 {
        let response = block_on(provider.get_list(&base.clone().page(page, 5))).unwrap();
        assert_eq!(response.total, 12);
        seen.extend(ids(&response));
    }
    assert_eq!(seen.len(), 12);

    let past_end = block_on(provider.get_list(&base.page(9, 5))).unwrap();
    assert!(past_end.data.is_empty());
    assert!(!past_end.no_matches());
    assert_eq!(past_end.total, 12);
}

#[test]
fn permissive_request_parts() {
    let response = list(
        &provider(),
        json!({
            "resource": "subjects",
            "filters": [
                {"field": "credits", "operator": "between", "value": [1, 3]},
                {"operator": "or", "value": {"field": "code"}},
                {"operator": "and", "value": []}
            ],
            "sorters": [{"field": "code", "order": "sideways"}]
        }),
    );

    assert_eq!(response.total, 12);
    assert_eq!(response.data[0]["code"], "CS101");
}

#[test]
fn unknown_resource_ignores_the_rest_of_the_request() {
    let response = list(
        &provider(),
        json!({
            "resource": "teachers",
            "pagination": {"currentPage": 1, "pageSize": 10},
            "filters": [{"field": "department.code", "operator": "eq", "value": "CS"}],
            "sorters": [{"field": "code", "order": "desc"}]
        }),
    );
    assert_eq!(response, ListResponse::empty());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"data": [], "total": 0})
    );
}

#[test]
fn yaml_config_selects_the_resource() {
    let config = ProviderConfig::from_yaml_str(
        "resource: courses\napiUrl: https://catalog.test\n",
    )
    .unwrap();
    let provider = MemoryProvider::from_json_str(config, STORE).unwrap();

    assert_eq!(provider.api_url(), "https://catalog.test");
    assert_eq!(list(&provider, json!({"resource": "courses"})).total, 12);
    assert!(list(&provider, json!({"resource": "subjects"})).no_matches());
}

#[test]
fn single_record_operations_are_hard_failures() {
    let provider = provider();
    let id = json!(3);

    let results = [
        block_on(provider.get_one("subjects", &id)),
        block_on(provider.create("subjects", json!({"code": "CS999"}))),
        block_on(provider.update("subjects", &id, json!({"code": "CS999"}))),
        block_on(provider.delete_one("subjects", &id)),
    ];
    for result in results {
        match result {
            Err(err) => assert!(err.is_not_implemented(), "unexpected error: {err}"),
            Ok(payload) => panic!("expected NotImplemented, got {payload}"),
        }
    }

    // Unknown resources fail the same way.
    let err = block_on(provider.get_one("teachers", &id)).unwrap_err();
    assert!(matches!(err, ProviderError::NotImplemented { operation: "get_one" }));
}

// ============================================================================
// Property tests
// ============================================================================

fn store_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec((0i64..4, "[a-z]{1,6}"), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (group, name))| json!({"id": id, "group": group, "name": name}))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_unknown_resource_is_always_empty(
        records in store_strategy(),
        resource in "[a-z]{1,10}",
        group in 0i64..4,
        page in 0usize..5,
        size in 0usize..10,
    ) {
        prop_assume!(resource != "subjects");
        let provider = MemoryProvider::new(ProviderConfig::default(), records);
        let params = ListParams::new(resource)
            .filter(FilterNode::eq("group", group))
            .sort(Sorter::desc("name"))
            .page(page, size);

        prop_assert_eq!(provider.list(&params), ListResponse::empty());
    }

    #[test]
    fn prop_total_is_the_same_on_every_page(
        records in store_strategy(),
        group in 0i64..4,
        size in 1usize..8,
    ) {
        let provider = MemoryProvider::new(ProviderConfig::default(), records);
        let base = ListParams::new("subjects")
            .filter(FilterNode::eq("group", group))
            .sort(Sorter::asc("name"));
        let expected = provider.list(&base).total;

        let mut seen = 0;
        for page in 1..=(expected / size + 2) {
            let response = provider.list(&base.clone().page(page, size));
            prop_assert_eq!(response.total, expected);
            seen += response.data.len();
        }
        prop_assert_eq!(seen, expected);
    }
}
