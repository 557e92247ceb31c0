//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for constructing queries
//! and methods for executing them against collections.

use std::convert::Infallible;

use serde_json::Value as JsonValue;
use tracing::trace;

use crate::filter::FilterNode;
use crate::ordering::{compare_keys, Dir, Sorter};
use crate::page::Pagination;
use crate::traits::{Checked, FieldSource, Plain};
use crate::value::Value;

/// A query for filtering, ordering and paginating collections.
///
/// Execution runs three stages in a fixed order:
///
/// 1. **Filter**: every top-level filter must match (an implicit `and`).
/// 2. **Sort**: a stable sort by the sorters, first differing key wins.
///    Without sorters the input order is kept.
/// 3. **Paginate**: slice the sorted matches to the requested page.
///
/// The reported total is the number of matches before pagination.
///
/// # Example
///
/// ```
/// use catalog_query::{Query, Record};
/// use serde_json::{json, Value};
///
/// let subjects = vec![
///     json!({"id": 1, "code": "CS201", "department": "CS"}),
///     json!({"id": 2, "code": "MA101", "department": "MATH"}),
///     json!({"id": 3, "code": "CS101", "department": "CS"}),
/// ];
///
/// let query = Query::new()
///     .eq("department", "CS")
///     .order_asc("code")
///     .page(1, 10)
///     .build();
///
/// let result = query.execute(&subjects, Value::accessor);
/// assert_eq!(result.total, 2);
/// assert_eq!(result.data[0]["code"], "CS101");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    filters: Vec<FilterNode>,
    sorters: Vec<Sorter>,
    pagination: Pagination,
}

/// The page of matching records plus the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a, T> {
    /// Records on the requested page, in sorted order.
    pub data: Vec<&'a T>,
    /// Number of records that matched the filters, ignoring pagination.
    pub total: usize,
}

impl<'a, T> QueryResult<'a, T> {
    /// Clones the page into owned records.
    pub fn into_cloned(self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.into_iter().cloned().collect()
    }
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items and keeps their order.
    pub fn new() -> Self {
        Query::default()
    }

    /// Creates a query from its parts.
    pub fn from_parts(
        filters: Vec<FilterNode>,
        sorters: Vec<Sorter>,
        pagination: Pagination,
    ) -> Self {
        Query {
            filters,
            sorters,
            pagination,
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Adds a top-level filter. All top-level filters must match.
    pub fn filter(mut self, node: impl Into<FilterNode>) -> Self {
        self.filters.push(node.into());
        self
    }

    /// Adds an `eq` filter.
    pub fn eq(self, field: &str, value: impl Into<JsonValue>) -> Self {
        self.filter(FilterNode::eq(field, value))
    }

    /// Adds a case-insensitive `contains` filter.
    pub fn contains(self, field: &str, value: impl Into<JsonValue>) -> Self {
        self.filter(FilterNode::contains(field, value))
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Adds a sort key.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.sorters.push(Sorter::new(field, dir));
        self
    }

    /// Adds an ascending sort key.
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    /// Adds a descending sort key.
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Requests one page of results.
    pub fn page(mut self, current_page: usize, page_size: usize) -> Self {
        self.pagination = Pagination::new(current_page, page_size);
        self
    }

    /// Replaces the page request.
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the top-level filters.
    pub fn filters(&self) -> &[FilterNode] {
        &self.filters
    }

    /// Returns the sort keys.
    pub fn sorters(&self) -> &[Sorter] {
        &self.sorters
    }

    /// Returns the page request.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Returns `true` if this query has no filters (matches everything).
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches every filter.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let source = Plain(accessor);
        self.filters
            .iter()
            .all(|node| node.eval(item, &source).unwrap_or_else(|never| match never {}))
    }

    /// Counts the items matching every filter.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().filter(|item| self.matches(*item, &accessor)).count()
    }

    /// Filters, sorts and paginates a slice.
    ///
    /// The slice is borrowed, never reordered; the result holds references
    /// into it.
    pub fn execute<'a, T, F>(&self, items: &'a [T], accessor: F) -> QueryResult<'a, T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let result: Result<_, Infallible> = self.run(items, &Plain(accessor));
        match result {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Like [`execute`](Query::execute), with an accessor that can fail.
    ///
    /// The first accessor error stops execution and is returned unchanged.
    pub fn try_execute<'a, T, F, E>(
        &self,
        items: &'a [T],
        accessor: F,
    ) -> Result<QueryResult<'a, T>, E>
    where
        for<'b> F: Fn(&'b T, &str) -> Result<Value<'b>, E>,
    {
        self.run(items, &Checked::<F, E>::new(accessor))
    }

    fn run<'a, T, S>(&self, items: &'a [T], source: &S) -> Result<QueryResult<'a, T>, S::Error>
    where
        S: FieldSource<T>,
    {
        let mut matched: Vec<&'a T> = Vec::new();
        for item in items {
            if self.accepts(item, source)? {
                matched.push(item);
            }
        }
        let total = matched.len();

        let sorted = if self.sorters.is_empty() {
            matched
        } else {
            self.sort(matched, source)?
        };

        let data = self.pagination.apply(sorted);
        trace!(
            filters = self.filters.len(),
            sorters = self.sorters.len(),
            scanned = items.len(),
            total,
            returned = data.len(),
            "query executed"
        );
        Ok(QueryResult { data, total })
    }

    fn accepts<T, S>(&self, item: &T, source: &S) -> Result<bool, S::Error>
    where
        S: FieldSource<T>,
    {
        for node in &self.filters {
            if !node.eval(item, source)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Stable sort: keys are read once per item, ties keep input order.
    fn sort<'a, T, S>(&self, items: Vec<&'a T>, source: &S) -> Result<Vec<&'a T>, S::Error>
    where
        S: FieldSource<T>,
    {
        let mut keyed = Vec::with_capacity(items.len());
        for item in items {
            let mut keys = Vec::with_capacity(self.sorters.len());
            for sorter in &self.sorters {
                keys.push(source.value(item, &sorter.field)?);
            }
            keyed.push((keys, item));
        }

        keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, &self.sorters));
        Ok(keyed.into_iter().map(|(_, item)| item).collect())
    }
}
