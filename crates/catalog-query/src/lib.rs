//! Catalog query - in-memory query engine for record collections.
//!
//! Given a collection, a filter tree, a multi-key sort and a page request,
//! the engine returns the matching, ordered page plus the total match count:
//!
//! - Filters: `eq` and case-insensitive `contains` leaves, nested `and`/`or`
//! - Sorting: stable, multi-key, ascending or descending
//! - Pagination: 1-based pages, total reported before slicing
//!
//! # Quick Start
//!
//! ```rust
//! use catalog_query::{FilterNode, Query, Record};
//! use serde_json::{json, Value};
//!
//! let subjects = vec![
//!     json!({"id": 1, "code": "MA201", "name": "Linear Algebra", "department": {"name": "Math"}}),
//!     json!({"id": 2, "code": "CS101", "name": "Intro to Programming", "department": {"name": "CS"}}),
//!     json!({"id": 3, "code": "MA101", "name": "Calculus", "department": {"name": "Math"}}),
//! ];
//!
//! let query = Query::new()
//!     .eq("department.name", "Math")
//!     .filter(FilterNode::or(vec![
//!         FilterNode::contains("name", "ALGEBRA"),
//!         FilterNode::contains("name", "calculus"),
//!     ]))
//!     .order_asc("code")
//!     .build();
//!
//! let result = query.execute(&subjects, Value::accessor);
//! assert_eq!(result.total, 2);
//! assert_eq!(result.data[0]["code"], "MA101");
//! ```
//!
//! # Permissive Evaluation
//!
//! Nothing about the shape of a query can make it fail:
//!
//! - an operator the engine does not implement passes every record
//! - an `and`/`or` with no children passes every record
//! - a page past the end is empty, and the total is still reported
//!
//! Only an accessor passed to [`Query::try_execute`] can fail a query.
//!
//! # Sort Order Across Types
//!
//! ```text
//! Number < String < Bool < List < Record < Null < Missing
//! ```
//!
//! Within a type, numbers compare numerically, strings by bytes and booleans
//! `false < true`. Descending sorts reverse the whole order.

mod clause;
mod error;
mod filter;
mod op;
mod ordering;
mod page;
mod query;
mod traits;
mod value;

// Re-export public API
pub use clause::Clause;
pub use error::{QueryError, Result};
pub use filter::FilterNode;
pub use op::FilterOp;
pub use ordering::{compare_keys, compare_values, Dir, Sorter};
pub use page::Pagination;
pub use query::{Query, QueryResult};
pub use traits::{resolve_path, Record};
pub use value::{Number, Value};
