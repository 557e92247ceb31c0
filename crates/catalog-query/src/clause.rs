//! Leaf filter predicates.
//!
//! A [`Clause`] tests one field of one record: a field path, an operator,
//! and a comparison value.

use serde_json::Value as JsonValue;

use crate::op::FilterOp;
use crate::value::Value;

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use catalog_query::{Clause, FilterOp, Value};
///
/// let clause = Clause::new("name", FilterOp::Contains, "math");
/// assert!(clause.matches(&Value::String("Discrete Mathematics")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field path to read.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against. `None` when the request left it out,
    /// which is not the same as an explicit `null`.
    pub value: Option<JsonValue>,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<JsonValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: Some(value.into()),
        }
    }

    /// Creates a clause with no comparison value.
    ///
    /// `eq` then matches records where the field is absent, and `contains`
    /// matches every record.
    pub fn without_value(field: impl Into<String>, op: FilterOp) -> Self {
        Clause {
            field: field.into(),
            op,
            value: None,
        }
    }

    /// Evaluates this clause against a field value.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        let expected = self.value.as_ref().map_or(Value::Missing, Value::from_json);
        match &self.op {
            FilterOp::Eq if self.value.is_none() => field_value.is_missing(),
            FilterOp::Eq => field_value.strict_eq(&expected),
            FilterOp::Contains => contains_ignore_case(field_value, &expected),
            FilterOp::Other(_) => true,
        }
    }
}

fn contains_ignore_case(haystack: &Value<'_>, needle: &Value<'_>) -> bool {
    let haystack = haystack.to_text().to_lowercase();
    let needle = needle.to_text().to_lowercase();
    haystack.contains(needle.as_str())
}
