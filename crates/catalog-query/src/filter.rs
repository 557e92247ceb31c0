//! Composable filter trees.
//!
//! A [`FilterNode`] is either a leaf [`Clause`] or an `and`/`or` combinator
//! over child nodes. Trees decode from the JSON request shape
//! `{field, operator, value}` / `{operator: "and" | "or", value: [..]}`, and
//! decoding never fails: anything malformed becomes a node that passes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value as JsonValue};

use crate::clause::Clause;
use crate::op::FilterOp;
use crate::traits::FieldSource;

/// A node of a filter expression tree.
///
/// Combinators with no children pass every record, for `Or` as well as
/// `And`.
///
/// # Example
///
/// ```
/// use catalog_query::FilterNode;
///
/// let filter = FilterNode::or(vec![
///     FilterNode::contains("name", "algebra"),
///     FilterNode::eq("department", "MATH"),
/// ]);
/// assert_eq!(filter.node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    /// Tests a single field.
    Leaf(Clause),
    /// Every child must match.
    And(Vec<FilterNode>),
    /// At least one child must match.
    Or(Vec<FilterNode>),
}

impl FilterNode {
    /// Creates a leaf node.
    pub fn leaf(field: impl Into<String>, op: FilterOp, value: impl Into<JsonValue>) -> Self {
        FilterNode::Leaf(Clause::new(field, op, value))
    }

    /// Creates an `eq` leaf.
    pub fn eq(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        FilterNode::leaf(field, FilterOp::Eq, value)
    }

    /// Creates a `contains` leaf.
    pub fn contains(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        FilterNode::leaf(field, FilterOp::Contains, value)
    }

    /// Creates an `and` combinator.
    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::And(children)
    }

    /// Creates an `or` combinator.
    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Or(children)
    }

    /// A node that passes every record.
    pub fn pass() -> Self {
        FilterNode::And(Vec::new())
    }

    /// Number of nodes in this tree, including itself.
    pub fn node_count(&self) -> usize {
        match self {
            FilterNode::Leaf(_) => 1,
            FilterNode::And(children) | FilterNode::Or(children) => {
                1 + children.iter().map(FilterNode::node_count).sum::<usize>()
            }
        }
    }

    /// Evaluates the tree against one record.
    pub(crate) fn eval<T, S>(&self, item: &T, source: &S) -> Result<bool, S::Error>
    where
        S: FieldSource<T>,
    {
        match self {
            FilterNode::Leaf(clause) => {
                let value = source.value(item, &clause.field)?;
                Ok(clause.matches(&value))
            }
            FilterNode::And(children) | FilterNode::Or(children) if children.is_empty() => {
                Ok(true)
            }
            FilterNode::And(children) => {
                for child in children {
                    if !child.eval(item, source)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            FilterNode::Or(children) => {
                for child in children {
                    if child.eval(item, source)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    /// Decodes a node from its JSON request form.
    ///
    /// - an object with a `field` key is a leaf; a missing `value` stays
    ///   missing (it is not `null`) and an unknown `operator` passes;
    /// - an object with `operator: "and" | "or"` is a combinator over the
    ///   nodes in its `value` array; a non-array `value` leaves it empty;
    /// - anything else passes.
    pub fn from_json(node: &JsonValue) -> Self {
        let JsonValue::Object(map) = node else {
            return FilterNode::pass();
        };
        let operator = map
            .get("operator")
            .and_then(JsonValue::as_str)
            .unwrap_or_default();

        if let Some(field) = map.get("field") {
            let field = match field {
                JsonValue::String(name) => name.clone(),
                other => other.to_string(),
            };
            let op = FilterOp::from_name(operator);
            return match map.get("value") {
                Some(value) => FilterNode::leaf(field, op, value.clone()),
                None => FilterNode::Leaf(Clause::without_value(field, op)),
            };
        }

        let children = match map.get("value") {
            Some(JsonValue::Array(items)) => items.iter().map(FilterNode::from_json).collect(),
            _ => Vec::new(),
        };
        match operator {
            "and" => FilterNode::And(children),
            "or" => FilterNode::Or(children),
            _ => FilterNode::pass(),
        }
    }

    /// Encodes this node in its JSON request form.
    pub fn to_json(&self) -> JsonValue {
        match self {
            FilterNode::Leaf(clause) => {
                let mut map = Map::new();
                map.insert("field".to_string(), JsonValue::String(clause.field.clone()));
                map.insert(
                    "operator".to_string(),
                    JsonValue::String(clause.op.as_str().to_string()),
                );
                if let Some(value) = &clause.value {
                    map.insert("value".to_string(), value.clone());
                }
                JsonValue::Object(map)
            }
            FilterNode::And(children) => json!({
                "operator": "and",
                "value": children.iter().map(FilterNode::to_json).collect::<Vec<_>>(),
            }),
            FilterNode::Or(children) => json!({
                "operator": "or",
                "value": children.iter().map(FilterNode::to_json).collect::<Vec<_>>(),
            }),
        }
    }
}

impl From<Clause> for FilterNode {
    fn from(clause: Clause) -> Self {
        FilterNode::Leaf(clause)
    }
}

impl Serialize for FilterNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(|node| FilterNode::from_json(&node))
    }
}
