//! Filter operators for leaf clauses.

use std::fmt;

/// Operator of a leaf filter clause.
///
/// Dispatch is total: any operator name the engine does not implement is
/// kept as [`FilterOp::Other`] and always passes, so requests built against
/// a newer operator set still evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// Strict equality, no type coercion.
    Eq,
    /// Case-insensitive substring match on the text form of both sides.
    Contains,
    /// Operator not implemented by the engine. Always matches.
    Other(String),
}

impl FilterOp {
    /// Parses an operator name. Unknown names become [`FilterOp::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "eq" => FilterOp::Eq,
            "contains" => FilterOp::Contains,
            other => FilterOp::Other(other.to_string()),
        }
    }

    /// Returns `true` if the engine evaluates this operator.
    pub fn is_supported(&self) -> bool {
        !matches!(self, FilterOp::Other(_))
    }

    /// Returns the wire name of this operator.
    pub fn as_str(&self) -> &str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Contains => "contains",
            FilterOp::Other(name) => name,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
