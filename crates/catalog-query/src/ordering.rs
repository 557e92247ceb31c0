//! Sort keys and the cross-type comparison policy.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// Sort direction. Anything but `"desc"` on the wire is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Parses a direction name. Only `"desc"` is descending.
    pub fn from_name(name: &str) -> Self {
        match name {
            "desc" => Dir::Desc,
            _ => Dir::Asc,
        }
    }

    /// Orients an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Dir {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Dir {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = serde_json::Value::deserialize(deserializer)?;
        Ok(name.as_str().map(Dir::from_name).unwrap_or_default())
    }
}

/// A single sort key: a field path and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorter {
    /// Field path, as accepted by the accessor.
    pub field: String,
    #[serde(default)]
    pub order: Dir,
}

impl Sorter {
    /// Creates a new ascending sorter for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Sorter::new(field, Dir::Asc)
    }

    /// Creates a new descending sorter for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Sorter::new(field, Dir::Desc)
    }

    /// Creates a new sorter with the given direction.
    pub fn new(field: impl Into<String>, order: Dir) -> Self {
        Sorter {
            field: field.into(),
            order,
        }
    }

    /// Compares two values according to this sorter.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.order.apply(compare_values(a, b))
    }
}

/// Compares two field values with a total order.
///
/// Values of different types order by [`Value::type_rank`]. Within a type,
/// numbers compare numerically, strings by bytes, booleans `false < true`.
/// NaN sorts after every other number. Lists, records, nulls and missing
/// values are equal to their own kind.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .compare(*b)
            .unwrap_or_else(|| a.to_f64().is_nan().cmp(&b.to_f64().is_nan())),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.type_rank().cmp(&b.type_rank()),
    }
}

/// Compares two extracted sort keys using a list of sorters.
///
/// `a[i]` and `b[i]` hold the values of `sorters[i].field`. The first key
/// that differs decides; if all keys are equal, returns `Equal`.
pub fn compare_keys(a: &[Value<'_>], b: &[Value<'_>], sorters: &[Sorter]) -> Ordering {
    for ((sorter, val_a), val_b) in sorters.iter().zip(a).zip(b) {
        let ordering = sorter.compare(val_a, val_b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
