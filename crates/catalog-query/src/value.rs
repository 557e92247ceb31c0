//! Borrowed field values.
//!
//! The [`Value`] enum is a borrowed view of one field of one record. Accessors
//! produce it, filters test it and sorters compare it.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde_json::{Map, Value as JsonValue};

/// Runtime value for comparison, borrowed from the source record.
///
/// `Null` is a field that is present and explicitly null. `Missing` is a
/// field that does not exist on the record (or a dotted path that stops
/// resolving part way).
///
/// # Example
///
/// ```
/// use catalog_query::{Number, Value};
///
/// struct Subject {
///     code: String,
///     credits: u8,
/// }
///
/// fn accessor<'a>(subject: &'a Subject, field: &str) -> Value<'a> {
///     match field {
///         "code" => Value::String(&subject.code),
///         "credits" => Value::Number(Number::from(subject.credits)),
///         _ => Value::Missing,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Bool(bool),
    /// Nested record.
    Record(&'a Map<String, JsonValue>),
    /// Sequence of values.
    List(&'a [JsonValue]),
    /// Explicit null.
    Null,
    /// Field not present on the record.
    Missing,
}

impl<'a> Value<'a> {
    /// Borrows a JSON value as a field value.
    pub fn from_json(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::String(s) => Value::String(s),
            JsonValue::Number(n) => Value::Number(Number::from(n)),
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Object(map) => Value::Record(map),
            JsonValue::Array(items) => Value::List(items),
            JsonValue::Null => Value::Null,
        }
    }

    /// Returns `true` if the field is absent from the record.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Coerces the value to text for substring matching.
    ///
    /// Strings are returned as-is, numbers in their shortest decimal form,
    /// booleans as `true`/`false`, nested records and lists as compact JSON.
    /// `Null` and `Missing` become the empty string.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Record(map) => Cow::Owned(serde_json::to_string(map).unwrap_or_default()),
            Value::List(items) => Cow::Owned(serde_json::to_string(items).unwrap_or_default()),
            Value::Null | Value::Missing => Cow::Borrowed(""),
        }
    }

    /// Position of this value's type in the cross-type sort order.
    ///
    /// `Number < String < Bool < List < Record < Null < Missing`
    pub fn type_rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::String(_) => 1,
            Value::Bool(_) => 2,
            Value::List(_) => 3,
            Value::Record(_) => 4,
            Value::Null => 5,
            Value::Missing => 6,
        }
    }

    /// Strict equality without type coercion.
    ///
    /// Numbers compare numerically across representations. `Null` equals only
    /// `Null`; `Missing` equals nothing. Records and lists never compare equal.
    pub fn strict_eq(&self, other: &Value<'_>) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.compare(*b) == Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl<'a> From<&'a JsonValue> for Value<'a> {
    fn from(value: &'a JsonValue) -> Self {
        Value::from_json(value)
    }
}

/// A JSON number, kept in the representation it was parsed in.
///
/// Integers stay exact; only mixed integer/float comparisons go through
/// `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Lossy conversion, used when the two sides have different kinds.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Numeric comparison. `None` if either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        use Number::*;
        match (self, other) {
            (I64(a), I64(b)) => Some(a.cmp(&b)),
            (U64(a), U64(b)) => Some(a.cmp(&b)),
            (I64(a), U64(b)) => Some(if a < 0 { Ordering::Less } else { (a as u64).cmp(&b) }),
            (U64(a), I64(b)) => Some(if b < 0 { Ordering::Greater } else { a.cmp(&(b as u64)) }),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Number::I64(i),
            (None, Some(u)) => Number::U64(u),
            (None, None) => Number::F64(n.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_variants() {
        let doc = json!({
            "name": "Algebra",
            "credits": 4,
            "ratio": 0.5,
            "active": true,
            "department": {"name": "Math"},
            "tags": ["core"],
            "notes": null
        });

        assert_eq!(Value::from_json(&doc["name"]), Value::String("Algebra"));
        assert_eq!(Value::from_json(&doc["credits"]), Value::Number(Number::I64(4)));
        assert_eq!(Value::from_json(&doc["ratio"]), Value::Number(Number::F64(0.5)));
        assert_eq!(Value::from_json(&doc["active"]), Value::Bool(true));
        assert!(matches!(Value::from_json(&doc["department"]), Value::Record(_)));
        assert!(matches!(Value::from_json(&doc["tags"]), Value::List(_)));
        assert_eq!(Value::from_json(&doc["notes"]), Value::Null);
    }

    #[test]
    fn large_unsigned_stays_unsigned() {
        let doc = json!(u64::MAX);
        assert_eq!(Value::from_json(&doc), Value::Number(Number::U64(u64::MAX)));
    }

    #[test]
    fn text_coercion() {
        assert_eq!(Value::String("Physics").to_text(), "Physics");
        assert_eq!(Value::Number(Number::I64(101)).to_text(), "101");
        assert_eq!(Value::Number(Number::F64(2.5)).to_text(), "2.5");
        assert_eq!(Value::Number(Number::F64(3.0)).to_text(), "3");
        assert_eq!(Value::Bool(false).to_text(), "false");
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::Missing.to_text(), "");

        let doc = json!({"name": "CS"});
        assert_eq!(Value::from_json(&doc).to_text(), r#"{"name":"CS"}"#);
    }

    #[test]
    fn strict_eq_has_no_coercion() {
        assert!(Value::String("1").strict_eq(&Value::String("1")));
        assert!(!Value::String("1").strict_eq(&Value::Number(Number::I64(1))));
        assert!(!Value::Bool(true).strict_eq(&Value::Number(Number::I64(1))));
        assert!(!Value::String("").strict_eq(&Value::Null));
    }

    #[test]
    fn strict_eq_numbers_across_representations() {
        assert!(Value::Number(Number::I64(4)).strict_eq(&Value::Number(Number::F64(4.0))));
        assert!(Value::Number(Number::U64(4)).strict_eq(&Value::Number(Number::I64(4))));
        let nan = Value::Number(Number::F64(f64::NAN));
        assert!(!nan.strict_eq(&nan));
    }

    #[test]
    fn null_and_missing_differ() {
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(!Value::Missing.strict_eq(&Value::Null));
        assert!(!Value::Missing.strict_eq(&Value::Missing));
        assert!(Value::Missing.is_missing());
        assert!(!Value::Null.is_missing());
    }

    #[test]
    fn records_never_strictly_equal() {
        let doc = json!({"name": "CS"});
        let a = Value::from_json(&doc);
        assert!(!a.strict_eq(&a.clone()));
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(Number::I64(5).compare(Number::U64(10)), Some(Ordering::Less));
        assert_eq!(Number::I64(5).compare(Number::F64(5.0)), Some(Ordering::Equal));
        assert_eq!(Number::U64(10).compare(Number::F64(5.5)), Some(Ordering::Greater));
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::I64(-1).compare(Number::U64(u64::MAX)), Some(Ordering::Less));
        assert_eq!(Number::U64(u64::MAX).compare(Number::I64(i64::MAX)), Some(Ordering::Greater));
    }

    #[test]
    fn type_rank_order() {
        let ranks = [
            Value::Number(Number::I64(0)).type_rank(),
            Value::String("").type_rank(),
            Value::Bool(false).type_rank(),
            Value::List(&[]).type_rank(),
            Value::Null.type_rank(),
            Value::Missing.type_rank(),
        ];
        assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
