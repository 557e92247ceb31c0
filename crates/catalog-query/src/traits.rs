//! Field access traits.
//!
//! The engine never looks inside records itself. It asks an accessor for the
//! value at a field path. [`Record`] is the accessor for JSON documents;
//! plain functions work for any other type.

use std::convert::Infallible;
use std::marker::PhantomData;

use serde_json::{Map, Value as JsonValue};

use crate::value::Value;

/// Types whose fields can be read by the query engine.
///
/// Implemented for JSON documents, where a field path is either an exact key
/// or a dotted path into nested records (`department.name`).
///
/// # Manual Implementation
///
/// ```
/// use catalog_query::{Number, Record, Value};
///
/// struct Subject {
///     code: String,
///     credits: u8,
/// }
///
/// impl Record for Subject {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "code" => Value::String(&self.code),
///             "credits" => Value::Number(Number::from(self.credits)),
///             _ => Value::Missing,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value at `path`, or [`Value::Missing`] if it does not exist.
    fn field_value(&self, path: &str) -> Value<'_>;

    /// Returns an accessor function suitable for [`Query::execute`](crate::Query::execute).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

impl Record for JsonValue {
    fn field_value(&self, path: &str) -> Value<'_> {
        match self {
            JsonValue::Object(map) => resolve_path(map, path),
            _ => Value::Missing,
        }
    }
}

impl Record for Map<String, JsonValue> {
    fn field_value(&self, path: &str) -> Value<'_> {
        resolve_path(self, path)
    }
}

/// Resolves a field path against a JSON object.
///
/// An exact key match wins. Otherwise the path is split on `.` and followed
/// through nested objects; any segment that does not resolve yields
/// [`Value::Missing`].
pub fn resolve_path<'a>(map: &'a Map<String, JsonValue>, path: &str) -> Value<'a> {
    if let Some(value) = map.get(path) {
        return Value::from_json(value);
    }

    let mut segments = path.split('.');
    let mut current = match segments.next().and_then(|first| map.get(first)) {
        Some(value) => value,
        None => return Value::Missing,
    };
    for segment in segments {
        match current.get(segment) {
            Some(value) => current = value,
            None => return Value::Missing,
        }
    }
    Value::from_json(current)
}

/// Uniform view over infallible and fallible accessors.
pub(crate) trait FieldSource<T> {
    type Error;

    fn value<'a>(&self, item: &'a T, field: &str) -> Result<Value<'a>, Self::Error>;
}

/// Accessor that always produces a value.
pub(crate) struct Plain<F>(pub(crate) F);

impl<T, F> FieldSource<T> for Plain<F>
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    type Error = Infallible;

    fn value<'a>(&self, item: &'a T, field: &str) -> Result<Value<'a>, Infallible> {
        Ok((self.0)(item, field))
    }
}

/// Accessor whose reads can fail.
pub(crate) struct Checked<F, E>(F, PhantomData<fn() -> E>);

impl<F, E> Checked<F, E> {
    pub(crate) fn new(accessor: F) -> Self {
        Checked(accessor, PhantomData)
    }
}

impl<T, E, F> FieldSource<T> for Checked<F, E>
where
    for<'a> F: Fn(&'a T, &str) -> Result<Value<'a>, E>,
{
    type Error = E;

    fn value<'a>(&self, item: &'a T, field: &str) -> Result<Value<'a>, E> {
        (self.0)(item, field)
    }
}
