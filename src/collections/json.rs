use derive_more::IsVariant;
use serde_json::{Map, Value};

use super::Collection;
use crate::error::InvalidArgument;

/// A view of a JSON value as a collection, either an array or an object.
///
/// JSON values are dynamically typed, so they can't implement [`Collection`] directly: a number
/// or a string has no elements to walk. Instead, a `JsonCollection` is obtained with
/// [`TryFrom<&Value>`](JsonCollection::try_from), which is where anything other than an array or
/// object is turned away.
///
/// # Examples
/// ```
/// # use serde_json::json;
/// # use utility_belt::collections::{map, JsonCollection, JsonKey};
/// let value = json!({ "a": 1, "b": 2 });
/// let collection = JsonCollection::try_from(&value).unwrap();
/// let keys = map(&collection, |_, key, _| key);
/// assert_eq!(keys, [JsonKey::Name("a"), JsonKey::Name("b")]);
///
/// assert!(JsonCollection::try_from(&json!(5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, IsVariant)]
pub enum JsonCollection<'a> {
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
}

/// The position of a value in a [`JsonCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum JsonKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl<'a> TryFrom<&'a Value> for JsonCollection<'a> {
    type Error = InvalidArgument;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(JsonCollection::Array(values)),
            Value::Object(map) => Ok(JsonCollection::Object(map)),
            other => Err(InvalidArgument::new("an array or object", json_kind(other))),
        }
    }
}

impl Collection for JsonCollection<'_> {
    type Item = Value;

    type Key<'k> = JsonKey<'k> where Self: 'k;

    fn len(&self) -> usize {
        match self {
            JsonCollection::Array(values) => values.len(),
            JsonCollection::Object(map) => map.len(),
        }
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        match *self {
            JsonCollection::Array(values) => {
                for (index, value) in values.iter().enumerate() {
                    iterator(value, JsonKey::Index(index), self);
                }
            },
            JsonCollection::Object(map) => {
                for (key, value) in map {
                    iterator(value, JsonKey::Name(key), self);
                }
            },
        }
    }
}

/// Returns a short name for the kind of a JSON value, for error messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
