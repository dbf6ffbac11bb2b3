use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::BuildHasher;
use std::iter::FusedIterator;

use crate::error::Result;

/// An object-like value: a set of named properties.
///
/// Records are what [`pluck`](crate::collections::pluck) reads properties from and what
/// [`extend`](super::extend) and [`defaults`](super::defaults) copy properties between.
pub trait Record {
    type Value;

    /// An iterator over all properties in the record, as name-value pairs.
    type Properties<'a>: Iterator<Item = (&'a str, &'a Self::Value)> where Self: 'a;

    /// Returns the value of the property called `name`, or None if there is no such property.
    fn property(&self, name: &str) -> Option<&Self::Value>;

    /// Returns an iterator over all properties in the record, in the record's own order.
    fn properties<'a>(&'a self) -> Self::Properties<'a>;
}

/// A [`Record`] whose properties can be assigned.
pub trait RecordMut: Record {
    /// Sets the property called `name` to `value`, replacing any previous value.
    ///
    /// Fails only for dynamically typed records that turn out not to be objects.
    fn assign(&mut self, name: &str, value: Self::Value) -> Result<()>;

    /// Checks that properties can be assigned at all, without assigning any.
    fn check_assignable(&self) -> Result<()> {
        Ok(())
    }

    /// Returns true if the record holds a value for the property called `name`.
    fn is_defined(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

/// Borrowed iteration over string-keyed entries, with the keys viewed as `&str`.
pub struct Properties<I> {
    pub(crate) inner: I,
}

impl<'a, I, V: 'a> Iterator for Properties<I>
where
    I: Iterator<Item = (&'a String, &'a V)>,
{
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, I, V: 'a> FusedIterator for Properties<I>
where
    I: FusedIterator<Item = (&'a String, &'a V)>,
{
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    type Properties<'a>
        = Properties<btree_map::Iter<'a, String, V>>
    where
        Self: 'a;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }

    fn properties<'a>(&'a self) -> Self::Properties<'a> {
        Properties { inner: self.iter() }
    }
}

impl<V> RecordMut for BTreeMap<String, V> {
    fn assign(&mut self, name: &str, value: V) -> Result<()> {
        self.insert(name.to_owned(), value);
        Ok(())
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    type Properties<'a>
        = Properties<hash_map::Iter<'a, String, V>>
    where
        Self: 'a;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }

    fn properties<'a>(&'a self) -> Self::Properties<'a> {
        Properties { inner: self.iter() }
    }
}

impl<V, S: BuildHasher> RecordMut for HashMap<String, V, S> {
    fn assign(&mut self, name: &str, value: V) -> Result<()> {
        self.insert(name.to_owned(), value);
        Ok(())
    }
}

#[cfg(feature = "json")]
mod json {
    use std::iter::Flatten;
    use std::option;

    use serde_json::{Map, Value, map};

    use super::{Properties, Record, RecordMut};
    use crate::collections::json::json_kind;
    use crate::error::{InvalidArgument, Result};

    impl Record for Map<String, Value> {
        type Value = Value;

        type Properties<'a> = Properties<map::Iter<'a>> where Self: 'a;

        fn property(&self, name: &str) -> Option<&Value> {
            self.get(name)
        }

        fn properties<'a>(&'a self) -> Self::Properties<'a> {
            Properties { inner: self.iter() }
        }
    }

    impl RecordMut for Map<String, Value> {
        fn assign(&mut self, name: &str, value: Value) -> Result<()> {
            self.insert(name.to_owned(), value);
            Ok(())
        }
    }

    /// Only JSON objects have properties. Every other kind of value is a record with none.
    impl Record for Value {
        type Value = Value;

        type Properties<'a>
            = Properties<Flatten<option::IntoIter<map::Iter<'a>>>>
        where
            Self: 'a;

        fn property(&self, name: &str) -> Option<&Value> {
            self.as_object()?.get(name)
        }

        fn properties<'a>(&'a self) -> Self::Properties<'a> {
            Properties {
                inner: self.as_object().map(Map::iter).into_iter().flatten(),
            }
        }
    }

    impl RecordMut for Value {
        fn assign(&mut self, name: &str, value: Value) -> Result<()> {
            self.check_assignable()?;
            if let Value::Object(object) = self {
                object.insert(name.to_owned(), value);
            }
            Ok(())
        }

        fn check_assignable(&self) -> Result<()> {
            match self {
                Value::Object(_) => Ok(()),
                other => Err(InvalidArgument::new("an object", json_kind(other)).into()),
            }
        }
    }
}
