use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A container that can be walked element by element, either an ordered sequence or a mapping.
///
/// This is the capability every iteration helper in this crate is built on. Sequences hand their
/// iterator the element's index as a key, mappings hand over a reference to the entry's key. In
/// both cases the iterator is also given the collection itself, so it can look at neighbouring
/// elements if it needs to.
///
/// All references handed to the iterator live as long as the borrow of the collection, which
/// allows helpers to collect references to elements or keys.
///
/// # Enumeration Order
/// | Implementor | Order |
/// |-|-|
/// | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>` | Ascending index |
/// | `BTreeMap<K, V>` | Ascending key |
/// | `HashMap<K, V, S>` | Unspecified, but stable for an unmodified map |
pub trait Collection {
    /// The type of the values held in the collection.
    type Item;

    /// The type identifying each value's position: an index or a reference to a key.
    type Key<'a> where Self: 'a;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `iterator(value, key, collection)` once for every element, in enumeration order.
    fn each<'c, F>(&'c self, iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self);
}

impl<T> Collection for [T] {
    type Item = T;

    type Key<'a> = usize where Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    type Key<'a> = usize where Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    type Key<'a> = usize where Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    type Key<'a> = usize where Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;

    type Key<'a> = &'a K where Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;

    type Key<'a> = &'a K where Self: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c Self::Item, Self::Key<'c>, &'c Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }
}
