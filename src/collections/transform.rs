use super::{Collection, each};
use crate::error::Result;
use crate::objects::{Methods, Record};

/// Returns the results of applying `iterator(value, key, collection)` to each element, one output
/// per element, in enumeration order.
///
/// # Examples
/// ```
/// # use utility_belt::collections::map;
/// assert_eq!(map(&[1_usize, 2, 3], |value, index, _| value * 10 + index), [10, 21, 32]);
/// ```
pub fn map<'c, C, F, R>(collection: &'c C, mut iterator: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, C::Key<'c>, &'c C) -> R,
{
    let mut results = Vec::with_capacity(collection.len());

    each(collection, |value, key, collection| {
        results.push(iterator(value, key, collection));
    });

    results
}

/// Returns the value of the property called `name` for each record in `collection`, or None for
/// records which don't have it.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use utility_belt::collections::pluck;
/// let people = [
///     BTreeMap::from([("name".to_owned(), "moe"), ("age".to_owned(), "40")]),
///     BTreeMap::from([("name".to_owned(), "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), [Some(&"40"), None]);
/// ```
pub fn pluck<'c, C>(collection: &'c C, name: &str) -> Vec<Option<&'c <C::Item as Record>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Record,
{
    map(collection, |value, _, _| value.property(name))
}

/// Calls `function` on each element with `args`, returning the results in enumeration order.
///
/// The element takes the place of the receiver, `function` gets it as its first parameter.
///
/// # Examples
/// ```
/// # use utility_belt::collections::invoke;
/// let shouted = invoke(&["a", "bc"], |value, suffix| format!("{value}{suffix}"), "!");
/// assert_eq!(shouted, ["a!", "bc!"]);
/// ```
pub fn invoke<'c, C, F, A, R>(collection: &'c C, mut function: F, args: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, &A) -> R,
    A: ?Sized,
{
    map(collection, |value, _, _| function(value, args))
}

/// Calls the method called `name` on each element with `args`, returning the results in
/// enumeration order.
///
/// Methods are looked up through the element's [`Methods`] implementation. If any element doesn't
/// provide the method, an [`UnknownMethod`](crate::error::UnknownMethod) error is returned.
///
/// # Examples
/// ```
/// # use utility_belt::collections::invoke_method;
/// let lists = vec![vec![5, 1, 7], vec![3, 2, 1]];
/// assert_eq!(invoke_method(&lists, "sort", &()).unwrap(), [[1, 5, 7], [1, 2, 3]]);
/// assert!(invoke_method(&lists, "explode", &()).is_err());
/// ```
pub fn invoke_method<'c, C, A>(
    collection: &'c C,
    name: &str,
    args: &A,
) -> Result<Vec<<C::Item as Methods<A>>::Output>>
where
    C: Collection + ?Sized,
    C::Item: Methods<A>,
    A: ?Sized,
{
    map(collection, |value, _, _| value.call_method(name, args))
        .into_iter()
        .collect()
}
