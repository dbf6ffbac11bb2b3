use super::{Collection, each};
use crate::traits::{LooseEq, Truthy};

/// Returns clones of all elements of `collection` for which `predicate(value, key, collection)` is
/// truthy, in enumeration order.
///
/// # Examples
/// ```
/// # use utility_belt::collections::filter;
/// let evens = filter(&[1, 2, 3, 4], |value, _, _| value % 2 == 0);
/// assert_eq!(evens, [2, 4]);
/// ```
pub fn filter<'c, C, F, R>(collection: &'c C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item, C::Key<'c>, &'c C) -> R,
    R: Truthy,
{
    let mut passers = Vec::new();

    each(collection, |value, key, collection| {
        if predicate(value, key, collection).is_truthy() {
            passers.push(value.clone());
        }
    });

    passers
}

/// Returns clones of all elements of `collection` for which `predicate` returns a strictly false
/// value.
///
/// This isn't quite the complement of [`filter`]: a predicate returning a falsy value that isn't
/// `false` itself (such as `0` or `None`) rejects the element from both.
///
/// # Examples
/// ```
/// # use utility_belt::collections::reject;
/// let odds = reject(&[1, 2, 3, 4], |value, _, _| value % 2 == 0);
/// assert_eq!(odds, [1, 3]);
///
/// // None is falsy, but it isn't false.
/// let kept = reject(&[1, 2, 3], |value, _, _| (*value > 1).then_some(true));
/// assert!(kept.is_empty());
/// ```
pub fn reject<'c, C, F, R>(collection: &'c C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item, C::Key<'c>, &'c C) -> R,
    R: Truthy,
{
    filter(collection, |value, key, collection| {
        predicate(value, key, collection).is_strictly_false()
    })
}

/// Produces a duplicate-free version of `seq`, keeping the first occurrence of each value.
///
/// Duplicates are detected in two ways. A value is dropped if it is loosely equal (see
/// [`LooseEq`]) to the most recently kept value, or if it is strictly equal to any value kept so
/// far. Before anything is kept, nullish values count as loosely equal to the (missing) previous
/// value, so leading nullish values are dropped.
///
/// For types without coercion, both checks agree and this is plain order-preserving
/// deduplication.
///
/// # Examples
/// ```
/// # use utility_belt::collections::uniq;
/// assert_eq!(uniq(&[1, 1, 2, 2, 1]), [1, 2]);
/// assert_eq!(uniq(&[None, Some(1), None]), [Some(1), None]);
/// ```
pub fn uniq<T>(seq: &[T]) -> Vec<T>
where
    T: LooseEq + PartialEq + Clone,
{
    let mut kept: Vec<T> = Vec::new();
    let mut current: Option<&T> = None;

    each(seq, |value, _, _| {
        let same_as_current = match current {
            Some(current) => value.loose_eq(current),
            None => value.is_nullish(),
        };

        if !same_as_current && !kept.contains(value) {
            kept.push(value.clone());
            current = Some(value);
        }
    });

    kept
}
