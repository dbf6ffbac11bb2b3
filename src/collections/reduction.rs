use super::{Collection, each};
use crate::functions::identity;
use crate::traits::Truthy;

/// Reduces `collection` to a single value by repeatedly calling `iterator(accumulator, item)` for
/// each item, left to right.
///
/// # Accumulator Reset
/// Before every step, an accumulator that is falsy is replaced with `A::default()` (zero for the
/// numeric types). Without an `initial_value`, the first step therefore starts from the default
/// and `iterator` is applied to every item, including the first. With a truthy seed, or whenever
/// the running value stays truthy, this is an ordinary left fold.
///
/// The reset applies on every step, not only the first. For the numeric types the only visible
/// effect is that NaN is replaced with zero.
///
/// This reset is suspect: a fold whose running value legitimately becomes falsy (an `Option` that
/// turns to None, an empty string) is silently restarted. It is kept for compatibility with the
/// behaviour this helper reproduces, not because it is useful.
///
/// Returns None only when `collection` is empty and there is no `initial_value`.
///
/// # Examples
/// ```
/// # use utility_belt::collections::reduce;
/// let numbers = [1_i32, 2, 3];
/// assert_eq!(reduce(&numbers, |total, number| total + number, Some(0_i32)), Some(6));
/// assert_eq!(reduce(&numbers, |total, number| total + number, None::<i32>), Some(6));
/// assert_eq!(reduce(&[] as &[i32], |total, number| total + number, None::<i32>), None);
/// ```
pub fn reduce<'c, C, A, F>(
    collection: &'c C,
    mut iterator: F,
    initial_value: Option<A>,
) -> Option<A>
where
    C: Collection + ?Sized,
    A: Truthy + Default,
    F: FnMut(A, &'c C::Item) -> A,
{
    let mut accumulator = initial_value;

    each(collection, |item, _, _| {
        let previous = match accumulator.take() {
            Some(value) if value.is_truthy() => value,
            _ => A::default(),
        };
        accumulator = Some(iterator(previous, item));
    });

    accumulator
}

/// Returns true if any element of `collection` is equal to `target`.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use utility_belt::collections::contains;
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&HashMap::from([("a", 1)]), &2));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        Some(false),
    )
    .unwrap_or(false)
}

/// Returns true if `iterator` returns a truthy value for every element of `collection`.
///
/// An empty collection passes vacuously. Use [`every_truthy`] to test the elements' own
/// truthiness instead.
///
/// # Examples
/// ```
/// # use utility_belt::collections::every;
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
/// assert!(every(&[] as &[u8], |_| false));
/// ```
pub fn every<'c, C, F, R>(collection: &'c C, mut iterator: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item) -> R,
    R: Truthy,
{
    reduce(
        collection,
        |status, item| status && iterator(item).is_truthy(),
        Some(true),
    )
    .unwrap_or(true)
}

/// Returns true if every element of `collection` is itself truthy.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, identity)
}

/// Returns true if `iterator` returns a truthy value for at least one element of `collection`.
///
/// An empty collection never passes. Use [`some_truthy`] to test the elements' own truthiness
/// instead.
///
/// # Examples
/// ```
/// # use utility_belt::collections::some;
/// assert!(some(&[1, 3, 4], |value| value % 2 == 0));
/// assert!(!some(&[1, 3, 5], |value| value % 2 == 0));
/// assert!(!some(&[] as &[u8], |_| true));
/// ```
pub fn some<'c, C, F, R>(collection: &'c C, mut iterator: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item) -> R,
    R: Truthy,
{
    !every(collection, |element| iterator(element).is_falsy())
}

/// Returns true if at least one element of `collection` is itself truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, identity)
}
