use super::Collection;

/// Returns the first element of `seq`, or None if it's empty.
///
/// # Examples
/// ```
/// # use utility_belt::collections::first;
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<u8>(&[]), None);
/// ```
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Returns the first `n` elements of `seq`, or all of them if there are fewer than `n`.
///
/// # Examples
/// ```
/// # use utility_belt::collections::first_n;
/// assert_eq!(first_n(&[1, 2, 3], 2), [1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), [1, 2, 3]);
/// ```
pub fn first_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Returns the last element of `seq`, or None if it's empty.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Returns the last `n` elements of `seq` in their original order, or all of them if there are
/// fewer than `n`.
///
/// # Examples
/// ```
/// # use utility_belt::collections::last_n;
/// assert_eq!(last_n(&[1, 2, 3], 2), [2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
pub fn last_n<T>(seq: &[T], n: usize) -> &[T] {
    if n > seq.len() {
        seq
    } else {
        &seq[seq.len() - n..]
    }
}

/// Calls `iterator(value, key, collection)` for each element of `collection`.
///
/// Nothing is returned; this exists for its side effects and as the substrate the other helpers
/// iterate with. See [`Collection`] for the order elements are visited in.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use utility_belt::collections::each;
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let mut seen = Vec::new();
/// each(&map, |value, key, _| seen.push((*key, *value)));
/// assert_eq!(seen, [("a", 1), ("b", 2)]);
/// ```
pub fn each<'c, C, F>(collection: &'c C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, C::Key<'c>, &'c C),
{
    collection.each(iterator);
}

/// Returns the index of the first element of `seq` equal to `target`, or None if there is no such
/// element.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    let mut result = None;

    each(seq, |item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });

    result
}
