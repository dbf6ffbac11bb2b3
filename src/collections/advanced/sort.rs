use std::cmp::Ordering;

use crate::collections::{Collection, map};
use crate::objects::Record;

/// Returns clones of the values of `collection`, sorted ascending by the criterion that
/// `criterion(value, key, collection)` produces for each of them.
///
/// The sort is stable: values with equal criteria keep their enumeration order. Criteria that
/// can't be ordered at all (such as NaN) sort after every other criterion.
///
/// # Examples
/// ```
/// # use utility_belt::collections::sort_by;
/// let words = ["banana", "fig", "apple"];
/// assert_eq!(sort_by(&words, |word, _, _| word.len()), ["fig", "apple", "banana"]);
///
/// let numbers = [1.0, f64::NAN, -2.0];
/// let sorted = sort_by(&numbers, |number, _, _| *number);
/// assert_eq!(sorted[..2], [-2.0, 1.0]);
/// assert!(sorted[2].is_nan());
/// ```
pub fn sort_by<'c, C, F, K>(collection: &'c C, mut criterion: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item, C::Key<'c>, &'c C) -> K,
    K: PartialOrd,
{
    let mut keyed = map(collection, |value, key, collection| {
        (criterion(value, key, collection), value)
    });

    // slice::sort_by is stable.
    keyed.sort_by(|(lhs, _), (rhs, _)| compare_criteria(lhs, rhs));

    keyed.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Returns clones of the records of `collection`, sorted ascending by their property called
/// `name`. Records without the property sort after all others.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use utility_belt::collections::sort_by_property;
/// let people = [
///     BTreeMap::from([("name".to_owned(), "moe")]),
///     BTreeMap::from([("age".to_owned(), "21")]),
///     BTreeMap::from([("name".to_owned(), "curly")]),
/// ];
/// let sorted = sort_by_property(&people, "name");
/// assert_eq!(sorted[0]["name"], "curly");
/// assert_eq!(sorted[1]["name"], "moe");
/// assert!(!sorted[2].contains_key("name"));
/// ```
pub fn sort_by_property<C>(collection: &C, name: &str) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Record + Clone,
    <C::Item as Record>::Value: PartialOrd,
{
    sort_by(collection, |record, _, _| {
        let property = record.property(name);
        (property.is_none(), property)
    })
}

/// A total order over criteria. Criteria that are ordered with respect to themselves are compared
/// normally, the rest are all equal to each other and greater than everything else.
fn compare_criteria<K: PartialOrd>(lhs: &K, rhs: &K) -> Ordering {
    let lhs_ordered = lhs.partial_cmp(lhs).is_some();
    let rhs_ordered = rhs.partial_cmp(rhs).is_some();

    match (lhs_ordered, rhs_ordered) {
        (true, true) => lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}
