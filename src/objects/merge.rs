use super::{Record, RecordMut};
use crate::error::Result;

/// Copies every property of each of the `sources` onto `target`, returning `target`.
///
/// Sources are applied in order, so a property present in several sources ends up with the value
/// from the last of them. Properties already on `target` are overwritten.
///
/// # Errors
/// Returns an error if `target` can't hold properties, such as a JSON value that isn't an object.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use utility_belt::objects::extend;
/// let mut target = BTreeMap::from([("a".to_owned(), 1)]);
/// let first = BTreeMap::from([("a".to_owned(), 2), ("b".to_owned(), 2)]);
/// let second = BTreeMap::from([("b".to_owned(), 3)]);
///
/// extend(&mut target, [&first, &second]).unwrap();
/// assert_eq!(target, BTreeMap::from([("a".to_owned(), 2), ("b".to_owned(), 3)]));
/// ```
pub fn extend<'t, 's, T, S>(
    target: &'t mut T,
    sources: impl IntoIterator<Item = &'s S>,
) -> Result<&'t mut T>
where
    T: RecordMut + ?Sized,
    T::Value: Clone,
    S: Record<Value = T::Value> + ?Sized + 's,
{
    target.check_assignable()?;

    for source in sources {
        for (name, value) in source.properties() {
            target.assign(name, value.clone())?;
        }
    }

    Ok(target)
}

/// Fills in properties of `target` that aren't defined yet from each of the `sources`, returning
/// `target`.
///
/// Existing properties of `target` are never overwritten. Among the sources, the first one to
/// provide a property wins.
///
/// # Errors
/// Returns an error if `target` can't hold properties, such as a JSON value that isn't an object.
///
/// # Examples
/// ```
/// # use serde_json::json;
/// # use utility_belt::objects::defaults;
/// let mut options = json!({ "flavor": "chocolate", "sprinkles": null });
/// defaults(&mut options, [&json!({ "flavor": "vanilla", "sprinkles": "lots", "cone": true })])
///     .unwrap();
/// assert_eq!(options, json!({ "flavor": "chocolate", "sprinkles": null, "cone": true }));
/// ```
pub fn defaults<'t, 's, T, S>(
    target: &'t mut T,
    sources: impl IntoIterator<Item = &'s S>,
) -> Result<&'t mut T>
where
    T: RecordMut + ?Sized,
    T::Value: Clone,
    S: Record<Value = T::Value> + ?Sized + 's,
{
    target.check_assignable()?;

    for source in sources {
        for (name, value) in source.properties() {
            if !target.is_defined(name) {
                target.assign(name, value.clone())?;
            }
        }
    }

    Ok(target)
}
