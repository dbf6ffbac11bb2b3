#![cfg(test)]

use std::collections::{BTreeMap, HashMap};

use super::*;

fn record<const N: usize>(entries: [(&str, i32); N]) -> BTreeMap<String, i32> {
    entries.into_iter().map(|(name, value)| (name.to_owned(), value)).collect()
}

#[test]
fn test_record_properties() {
    let map = record([("b", 2), ("a", 1)]);

    assert_eq!(map.property("a"), Some(&1));
    assert_eq!(map.property("c"), None);
    assert_eq!(map.properties().collect::<Vec<_>>(), [("a", &1), ("b", &2)]);
    assert!(map.is_defined("b"));
    assert!(!map.is_defined("c"));
}

#[test]
fn test_extend() {
    let mut target = record([("a", 1), ("keep", 0)]);
    let first = record([("a", 2), ("b", 2)]);
    let second = record([("b", 3), ("c", 3)]);

    let result = extend(&mut target, [&first, &second]).expect("maps are always assignable");
    assert_eq!(
        *result,
        record([("a", 2), ("b", 3), ("c", 3), ("keep", 0)]),
        "Later sources should overwrite earlier ones."
    );

    let mut untouched = record([("a", 1)]);
    extend(&mut untouched, [] as [&BTreeMap<String, i32>; 0]).expect("maps are always assignable");
    assert_eq!(untouched, record([("a", 1)]), "No sources should leave the target alone.");
}

#[test]
fn test_extend_between_map_kinds() {
    let mut target = HashMap::from([("x".to_owned(), 'x')]);
    let source = BTreeMap::from([("y".to_owned(), 'y')]);

    extend(&mut target, [&source]).expect("maps are always assignable");
    assert_eq!(target.len(), 2);
    assert_eq!(target.property("y"), Some(&'y'));
}

#[test]
fn test_defaults() {
    let mut target = record([("a", 1)]);
    let first = record([("a", 10), ("b", 20)]);
    let second = record([("b", 200), ("c", 300)]);

    defaults(&mut target, [&first, &second]).expect("maps are always assignable");
    assert_eq!(
        target,
        record([("a", 1), ("b", 20), ("c", 300)]),
        "Existing properties and the first provided default should win."
    );
}

#[cfg(feature = "json")]
#[test]
fn test_json_records() {
    use serde_json::json;

    use crate::error::{InvalidArgument, UtilError};

    let mut target = json!({ "name": "moe", "age": null });
    extend(&mut target, [&json!({ "age": 40 }), &json!([1, 2]), &json!("ignored")])
        .expect("objects are assignable");
    assert_eq!(
        target,
        json!({ "name": "moe", "age": 40 }),
        "Sources without properties should contribute nothing."
    );

    let mut options = json!({ "zero": 0, "missing": null });
    defaults(&mut options, [&json!({ "zero": 1, "missing": 1, "extra": 1 })])
        .expect("objects are assignable");
    assert_eq!(
        options,
        json!({ "zero": 0, "missing": null, "extra": 1 }),
        "Present properties should count as defined even when falsy or null."
    );

    let mut number = json!(5);
    let error = extend(&mut number, [&json!({ "a": 1 })]).expect_err("numbers have no properties");
    assert_eq!(error, UtilError::from(InvalidArgument::new("an object", "a number")));
    assert_eq!(number, json!(5), "A failed merge shouldn't change the target.");

    let mut nothing = json!(null);
    assert!(defaults(&mut nothing, [] as [&serde_json::Value; 0]).is_err());
}

#[test]
fn test_methods() {
    let word = "  Hello ".to_owned();
    assert_eq!(word.call_method("trim", &()), Ok("Hello".to_owned()));
    assert_eq!(word.call_method("to_uppercase", &()), Ok("  HELLO ".to_owned()));
    assert_eq!("abc".to_owned().call_method("reverse", &()), Ok("cba".to_owned()));

    let numbers = vec![3, 1, 2, 2];
    assert_eq!(numbers.call_method("sort", &()), Ok(vec![1, 2, 2, 3]));
    assert_eq!(numbers.call_method("reverse", &()), Ok(vec![2, 2, 1, 3]));
    assert_eq!(numbers, [3, 1, 2, 2], "Methods shouldn't modify the receiver.");

    let parts = vec!["a".to_owned(), "b".to_owned()];
    assert_eq!(parts.call_method("join", "-"), Ok("a-b".to_owned()));

    let error = word.call_method("fly", &()).expect_err("strings can't fly");
    assert!(error.is_unknown_method());
    assert_eq!(error.to_string(), "Unknown method `fly`, the element doesn't provide it!");
}
