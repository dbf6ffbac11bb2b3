use derive_more::IsVariant;

/// A sequence element which is either a plain item or a further nested sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

/// Flattens an arbitrarily deep sequence into the items it contains, depth first.
///
/// # Examples
/// ```
/// # use utility_belt::collections::{flatten, Nested::*};
/// let nested = [Item(1), List(vec![Item(2), List(vec![Item(3)]), List(vec![])]), Item(4)];
/// assert_eq!(flatten(&nested), [1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], result: &mut Vec<T>) {
    for element in nested {
        match element {
            Nested::Item(item) => result.push(item.clone()),
            Nested::List(list) => flatten_into(list, result),
        }
    }
}

#[cfg(feature = "json")]
pub use json::flatten_value;

#[cfg(feature = "json")]
mod json {
    use serde_json::Value;

    use crate::collections::json::json_kind;
    use crate::error::{InvalidArgument, Result};

    /// Flattens a JSON array of arbitrarily nested arrays into the non-array values it contains,
    /// depth first.
    ///
    /// Returns an [`InvalidArgument`] error if `nested` isn't an array.
    ///
    /// # Examples
    /// ```
    /// # use serde_json::json;
    /// # use utility_belt::collections::flatten_value;
    /// let nested = json!([1, [2, [3, [[4]]]], {"a": [5]}]);
    /// let flat = flatten_value(&nested).unwrap();
    /// assert_eq!(flat, [json!(1), json!(2), json!(3), json!(4), json!({"a": [5]})]);
    /// assert!(flatten_value(&json!("abc")).is_err());
    /// ```
    pub fn flatten_value(nested: &Value) -> Result<Vec<Value>> {
        let Value::Array(values) = nested else {
            return Err(InvalidArgument::new("an array", json_kind(nested)).into());
        };

        let mut result = Vec::new();
        flatten_values_into(values, &mut result);
        Ok(result)
    }

    fn flatten_values_into(values: &[Value], result: &mut Vec<Value>) {
        for value in values {
            match value {
                Value::Array(inner) => flatten_values_into(inner, result),
                other => result.push(other.clone()),
            }
        }
    }
}
