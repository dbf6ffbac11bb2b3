use crate::error::{Result, UnknownMethod};

/// Methods that can be looked up on a value by name, all taking arguments of type `A`.
///
/// This is what [`invoke_method`](crate::collections::invoke_method) dispatches through. Names
/// that the implementor doesn't recognise should produce an [`UnknownMethod`] error, see
/// [`unknown_method`].
pub trait Methods<A: ?Sized> {
    type Output;

    fn call_method(&self, name: &str, args: &A) -> Result<Self::Output>;
}

/// Builds the error for a method called `name` that doesn't exist.
pub fn unknown_method<T>(name: &str) -> Result<T> {
    Err(UnknownMethod { name: name.to_owned() }.into())
}

/// | Method | Result |
/// |-|-|
/// | `to_uppercase` | [`str::to_uppercase`] |
/// | `to_lowercase` | [`str::to_lowercase`] |
/// | `trim` | [`str::trim`] |
/// | `reverse` | The characters in reverse order |
impl Methods<()> for String {
    type Output = String;

    fn call_method(&self, name: &str, _args: &()) -> Result<String> {
        match name {
            "to_uppercase" => Ok(self.to_uppercase()),
            "to_lowercase" => Ok(self.to_lowercase()),
            "trim" => Ok(self.trim().to_owned()),
            "reverse" => Ok(self.chars().rev().collect()),
            _ => unknown_method(name),
        }
    }
}

/// | Method | Result |
/// |-|-|
/// | `sort` | A sorted copy |
/// | `reverse` | A reversed copy |
/// | `dedup` | A copy with consecutive repeats removed |
impl<T: Ord + Clone> Methods<()> for Vec<T> {
    type Output = Vec<T>;

    fn call_method(&self, name: &str, _args: &()) -> Result<Vec<T>> {
        let mut copy = self.clone();
        match name {
            "sort" => copy.sort(),
            "reverse" => copy.reverse(),
            "dedup" => copy.dedup(),
            _ => return unknown_method(name),
        }
        Ok(copy)
    }
}

/// | Method | Result |
/// |-|-|
/// | `join` | The elements joined with the separator |
impl Methods<str> for Vec<String> {
    type Output = String;

    fn call_method(&self, name: &str, separator: &str) -> Result<String> {
        match name {
            "join" => Ok(self.join(separator)),
            _ => unknown_method(name),
        }
    }
}
