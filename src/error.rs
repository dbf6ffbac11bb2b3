//! Error types for the few operations that accept dynamically typed input.
//!
//! Strongly typed operations can't be handed the wrong kind of collection, so they never fail.
//! Errors only surface where a value is inspected at runtime: JSON values used as collections or
//! records, and methods looked up by name.

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A value was neither a sequence nor a mapping (or otherwise not the kind the operation needs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    pub expected: &'static str,
    pub found: &'static str,
}

impl InvalidArgument {
    pub const fn new(expected: &'static str, found: &'static str) -> InvalidArgument {
        InvalidArgument { expected, found }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid argument: expected {}, found {}!", self.expected, self.found)
    }
}

impl StdError for InvalidArgument {}

/// A method was invoked by name on an element that doesn't provide it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod {
    pub name: String,
}

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown method `{}`, the element doesn't provide it!", self.name)
    }
}

impl StdError for UnknownMethod {}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum UtilError {
    InvalidArgument(InvalidArgument),
    UnknownMethod(UnknownMethod),
}

pub type Result<T> = std::result::Result<T, UtilError>;
