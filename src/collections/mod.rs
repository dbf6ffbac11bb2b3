//! Helpers that operate on collections of values.
//!
//! # Purpose
//! A collection here is either an ordered sequence or a mapping of keys to values. Both are
//! accepted by the same helpers through the [`Collection`] trait, which is the only thing the
//! helpers know about their input.
//!
//! # Method
//! Almost everything is built on [`each`]. [`filter`] and [`map`] iterate with it directly,
//! [`reduce`] folds with it, and the predicates ([`contains`], [`every`], [`some`]) are reductions.
//! None of the helpers mutate their input: results are always new sequences (or borrowed views of
//! the input).
//!
//! Dynamically typed input is supported through [`JsonCollection`], which is the one place an
//! unsuitable collection is rejected at runtime rather than by the type system.

mod advanced;
mod collection;
mod filtering;
mod iteration;
#[cfg(feature = "json")]
pub(crate) mod json;
mod reduction;
#[cfg(feature = "random")]
mod shuffle;
mod transform;

pub use advanced::*;
pub use collection::*;
pub use filtering::*;
pub use iteration::*;
#[cfg(feature = "json")]
pub use json::{JsonCollection, JsonKey};
pub use reduction::*;
#[cfg(feature = "random")]
pub use shuffle::*;
pub use transform::*;
