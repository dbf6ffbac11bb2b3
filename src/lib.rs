//! A utility belt of functional helpers for collections, objects and functions.
//!
//! # Purpose
//! This crate provides the small, everyday helpers that a functional style leans on: iterating,
//! filtering, mapping and reducing collections, merging objects and decorating functions. It
//! covers the basic surface of the classic JavaScript utility-belt libraries, but with signatures
//! that make sense in Rust.
//!
//! # Method
//! Every collection helper works on anything implementing
//! [`Collection`](collections::Collection), which is implemented for slices, arrays, [`Vec`],
//! [`VecDeque`](std::collections::VecDeque), [`BTreeMap`](std::collections::BTreeMap) and
//! [`HashMap`](std::collections::HashMap). Sequences are walked in index order and pass the index
//! to callbacks, mappings are walked in their own order and pass the key.
//!
//! A few contracts are phrased in terms of dynamic typing: a callback's result only needs to be
//! "truthy" and duplicates are found with "loose" equality. These are expressed with the
//! [`Truthy`](traits::Truthy) and [`LooseEq`](traits::LooseEq) traits, so that a closure can return
//! a [`bool`], a number or an [`Option`] and get the behaviour it would expect. When the `json`
//! feature is enabled, [`serde_json::Value`] takes part in all of this with its full coercion
//! rules, and can be used as a collection through
//! [`JsonCollection`](collections::JsonCollection) or as an object directly.
//!
//! No helper mutates its input collection. Mutable state only exists inside the decorators, which
//! each own their cache.
//!
//! # Error Handling
//! Most helpers can't fail: if a value isn't a suitable collection, the call doesn't compile.
//! Errors only exist where values are inspected at runtime, such as a JSON value used as an array
//! or object, or a method looked up by name. Those operations return a [`Result`] with a
//! [`UtilError`], an enum of strongly typed error structs that each implement
//! [`Error`](std::error::Error).
//!
//! Optional arguments aren't emulated with sentinels. Where a helper has an optional parameter, it
//! is split into two functions (for example [`first`](collections::first) and
//! [`first_n`](collections::first_n)) and "not found" is [`None`] rather than `-1`.
//!
//! # Dependencies
//! - `derive_more` for the repetitive trait impls on error types.
//! - `tracing` for diagnostics from the scheduler and decorators. This crate never installs a
//!   subscriber, that's left to the application (the demo binary shows how).
//! - `serde_json` (feature `json`) for dynamically typed input.
//! - `rand` (feature `random`) for [`shuffle`](collections::shuffle).
//!
//! The `timers` feature enables the cooperative [`Scheduler`](functions::Scheduler) along with
//! [`delay`](functions::delay) and [`throttle`](functions::throttle). All features are on by
//! default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error;
pub mod functions;
pub mod objects;
pub mod traits;

pub(crate) mod util;

pub use error::{Result, UtilError};
