//! Collection operations that go beyond a single pass: sorting, zipping, flattening and the set
//! operations between sequences.
//!
//! The set operations are lazy, returning borrowed iterators in the manner of
//! [`std::collections::hash_set::Intersection`]. The rest produce new sequences.

mod flatten;
mod set_ops;
mod sort;
mod zip;

pub use flatten::*;
pub use set_ops::*;
pub use sort::*;
pub use zip::*;
