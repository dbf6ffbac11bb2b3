//! Helpers that operate on object-like values.
//!
//! An object is anything implementing [`Record`]: string-keyed maps and JSON values. Properties
//! are copied between records with [`extend`] and [`defaults`], and named methods are dispatched
//! through [`Methods`].

mod merge;
mod methods;
mod record;
mod tests;

pub use merge::*;
pub use methods::*;
pub use record::*;
