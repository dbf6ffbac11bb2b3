//! Value-level traits that stand in for dynamic typing.
//!
//! The helpers in this crate are generic, but a few of their contracts are phrased in terms of
//! truthiness and coercive equality. These traits give those notions a static, opt-in form.

mod loose_eq;
mod truthy;

pub use loose_eq::*;
pub use truthy::*;
