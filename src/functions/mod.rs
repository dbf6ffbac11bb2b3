//! Helpers that wrap or defer other functions.
//!
//! The decorators ([`Once`], [`Memoize`] and [`Throttle`]) each own the state they need, one
//! instance per wrapped function, so there is nothing global to reset. Deferred calls ([`delay`]
//! and trailing throttled calls) go through a [`Scheduler`], which only runs them when it is
//! driven by its owner.

mod identity;
mod memoize;
mod once;
#[cfg(feature = "timers")]
mod delay;
#[cfg(feature = "timers")]
pub mod scheduler;
#[cfg(feature = "timers")]
mod throttle;
mod tests;

pub use identity::*;
pub use memoize::*;
pub use once::*;
#[cfg(feature = "timers")]
pub use delay::*;
#[cfg(feature = "timers")]
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock};
#[cfg(feature = "timers")]
pub use throttle::*;
