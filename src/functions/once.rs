use std::fmt::{self, Debug, Formatter};
use std::mem;

use tracing::debug;

use crate::util::fmt::DebugRaw;

/// A function that is only ever called once, created with [`once`].
///
/// The first [`call`](Once::call) runs the wrapped function and keeps its result. Every later call
/// returns a clone of that result and ignores its arguments.
pub struct Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    state: State<F, R>,
    _args: std::marker::PhantomData<fn(A)>,
}

enum State<F, R> {
    Pending(F),
    Complete(R),
    /// The wrapped function panicked, so there is no result to return.
    Poisoned,
}

/// Wraps `func` so that it is called at most once, see [`Once`].
///
/// # Examples
/// ```
/// # use utility_belt::functions::once;
/// let mut calls = 0;
/// let mut initialize = once(|name: &str| {
///     calls += 1;
///     format!("{name} is ready")
/// });
///
/// assert_eq!(initialize.call("first"), "first is ready");
/// assert_eq!(initialize.call("second"), "first is ready");
/// drop(initialize);
/// assert_eq!(calls, 1);
/// ```
pub const fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: State::Pending(func),
        _args: std::marker::PhantomData,
    }
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Calls the wrapped function with `args` the first time, returning the cached result on every
    /// call after that.
    ///
    /// # Panics
    /// Panics if a previous call panicked while running the wrapped function, because there is no
    /// result to return. Any panic in the wrapped function itself is propagated.
    pub fn call(&mut self, args: A) -> R {
        match mem::replace(&mut self.state, State::Poisoned) {
            State::Pending(func) => {
                debug!("Running once-guarded function for the first time");
                let result = func(args);
                self.state = State::Complete(result.clone());
                result
            },
            State::Complete(result) => {
                self.state = State::Complete(result.clone());
                result
            },
            State::Poisoned => panic!("Once-guarded function panicked on its first call!"),
        }
    }
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    /// Returns true once the wrapped function has been called, including if it panicked.
    pub const fn called(&self) -> bool {
        !matches!(self.state, State::Pending(_))
    }

    /// Returns the cached result, if the wrapped function has completed.
    pub const fn result(&self) -> Option<&R> {
        match &self.state {
            State::Complete(result) => Some(result),
            _ => None,
        }
    }
}

impl<F, A, R: Debug> Debug for Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("Once");
        match &self.state {
            State::Pending(_) => builder.field("state", &DebugRaw("Pending")),
            State::Complete(result) => builder.field("result", result),
            State::Poisoned => builder.field("state", &DebugRaw("Poisoned")),
        };
        builder.finish()
    }
}
