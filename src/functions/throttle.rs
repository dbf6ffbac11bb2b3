use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use super::Scheduler;
use crate::util::fmt::DebugRaw;

/// A function that runs at most once per window, created with [`throttle`].
///
/// A call outside a window runs the function straight away and opens a window of the throttle's
/// wait. Calls inside the window don't run it. Instead they remember their arguments, replacing
/// any remembered before, and make sure a single trailing call is scheduled for the end of the
/// window. The trailing call runs with the latest arguments and opens a new window of its own.
///
/// Cloning a throttle produces another handle to the same function and window.
pub struct Throttle<A, R> {
    inner: Rc<Inner<A, R>>,
}

struct Inner<A, R> {
    func: RefCell<Box<dyn FnMut(A) -> R>>,
    state: RefCell<State<A, R>>,
    scheduler: Scheduler,
    wait: Duration,
}

struct State<A, R> {
    // Bumped by every leading call, so trailing calls scheduled before it are dropped.
    generation: u64,
    window_end: Option<Duration>,
    pending: Option<A>,
    trailing_scheduled: bool,
    last_result: Option<R>,
}

/// Wraps `func` so that it runs at most once every `wait`, see [`Throttle`].
///
/// Trailing calls are scheduled on `scheduler`, so they only happen when it is run.
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use utility_belt::functions::{ManualClock, Scheduler, throttle};
/// let scheduler = Scheduler::with_clock(ManualClock::new());
/// let double = throttle(&scheduler, |n: u32| n * 2, Duration::from_millis(100));
///
/// assert_eq!(double.call(1), Some(2));
/// assert_eq!(double.call(2), Some(2), "Inside the window, the last result is returned.");
/// assert_eq!(double.call(3), Some(2));
///
/// scheduler.run_until_idle();
/// assert_eq!(double.last_result(), Some(6), "The trailing call uses the latest arguments.");
/// ```
pub fn throttle<F, A, R>(scheduler: &Scheduler, func: F, wait: Duration) -> Throttle<A, R>
where
    F: FnMut(A) -> R + 'static,
{
    Throttle {
        inner: Rc::new(Inner {
            func: RefCell::new(Box::new(func)),
            state: RefCell::new(State {
                generation: 0,
                window_end: None,
                pending: None,
                trailing_scheduled: false,
                last_result: None,
            }),
            scheduler: scheduler.clone(),
            wait,
        }),
    }
}

impl<A: 'static, R: Clone + 'static> Throttle<A, R> {
    /// Calls the function if no window is open, otherwise defers it to the end of the window.
    ///
    /// Returns the result of the most recent call that actually ran, which is None if the function
    /// hasn't run yet.
    ///
    /// # Panics
    /// Panics if called from within the throttled function itself.
    pub fn call(&self, args: A) -> Option<R> {
        let now = self.inner.scheduler.now();
        let mut state = self.inner.state.borrow_mut();

        if state.window_end.is_none_or(|end| now >= end) {
            state.generation = state.generation.wrapping_add(1);
            state.pending = None;
            state.trailing_scheduled = false;
            drop(state);
            return Some(self.run(args));
        }

        state.pending = Some(args);
        if !state.trailing_scheduled {
            state.trailing_scheduled = true;
            let wait = state.window_end.map_or(Duration::ZERO, |end| end.saturating_sub(now));
            debug!(?wait, "Scheduling trailing throttled call");

            let throttle = self.clone();
            let generation = state.generation;
            self.inner.scheduler.schedule(wait, move || throttle.trailing(generation));
        }
        state.last_result.clone()
    }

    /// Returns the result of the most recent call that actually ran.
    pub fn last_result(&self) -> Option<R> {
        self.inner.state.borrow().last_result.clone()
    }

    fn trailing(&self, generation: u64) {
        let pending = {
            let mut state = self.inner.state.borrow_mut();
            if state.generation != generation {
                debug!("Dropping trailing throttled call superseded by a leading call");
                return;
            }
            state.trailing_scheduled = false;
            state.pending.take()
        };

        if let Some(args) = pending {
            debug!("Running trailing throttled call");
            self.run(args);
        }
    }

    fn run(&self, args: A) -> R {
        let result = (&mut *self.inner.func.borrow_mut())(args);

        let mut state = self.inner.state.borrow_mut();
        state.window_end = Some(self.inner.scheduler.now().saturating_add(self.inner.wait));
        state.last_result = Some(result.clone());
        result
    }
}

impl<A, R> Clone for Throttle<A, R> {
    fn clone(&self) -> Self {
        Throttle {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, R: Debug> Debug for Throttle<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Throttle")
            .field("func", &DebugRaw("FnMut"))
            .field("wait", &self.inner.wait)
            .field("window_end", &state.window_end)
            .field("trailing_scheduled", &state.trailing_scheduled)
            .field("last_result", &state.last_result)
            .finish()
    }
}
