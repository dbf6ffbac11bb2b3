//! A single-threaded cooperative scheduler for deferred function calls.
//!
//! Nothing runs in the background: scheduled actions are queued with a due time and only run when
//! the owner of the [`Scheduler`] drives it, with [`run_next`](Scheduler::run_next),
//! [`run_until`](Scheduler::run_until) or [`run_until_idle`](Scheduler::run_until_idle). Time is
//! read from a [`Clock`], which is either the wall clock or a [`ManualClock`] that only moves when
//! the scheduler waits on it.

use std::cell::{Cell, RefCell};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::util::fmt::DebugRaw;

/// A source of time for a [`Scheduler`], measured as the [`Duration`] since some fixed epoch.
pub trait Clock {
    /// Returns the time since the clock's epoch.
    fn now(&self) -> Duration;

    /// Waits until the clock reads at least `instant`. Returns immediately if it already does.
    fn advance_to(&self, instant: Duration);
}

/// The wall clock, with its epoch at the moment it was created. Waiting sleeps the current thread.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn advance_to(&self, instant: Duration) {
        if let Some(remaining) = instant.checked_sub(self.now()) {
            thread::sleep(remaining);
        }
    }
}

/// A virtual clock that starts at zero and only moves when told to. Waiting jumps straight to the
/// requested time, so timers can be tested without sleeping.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock::default()
    }

    /// Moves the clock forward by `duration` without running anything.
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get().saturating_add(duration));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn advance_to(&self, instant: Duration) {
        if instant > self.now.get() {
            self.now.set(instant);
        }
    }
}

type Action = Box<dyn FnOnce()>;

struct Timer {
    due: Duration,
    sequence: u64,
    action: Action,
}

impl Timer {
    const fn order_key(&self) -> (Duration, u64) {
        (self.due, self.sequence)
    }
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.order_key() == other.order_key()
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

struct Inner {
    clock: Box<dyn Clock>,
    queue: RefCell<BinaryHeap<Reverse<Timer>>>,
    next_sequence: Cell<u64>,
}

/// A queue of actions waiting for their due time, see the [module docs](self).
///
/// Cloning a scheduler produces another handle to the same queue, which is how actions schedule
/// further actions. Timers never fire before their due time, and timers due at the same time fire
/// in the order they were scheduled.
#[derive(Clone)]
pub struct Scheduler {
    inner: Rc<Inner>,
}

impl Scheduler {
    /// Creates a scheduler driven by the wall clock.
    pub fn new() -> Scheduler {
        Scheduler::with_clock(SystemClock::new())
    }

    /// Creates a scheduler driven by `clock`.
    pub fn with_clock<C: Clock + 'static>(clock: C) -> Scheduler {
        Scheduler {
            inner: Rc::new(Inner {
                clock: Box::new(clock),
                queue: RefCell::new(BinaryHeap::new()),
                next_sequence: Cell::new(0),
            }),
        }
    }

    /// Returns the current time on the scheduler's clock.
    pub fn now(&self) -> Duration {
        self.inner.clock.now()
    }

    /// Queues `action` to run once `wait` has passed, measured from now.
    pub fn schedule<F: FnOnce() + 'static>(&self, wait: Duration, action: F) {
        let sequence = self.inner.next_sequence.get();
        self.inner.next_sequence.set(sequence.wrapping_add(1));

        let due = self.now().saturating_add(wait);
        trace!(?due, sequence, "Scheduling timer");
        self.inner.queue.borrow_mut().push(Reverse(Timer {
            due,
            sequence,
            action: Box::new(action),
        }));
    }

    /// Returns the number of actions waiting to run.
    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.queue.borrow().is_empty()
    }

    /// Returns the due time of the next action to run, if there is one.
    pub fn next_due(&self) -> Option<Duration> {
        self.inner.queue.borrow().peek().map(|Reverse(timer)| timer.due)
    }

    /// Waits for the next action to become due and runs it, returning false if there was nothing to
    /// run.
    pub fn run_next(&self) -> bool {
        // The queue must be released before running, the action may schedule more.
        let Some(Reverse(timer)) = self.inner.queue.borrow_mut().pop() else {
            return false;
        };

        self.inner.clock.advance_to(timer.due);
        debug!(due = ?timer.due, sequence = timer.sequence, "Firing timer");
        (timer.action)();
        true
    }

    /// Runs actions until none are left, including any scheduled along the way. Returns the number
    /// of actions run.
    pub fn run_until_idle(&self) -> usize {
        let mut count = 0;
        while self.run_next() {
            count += 1;
        }
        count
    }

    /// Runs every action due at or before `deadline`, then waits until `deadline` itself. Returns
    /// the number of actions run.
    pub fn run_until(&self, deadline: Duration) -> usize {
        let mut count = 0;
        while self.next_due().is_some_and(|due| due <= deadline) {
            self.run_next();
            count += 1;
        }
        self.inner.clock.advance_to(deadline);
        count
    }

    /// Runs every action due within `duration` from now. Shorthand for [`run_until`] with a
    /// relative deadline.
    ///
    /// [`run_until`]: Scheduler::run_until
    pub fn advance(&self, duration: Duration) -> usize {
        self.run_until(self.now().saturating_add(duration))
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Scheduler {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .field("clock", &DebugRaw("dyn Clock"))
            .finish()
    }
}
