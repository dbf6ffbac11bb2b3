use std::time::Duration;

use super::Scheduler;

/// Schedules `func` to be called with `args` on `scheduler` once `wait` has passed.
///
/// This returns immediately, the call only happens when the scheduler is run. There is no way to
/// cancel it.
///
/// # Examples
/// ```
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// # use std::time::Duration;
/// # use utility_belt::functions::{ManualClock, Scheduler, delay};
/// let scheduler = Scheduler::with_clock(ManualClock::new());
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&log);
/// delay(&scheduler, move |message| sink.borrow_mut().push(message), Duration::from_millis(50), "hi");
/// assert!(log.borrow().is_empty());
///
/// scheduler.run_until_idle();
/// assert_eq!(*log.borrow(), ["hi"]);
/// assert_eq!(scheduler.now(), Duration::from_millis(50));
/// ```
pub fn delay<F, A>(scheduler: &Scheduler, func: F, wait: Duration, args: A)
where
    F: FnOnce(A) + 'static,
    A: 'static,
{
    scheduler.schedule(wait, move || func(args));
}
