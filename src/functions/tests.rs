#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_identity() {
    assert_eq!(identity(5), 5);
    assert_eq!(identity("text"), "text");
    assert_eq!(identity(None::<u8>), None);
}

#[test]
fn test_once_calls_func_once() {
    let mut calls = 0;
    let mut counter = once(|step: u32| {
        calls += 1;
        step * 10
    });

    assert!(!counter.called());
    assert_eq!(counter.result(), None);
    for step in 1..=5 {
        assert_eq!(counter.call(step), 10, "Later arguments should be ignored.");
    }
    assert!(counter.called());
    assert_eq!(counter.result(), Some(&10));
    drop(counter);
    assert_eq!(calls, 1);
}

#[test]
fn test_once_poisoned_after_panic() {
    let mut failing = once(|fail: bool| {
        if fail {
            panic!("first call failed");
        }
    });

    assert_panics!({ failing.call(true) }, "The wrapped function's panic should propagate.");
    assert!(failing.called());
    assert_eq!(failing.result(), None);
    assert_panics!(
        { failing.call(false) },
        "A once-guard whose function panicked should refuse to run again."
    );
}

#[test]
fn test_memoize() {
    let mut calls = Vec::new();
    let mut square = memoize(|n: &i64| {
        calls.push(*n);
        n * n
    });

    assert_eq!(square.call(4), 16);
    assert_eq!(square.call(4), 16);
    assert_eq!(square.call(-4), 16);
    assert_eq!(square.call(4), 16);
    assert!(square.is_cached(&-4));
    assert!(!square.is_cached(&3));
    assert_eq!(square.cached_len(), 2);
    drop(square);
    assert_eq!(calls, [4, -4], "Each distinct argument should be computed once.");
}

#[test]
fn test_memoize_string_keys() {
    let mut length = memoize(|text: &String| text.chars().count());

    assert_eq!(length.call("héllo".to_owned()), 5);
    assert_eq!(length.call(String::new()), 0);
    assert_eq!(length.cached_len(), 2);
    assert!(format!("{length:?}").starts_with("Memoize { func: FnMut"));
}

#[cfg(feature = "timers")]
mod timers {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn recorder<T>() -> (Rc<RefCell<Vec<T>>>, Rc<RefCell<Vec<T>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Rc::clone(&log), log)
    }

    #[test]
    fn test_scheduler_order() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        let (log, sink) = recorder();

        for (name, wait) in [("c", 30), ("a", 10), ("b", 10), ("d", 0)] {
            let sink = Rc::clone(&sink);
            scheduler.schedule(ms(wait), move || sink.borrow_mut().push(name));
        }
        assert_eq!(scheduler.pending(), 4);
        assert_eq!(scheduler.next_due(), Some(ms(0)));

        assert_eq!(scheduler.run_until_idle(), 4);
        assert_eq!(
            *log.borrow(),
            ["d", "a", "b", "c"],
            "Timers should fire by due time, then by scheduling order."
        );
        assert!(scheduler.is_idle());
        assert_eq!(clock.now(), ms(30), "The clock should end at the last due time.");
    }

    #[test]
    fn test_scheduler_run_until() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        let (log, sink) = recorder();

        for wait in [10, 20, 30] {
            let sink = Rc::clone(&sink);
            scheduler.schedule(ms(wait), move || sink.borrow_mut().push(wait));
        }

        assert_eq!(scheduler.run_until(ms(5)), 0, "Nothing should fire early.");
        assert_eq!(scheduler.now(), ms(5));
        assert_eq!(scheduler.run_until(ms(20)), 2, "Timers due at the deadline should fire.");
        assert_eq!(*log.borrow(), [10, 20]);
        assert_eq!(scheduler.advance(ms(100)), 1);
        assert_eq!(scheduler.now(), ms(120));
        assert!(!scheduler.run_next());
    }

    #[test]
    fn test_scheduler_reentrant_actions() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        let (log, sink) = recorder();

        let handle = scheduler.clone();
        scheduler.schedule(ms(10), move || {
            sink.borrow_mut().push(handle.now());
            let sink = Rc::clone(&sink);
            let inner = handle.clone();
            handle.schedule(ms(5), move || sink.borrow_mut().push(inner.now()));
        });

        assert_eq!(scheduler.run_until_idle(), 2);
        assert_eq!(
            *log.borrow(),
            [ms(10), ms(15)],
            "Actions scheduled while running should be relative to the current time."
        );
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        clock.advance(ms(40));
        scheduler.schedule(ms(10), || {});

        assert_eq!(scheduler.next_due(), Some(ms(50)), "Waits should be measured from now.");
        clock.advance_to(ms(20));
        assert_eq!(clock.now(), ms(40), "The clock should never go backwards.");
    }

    #[test]
    fn test_system_clock_waits() {
        let scheduler = Scheduler::new();
        let (log, sink) = recorder();

        delay(&scheduler, move |()| sink.borrow_mut().push(()), ms(5), ());
        assert!(log.borrow().is_empty());

        scheduler.run_until_idle();
        assert_eq!(log.borrow().len(), 1);
        assert!(scheduler.now() >= ms(5), "A timer shouldn't fire before its due time.");
    }

    #[test]
    fn test_delay() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let (log, sink) = recorder();

        let later = Rc::clone(&sink);
        delay(&scheduler, move |(a, b)| later.borrow_mut().push(a + b), ms(20), (1, 2));
        delay(&scheduler, move |n| sink.borrow_mut().push(n), ms(10), 7);
        assert!(log.borrow().is_empty(), "Delayed calls shouldn't run immediately.");

        scheduler.run_until_idle();
        assert_eq!(*log.borrow(), [7, 3]);
    }

    #[test]
    fn test_throttle_leading_and_trailing() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        let (log, sink) = recorder();

        let throttled = throttle(
            &scheduler,
            move |n: u32| {
                sink.borrow_mut().push(n);
                n
            },
            ms(100),
        );

        assert_eq!(throttled.call(1), Some(1), "The first call should run immediately.");
        clock.advance(ms(30));
        assert_eq!(throttled.call(2), Some(1));
        clock.advance(ms(30));
        assert_eq!(throttled.call(3), Some(1));
        assert_eq!(*log.borrow(), [1]);
        assert_eq!(scheduler.pending(), 1, "Only one trailing call should be scheduled.");

        assert!(scheduler.run_next());
        assert_eq!(*log.borrow(), [1, 3], "The trailing call should use the latest arguments.");
        assert_eq!(clock.now(), ms(100));

        assert_eq!(throttled.call(4), Some(3), "The trailing call should open a new window.");
        assert_eq!(scheduler.pending(), 1);
        scheduler.run_until_idle();
        assert_eq!(*log.borrow(), [1, 3, 4]);
        assert_eq!(clock.now(), ms(200));
    }

    #[test]
    fn test_throttle_after_window() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        let mut calls = 0;
        let throttled = throttle(
            &scheduler,
            move |()| {
                calls += 1;
                calls
            },
            ms(50),
        );

        assert_eq!(throttled.call(()), Some(1));
        clock.advance(ms(50));
        assert_eq!(throttled.call(()), Some(2), "A call at the window's end should run.");
        assert!(scheduler.is_idle(), "No trailing call is needed without calls in the window.");
        assert_eq!(throttled.last_result(), Some(2));
    }

    #[test]
    fn test_throttle_leading_call_supersedes_trailing() {
        let clock = ManualClock::new();
        let scheduler = Scheduler::with_clock(clock.clone());
        let (log, sink) = recorder();

        let throttled = throttle(
            &scheduler,
            move |n: u32| {
                sink.borrow_mut().push(n);
                n
            },
            ms(100),
        );

        assert_eq!(throttled.call(1), Some(1));
        clock.advance(ms(30));
        assert_eq!(throttled.call(2), Some(1));
        assert_eq!(scheduler.pending(), 1);

        // The window closes without the scheduler being run.
        clock.advance(ms(100));
        assert_eq!(throttled.call(3), Some(3), "A call after the window should run immediately.");

        scheduler.run_until_idle();
        assert_eq!(
            *log.borrow(),
            [1, 3],
            "A trailing call scheduled before a newer leading call shouldn't run."
        );
        assert_eq!(throttled.last_result(), Some(3));

        clock.advance(ms(10));
        assert_eq!(throttled.call(4), Some(3), "The leading call's window should still be open.");
        scheduler.run_until_idle();
        assert_eq!(*log.borrow(), [1, 3, 4]);
    }
}
