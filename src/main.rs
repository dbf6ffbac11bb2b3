use std::collections::BTreeMap;

use tracing::info;
use tracing_subscriber::EnvFilter;
use utility_belt::collections::{filter, map, reduce, sort_by, uniq, zip};
use utility_belt::functions::{memoize, once};
use utility_belt::objects::{defaults, extend};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n[Collections]\n");

    let numbers = [4_i32, 8, 15, 16, 23, 42];
    println!("{:?}", map(&numbers, |n, index, _| n * index as i32));
    println!("{:?}", filter(&numbers, |n, _, _| n % 2));
    println!("{:?}", reduce(&numbers, |total, n| total + n, None::<i32>));
    println!("{:?}", uniq(&[1, 1, 2, 3, 2]));
    println!("{:?}", sort_by(&["ccc", "a", "bb"], |word, _, _| word.len()));
    println!("{:?}", zip(&[&["moe", "larry"][..], &["30", "40", "50"][..]]));

    println!("\n[Objects]\n");

    let mut options = BTreeMap::from([("flavor".to_owned(), "chocolate")]);
    let fallback = BTreeMap::from([
        ("flavor".to_owned(), "vanilla"),
        ("sprinkles".to_owned(), "lots"),
    ]);
    let overrides = BTreeMap::from([("cone".to_owned(), "waffle")]);
    let merged = defaults(&mut options, [&fallback]).and_then(|options| extend(options, [&overrides]));
    if let Err(error) = merged {
        println!("{error}");
    }
    println!("{options:?}");

    println!("\n[Functions]\n");

    let mut setup = once(|()| {
        info!("Running setup");
        "ready"
    });
    println!("{} {}", setup.call(()), setup.call(()));

    let mut slow_square = memoize(|n: &u64| n * n);
    println!("{} {}", slow_square.call(12), slow_square.call(12));

    #[cfg(feature = "timers")]
    timers();

    #[cfg(feature = "json")]
    json();
}

#[cfg(feature = "timers")]
fn timers() {
    use std::time::Duration;

    use utility_belt::functions::{Scheduler, delay, throttle};

    println!("\n[Timers]\n");

    let scheduler = Scheduler::new();
    delay(&scheduler, |message| println!("{message}"), Duration::from_millis(20), "delayed");

    let report = throttle(&scheduler, |step: u32| println!("step {step}"), Duration::from_millis(10));
    for step in 0..5 {
        report.call(step);
    }

    let fired = scheduler.run_until_idle();
    info!(fired, "Scheduler drained");
}

#[cfg(feature = "json")]
fn json() {
    use serde_json::json;
    use utility_belt::collections::{JsonCollection, flatten_value, some_truthy};

    println!("\n[JSON]\n");

    let value = json!([0, "", [null, [1, 2]], "x"]);
    match JsonCollection::try_from(&value) {
        Ok(collection) => println!("{}", some_truthy(&collection)),
        Err(error) => println!("{error}"),
    }
    match flatten_value(&value) {
        Ok(flat) => println!("{flat:?}"),
        Err(error) => println!("{error}"),
    }
    println!("{:?}", uniq(&[json!(1), json!("1"), json!(2)]));
}
