//! Property-based tests for the collection helpers and decorators.

use proptest::prelude::*;
use utility_belt::collections::{
    difference, every, filter, first_n, index_of, intersection, last_n, map, reduce, reject, some,
    sort_by, uniq,
};
use utility_belt::functions::{memoize, once};

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20_i32..20, 0..40)
}

proptest! {
    #[test]
    fn test_first_and_last_bounds(seq in small_ints(), n in 0_usize..60) {
        prop_assert_eq!(first_n(&seq, seq.len()), &seq[..]);
        prop_assert!(first_n(&seq, 0).is_empty());
        prop_assert_eq!(first_n(&seq, n).len(), n.min(seq.len()));
        prop_assert_eq!(last_n(&seq, n).len(), n.min(seq.len()));
        prop_assert!(seq.ends_with(last_n(&seq, n)));
    }

    #[test]
    fn test_index_of_finds_first_match(seq in small_ints(), target in -20_i32..20) {
        match index_of(&seq, &target) {
            Some(index) => {
                prop_assert_eq!(seq[index], target);
                prop_assert!(!seq[..index].contains(&target));
            },
            None => prop_assert!(!seq.contains(&target)),
        }
    }

    #[test]
    fn test_map_preserves_length(seq in small_ints()) {
        let mapped = map(&seq, |n, index, _| i64::from(*n) * index as i64);
        prop_assert_eq!(mapped.len(), seq.len());
    }

    #[test]
    fn test_filter_and_reject_partition(seq in small_ints(), divisor in 1_i32..5) {
        let kept = filter(&seq, |n, _, _| n % divisor == 0);
        let rejected = reject(&seq, |n, _, _| n % divisor == 0);

        prop_assert_eq!(kept.len() + rejected.len(), seq.len());
        prop_assert!(kept.iter().all(|n| n % divisor == 0));
        prop_assert!(rejected.iter().all(|n| n % divisor != 0));
    }

    #[test]
    fn test_reduce_sums(seq in small_ints()) {
        let expected: i32 = seq.iter().sum();

        prop_assert_eq!(reduce(&seq, |total, n| total + n, Some(0_i32)), Some(expected));
        let unseeded = reduce(&seq, |total, n| total + n, None::<i32>);
        prop_assert_eq!(unseeded, (!seq.is_empty()).then_some(expected));
    }

    #[test]
    fn test_every_and_some_match_iterators(seq in small_ints(), bound in -20_i32..20) {
        prop_assert_eq!(every(&seq, |n| *n < bound), seq.iter().all(|n| *n < bound));
        prop_assert_eq!(some(&seq, |n| *n < bound), seq.iter().any(|n| *n < bound));
    }

    #[test]
    fn test_uniq_keeps_first_occurrences(seq in small_ints()) {
        let mut expected = Vec::new();
        for n in &seq {
            if !expected.contains(n) {
                expected.push(*n);
            }
        }

        prop_assert_eq!(uniq(&seq), expected);
    }

    #[test]
    fn test_sort_by_sorts_permutation(seq in small_ints()) {
        let sorted = sort_by(&seq, |n, _, _| n.abs());

        prop_assert!(sorted.windows(2).all(|pair| pair[0].abs() <= pair[1].abs()));
        let mut expected = seq.clone();
        expected.sort_by_key(|n| n.abs());
        prop_assert_eq!(sorted, expected, "Sorting should be stable.");
    }

    #[test]
    fn test_set_operations(a in small_ints(), b in small_ints()) {
        let others = [&b[..]];

        for item in difference(&a, &others) {
            prop_assert!(a.contains(item) && !b.contains(item));
        }

        let sequences = [&a[..], &b[..]];
        let shared: Vec<_> = intersection(&sequences).collect();
        for (index, item) in shared.iter().enumerate() {
            prop_assert!(a.contains(item) && b.contains(item));
            prop_assert!(!shared[..index].contains(item), "Shared elements should be distinct.");
        }
    }

    #[test]
    #[cfg(feature = "random")]
    fn test_shuffle_is_permutation(seq in small_ints()) {
        let snapshot = seq.clone();
        let mut shuffled = utility_belt::collections::shuffle(&seq);

        prop_assert_eq!(&seq, &snapshot);
        shuffled.sort();
        let mut expected = seq.clone();
        expected.sort();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_once_returns_first_result(args in prop::collection::vec(any::<u8>(), 1..10)) {
        let mut calls = 0;
        let mut guarded = once(|n: u8| {
            calls += 1;
            n
        });

        let results: Vec<u8> = args.iter().map(|n| guarded.call(*n)).collect();
        drop(guarded);
        prop_assert_eq!(calls, 1);
        prop_assert!(results.iter().all(|result| *result == args[0]));
    }

    #[test]
    fn test_memoize_calls_once_per_argument(args in prop::collection::vec(0_u8..8, 0..30)) {
        let mut calls = Vec::new();
        let mut doubled = memoize(|n: &u8| {
            calls.push(*n);
            u16::from(*n) * 2
        });

        for n in &args {
            prop_assert_eq!(doubled.call(*n), u16::from(*n) * 2);
        }
        drop(doubled);

        let mut distinct = args.clone();
        distinct.sort();
        distinct.dedup();
        calls.sort();
        prop_assert_eq!(calls, distinct);
    }
}
