use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use tracing::trace;

use crate::util::fmt::DebugRaw;

/// A single-argument function with a cache of its results, created with [`memoize`].
///
/// Results are cached by argument, so the wrapped function is only called for arguments that
/// haven't been seen before. The cache lives as long as the wrapper and is never evicted.
pub struct Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
{
    func: F,
    cache: HashMap<A, R>,
}

/// Wraps `func` with a cache keyed by its argument, see [`Memoize`].
///
/// # Examples
/// ```
/// # use utility_belt::functions::memoize;
/// let mut fibonacci = memoize(|n: &u64| (1..=*n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
///
/// assert_eq!(fibonacci.call(50), 12_586_269_025);
/// assert!(fibonacci.is_cached(&50));
/// assert_eq!(fibonacci.call(50), 12_586_269_025);
/// assert_eq!(fibonacci.cached_len(), 1);
/// ```
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
{
    Memoize {
        func,
        cache: HashMap::new(),
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Hash + Eq,
    R: Clone,
{
    /// Returns the cached result for `arg`, calling the wrapped function first if there isn't one.
    pub fn call(&mut self, arg: A) -> R {
        match self.cache.entry(arg) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                trace!("Memoize cache miss, calling the wrapped function");
                let result = (self.func)(entry.key());
                entry.insert(result).clone()
            },
        }
    }

    /// Returns true if there is a cached result for `arg`.
    pub fn is_cached(&self, arg: &A) -> bool {
        self.cache.contains_key(arg)
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
{
    /// Returns the number of distinct arguments with a cached result.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<F, A: Debug, R: Debug> Debug for Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("func", &DebugRaw("FnMut"))
            .field("cache", &self.cache)
            .finish()
    }
}
