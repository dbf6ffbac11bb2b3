use rand::Rng;

/// Returns a uniformly random permutation of `seq`, leaving `seq` itself untouched.
///
/// Uses the thread-local generator from [`rand::rng`]. See [`shuffle_with`] to provide a
/// generator, for example a seeded one for reproducible output.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::rng())
}

/// Returns a uniformly random permutation of `seq` drawn from `rng`.
///
/// Elements are removed from a random position of a working copy one at a time and emitted in
/// the order they were removed. Each removal picks uniformly among the elements that remain.
///
/// # Examples
/// ```
/// # use rand::SeedableRng;
/// # use rand::rngs::StdRng;
/// # use utility_belt::collections::shuffle_with;
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle_with(&[1, 2, 3, 4], &mut rng);
/// shuffled.sort();
/// assert_eq!(shuffled, [1, 2, 3, 4]);
/// ```
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut working = seq.to_vec();
    let mut shuffled = Vec::with_capacity(working.len());

    while !working.is_empty() {
        let index = rng.random_range(0..working.len());
        shuffled.push(working.swap_remove(index));
    }

    shuffled
}
