/// Zips `sequences` together so that elements with the same index end up in the same row.
///
/// There are as many rows as there are elements in the longest sequence. Shorter sequences
/// contribute None once they run out.
///
/// # Examples
/// ```
/// # use utility_belt::collections::zip;
/// let rows = zip(&[&['a', 'b', 'c'][..], &['x'][..]]);
/// assert_eq!(rows, [
///     [Some('a'), Some('x')],
///     [Some('b'), None],
///     [Some('c'), None],
/// ]);
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = sequences.iter().map(|seq| seq.len()).max().unwrap_or(0);

    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|seq| seq.get(index).cloned())
                .collect()
        })
        .collect()
}
