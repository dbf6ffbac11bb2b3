use std::iter::FusedIterator;
use std::slice;

/// Creates a borrowed iterator over the distinct elements of the first sequence that are present
/// in every other sequence. (`s₀ ∩ s₁ ∩ …`)
///
/// Elements are yielded in the order they appear in the first sequence. With no sequences at all,
/// the iterator is empty.
///
/// # Examples
/// ```
/// # use utility_belt::collections::intersection;
/// let sequences = [&[1, 2, 2, 3, 4][..], &[2, 3, 5], &[3, 2]];
/// let shared: Vec<_> = intersection(&sequences).collect();
/// assert_eq!(shared, [&2, &3]);
/// ```
pub fn intersection<'a, T: PartialEq>(sequences: &'a [&'a [T]]) -> Intersection<'a, T> {
    let (first, others): (&[T], &[&[T]]) = sequences
        .split_first()
        .map(|(first, others)| (*first, others))
        .unwrap_or_default();

    Intersection {
        inner: first.iter(),
        others,
        yielded: Vec::new(),
    }
}

/// Creates a borrowed iterator over the elements of `first` that are present in none of the
/// `others`. (`first \ (s₁ ∪ s₂ ∪ …)`)
///
/// Elements are yielded in the order they appear in `first`, duplicates included.
///
/// # Examples
/// ```
/// # use utility_belt::collections::difference;
/// let first = [1, 2, 3, 4, 1];
/// let others = [&[2, 30][..], &[4]];
/// let remaining: Vec<_> = difference(&first, &others).collect();
/// assert_eq!(remaining, [&1, &3, &1]);
/// ```
pub fn difference<'a, T: PartialEq>(first: &'a [T], others: &'a [&'a [T]]) -> Difference<'a, T> {
    Difference {
        inner: first.iter(),
        others,
    }
}

pub struct Intersection<'a, T: 'a> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) others: &'a [&'a [T]],
    // Only the elements already yielded, so they aren't yielded twice.
    pub(crate) yielded: Vec<&'a T>,
}

impl<'a, T: PartialEq + 'a> Intersection<'a, T> {
    fn is_shared(&self, item: &T) -> bool {
        self.others.iter().all(|other| other.contains(item))
    }
}

impl<'a, T: PartialEq + 'a> Iterator for Intersection<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && (!self.is_shared(item) || self.yielded.contains(&item))
        {
            next = self.inner.next();
        }

        if let Some(item) = next {
            self.yielded.push(item);
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: PartialEq + 'a> FusedIterator for Intersection<'a, T> {}

pub struct Difference<'a, T: 'a> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) others: &'a [&'a [T]],
}

impl<'a, T: PartialEq + 'a> Iterator for Difference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.others.iter().any(|other| other.contains(item))
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: PartialEq + 'a> FusedIterator for Difference<'a, T> {}
