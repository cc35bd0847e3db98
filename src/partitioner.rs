use crate::partition::Partition;
use crate::span::{span_map, OccurrenceSpan};
use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// Greedy span-confined partitioner.
///
/// Accumulates a sequence of symbols and partitions it into the maximum
/// number of contiguous segments such that every occurrence of a symbol
/// falls inside the same segment. The partition is recomputed from the full
/// sequence on each call; the accumulated values are never mutated by it.
pub struct Partitioner<T> {
    /// Values added so far, in insertion order
    values: Vec<T>,
}

impl<T: Hash + Eq + Clone> Partitioner<T> {
    /// Creates a new empty partitioner.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends a value to the sequence.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Extends the sequence with multiple values.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }

    /// Returns the number of values added to the sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values have been added.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the accumulated values in insertion order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Builds the occurrence-span map: for each distinct symbol, the first
    /// and last index at which it occurs.
    pub fn spans(&self) -> HashMap<T, OccurrenceSpan> {
        span_map(&self.values)
    }

    /// Partitions the accumulated sequence.
    ///
    /// Sweeps the sequence once, widening the current segment's boundary to
    /// the furthest last occurrence of any symbol seen so far, and closing
    /// the segment when the sweep index reaches that boundary. Segments
    /// close at the earliest index the containment invariant permits, so
    /// the result has the maximum possible number of segments.
    ///
    /// Runs in O(n) time with O(distinct symbols) extra space. An empty
    /// sequence yields an empty partition.
    pub fn partition(&self) -> Partition {
        let spans = self.spans();

        let mut lengths = Vec::new();
        let mut segment_start = 0;
        let mut segment_end = 0;

        for (i, value) in self.values.iter().enumerate() {
            segment_end = segment_end.max(spans[value].last);

            if i == segment_end {
                lengths.push(i - segment_start + 1);
                segment_start = i + 1;
            }
        }

        Partition::from_lengths(lengths)
    }
}

impl<T: Hash + Eq + Clone> Default for Partitioner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Partitioner<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Partitions a sequence in one call.
///
/// Equivalent to collecting `iter` into a [`Partitioner`] and calling
/// [`Partitioner::partition`].
///
/// # Example
///
/// ```
/// use seqpart_rs::partition;
///
/// let result = partition("ababcbacadefegdehijhklij".chars());
/// assert_eq!(result.lengths(), &[9, 7, 8]);
/// ```
pub fn partition<T, I>(iter: I) -> Partition
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    iter.into_iter().collect::<Partitioner<T>>().partition()
}
