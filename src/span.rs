use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// The index range in which a symbol occurs.
///
/// `first` and `last` are the minimum and maximum index at which the symbol
/// appears in the sequence; the symbol never occurs outside `[first, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccurrenceSpan {
    /// Index of the first occurrence.
    pub first: usize,
    /// Index of the last occurrence.
    pub last: usize,
}

impl OccurrenceSpan {
    /// Creates a span for a symbol first seen at `index`.
    pub(crate) fn at(index: usize) -> Self {
        Self {
            first: index,
            last: index,
        }
    }

    /// Number of indices covered by the span, endpoints included.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Returns true if the span covers a single index.
    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    /// Returns true if `index` falls within the span.
    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }
}

/// Builds the occurrence-span map for `values` in one left-to-right pass.
///
/// The first occurrence of each symbol creates its span; every later
/// occurrence widens the span's `last` bound.
pub(crate) fn span_map<T: Hash + Eq + Clone>(values: &[T]) -> HashMap<T, OccurrenceSpan> {
    let mut spans = HashMap::default();

    for (i, value) in values.iter().enumerate() {
        spans
            .entry(value.clone())
            .and_modify(|span: &mut OccurrenceSpan| span.last = i)
            .or_insert_with(|| OccurrenceSpan::at(i));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_single_index() {
        let span = OccurrenceSpan::at(3);
        assert_eq!(span.first, 3);
        assert_eq!(span.last, 3);
        assert_eq!(span.len(), 1);
        assert!(span.is_single());
    }

    #[test]
    fn test_span_contains() {
        let span = OccurrenceSpan { first: 2, last: 5 };
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(span.contains(5));
        assert!(!span.contains(6));
        assert_eq!(span.len(), 4);
        assert!(!span.is_single());
    }

    #[test]
    fn test_span_map_empty() {
        let spans = span_map::<char>(&[]);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_span_map_widens_last() {
        let values: Vec<char> = "abab".chars().collect();
        let spans = span_map(&values);

        assert_eq!(spans[&'a'], OccurrenceSpan { first: 0, last: 2 });
        assert_eq!(spans[&'b'], OccurrenceSpan { first: 1, last: 3 });
    }

    #[test]
    fn test_span_map_distinct_symbols() {
        let values = vec![10u8, 20, 30];
        let spans = span_map(&values);

        assert_eq!(spans.len(), 3);
        for (i, v) in values.iter().enumerate() {
            assert_eq!(spans[v], OccurrenceSpan { first: i, last: i });
            assert!(spans[v].is_single());
        }
    }
}
