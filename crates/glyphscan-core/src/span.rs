//! Half-open index ranges along one axis

/// A `[start, end)` range of rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// First index (inclusive)
    pub start: u32,
    /// One past the last index (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a span. `end` below `start` yields an empty span at `start`.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.end == self.start
    }

    #[inline]
    pub fn contains(self, index: u32) -> bool {
        index >= self.start && index < self.end
    }
}

impl From<std::ops::Range<u32>> for Span {
    fn from(r: std::ops::Range<u32>) -> Self {
        Self::new(r.start, r.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let s = Span::new(3, 7);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert!(s.contains(3));
        assert!(!s.contains(7));
        assert_eq!(Span::from(3..7), s);
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let s = Span::new(5, 2);
        assert!(s.is_empty());
        assert_eq!(s.start, 5);
    }
}
