//! Naive exact-substring scanner
//!
//! Baseline for [`PatternIndex`](crate::PatternIndex): slide a window of
//! `pattern.len()` bytes over the text and compare it byte-for-byte.
//! Offsets run from `0` through `text.len() - pattern.len()` **inclusive**,
//! so a pattern sitting flush against the end of the text is found.
//!
//! Empty text or an empty pattern never matches.

/// Stateless windowed scanner.
///
/// # Example
/// ```
/// use trie_search::NaiveScanner;
///
/// assert!(NaiveScanner::contains(b"ab", b"b"));
/// assert!(!NaiveScanner::contains(b"", b"b"));
/// assert_eq!(NaiveScanner::find(b"abcabc", b"ca"), Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveScanner;

impl NaiveScanner {
    /// True if `pattern` occurs in `text`.
    #[inline]
    pub fn contains(text: &[u8], pattern: &[u8]) -> bool {
        Self::find(text, pattern).is_some()
    }

    /// Offset of the first occurrence.
    #[inline]
    pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
        Self::find_iter(text, pattern).next()
    }

    /// Lazy iterator over the start offsets of all (overlapping) occurrences.
    #[inline]
    pub fn find_iter<'a>(text: &'a [u8], pattern: &'a [u8]) -> ScanIter<'a> {
        ScanIter {
            text,
            pattern,
            offset: 0,
        }
    }

    /// Number of (overlapping) occurrences.
    pub fn count(text: &[u8], pattern: &[u8]) -> usize {
        Self::find_iter(text, pattern).count()
    }

    /// True if any of `patterns` occurs in `text`.
    pub fn contains_any<I, P>(text: &[u8], patterns: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        patterns
            .into_iter()
            .any(|p| Self::contains(text, p.as_ref()))
    }
}

/// Iterator for [`NaiveScanner::find_iter`].
pub struct ScanIter<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for ScanIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.pattern.len();
        if width == 0 || width > self.text.len() {
            return None;
        }

        let last = self.text.len() - width;
        while self.offset <= last {
            let i = self.offset;
            self.offset += 1;
            if &self.text[i..i + width] == self.pattern {
                return Some(i);
            }
        }
        None
    }
}

impl<'a> core::iter::FusedIterator for ScanIter<'a> {}
