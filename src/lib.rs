//! # trie-search
//!
//! **Multi-pattern exact substring search**
//!
//! > "Store the patterns once, walk the text once per offset."
//!
//! ## Strategies
//!
//! - **PatternIndex**: Trie over any number of patterns. Arena-allocated nodes, ordered children
//! - **NaiveScanner**: Windowed byte comparison of a single pattern. Correctness baseline
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Insert | O(M) | O(M) new nodes worst case |
//! | ContainsSubstring | **O(N × D)**, independent of pattern count | O(1) |
//! | Find iter | O(N × D + occ) | **O(1)** (iterator) |
//! | Scanner contains | O(N × M) per pattern | O(1) |
//!
//! N = text length, M = pattern length, D = longest pattern.
//!
//! ## Example
//!
//! ```
//! use trie_search::{NaiveScanner, PatternIndex};
//!
//! let text = b"asldjfasfoiausaslfjaksjiuqerjfqwcsncmanxzcl";
//!
//! let mut index = PatternIndex::new();
//! let zc = index.insert("zc").unwrap();
//!
//! assert!(index.contains_substring(text));
//! assert!(NaiveScanner::contains(text, b"zc"));
//!
//! // Which pattern matched, and where
//! let hit = index.find(text).unwrap();
//! assert_eq!(hit.pattern(), zc);
//! assert_eq!(hit.range(), 40..42);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod scan;
pub mod trie;

pub use error::{PatternError, Result};
pub use scan::NaiveScanner;
pub use trie::{Match, MatchIter, PatternId, PatternIndex};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_agree() {
        let text = b"asldjfasfoiausaslfjaksjiuqerjfqwcsncmanxzcl";
        let patterns = ["zc", "qwe", "man", "xyz"];
        let index = PatternIndex::try_from_patterns(patterns).unwrap();

        assert_eq!(
            index.contains_substring(text),
            NaiveScanner::contains_any(text, patterns)
        );
        for p in patterns {
            let single = PatternIndex::try_from_patterns([p]).unwrap();
            assert_eq!(
                single.contains_substring(text),
                NaiveScanner::contains(text, p.as_bytes())
            );
        }
    }

    #[test]
    fn test_empty_pattern_rejected_by_both() {
        let mut index = PatternIndex::new();
        assert_eq!(index.insert(""), Err(PatternError::InvalidPattern));
        assert!(!NaiveScanner::contains(b"abc", b""));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
