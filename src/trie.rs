//! Trie-backed multi-pattern index
//!
//! **Layout**: arena of nodes, `Vec<Node>` indexed by position.
//! - Node 0 is the root and has no incoming edge
//! - Each node owns an ordered `symbol -> child` map and an optional terminal id
//! - Nodes are only ever appended; the arena is dropped as a unit
//!
//! **Core Algorithm**: start-offset walk
//! - For every start offset in the text, follow the text's bytes down the tree
//! - Every visited node is checked for a terminal marker, so a short pattern
//!   is reported even when a longer one keeps the walk going
//! - Complexity: O(N × D) where N = text length, D = deepest pattern
//!
//! This is independent of the number of stored patterns.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;

use tracing::{debug, trace};

use crate::error::{PatternError, Result};

const ROOT: usize = 0;

/// Dense identifier of an inserted pattern, assigned in first-insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(usize);

impl PatternId {
    /// Position of the pattern in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single pattern occurrence inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pattern: PatternId,
    start: usize,
    end: usize,
}

impl Match {
    /// Which pattern matched.
    #[inline]
    pub fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Byte offset of the first matched symbol.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last matched symbol.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Half-open byte range of the occurrence.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<u8, usize>,
    terminal: Option<PatternId>,
}

#[derive(Debug, Clone)]
struct Entry {
    bytes: Vec<u8>,
    /// Number of times this pattern was inserted (>= 1)
    insertions: usize,
}

/// Trie over a set of non-empty patterns.
///
/// Answers "does any pattern occur in this text" and "which patterns occur
/// where". Construction takes `&mut self`, queries take `&self`, so a built
/// index can be shared between readers freely.
///
/// # Example
/// ```
/// use trie_search::PatternIndex;
///
/// let mut index = PatternIndex::new();
/// index.insert("a").unwrap();
/// index.insert("ab").unwrap();
///
/// assert!(index.contains_substring(b"zzabzz"));
/// assert!(!index.contains_substring(b"zzbzz"));
/// assert_eq!(index.count_matches(b"zzabzz"), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PatternIndex {
    nodes: Vec<Node>,
    patterns: Vec<Entry>,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl PatternIndex {
    /// Empty index holding only the root node.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Empty index with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.max(1));
        arena.push(Node::default());
        PatternIndex {
            nodes: arena,
            patterns: Vec::new(),
            min_len: None,
            max_len: None,
        }
    }

    /// Build an index from many patterns, stopping at the first empty one.
    ///
    /// # Example
    /// ```
    /// use trie_search::{PatternError, PatternIndex};
    ///
    /// let index = PatternIndex::try_from_patterns(["he", "she", "his"]).unwrap();
    /// assert_eq!(index.len(), 3);
    ///
    /// let err = PatternIndex::try_from_patterns(["ok", ""]).unwrap_err();
    /// assert_eq!(err, PatternError::InvalidPattern);
    /// ```
    pub fn try_from_patterns<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut index = Self::new();
        for pattern in patterns {
            index.insert(pattern)?;
        }
        debug!(
            patterns = index.len(),
            nodes = index.node_count(),
            "pattern index built"
        );
        Ok(index)
    }

    /// Insert a pattern, returning its id.
    ///
    /// Re-inserting a known pattern returns the original id and only bumps
    /// its insertion count. Empty patterns fail with
    /// [`PatternError::InvalidPattern`].
    ///
    /// # Complexity
    /// O(M log σ) where M = pattern length, σ = fan-out of visited nodes.
    pub fn insert(&mut self, pattern: impl AsRef<[u8]>) -> Result<PatternId> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            debug!("rejected empty pattern");
            return Err(PatternError::InvalidPattern);
        }

        let nodes_before = self.nodes.len();
        let mut node = ROOT;
        for &symbol in pattern {
            let next = self.nodes[node].children.get(&symbol).copied();
            node = match next {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(symbol, child);
                    child
                }
            };
        }

        if let Some(id) = self.nodes[node].terminal {
            let entry = &mut self.patterns[id.0];
            entry.insertions += 1;
            trace!(id = id.0, insertions = entry.insertions, "duplicate pattern");
            return Ok(id);
        }

        let id = PatternId(self.patterns.len());
        self.nodes[node].terminal = Some(id);
        self.patterns.push(Entry {
            bytes: pattern.to_vec(),
            insertions: 1,
        });
        self.min_len = Some(self.min_len.map_or(pattern.len(), |m| m.min(pattern.len())));
        self.max_len = Some(self.max_len.map_or(pattern.len(), |m| m.max(pattern.len())));

        debug!(
            id = id.0,
            len = pattern.len(),
            new_nodes = self.nodes.len() - nodes_before,
            "pattern inserted"
        );
        Ok(id)
    }

    /// True if any stored pattern occurs somewhere in `text`.
    ///
    /// Tries every start offset and stops at the first terminal node reached.
    /// Empty text, an empty index, or text shorter than the shortest pattern
    /// answer `false` without walking.
    pub fn contains_substring(&self, text: &[u8]) -> bool {
        let starts = self.viable_starts(text);
        (0..starts).any(|start| self.first_terminal(&text[start..]).is_some())
    }

    /// Exact membership: is `pattern` itself one of the stored patterns?
    pub fn contains_pattern(&self, pattern: &[u8]) -> bool {
        self.lookup(pattern).is_some()
    }

    /// Id of `pattern` if it was inserted.
    pub fn lookup(&self, pattern: &[u8]) -> Option<PatternId> {
        let mut node = ROOT;
        for &symbol in pattern {
            node = self.child(node, symbol)?;
        }
        self.nodes[node].terminal
    }

    /// Lazy iterator over every (overlapping) occurrence of every pattern.
    ///
    /// Items come ordered by start offset, then by length.
    ///
    /// # Example
    /// ```
    /// use trie_search::PatternIndex;
    ///
    /// let index = PatternIndex::try_from_patterns(["he", "she", "hers"]).unwrap();
    /// let spans: Vec<_> = index.find_iter(b"ushers").map(|m| m.range()).collect();
    /// assert_eq!(spans, vec![1..4, 2..4, 2..6]);
    /// ```
    #[inline]
    pub fn find_iter<'i, 't>(&'i self, text: &'t [u8]) -> MatchIter<'i, 't> {
        MatchIter {
            index: self,
            text,
            starts: self.viable_starts(text),
            start: 0,
            node: ROOT,
            pos: 0,
        }
    }

    /// First occurrence (lowest start, then shortest).
    pub fn find(&self, text: &[u8]) -> Option<Match> {
        self.find_iter(text).next()
    }

    /// Total number of (overlapping) occurrences of all patterns.
    pub fn count_matches(&self, text: &[u8]) -> usize {
        self.find_iter(text).count()
    }

    /// Bytes of the pattern behind `id`.
    pub fn pattern(&self, id: PatternId) -> Option<&[u8]> {
        self.patterns.get(id.0).map(|e| e.bytes.as_slice())
    }

    /// How many times the pattern behind `id` has been inserted.
    pub fn insertions(&self, id: PatternId) -> Option<usize> {
        self.patterns.get(id.0).map(|e| e.insertions)
    }

    /// Stored patterns in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = (PatternId, &[u8])> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, e)| (PatternId(i), e.bytes.as_slice()))
    }

    /// Number of distinct patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the shortest stored pattern.
    #[inline]
    pub fn min_pattern_len(&self) -> Option<usize> {
        self.min_len
    }

    /// Length of the longest stored pattern (the tree depth).
    #[inline]
    pub fn max_pattern_len(&self) -> Option<usize> {
        self.max_len
    }

    #[inline(always)]
    fn child(&self, node: usize, symbol: u8) -> Option<usize> {
        self.nodes[node].children.get(&symbol).copied()
    }

    /// Start offsets that can still fit the shortest pattern: `0..starts`.
    #[inline]
    fn viable_starts(&self, text: &[u8]) -> usize {
        match self.min_len {
            Some(min) if text.len() >= min => text.len() - min + 1,
            _ => 0,
        }
    }

    /// Walk `suffix` from the root, returning the first terminal hit.
    #[inline]
    fn first_terminal(&self, suffix: &[u8]) -> Option<PatternId> {
        let mut node = ROOT;
        for &symbol in suffix {
            node = self.child(node, symbol)?;
            if let Some(id) = self.nodes[node].terminal {
                return Some(id);
            }
        }
        None
    }
}

impl Default for PatternIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator for [`PatternIndex::find_iter`].
/// Holds only a cursor into the tree; nothing is allocated per query.
pub struct MatchIter<'i, 't> {
    index: &'i PatternIndex,
    text: &'t [u8],
    /// Exclusive bound on start offsets worth walking
    starts: usize,
    start: usize,
    node: usize,
    pos: usize,
}

impl<'i, 't> Iterator for MatchIter<'i, 't> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.starts {
            if let Some(&symbol) = self.text.get(self.pos) {
                if let Some(child) = self.index.child(self.node, symbol) {
                    self.node = child;
                    self.pos += 1;
                    if let Some(pattern) = self.index.nodes[child].terminal {
                        return Some(Match {
                            pattern,
                            start: self.start,
                            end: self.pos,
                        });
                    }
                    continue;
                }
            }

            // Walk is dead: restart from the root one offset later
            self.start += 1;
            self.node = ROOT;
            self.pos = self.start;
        }
        None
    }
}

impl<'i, 't> FusedIterator for MatchIter<'i, 't> {}
