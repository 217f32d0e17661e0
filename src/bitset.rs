//! Compact sets of implicant indices.
//!
//! The reduction stages compare, for each remaining minterm, the set of
//! implicants covering it. These sets are small dense index sets, so they are
//! stored as bit vectors and compared word by word.

/// A set of small non-negative integers backed by a vector of u64 words.
///
/// The set grows automatically when inserting beyond the current capacity.
/// Trailing zero words never affect equality or subset checks.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
    /// Cached number of elements
    len: usize,
}

const WORD: usize = u64::BITS as usize;

impl BitSet {
    /// Creates an empty set able to hold indices below `capacity` without growing.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD)],
            len: 0,
        }
    }

    /// Adds `index` to the set. Returns true if it was not present before.
    pub fn insert(&mut self, index: usize) -> bool {
        let slot = index / WORD;
        if slot >= self.words.len() {
            self.words.resize(slot + 1, 0);
        }
        let bit = 1u64 << (index % WORD);
        if self.words[slot] & bit != 0 {
            return false;
        }
        self.words[slot] |= bit;
        self.len += 1;
        true
    }

    /// Returns true if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        self.len <= other.len
            && self
                .words
                .iter()
                .enumerate()
                .all(|(i, &word)| word & !other.words.get(i).copied().unwrap_or(0) == 0)
    }

    /// Returns true if `self` is a subset of `other` and the two sets differ.
    pub fn is_proper_subset(&self, other: &BitSet) -> bool {
        self.len < other.len && self.is_subset(other)
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.is_subset(other)
    }
}

impl Eq for BitSet {}
