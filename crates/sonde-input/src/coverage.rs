//! Branch-coverage sets — fixed-universe bit vectors over branch IDs.
//!
//! One `CoverageSet` is produced per execution and never mutated by the
//! search loop afterward. The only comparison the loop needs is subset
//! containment, which drives subsumption-based corpus reduction.

use serde::{Deserialize, Serialize};

const WORD_BITS: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("cannot union coverage of width {lhs} with width {rhs}")]
    WidthMismatch { lhs: usize, rhs: usize },
}

/// A bit vector over a fixed universe of branch identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverageSet {
    width: usize,
    words: Vec<u64>,
}

impl CoverageSet {
    /// An empty coverage set over `width` branch identifiers.
    pub fn new(width: usize) -> Self {
        let word_count = width.div_ceil(WORD_BITS);
        Self {
            width,
            words: vec![0; word_count],
        }
    }

    /// A coverage set with the given branch IDs set. Out-of-range IDs are
    /// ignored.
    pub fn from_branches(width: usize, branches: &[usize]) -> Self {
        let mut set = Self::new(width);
        for &branch in branches {
            set.insert(branch);
        }
        set
    }

    /// Number of branch identifiers in the universe.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mark a branch as covered. Out-of-range IDs are ignored.
    pub fn insert(&mut self, branch: usize) {
        if branch < self.width {
            self.words[branch / WORD_BITS] |= 1 << (branch % WORD_BITS);
        }
    }

    pub fn contains(&self, branch: usize) -> bool {
        branch < self.width && self.words[branch / WORD_BITS] & (1 << (branch % WORD_BITS)) != 0
    }

    /// Number of covered branches.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Whether every branch set here is also set in `other`.
    ///
    /// Width-mismatched sets compare as "not a subset" rather than raising:
    /// coverage shapes may legitimately vary across targets, and a
    /// mismatched record must simply never be dropped by subsumption.
    pub fn is_subset_of(&self, other: &CoverageSet) -> bool {
        if self.width != other.width {
            return false;
        }
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Union `other` into `self`. Used by the harness to accumulate the
    /// campaign-wide covered set; the search loop itself never merges.
    pub fn union_with(&mut self, other: &CoverageSet) -> Result<(), CoverageError> {
        if self.width != other.width {
            return Err(CoverageError::WidthMismatch {
                lhs: self.width,
                rhs: other.width,
            });
        }
        for (word, &other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= other_word;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains() {
        let mut set = CoverageSet::new(130);
        set.insert(0);
        set.insert(64);
        set.insert(129);
        assert!(set.contains(0));
        assert!(set.contains(64));
        assert!(set.contains(129));
        assert!(!set.contains(1));
        assert_eq!(set.count_ones(), 3);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut set = CoverageSet::new(8);
        set.insert(8);
        set.insert(1000);
        assert!(set.is_clear());
        assert!(!set.contains(1000));
    }

    #[test]
    fn test_subset_containment() {
        let small = CoverageSet::from_branches(16, &[0]);
        let large = CoverageSet::from_branches(16, &[0, 1]);
        assert!(small.is_subset_of(&large));
        assert!(!large.is_subset_of(&small));
        // Equal sets are subsets both ways.
        assert!(large.is_subset_of(&large.clone()));
    }

    #[test]
    fn test_width_mismatch_is_not_subset() {
        let narrow = CoverageSet::from_branches(8, &[0]);
        let wide = CoverageSet::from_branches(16, &[0, 1]);
        assert!(!narrow.is_subset_of(&wide));
        assert!(!wide.is_subset_of(&narrow));
    }

    #[test]
    fn test_round_trips_through_json() {
        let set = CoverageSet::from_branches(130, &[0, 64, 129]);
        let json = serde_json::to_string(&set).unwrap();
        let back: CoverageSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_union_accumulates() {
        let mut global = CoverageSet::new(16);
        global
            .union_with(&CoverageSet::from_branches(16, &[1, 2]))
            .unwrap();
        global
            .union_with(&CoverageSet::from_branches(16, &[2, 5]))
            .unwrap();
        assert_eq!(global.count_ones(), 3);
        assert!(global
            .union_with(&CoverageSet::from_branches(8, &[0]))
            .is_err());
    }
}
