//! Piece attributes and the still-matching mask.
//!
//! Every piece carries an ordered, fixed-size sequence of boolean traits
//! (tall/short, round/square, hollow/solid, light/dark in the default
//! game). Pieces "match" along an attribute index when they all hold the
//! same boolean at that index; the win scanner tracks which indices are
//! still matching with an explicit [`MatchMask`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Display letters per attribute index, `(set, unset)`:
/// Tall/Short, Round/Square, Hollow/Solid, Light/Dark.
const CODON_LETTERS: [(char, char); 4] = [('T', 'S'), ('R', 'S'), ('H', 'S'), ('L', 'D')];

/// Ordered fixed-size sequence of boolean traits.
///
/// Immutable once the owning piece is constructed. The attribute count is
/// a construction-time value (4 in the default game); `SmallVec` keeps
/// the default case inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes(SmallVec<[bool; 4]>);

impl Attributes {
    /// Create an attribute sequence from a slice of traits.
    #[must_use]
    pub fn new(traits: &[bool]) -> Self {
        Self(SmallVec::from_slice(traits))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the trait at an attribute index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    /// Iterate over the traits in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Every combination of `count` boolean traits, in stable order.
    ///
    /// Combination `i` holds trait `a` iff bit `a` of `i` is set, so the
    /// result index doubles as a piece id. A 4-attribute game yields the
    /// full 16-piece pool.
    #[must_use]
    pub fn all_combinations(count: usize) -> Vec<Attributes> {
        assert!(count >= 1, "Must have at least 1 attribute");
        assert!(count <= 8, "At most 8 attributes supported");

        (0..1usize << count)
            .map(|bits| Self((0..count).map(|a| bits >> a & 1 == 1).collect()))
            .collect()
    }

    /// Short display name built from one letter per attribute index,
    /// e.g. `"TRHL"` for the tall round hollow light piece.
    ///
    /// `length` is clamped to `1..=len()`. Indices beyond the four named
    /// trait pairs fall back to `1`/`0`.
    #[must_use]
    pub fn codon(&self, length: usize) -> String {
        let length = length.clamp(1, self.0.len().max(1));

        self.0
            .iter()
            .take(length)
            .enumerate()
            .map(|(index, &set)| {
                let (on, off) = CODON_LETTERS.get(index).copied().unwrap_or(('1', '0'));
                if set {
                    on
                } else {
                    off
                }
            })
            .collect()
    }
}

impl std::ops::Index<usize> for Attributes {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// The explicit "still matching" mask used by the win scanner.
///
/// Starts with every attribute index marked matching; indices are cleared
/// as pieces are found to disagree with the line's first piece. A line
/// wins iff any index survives a full pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMask(SmallVec<[bool; 4]>);

impl MatchMask {
    /// A mask with every one of `len` indices still matching.
    #[must_use]
    pub fn all_matching(len: usize) -> Self {
        Self(smallvec::smallvec![true; len])
    }

    /// Number of attribute indices covered by the mask.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the mask covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an index is still matching.
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Mark an index as no longer matching.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = false;
        }
    }

    /// Clear every index where `candidate` disagrees with `reference`.
    pub fn narrow(&mut self, reference: &Attributes, candidate: &Attributes) {
        for index in 0..self.0.len() {
            if reference.get(index) != candidate.get(index) {
                self.0[index] = false;
            }
        }
    }

    /// True if any index is still matching.
    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&m| m)
    }

    /// The indices still matching, in order.
    #[must_use]
    pub fn matched_indices(&self) -> SmallVec<[usize; 4]> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, &m)| m.then_some(index))
            .collect()
    }
}
