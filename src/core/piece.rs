//! Pieces and the piece pool.
//!
//! A piece is identity + attributes + a lifecycle state:
//!
//! ```text
//! Free -> Selected -> Picked -> Placed
//! ```
//!
//! `Placed` is terminal until a full game reset returns every piece to
//! `Free`. Transitions at this layer are predicate-guarded no-ops: an
//! illegal edge leaves the piece untouched and reports `false`. The turn
//! controller is the layer that fails loudly.
//!
//! Custody is a pure state field ([`Holder`]); the rendering collaborator
//! maps it to a visual parent, the core never owns scene nodes.

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::player::Player;

/// Piece identifier, in pool creation order.
///
/// Creation order doubles as the attribute bit pattern: piece `i` holds
/// trait `a` iff bit `a` of `i` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 0-based pool index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Lifecycle state of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// In the pool, available for selection.
    Free,
    /// Highlighted as the selection candidate.
    Selected,
    /// Held by the active player, waiting for a square.
    Picked,
    /// On the board. Terminal until reset.
    Placed,
}

impl std::fmt::Display for PieceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceState::Free => "free",
            PieceState::Selected => "selected",
            PieceState::Picked => "picked",
            PieceState::Placed => "placed",
        };
        write!(f, "{name}")
    }
}

/// Who currently has custody of a piece.
///
/// The rendering collaborator maps this to a visual parent (table,
/// player pocket, board); the core only tracks the tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holder {
    /// On the table, unclaimed.
    #[default]
    None,
    /// In a player's pocket (picked, not yet placed).
    Pocket(Player),
    /// Placed on the board.
    Board,
}

/// A game piece: identity, attributes, lifecycle state, custody.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    attributes: Attributes,
    state: PieceState,
    holder: Holder,
}

impl Piece {
    /// Create a free piece.
    #[must_use]
    pub fn new(id: PieceId, attributes: Attributes) -> Self {
        Self {
            id,
            attributes,
            state: PieceState::Free,
            holder: Holder::None,
        }
    }

    /// Piece identity.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The piece's immutable attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PieceState {
        self.state
    }

    /// Current custody tag.
    #[must_use]
    pub fn holder(&self) -> Holder {
        self.holder
    }

    /// Short display name, e.g. `"TRHL"`.
    #[must_use]
    pub fn codon(&self) -> String {
        self.attributes.codon(self.attributes.len())
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.state == PieceState::Free
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.state == PieceState::Selected
    }

    #[must_use]
    pub fn is_picked(&self) -> bool {
        self.state == PieceState::Picked
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.state == PieceState::Placed
    }

    /// `Free -> Selected`. Returns true iff the edge fired.
    ///
    /// The phase guard (selection is only meaningful while picking) lives
    /// in the turn controller, not here.
    pub fn select(&mut self) -> bool {
        if self.state == PieceState::Free {
            self.state = PieceState::Selected;
            true
        } else {
            false
        }
    }

    /// `Selected -> Free`. Idempotent: deselecting a free piece is a
    /// no-op that reports false.
    pub fn deselect(&mut self) -> bool {
        if self.state == PieceState::Selected {
            self.state = PieceState::Free;
            true
        } else {
            false
        }
    }

    /// `Selected -> Picked`, recording which player now holds it.
    pub fn pick(&mut self, player: Player) -> bool {
        if self.state == PieceState::Selected {
            self.state = PieceState::Picked;
            self.holder = Holder::Pocket(player);
            true
        } else {
            false
        }
    }

    /// `Picked -> Placed`. Driven exclusively by `Board::place_piece`.
    pub fn put(&mut self) -> bool {
        if self.state == PieceState::Picked {
            self.state = PieceState::Placed;
            self.holder = Holder::Board;
            true
        } else {
            false
        }
    }

    /// Any state `-> Free`, clearing custody. Returns true iff anything
    /// changed. Full-game reset only.
    pub fn reset(&mut self) -> bool {
        let changed = self.state != PieceState::Free || self.holder != Holder::None;
        self.state = PieceState::Free;
        self.holder = Holder::None;
        changed
    }
}

/// The full set of pieces for one game, in stable creation order.
///
/// One piece per attribute combination (16 in the default 4-attribute
/// game). The pool enforces the single-selection invariant: selecting a
/// piece deselects any other. Pieces are created once at setup and only
/// ever reset, never destroyed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PiecePool {
    pieces: Vec<Piece>,
}

impl PiecePool {
    /// Build the pool for `attribute_count` attributes.
    #[must_use]
    pub fn new(attribute_count: usize) -> Self {
        let pieces = Attributes::all_combinations(attribute_count)
            .into_iter()
            .enumerate()
            .map(|(index, attributes)| Piece::new(PieceId::new(index as u8), attributes))
            .collect();

        Self { pieces }
    }

    /// Number of pieces in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false: a pool holds at least two pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Get a piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Get a piece mutably. Gameplay mutation normally goes through the
    /// turn controller; this exists for it and for tests.
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// Iterate over all pieces in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// The currently selected piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.pieces.iter().find(|p| p.is_selected()).map(Piece::id)
    }

    /// The currently picked piece, if any.
    #[must_use]
    pub fn picked(&self) -> Option<PieceId> {
        self.pieces.iter().find(|p| p.is_picked()).map(Piece::id)
    }

    /// Select `id`, deselecting any other selected piece first.
    ///
    /// Returns the piece that was deselected, if a different one was
    /// selected. The caller must have checked that `id` is free.
    pub fn select(&mut self, id: PieceId) -> Option<PieceId> {
        let previous = self.selected().filter(|&prev| prev != id);
        if let Some(prev) = previous {
            if let Some(piece) = self.get_mut(prev) {
                piece.deselect();
            }
        }
        if let Some(piece) = self.get_mut(id) {
            piece.select();
        }
        previous
    }

    /// Deselect the selected piece, if any. Returns its id.
    pub fn deselect(&mut self) -> Option<PieceId> {
        let id = self.selected()?;
        self.get_mut(id)?.deselect();
        Some(id)
    }

    /// The first free piece in creation order.
    #[must_use]
    pub fn first_free(&self) -> Option<PieceId> {
        self.pieces.iter().find(|p| p.is_free()).map(Piece::id)
    }

    /// The next free piece after `from` in creation order, wrapping
    /// around. `from` itself is never returned.
    #[must_use]
    pub fn next_free(&self, from: PieceId) -> Option<PieceId> {
        self.cycle_free(from, 1)
    }

    /// The previous free piece before `from`, wrapping around.
    #[must_use]
    pub fn prev_free(&self, from: PieceId) -> Option<PieceId> {
        self.cycle_free(from, -1)
    }

    fn cycle_free(&self, from: PieceId, step: isize) -> Option<PieceId> {
        let len = self.pieces.len() as isize;
        let start = from.index() as isize;

        for offset in 1..len {
            let index = (start + step * offset).rem_euclid(len) as usize;
            if self.pieces[index].is_free() {
                return Some(self.pieces[index].id());
            }
        }
        None
    }

    /// Return every piece to `Free`, clearing custody. Returns the ids
    /// of pieces that actually changed.
    pub fn reset_all(&mut self) -> Vec<PieceId> {
        self.pieces
            .iter_mut()
            .filter_map(|piece| piece.reset().then(|| piece.id()))
            .collect()
    }
}
