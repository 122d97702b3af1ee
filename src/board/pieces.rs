//! Piece entities and their undo snapshots.
//!
//! A [`Piece`] is owned by the [`Board`](super::Board) that placed it and is
//! addressed through a [`PieceId`]. Its position and active flag only change
//! through the board's `apply_move`, `remove_piece` and `restore`, each of
//! which hands back or consumes a [`PieceSnapshot`].

use super::{Color, PieceType, Square};

/// Stable handle to a piece on its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A piece: fixed type and color, mutable position and active flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceType,
    color: Color,
    position: Square,
    active: bool,
}

/// Prior state of one piece, taken just before a mutation.
///
/// Opaque to callers; only [`restore`](super::Board::restore) reads it.
#[must_use = "dropping a snapshot makes the mutation impossible to undo"]
#[derive(Debug, PartialEq, Eq)]
pub struct PieceSnapshot {
    id: PieceId,
    position: Square,
    active: bool,
}

impl PieceSnapshot {
    #[inline]
    pub(crate) const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub(crate) const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub(crate) const fn was_active(&self) -> bool {
        self.active
    }
}

impl Piece {
    pub(crate) const fn new(kind: PieceType, color: Color, position: Square) -> Self {
        Piece {
            kind,
            color,
            position,
            active: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Current square. For a captured piece, the square it was taken on.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// True if `other` has the same color.
    #[inline]
    #[must_use]
    pub fn is_fellow(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    fn snapshot(&self, id: PieceId) -> PieceSnapshot {
        PieceSnapshot {
            id,
            position: self.position,
            active: self.active,
        }
    }

    pub(crate) fn relocate(&mut self, id: PieceId, target: Square) -> PieceSnapshot {
        let snapshot = self.snapshot(id);
        self.position = target;
        snapshot
    }

    pub(crate) fn deactivate(&mut self, id: PieceId) -> PieceSnapshot {
        let snapshot = self.snapshot(id);
        self.active = false;
        snapshot
    }

    pub(crate) fn restore_from(&mut self, snapshot: &PieceSnapshot) {
        self.position = snapshot.position;
        self.active = snapshot.active;
    }
}
