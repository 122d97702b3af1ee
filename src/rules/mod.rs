//! Movement rules.
//!
//! One predicate per piece type decides whether a move has the right shape
//! for that piece. Path obstruction, own-piece captures and king safety are
//! checked elsewhere. [`RulesBook`] maps a [`PieceType`] to its predicate.

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::board::{Color, Move, PieceType, Square};

use kings::king_move;
use knights::knight_move;
use pawns::pawn_move;
use sliders::{bishop_move, queen_move, rook_move};

/// Read-only view of which color, if any, stands on a square.
///
/// Only the pawn rule looks at it.
pub trait Occupancy {
    fn color_at(&self, square: Square) -> Option<Color>;
}

/// Stateless dispatcher from piece type to movement rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesBook;

impl RulesBook {
    #[must_use]
    pub const fn new() -> Self {
        RulesBook
    }

    /// True if a `color` piece of type `kind` may move from `source` to
    /// `target` by its movement pattern.
    ///
    /// For every type but the pawn the answer ignores `occupancy`.
    #[must_use]
    pub fn is_legal_move<O: Occupancy + ?Sized>(
        &self,
        kind: PieceType,
        color: Color,
        source: Square,
        target: Square,
        occupancy: &O,
    ) -> bool {
        let mv = Move::new(source, target);
        match kind {
            PieceType::Pawn => pawn_move(color, mv, occupancy),
            PieceType::Knight => knight_move(mv),
            PieceType::Bishop => bishop_move(mv),
            PieceType::Rook => rook_move(mv),
            PieceType::Queen => queen_move(mv),
            PieceType::King => king_move(mv),
        }
    }
}
