//! The board operations a move transaction relies on.

use super::{Board, Color, Piece, PieceId, PieceSnapshot, Square};
use crate::rules::Occupancy;

/// Board-like state that [`MoveProcessor`](crate::MoveProcessor) can drive.
///
/// Queries take `&self`; the three mutations take `&mut self` and return or
/// consume the snapshot that undoes them.
pub trait Position: Occupancy {
    fn piece_at(&self, square: Square) -> Option<PieceId>;

    fn piece(&self, id: PieceId) -> &Piece;

    fn is_path_clear(&self, source: Square, target: Square) -> bool;

    fn is_king_in_check(&self, color: Color) -> bool;

    fn apply_move(&mut self, id: PieceId, target: Square) -> PieceSnapshot;

    fn remove_piece(&mut self, id: PieceId) -> PieceSnapshot;

    fn restore(&mut self, id: PieceId, snapshot: PieceSnapshot);
}

impl Position for Board {
    fn piece_at(&self, square: Square) -> Option<PieceId> {
        Board::piece_at(self, square)
    }

    fn piece(&self, id: PieceId) -> &Piece {
        Board::piece(self, id)
    }

    fn is_path_clear(&self, source: Square, target: Square) -> bool {
        Board::is_path_clear(self, source, target)
    }

    fn is_king_in_check(&self, color: Color) -> bool {
        Board::is_king_in_check(self, color)
    }

    fn apply_move(&mut self, id: PieceId, target: Square) -> PieceSnapshot {
        Board::apply_move(self, id, target)
    }

    fn remove_piece(&mut self, id: PieceId) -> PieceSnapshot {
        Board::remove_piece(self, id)
    }

    fn restore(&mut self, id: PieceId, snapshot: PieceSnapshot) {
        Board::restore(self, id, snapshot);
    }
}
