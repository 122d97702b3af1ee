//! The three board mutations and their shared undo path.
//!
//! Each mutation returns a [`PieceSnapshot`] of the piece's prior state.
//! Undoing several mutations means restoring their snapshots in reverse
//! order.

use super::{Board, PieceId, PieceSnapshot, Square};

impl Board {
    /// Relocate an active piece to an empty square.
    ///
    /// # Panics
    ///
    /// Panics if the piece is captured, is not where it thinks it is, or if
    /// `target` is occupied by another piece. Captures go through
    /// [`remove_piece`](Board::remove_piece) first.
    pub fn apply_move(&mut self, id: PieceId, target: Square) -> PieceSnapshot {
        let source = self.checked_position(id);
        match self.piece_at(target) {
            None => {}
            Some(other) if other == id => {}
            Some(other) => panic!("cannot move {id:?} onto {target}: occupied by {other:?}"),
        }

        self.squares[source.as_index()] = None;
        self.squares[target.as_index()] = Some(id);
        self.piece_mut(id).relocate(id, target)
    }

    /// Take an active piece off the board, keeping it for a later restore.
    ///
    /// # Panics
    ///
    /// Panics if the piece is already captured or is not on its square.
    pub fn remove_piece(&mut self, id: PieceId) -> PieceSnapshot {
        let square = self.checked_position(id);
        self.squares[square.as_index()] = None;
        self.piece_mut(id).deactivate(id)
    }

    /// Put a piece back to the state recorded in `snapshot`.
    ///
    /// # Panics
    ///
    /// Panics if `snapshot` belongs to another piece, or if the square it
    /// restores to is held by a different piece. The latter means snapshots
    /// were restored out of order.
    pub fn restore(&mut self, id: PieceId, snapshot: PieceSnapshot) {
        assert_eq!(
            snapshot.id(),
            id,
            "snapshot of {:?} restored onto {id:?}",
            snapshot.id()
        );

        let (active, current) = (self.piece(id).is_active(), self.piece(id).position());
        if active && self.piece_at(current) == Some(id) {
            self.squares[current.as_index()] = None;
        }

        if snapshot.was_active() {
            let square = snapshot.position();
            if let Some(other) = self.piece_at(square) {
                panic!("cannot restore {id:?} to {square}: occupied by {other:?}");
            }
            self.squares[square.as_index()] = Some(id);
        }
        self.piece_mut(id).restore_from(&snapshot);
    }

    fn checked_position(&self, id: PieceId) -> Square {
        let piece = self.piece(id);
        assert!(piece.is_active(), "piece {id:?} is not on the board");
        let square = piece.position();
        assert_eq!(
            self.piece_at(square),
            Some(id),
            "piece {id:?} thinks it is on {square} but the board disagrees"
        );
        square
    }
}
