//! Fluent builder for constructing positions.
//!
//! # Example
//! ```
//! use chess_referee::board::{BoardBuilder, Color, PieceType, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceType::King)
//!     .piece(Square(7, 4), Color::Black, PieceType::King)
//!     .piece(Square(1, 0), Color::White, PieceType::Pawn)
//!     .build();
//! assert!(board.piece_at(Square(1, 0)).is_some());
//! ```

use super::error::BoardError;
use super::{Board, Color, PieceType, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceType)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board
                .pieces()
                .map(|(_, piece)| (piece.position(), piece.color(), piece.kind()))
                .collect(),
        }
    }

    /// Place a piece, replacing whatever the builder had on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceType) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OffBoard`] for a square outside the board and
    /// [`BoardError::DuplicateKing`] if a color was given two kings.
    pub fn try_build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (square, color, kind) in self.pieces {
            board.place(square, color, kind)?;
        }
        Ok(board)
    }

    /// Build the board.
    ///
    /// # Panics
    ///
    /// Panics if the setup is malformed; see [`try_build`](Self::try_build).
    #[must_use]
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(err) => panic!("invalid board setup: {err}"),
        }
    }
}
