//! Board representation: squares, pieces, and the queries and mutations a
//! move transaction needs.
//!
//! # Example
//! ```
//! use chess_referee::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! assert!(board.piece_at(Square(0, 4)).is_some());
//! assert!(!board.is_king_in_check(Color::White));
//! ```

mod builder;
mod display;
mod error;
mod make_unmake;
mod pieces;
mod position;
mod queries;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, MoveParseError, PieceTypeError, SquareError};
pub use pieces::{Piece, PieceId, PieceSnapshot};
pub use position::Position;
pub use state::Board;
pub use types::{Color, Move, PieceType, Square, BOARD_SIZE};
