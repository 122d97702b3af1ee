//! Single-move validation for chess.
//!
//! [`MoveProcessor::process`] checks a [`Move`] against a [`Board`]: piece
//! movement, path obstruction, own-piece captures, and whether the mover's
//! king would be left in check. Accepted moves are applied; rejected moves
//! leave the board untouched.

mod logging;

pub mod board;
pub mod processor;
pub mod rules;
pub mod sync;

pub use board::{Board, BoardBuilder, Color, Move, Piece, PieceId, PieceType, Square};
pub use processor::MoveProcessor;
pub use rules::{Occupancy, RulesBook};
pub use sync::SharedBoard;
