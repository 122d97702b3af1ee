//! Core value types.
//!
//! - `PieceType` and `Color` - piece tags
//! - `Square` - (rank, file) coordinate
//! - `Move` - requested (source, target) pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, PieceType};
pub use square::{Square, BOARD_SIZE};
