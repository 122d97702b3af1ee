//! Error types for parsing and board setup.
//!
//! Move rejection is not an error: `MoveProcessor::process` reports it as
//! `false`. These types cover malformed external input only.

use std::fmt;

use super::{Color, Square};

/// Error type for piece abbreviation lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceTypeError {
    /// No piece type uses this abbreviation
    UnknownAbbreviation { abbreviation: String },
}

impl fmt::Display for PieceTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceTypeError::UnknownAbbreviation { abbreviation } => {
                write!(f, "Unknown piece abbreviation '{abbreviation}'")
            }
        }
    }
}

impl std::error::Error for PieceTypeError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate-notation move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 ASCII characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for malformed board setups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A piece was placed outside the 8x8 board
    OffBoard { square: Square },
    /// Two pieces were placed on the same square
    SquareOccupied { square: Square },
    /// A color was given more than one king
    DuplicateKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OffBoard { square } => {
                write!(f, "Square {square} is off the board")
            }
            BoardError::SquareOccupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
            BoardError::DuplicateKing { color } => {
                write!(f, "{color} already has a king")
            }
        }
    }
}

impl std::error::Error for BoardError {}
