//! Move representation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A requested move: an ordered (source, target) pair of squares.
///
/// Carries no promotion or castling metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    source: Square,
    target: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(source: Square, target: Square) -> Self {
        Move { source, target }
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> Square {
        self.source
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Square {
        self.target
    }

    /// Absolute file distance covered by the move.
    #[inline]
    #[must_use]
    pub const fn dx(&self) -> usize {
        self.source.distance(self.target).0
    }

    /// Absolute rank distance covered by the move.
    #[inline]
    #[must_use]
    pub const fn dy(&self) -> usize {
        self.source.distance(self.target).1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)
    }
}

/// Parses coordinate notation such as `e2e4`.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid = |_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let source = s[..2].parse::<Square>().map_err(invalid)?;
        let target = s[2..].parse::<Square>().map_err(invalid)?;
        Ok(Move::new(source, target))
    }
}
