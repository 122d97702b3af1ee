//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the chess board, represented as (rank, file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        let square = Square(rank, file);
        if square.is_valid() {
            Some(square)
        } else {
            None
        }
    }

    /// True if both coordinates lie on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Signed rank difference from `self` to `to`.
    #[inline]
    #[must_use]
    pub const fn rank_delta(self, to: Square) -> isize {
        to.0 as isize - self.0 as isize
    }

    /// Signed file difference from `self` to `to`.
    #[inline]
    #[must_use]
    pub const fn file_delta(self, to: Square) -> isize {
        to.1 as isize - self.1 as isize
    }

    /// Absolute (file, rank) distance between two squares.
    #[inline]
    #[must_use]
    pub const fn distance(self, to: Square) -> (usize, usize) {
        (self.1.abs_diff(to.1), self.0.abs_diff(to.0))
    }

    /// The square `dr` ranks and `df` files away, if it is on the board.
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0.checked_add_signed(dr)?;
        let file = self.1.checked_add_signed(df)?;
        Square::new(rank, file)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= BOARD_SIZE {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= BOARD_SIZE {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Square::new(7, 7), Some(Square(7, 7)));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(Square(0, 0).is_valid());
        assert!(Square(7, 7).is_valid());
        assert!(!Square(0, 8).is_valid());
        assert!(!Square(8, 8).is_valid());
    }

    #[test]
    fn test_deltas() {
        let a1 = Square(0, 0);
        let c2 = Square(1, 2);
        assert_eq!(a1.rank_delta(c2), 1);
        assert_eq!(a1.file_delta(c2), 2);
        assert_eq!(c2.rank_delta(a1), -1);
        assert_eq!(c2.distance(a1), (2, 1));
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(1, 1), Some(Square(1, 1)));
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_algebraic_notation() {
        assert_eq!("e4".parse::<Square>(), Ok(Square(3, 4)));
        assert_eq!(Square(7, 0).to_string(), "a8");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
        assert_eq!(Square(0, 8).to_string(), "(0, 8)");
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Square::try_from((2, 3)), Ok(Square(2, 3)));
        assert_eq!(
            Square::try_from((9, 3)),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
        assert_eq!(
            Square::try_from((3, 12)),
            Err(SquareError::FileOutOfBounds { file: 12 })
        );
    }

    #[test]
    fn test_all_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().last(), Some(Square(7, 7)));
    }
}
