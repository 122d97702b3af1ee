use std::fmt;

use super::{Board, Square, BOARD_SIZE};

/// Text diagram, rank 8 at the top. White pieces are uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let ch = self
                    .piece_on(Square(rank, file))
                    .map_or('.', |piece| piece.kind().to_diagram_char(piece.color()));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
