//! Path clearance and check detection.

use super::{Board, Color, Square};
use crate::rules::RulesBook;

impl Board {
    /// True if nothing stands strictly between `source` and `target`.
    ///
    /// Only straight and diagonal lines have squares in between; any other
    /// shape (a knight jump, say) is vacuously clear.
    #[must_use]
    pub fn is_path_clear(&self, source: Square, target: Square) -> bool {
        let dr = source.rank_delta(target);
        let df = source.file_delta(target);
        let on_line = dr == 0 || df == 0 || dr.abs() == df.abs();
        if !on_line {
            return true;
        }

        let (step_r, step_f) = (dr.signum(), df.signum());
        let mut current = source;
        loop {
            current = match current.offset(step_r, step_f) {
                Some(next) if next != target => next,
                _ => return true,
            };
            if !self.is_empty(current) {
                return false;
            }
        }
    }

    /// True if an active `by` piece could move to `square`, judged by its
    /// movement rule and, for sliders, a clear path.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let rules = RulesBook::new();
        self.pieces()
            .filter(|(_, piece)| piece.color() == by && piece.position() != square)
            .any(|(_, piece)| {
                let from = piece.position();
                rules.is_legal_move(piece.kind(), by, from, square, self)
                    && (!piece.kind().is_slider() || self.is_path_clear(from, square))
            })
    }

    /// True if the king of `color` is attacked by any enemy piece.
    ///
    /// A side without a king on the board is never in check. Attacks are
    /// judged on movement and path alone, so an attacker pinned to its own
    /// king still gives check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_of(color) else {
            return false;
        };
        let king = self.piece(king);
        king.is_active() && self.is_square_attacked(king.position(), color.opponent())
    }
}
