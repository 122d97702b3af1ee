use crate::board::Move;

/// One step in any direction. Castling is not a king move here.
#[inline]
pub(crate) fn king_move(mv: Move) -> bool {
    mv.dx() <= 1 && mv.dy() <= 1 && (mv.dx(), mv.dy()) != (0, 0)
}
