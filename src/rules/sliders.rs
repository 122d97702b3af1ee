use crate::board::Move;

/// Same rank or same file, and not a null move.
#[inline]
pub(crate) fn rook_move(mv: Move) -> bool {
    (mv.dx() == 0) != (mv.dy() == 0)
}

/// Same diagonal, and not a null move.
#[inline]
pub(crate) fn bishop_move(mv: Move) -> bool {
    mv.dx() == mv.dy() && mv.dx() > 0
}

/// Rook or bishop line.
#[inline]
pub(crate) fn queen_move(mv: Move) -> bool {
    rook_move(mv) || bishop_move(mv)
}
