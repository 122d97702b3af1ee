use crate::board::Move;

/// An L-shape: one square along one axis and two along the other.
#[inline]
pub(crate) fn knight_move(mv: Move) -> bool {
    matches!((mv.dx(), mv.dy()), (1, 2) | (2, 1))
}
