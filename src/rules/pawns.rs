use super::Occupancy;
use crate::board::{Color, Move};

/// Pawn advance or capture for `color`.
///
/// Forward moves need an empty target, and the double step also needs an
/// empty intermediate square and a pawn still on its starting rank. A
/// diagonal step is only legal onto an enemy piece. En passant is not
/// recognised.
pub(crate) fn pawn_move<O: Occupancy + ?Sized>(color: Color, mv: Move, occupancy: &O) -> bool {
    let (source, target) = (mv.source(), mv.target());
    let forward = source.rank_delta(target) * color.pawn_direction();

    match (mv.dx(), forward) {
        (0, 1) => occupancy.color_at(target).is_none(),
        (0, 2) => {
            source.rank() == color.pawn_start_rank()
                && source
                    .offset(color.pawn_direction(), 0)
                    .is_some_and(|between| occupancy.color_at(between).is_none())
                && occupancy.color_at(target).is_none()
        }
        (1, 1) => occupancy.color_at(target) == Some(color.opponent()),
        _ => false,
    }
}
