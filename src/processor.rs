//! Validate a move and apply it, or leave the board untouched.
//!
//! # Example
//! ```
//! use chess_referee::{Board, Move, MoveProcessor, Square};
//!
//! let mut board = Board::new();
//! let processor = MoveProcessor::default();
//!
//! assert!(processor.process(Move::new(Square(0, 6), Square(2, 5)), &mut board));
//! assert!(!processor.process(Move::new(Square(0, 0), Square(3, 0)), &mut board));
//! ```

use crate::board::{Move, Position};
use crate::logging::{debug, trace};
use crate::rules::RulesBook;

/// Runs the accept-or-reject transaction for a single move.
///
/// Turn order is the caller's business: any piece on the source square may
/// be moved.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveProcessor {
    rules: RulesBook,
}

impl MoveProcessor {
    #[must_use]
    pub const fn new(rules: RulesBook) -> Self {
        MoveProcessor { rules }
    }

    /// Apply `mv` to `board` if it is legal; returns whether it was.
    ///
    /// A move is rejected when the source square is empty, the shape is
    /// wrong for the piece, the path is blocked, the target holds a piece of
    /// the mover's color, or the move would leave the mover's king in check.
    /// Squares off the board are rejected before anything else. A rejected
    /// move leaves `board` exactly as it was.
    pub fn process<P: Position + ?Sized>(&self, mv: Move, board: &mut P) -> bool {
        let (source, target) = (mv.source(), mv.target());

        if !source.is_valid() || !target.is_valid() {
            debug!("rejected {mv}: off the board");
            return false;
        }

        let Some(mover) = board.piece_at(source) else {
            debug!("rejected {mv}: no piece on {source}");
            return false;
        };
        let (kind, color) = (board.piece(mover).kind(), board.piece(mover).color());

        if !self.rules.is_legal_move(kind, color, source, target, &*board) {
            debug!("rejected {mv}: not a {kind:?} move");
            return false;
        }

        if !board.is_path_clear(source, target) {
            debug!("rejected {mv}: path blocked");
            return false;
        }

        let captured = match board.piece_at(target) {
            Some(victim) if board.piece(victim).is_fellow(board.piece(mover)) => {
                debug!("rejected {mv}: {target} holds a {color} piece");
                return false;
            }
            Some(victim) => {
                trace!("{mv}: capturing {victim:?} on {target}");
                Some((victim, board.remove_piece(victim)))
            }
            None => None,
        };

        trace!("{mv}: moving {mover:?}");
        let moved = board.apply_move(mover, target);

        if board.is_king_in_check(color) {
            board.restore(mover, moved);
            if let Some((victim, snapshot)) = captured {
                board.restore(victim, snapshot);
            }
            debug!("rejected {mv}: {color} king left in check, rolled back");
            return false;
        }

        debug!("accepted {mv}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{
        Board, BoardBuilder, Color, Piece, PieceId, PieceSnapshot, PieceType, Square,
    };
    use crate::rules::Occupancy;

    /// Board wrapper that records every mutation and can force check.
    struct Recorder {
        board: Board,
        force_check: bool,
        calls: Vec<String>,
    }

    impl Recorder {
        fn new(board: Board) -> Self {
            Recorder {
                board,
                force_check: false,
                calls: Vec::new(),
            }
        }
    }

    impl Occupancy for Recorder {
        fn color_at(&self, square: Square) -> Option<Color> {
            self.board.color_at(square)
        }
    }

    impl Position for Recorder {
        fn piece_at(&self, square: Square) -> Option<PieceId> {
            self.board.piece_at(square)
        }

        fn piece(&self, id: PieceId) -> &Piece {
            self.board.piece(id)
        }

        fn is_path_clear(&self, source: Square, target: Square) -> bool {
            self.board.is_path_clear(source, target)
        }

        fn is_king_in_check(&self, color: Color) -> bool {
            self.force_check || self.board.is_king_in_check(color)
        }

        fn apply_move(&mut self, id: PieceId, target: Square) -> PieceSnapshot {
            self.calls.push(format!("move {id:?} {target}"));
            self.board.apply_move(id, target)
        }

        fn remove_piece(&mut self, id: PieceId) -> PieceSnapshot {
            self.calls.push(format!("remove {id:?}"));
            self.board.remove_piece(id)
        }

        fn restore(&mut self, id: PieceId, snapshot: PieceSnapshot) {
            self.calls.push(format!("restore {id:?}"));
            self.board.restore(id, snapshot);
        }
    }

    fn kings_and(extra: &[(Square, Color, PieceType)]) -> Board {
        let mut builder = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, PieceType::King)
            .piece(Square(7, 4), Color::Black, PieceType::King);
        for &(square, color, kind) in extra {
            builder = builder.piece(square, color, kind);
        }
        builder.build()
    }

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::new(Square(from.0, from.1), Square(to.0, to.1))
    }

    #[test]
    fn test_process_moves_piece_at_source() {
        let mut board = kings_and(&[(Square(0, 0), Color::White, PieceType::Rook)]);
        let rook = board.piece_at(Square(0, 0)).unwrap();

        assert!(MoveProcessor::default().process(mv((0, 0), (5, 0)), &mut board));
        assert_eq!(board.piece(rook).position(), Square(5, 0));
        assert_eq!(board.piece_at(Square(5, 0)), Some(rook));
        assert!(board.is_empty(Square(0, 0)));
        board.assert_consistent();
    }

    #[test]
    fn test_process_captures_piece_at_target() {
        let mut board = kings_and(&[
            (Square(3, 3), Color::White, PieceType::Bishop),
            (Square(5, 5), Color::Black, PieceType::Knight),
        ]);
        let knight = board.piece_at(Square(5, 5)).unwrap();
        let bishop = board.piece_at(Square(3, 3)).unwrap();

        assert!(MoveProcessor::default().process(mv((3, 3), (5, 5)), &mut board));
        assert!(!board.piece(knight).is_active());
        assert_eq!(board.piece_at(Square(5, 5)), Some(bishop));
        board.assert_consistent();
    }

    #[test]
    fn test_rejections_before_apply_never_mutate() {
        let board = kings_and(&[
            (Square(0, 0), Color::White, PieceType::Rook),
            (Square(2, 0), Color::White, PieceType::Pawn),
            (Square(0, 2), Color::White, PieceType::Bishop),
        ]);
        let rejected = [
            mv((4, 4), (5, 4)), // empty source
            mv((0, 0), (1, 1)), // wrong shape
            mv((0, 0), (5, 0)), // blocked
            mv((0, 2), (0, 0)), // wrong shape for a bishop
            mv((0, 0), (0, 2)), // own piece
        ];

        for m in rejected {
            let mut recorder = Recorder::new(board.clone());
            assert!(!MoveProcessor::default().process(m, &mut recorder), "{m}");
            assert!(recorder.calls.is_empty(), "{m} mutated: {:?}", recorder.calls);
            assert_eq!(recorder.board, board);
        }
    }

    #[test]
    fn test_check_rolls_back_source() {
        let board = kings_and(&[(Square(0, 0), Color::White, PieceType::Rook)]);
        let mut recorder = Recorder::new(board.clone());
        recorder.force_check = true;

        assert!(!MoveProcessor::default().process(mv((0, 0), (3, 0)), &mut recorder));
        let rook = board.piece_at(Square(0, 0)).unwrap();
        assert_eq!(
            recorder.calls,
            vec![format!("move {rook:?} a4"), format!("restore {rook:?}")]
        );
        assert_eq!(recorder.board, board);
    }

    #[test]
    fn test_check_rolls_back_capture() {
        let board = kings_and(&[
            (Square(0, 0), Color::White, PieceType::Rook),
            (Square(3, 0), Color::Black, PieceType::Pawn),
        ]);
        let rook = board.piece_at(Square(0, 0)).unwrap();
        let pawn = board.piece_at(Square(3, 0)).unwrap();
        let mut recorder = Recorder::new(board.clone());
        recorder.force_check = true;

        assert!(!MoveProcessor::default().process(mv((0, 0), (3, 0)), &mut recorder));
        assert_eq!(
            recorder.calls,
            vec![
                format!("remove {pawn:?}"),
                format!("move {rook:?} a4"),
                format!("restore {rook:?}"),
                format!("restore {pawn:?}"),
            ]
        );
        assert_eq!(recorder.board, board);
        recorder.board.assert_consistent();
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut board = kings_and(&[
            (Square(1, 4), Color::White, PieceType::Knight),
            (Square(6, 4), Color::Black, PieceType::Rook),
        ]);
        let before = board.clone();

        assert!(!MoveProcessor::default().process(mv((1, 4), (2, 6)), &mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_pinned_capture_rolls_back_both_pieces() {
        let mut board = kings_and(&[
            (Square(1, 4), Color::White, PieceType::Rook),
            (Square(6, 4), Color::Black, PieceType::Rook),
            (Square(1, 0), Color::Black, PieceType::Knight),
        ]);
        let rook = board.piece_at(Square(1, 4)).unwrap();
        let knight = board.piece_at(Square(1, 0)).unwrap();
        let before = board.clone();

        assert!(!MoveProcessor::default().process(mv((1, 4), (1, 0)), &mut board));
        assert_eq!(board, before);
        assert!(board.piece(knight).is_active());
        assert_eq!(board.piece(knight).position(), Square(1, 0));
        assert_eq!(board.piece_at(Square(1, 0)), Some(knight));
        assert_eq!(board.piece(rook).position(), Square(1, 4));
        assert_eq!(board.piece_at(Square(1, 4)), Some(rook));
        board.assert_consistent();
    }

    #[test]
    fn test_off_board_move_is_rejected() {
        let board = Board::new();
        let rejected = [
            mv((0, 8), (1, 8)),
            mv((8, 8), (0, 0)),
            mv((0, 1), (9, 2)),
            mv((0, 0), (0, 8)),
        ];

        for m in rejected {
            let mut recorder = Recorder::new(board.clone());
            assert!(!MoveProcessor::default().process(m, &mut recorder), "{m}");
            assert!(recorder.calls.is_empty(), "{m} mutated: {:?}", recorder.calls);
            assert_eq!(recorder.board, board);
            recorder.board.assert_consistent();
        }
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = kings_and(&[(Square(7, 3), Color::Black, PieceType::Rook)]);
        let before = board.clone();

        assert!(!MoveProcessor::default().process(mv((0, 4), (0, 3)), &mut board));
        assert_eq!(board, before);
        assert!(MoveProcessor::default().process(mv((0, 4), (0, 5)), &mut board));
    }

    #[test]
    fn test_capturing_the_checker_is_accepted() {
        let mut board = kings_and(&[
            (Square(4, 4), Color::Black, PieceType::Rook),
            (Square(4, 0), Color::White, PieceType::Rook),
        ]);
        assert!(board.is_king_in_check(Color::White));

        assert!(MoveProcessor::default().process(mv((4, 0), (4, 4)), &mut board));
        assert!(!board.is_king_in_check(Color::White));
    }
}
