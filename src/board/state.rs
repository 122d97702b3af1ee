use super::error::BoardError;
use super::{Color, Piece, PieceId, PieceType, Square, BOARD_SIZE};
use crate::rules::Occupancy;

const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Board occupancy plus the pieces it owns.
///
/// `squares` and each piece's position always agree: every occupied square
/// holds an active piece standing on it, and every active piece is found on
/// its own square. Captured pieces stay in `pieces` with their active flag
/// cleared so a rollback can bring them back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<PieceId>; NUM_SQUARES],
    pub(crate) pieces: Vec<Piece>,
    pub(crate) kings: [Option<PieceId>; 2],
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            board.place_unchecked(Square(0, file), Color::White, kind);
            board.place_unchecked(Square(1, file), Color::White, PieceType::Pawn);
            board.place_unchecked(Square(6, file), Color::Black, PieceType::Pawn);
            board.place_unchecked(Square(7, file), Color::Black, kind);
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; NUM_SQUARES],
            pieces: Vec::new(),
            kings: [None; 2],
        }
    }

    /// Put a new piece on an empty square.
    ///
    /// # Errors
    ///
    /// Fails if `square` is off the board or occupied, or if `kind` is a king and `color`
    /// already has one.
    pub fn place(
        &mut self,
        square: Square,
        color: Color,
        kind: PieceType,
    ) -> Result<PieceId, BoardError> {
        if !square.is_valid() {
            return Err(BoardError::OffBoard { square });
        }
        if self.squares[square.as_index()].is_some() {
            return Err(BoardError::SquareOccupied { square });
        }
        if kind == PieceType::King && self.kings[color.index()].is_some() {
            return Err(BoardError::DuplicateKing { color });
        }

        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color, square));
        self.squares[square.as_index()] = Some(id);
        if kind == PieceType::King {
            self.kings[color.index()] = Some(id);
        }
        Ok(id)
    }

    fn place_unchecked(&mut self, square: Square, color: Color, kind: PieceType) {
        if let Err(err) = self.place(square, color, kind) {
            panic!("invalid starting layout: {err}");
        }
    }

    /// Handle of the piece standing on `square`.
    ///
    /// # Panics
    ///
    /// Panics if `square` is off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.squares[square.as_index()]
    }

    /// The piece standing on `square`.
    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square).map(|id| self.piece(id))
    }

    /// Look up a piece by handle, active or captured.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board.
    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Active pieces with their handles.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.is_active())
            .map(|(idx, piece)| (PieceId(idx), piece))
    }

    /// The king of `color`, if one was placed.
    #[inline]
    #[must_use]
    pub fn king_of(&self, color: Color) -> Option<PieceId> {
        self.kings[color.index()]
    }

    /// Verify that occupancy and piece positions agree.
    ///
    /// # Panics
    ///
    /// Panics on the first mismatch found.
    pub fn assert_consistent(&self) {
        for square in Square::all() {
            if let Some(id) = self.piece_at(square) {
                let piece = self.piece(id);
                assert!(piece.is_active(), "captured piece {id:?} still on {square}");
                assert_eq!(
                    piece.position(),
                    square,
                    "piece {id:?} found on {square} but thinks it is on {}",
                    piece.position()
                );
            }
        }
        for (id, piece) in self.pieces() {
            assert_eq!(
                self.piece_at(piece.position()),
                Some(id),
                "active piece {id:?} missing from {}",
                piece.position()
            );
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Occupancy for Board {
    fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_on(square).map(Piece::color)
    }
}
