//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//! Pieces placed with [`BoardBuilder::piece`] count as unmoved, so a king
//! and rook on their home squares keep their castling options.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
//! ```

use super::state::EnPassant;
use super::{Board, BoardPiece, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, BoardPiece)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(board.pieces(color));
        }
        builder
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.place(square, BoardPiece::new(piece, color))
    }

    /// Place a piece that has already moved (no castling, for kings and rooks).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, piece: Piece) -> Self {
        let mut occupant = BoardPiece::new(piece, color);
        occupant.has_moved = true;
        self.place(square, occupant)
    }

    /// Mark whatever stands on `square` as moved.
    #[must_use]
    pub fn mark_moved(mut self, square: Square) -> Self {
        for (sq, occupant) in &mut self.pieces {
            if *sq == square {
                occupant.has_moved = true;
            }
        }
        self
    }

    fn place(mut self, square: Square, occupant: BoardPiece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, occupant));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square (the square a capturing pawn would
    /// land on). The passed pawn is assumed to belong to the side that is
    /// not to move.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Build the board.
    ///
    /// An en passant target with no enemy pawn in front of it is dropped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, occupant) in self.pieces {
            board.set(square, Some(occupant));
        }

        board.side_to_move = self.side_to_move;
        let mover = self.side_to_move.opponent();
        board.en_passant = self
            .en_passant_target
            .and_then(|target| target.offset(mover.pawn_direction(), 0))
            .filter(|&pawn| {
                board
                    .piece_at(pawn)
                    .is_some_and(|p| p.is(Piece::Pawn, mover))
            })
            .map(|pawn| EnPassant::behind(pawn, mover));
        board.refresh_king_cache();

        board
    }
}
