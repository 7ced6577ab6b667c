use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoardPiece, Color, Piece, Square};

/// En-passant bookkeeping left behind by a two-square pawn advance.
///
/// `target` is the square the capturing pawn lands on, `pawn` the square of
/// the pawn that gets removed. `target` is always the square directly behind
/// `pawn` from the advancing side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassant {
    pub target: Square,
    pub pawn: Square,
}

impl EnPassant {
    /// Bookkeeping for a pawn that just advanced two squares and now stands
    /// on `pawn`.
    #[must_use]
    pub fn behind(pawn: Square, mover: Color) -> Self {
        let target_row = (pawn.row() as isize - mover.pawn_direction()) as usize;
        EnPassant {
            target: Square(target_row, pawn.col()),
            pawn,
        }
    }
}

/// The 8x8 board plus side to move, en-passant pair and king cache.
///
/// The board only ever changes through [`Board::apply_move`],
/// [`Board::promote`] and the restoring simulation in `make_unmake`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<BoardPiece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) kings: [Option<Square>; 2],
}

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_ROW.iter().enumerate() {
            board.set(Square(0, col), Some(BoardPiece::new(*piece, Color::White)));
            board.set(Square(1, col), Some(BoardPiece::new(Piece::Pawn, Color::White)));
            board.set(Square(6, col), Some(BoardPiece::new(Piece::Pawn, Color::Black)));
            board.set(Square(7, col), Some(BoardPiece::new(*piece, Color::Black)));
        }
        board.refresh_king_cache();
        board
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant: None,
            kings: [None; 2],
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    /// The occupant of a square, if any. Off-board squares are empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<BoardPiece> {
        *self.squares.get(sq.0)?.get(sq.1)?
    }

    /// Get just the piece kind on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|p| p.kind)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_ally(&self, sq: Square, color: Color) -> bool {
        self.color_on(sq) == Some(color)
    }

    #[inline]
    #[must_use]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.color_on(sq), Some(c) if c != color)
    }

    /// Cached king square for `color`.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Locate the king of `color` by scanning the board.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(Piece::King, color))
        })
    }

    /// All pieces of one color with their squares, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, BoardPiece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<BoardPiece>) {
        self.squares[sq.0][sq.1] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<BoardPiece> {
        self.squares[sq.0][sq.1].take()
    }

    pub(crate) fn refresh_king_cache(&mut self) {
        for color in Color::BOTH {
            self.kings[color.index()] = self.find_king(color);
        }
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, sq: Option<Square>) {
        self.kings[color.index()] = sq;
    }

    /// Hand the move to the other side.
    #[inline]
    pub(crate) fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// ASCII diagram, rank 8 at the top, White in uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                let c = self
                    .piece_at(Square(row, col))
                    .map_or('.', |p| p.kind.to_fen_char(p.color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
