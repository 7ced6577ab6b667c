//! Errors raised while reading squares, coordinate moves, FEN and SAN.
//!
//! Move generation, attack detection and simulation never fail; only text
//! and host-supplied coordinates coming into the board are checked here.

use std::error::Error;
use std::fmt;

use super::Square;

/// A square that cannot exist on an 8x8 board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column is 8 or more.
    OffBoard { row: usize, col: usize },
    /// Not a file `a`-`h` followed by a rank `1`-`8`.
    NotAlgebraic { text: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OffBoard { row, col } => {
                write!(f, "({row}, {col}) is off the board")
            }
            SquareError::NotAlgebraic { text } => write!(f, "'{text}' is not a square"),
        }
    }
}

impl Error for SquareError {}

/// Coordinate move text such as `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not two squares plus an optional promotion letter.
    WrongLength { text: String },
    Square(SquareError),
    /// The fifth character names no piece a pawn may become.
    NotAPromotionPiece { letter: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongLength { text } => {
                write!(f, "'{text}' is not a coordinate move")
            }
            MoveParseError::Square(err) => write!(f, "bad square in move: {err}"),
            MoveParseError::NotAPromotionPiece { letter } => {
                write!(f, "cannot promote to '{letter}'")
            }
        }
    }
}

impl Error for MoveParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveParseError::Square(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        MoveParseError::Square(err)
    }
}

/// The space-separated fields of a FEN record that position setup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    Placement,
    SideToMove,
    Castling,
    EnPassant,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FenField::Placement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling",
            FenField::EnPassant => "en passant",
        })
    }
}

/// Position setup text that does not describe a usable board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    MissingField(FenField),
    /// Placement must list exactly eight ranks.
    RankCount { found: usize },
    /// A rank (numbered 8 down to 1) that does not cover exactly eight files.
    RankWidth { rank: usize, files: usize },
    UnknownPiece { letter: char },
    SideToMove { text: String },
    CastlingLetter { letter: char },
    /// A castling letter whose king or rook is not on its home square, so
    /// there is nothing to mark unmoved.
    CastlingPiecesMissing { letter: char },
    EnPassantSquare(SquareError),
    /// The target is not directly behind an enemy pawn that could just have
    /// advanced two squares.
    NoEnPassantPawn { target: Square },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField(field) => write!(f, "FEN has no {field} field"),
            FenError::RankCount { found } => {
                write!(f, "FEN placement has {found} ranks, expected 8")
            }
            FenError::RankWidth { rank, files } => {
                write!(f, "FEN rank {rank} covers {files} files, expected 8")
            }
            FenError::UnknownPiece { letter } => write!(f, "unknown piece '{letter}' in FEN"),
            FenError::SideToMove { text } => {
                write!(f, "side to move '{text}' is neither 'w' nor 'b'")
            }
            FenError::CastlingLetter { letter } => {
                write!(f, "unknown castling letter '{letter}'")
            }
            FenError::CastlingPiecesMissing { letter } => {
                write!(f, "castling '{letter}' without king and rook on their home squares")
            }
            FenError::EnPassantSquare(err) => write!(f, "bad en passant target: {err}"),
            FenError::NoEnPassantPawn { target } => {
                write!(f, "no pawn can be captured en passant on {target}")
            }
        }
    }
}

impl Error for FenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FenError::EnPassantSquare(err) => Some(err),
            _ => None,
        }
    }
}

/// SAN text that does not name exactly one legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    Empty,
    UnknownPiece { letter: char },
    /// Origin hints or destination that do not read as squares.
    Malformed { san: String },
    /// `=` not followed by exactly one of Q, R, B or N.
    BadPromotion { san: String },
    NoLegalMove { san: String },
    /// More than one legal move fits; the text needs disambiguation.
    Ambiguous { san: String, candidates: usize },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => f.write_str("empty SAN"),
            SanError::UnknownPiece { letter } => write!(f, "unknown piece '{letter}' in SAN"),
            SanError::Malformed { san } => write!(f, "cannot read SAN '{san}'"),
            SanError::BadPromotion { san } => write!(f, "bad promotion in '{san}'"),
            SanError::NoLegalMove { san } => write!(f, "no legal move matches '{san}'"),
            SanError::Ambiguous { san, candidates } => {
                write!(f, "'{san}' fits {candidates} legal moves")
            }
        }
    }
}

impl Error for SanError {}
