//! Move requests and executed-move records.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move request: origin, destination and, for a promoting pawn, the
/// chosen piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(MoveParseError::WrongLength {
                text: s.to_string(),
            });
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(letter) => match Piece::from_char(letter) {
                Some(p) if p.is_promotion_choice() => Some(p),
                _ => return Err(MoveParseError::NotAPromotionPiece { letter }),
            },
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

/// Which wing a castling move goes to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    /// Column the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_from_col(self) -> usize {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_to_col(self) -> usize {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_to_col(self) -> usize {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }
}

/// Origin characters SAN needs to tell apart like pieces reaching the same
/// square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Disambiguation {
    #[default]
    None,
    File,
    Rank,
    Both,
}

/// An executed move as kept in the game history.
///
/// Created once when the move completes; `gives_check`, `gives_checkmate`
/// and `notation` are rewritten exactly once more after the position that
/// follows has been evaluated.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub color: Color,
    pub is_capture: bool,
    pub castle: Option<CastlingSide>,
    pub is_en_passant: bool,
    pub promotion: Option<Piece>,
    pub disambiguation: Disambiguation,
    pub gives_check: bool,
    pub gives_checkmate: bool,
    pub notation: String,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub fn is_castle_kingside(&self) -> bool {
        self.castle == Some(CastlingSide::KingSide)
    }

    #[inline]
    #[must_use]
    pub fn is_castle_queenside(&self) -> bool {
        self.castle == Some(CastlingSide::QueenSide)
    }

    /// The move request that reproduces this record.
    #[inline]
    #[must_use]
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}
