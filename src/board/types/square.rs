//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is White's back rank and row 7 is Black's; col 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Whether both coordinates are on the board. The fields are public, so
    /// a host-built square can be off it.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step by a signed (row, col) delta, returning `None` when the result
    /// falls off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// File letter of this square ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// Rank digit of this square ('1'..='8')
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'1' + self.0 as u8) as char
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Iterate over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OffBoard { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_algebraic = || SquareError::NotAlgebraic {
            text: s.to_string(),
        };
        let &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] = s.as_bytes() else {
            return Err(not_algebraic());
        };
        Ok(Square(usize::from(rank - b'1'), usize::from(file - b'a')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq, Square(3, 4));
        assert_eq!(sq.to_string(), "e4");
        assert_eq!(Square(7, 0).to_string(), "a8");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert_eq!(
            "e44".parse::<Square>(),
            Err(SquareError::NotAlgebraic {
                text: "e44".to_string()
            })
        );
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(0, -1), None);
        assert_eq!(Square(7, 7).offset(1, 1), None);
        assert_eq!(Square(3, 3).offset(2, -1), Some(Square(5, 2)));
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Square::try_from((2, 3)), Ok(Square(2, 3)));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::OffBoard { row: 8, col: 0 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::OffBoard { row: 0, col: 9 })
        );
    }
}
