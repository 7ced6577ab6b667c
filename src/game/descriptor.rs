//! The `(fromRow, fromCol, toRow, toCol, promotion)` move tuple exchanged
//! with a remote peer, and its six-byte frame.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::DescriptorError;
use crate::board::{Move, MoveRecord, Piece, Square, SquareError};

/// Tag byte that opens a move message.
pub const MOVE_MESSAGE_TAG: u8 = 1;

/// Length of an encoded move message.
pub const MOVE_MESSAGE_LEN: usize = 6;

/// A move as a plain coordinate tuple. `promotion` is 0 for none, else
/// [`Piece::code`] of the chosen piece.
///
/// Wire rows count down from Black's side: wire row 0 is Black's back rank
/// and wire row 7 is White's, so White's `e2e4` travels as `(6, 4, 4, 4)`.
/// Columns match [`Square`]. Coordinates are not range-checked until
/// converted back into squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveDescriptor {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    pub promotion: u8,
}

impl MoveDescriptor {
    #[must_use]
    pub const fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8, promotion: u8) -> Self {
        MoveDescriptor {
            from_row,
            from_col,
            to_row,
            to_col,
            promotion,
        }
    }

    /// Encode as `[tag, from_row, from_col, to_row, to_col, promotion]`.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; MOVE_MESSAGE_LEN] {
        [
            MOVE_MESSAGE_TAG,
            self.from_row,
            self.from_col,
            self.to_row,
            self.to_col,
            self.promotion,
        ]
    }

    /// Decode a move message. Trailing bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DescriptorError> {
        match bytes {
            [MOVE_MESSAGE_TAG, from_row, from_col, to_row, to_col, promotion, ..] => {
                Ok(MoveDescriptor::new(*from_row, *from_col, *to_row, *to_col, *promotion))
            }
            [tag, _, _, _, _, _, ..] => Err(DescriptorError::UnexpectedTag { tag: *tag }),
            _ => Err(DescriptorError::TooShort { len: bytes.len() }),
        }
    }

    pub fn from_square(&self) -> Result<Square, DescriptorError> {
        wire_square(self.from_row, self.from_col)
    }

    pub fn to_square(&self) -> Result<Square, DescriptorError> {
        wire_square(self.to_row, self.to_col)
    }

    /// The promotion choice, `None` for code 0.
    pub fn promotion_piece(&self) -> Result<Option<Piece>, DescriptorError> {
        if self.promotion == 0 {
            return Ok(None);
        }
        Piece::from_code(self.promotion)
            .filter(|p| p.is_promotion_choice())
            .map(Some)
            .ok_or(DescriptorError::InvalidPromotionCode {
                code: self.promotion,
            })
    }

    /// Validate every field and build the equivalent move request.
    pub fn to_move(&self) -> Result<Move, DescriptorError> {
        Ok(Move {
            from: self.from_square()?,
            to: self.to_square()?,
            promotion: self.promotion_piece()?,
        })
    }
}

/// Off-board errors report the coordinates as received.
fn wire_square(row: u8, col: u8) -> Result<Square, DescriptorError> {
    let (row, col) = (usize::from(row), usize::from(col));
    if row > 7 || col > 7 {
        return Err(SquareError::OffBoard { row, col }.into());
    }
    Ok(Square(7 - row, col))
}

fn wire_row(sq: Square) -> u8 {
    (7 - sq.row()) as u8
}

impl From<Move> for MoveDescriptor {
    fn from(mv: Move) -> Self {
        MoveDescriptor::new(
            wire_row(mv.from),
            mv.from.col() as u8,
            wire_row(mv.to),
            mv.to.col() as u8,
            mv.promotion.map_or(0, Piece::code),
        )
    }
}

impl From<&MoveRecord> for MoveDescriptor {
    fn from(record: &MoveRecord) -> Self {
        MoveDescriptor::from(record.as_move())
    }
}

impl MoveRecord {
    /// This move in wire form.
    #[must_use]
    pub fn descriptor(&self) -> MoveDescriptor {
        MoveDescriptor::from(self)
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} -> {},{}",
            self.from_row, self.from_col, self.to_row, self.to_col
        )?;
        if self.promotion != 0 {
            write!(f, " ={}", self.promotion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let desc = MoveDescriptor::new(1, 4, 0, 4, Piece::Queen.code());
        assert_eq!(desc.to_bytes(), [1, 1, 4, 0, 4, 2]);
        assert_eq!(MoveDescriptor::from_bytes(&desc.to_bytes()), Ok(desc));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let desc = MoveDescriptor::from_bytes(&[1, 6, 4, 4, 4, 0, 0xff, 0xff]).unwrap();
        assert_eq!(desc, MoveDescriptor::new(6, 4, 4, 4, 0));
    }

    #[test]
    fn test_short_or_foreign_frames_rejected() {
        assert_eq!(
            MoveDescriptor::from_bytes(&[1, 1, 4, 3]),
            Err(DescriptorError::TooShort { len: 4 })
        );
        assert_eq!(
            MoveDescriptor::from_bytes(&[6, 0, 0, 0, 0, 0]),
            Err(DescriptorError::UnexpectedTag { tag: 6 })
        );
    }

    #[test]
    fn test_to_move_validates_fields() {
        assert_eq!(
            MoveDescriptor::new(8, 0, 0, 0, 0).to_move(),
            Err(DescriptorError::OutOfBounds(SquareError::OffBoard {
                row: 8,
                col: 0
            }))
        );
        assert_eq!(
            MoveDescriptor::new(6, 4, 4, 8, 0).to_move(),
            Err(DescriptorError::OutOfBounds(SquareError::OffBoard {
                row: 4,
                col: 8
            }))
        );
        // King (1) and pawn (6) are not promotion choices.
        for code in [1, 6, 7] {
            assert_eq!(
                MoveDescriptor::new(1, 0, 0, 0, code).promotion_piece(),
                Err(DescriptorError::InvalidPromotionCode { code })
            );
        }
    }

    #[test]
    fn test_rows_count_from_black_side() {
        // White's opening pawn push as a peer sends it.
        let desc = MoveDescriptor::from_bytes(&[1, 6, 4, 4, 4, 0]).unwrap();
        assert_eq!(desc.to_move().map(|mv| mv.to_string()), Ok("e2e4".to_string()));

        let desc = MoveDescriptor::new(1, 3, 3, 3, 0);
        assert_eq!(desc.from_square(), Ok(Square(6, 3)));
        assert_eq!(desc.to_square(), Ok(Square(4, 3)));

        let mv: Move = "g1f3".parse().unwrap();
        assert_eq!(MoveDescriptor::from(mv).to_bytes(), [1, 7, 6, 5, 5, 0]);
    }

    #[test]
    fn test_from_move_uses_piece_codes() {
        let mv: Move = "b7b8n".parse().unwrap();
        let desc = MoveDescriptor::from(mv);
        assert_eq!(desc, MoveDescriptor::new(1, 1, 0, 1, 4));
        assert_eq!(desc.to_string(), "1,1 -> 0,1 =4");
        assert_eq!(desc.to_move(), Ok(mv));
    }
}
