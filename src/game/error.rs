//! Errors for move requests made through [`Game`](super::Game).

use std::fmt;

use super::GameStatus;
use crate::board::{Color, Piece, Square, SquareError};

/// Error type for malformed move descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Frame shorter than a move message
    TooShort { len: usize },
    /// First byte is not the move message tag
    UnexpectedTag { tag: u8 },
    /// A coordinate is off the board
    OutOfBounds(SquareError),
    /// Promotion code that names no promotion piece
    InvalidPromotionCode { code: u8 },
    /// Promotion code on a move that does not take a pawn to the last rank
    UnexpectedPromotion { code: u8 },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::TooShort { len } => {
                write!(f, "Move message too short ({len} bytes)")
            }
            DescriptorError::UnexpectedTag { tag } => {
                write!(f, "Unexpected message tag {tag}")
            }
            DescriptorError::OutOfBounds(err) => write!(f, "Bad coordinate: {err}"),
            DescriptorError::InvalidPromotionCode { code } => {
                write!(f, "Invalid promotion code {code}")
            }
            DescriptorError::UnexpectedPromotion { code } => {
                write!(f, "Promotion code {code} on a move that does not promote")
            }
        }
    }
}

impl std::error::Error for DescriptorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DescriptorError::OutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for DescriptorError {
    fn from(err: SquareError) -> Self {
        DescriptorError::OutOfBounds(err)
    }
}

/// Error type for rejected move and promotion requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game is over or waiting for a promotion choice
    NotAcceptingInput { status: GameStatus },
    /// A square built outside the 8x8 board
    OffBoard { square: Square },
    /// No piece on the origin square
    EmptyOrigin { square: Square },
    /// The origin piece belongs to the side not on move
    WrongColor { square: Square, to_move: Color },
    /// The destination is not among the legal destinations of the origin
    IllegalDestination { from: Square, to: Square },
    /// `promote` called with no pending promotion
    NoPromotionPending,
    /// Pawns may only become a queen, rook, bishop or knight
    InvalidPromotionPiece { piece: Piece },
    /// Remote descriptor could not be decoded
    Descriptor(DescriptorError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotAcceptingInput { status } => {
                write!(f, "Game is not accepting moves (status: {status})")
            }
            MoveError::OffBoard { square } => {
                write!(f, "Square ({}, {}) is off the board", square.row(), square.col())
            }
            MoveError::EmptyOrigin { square } => write!(f, "No piece on {square}"),
            MoveError::WrongColor { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::NoPromotionPending => write!(f, "No promotion is pending"),
            MoveError::InvalidPromotionPiece { piece } => {
                write!(f, "Cannot promote to {piece:?}")
            }
            MoveError::Descriptor(err) => write!(f, "Invalid move descriptor: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Descriptor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DescriptorError> for MoveError {
    fn from(err: DescriptorError) -> Self {
        MoveError::Descriptor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_descriptor_error_display() {
        let err = DescriptorError::TooShort { len: 3 };
        assert!(err.to_string().contains('3'));
        let err = DescriptorError::UnexpectedTag { tag: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_move_error_source_chain() {
        let err: MoveError = DescriptorError::from(SquareError::OffBoard { row: 9, col: 0 }).into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_illegal_destination_display() {
        let err = MoveError::IllegalDestination {
            from: Square(1, 4),
            to: Square(4, 4),
        };
        assert_eq!(err.to_string(), "Illegal move e2e5");
    }

    #[test]
    fn test_off_board_display_uses_coordinates() {
        let err = MoveError::OffBoard {
            square: Square(8, 0),
        };
        assert_eq!(err.to_string(), "Square (8, 0) is off the board");
    }
}
