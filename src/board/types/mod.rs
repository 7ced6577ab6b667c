//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece`, `Color` and `BoardPiece` - piece kinds, sides, and occupants
//! - `Square` - (row, col) board coordinate
//! - `SquareSet` - 64-bit set of squares (legal destinations)
//! - `Move` and `MoveRecord` - move requests and executed-move history entries

mod moves;
mod piece;
mod square;
mod square_set;

// Re-export all public types
pub use moves::{CastlingSide, Disambiguation, Move, MoveRecord};
pub use piece::{BoardPiece, Color, Piece, PROMOTION_PIECES};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
