//! Chess board representation and rules.
//!
//! An 8x8 mailbox of optional pieces with per-piece `has_moved` flags, the
//! en-passant pair and a king cache. Supports full chess rules including
//! castling, en passant, and promotions, plus check, checkmate and stalemate
//! detection and SAN.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, PositionStatus};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.status(), PositionStatus::Playing);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, FenField, MoveParseError, SanError, SquareError};
pub use make_unmake::AppliedMove;
pub use san::render_san;
pub use state::{Board, EnPassant};
pub use status::PositionStatus;
pub use types::{
    BoardPiece, CastlingSide, Color, Disambiguation, Move, MoveRecord, Piece, Square, SquareSet,
    SquareSetIter, PROMOTION_PIECES,
};
