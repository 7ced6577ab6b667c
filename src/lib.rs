//! Chess rules engine: board state, legal move generation, check, checkmate
//! and stalemate detection, SAN, and a turn-based [`Game`] controller for a
//! two-player host.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! for (from, to) in [((1, 5), (2, 5)), ((6, 4), (4, 4)), ((1, 6), (3, 6)), ((7, 3), (3, 7))] {
//!     game.play(Square(from.0, from.1), Square(to.0, to.1)).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! assert_eq!(game.history().to_string(), "1. f3 e5 2. g4 Qh4#");
//! ```

pub mod board;
pub mod game;

pub use board::{Board, Color, Move, Piece, PositionStatus, Square};
pub use game::{Game, GameStatus, MoveDescriptor, MoveError, MoveOutcome};
