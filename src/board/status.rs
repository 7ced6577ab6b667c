use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Board;

/// Outcome of evaluating the side to move's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl PositionStatus {
    #[must_use]
    pub const fn from_flags(in_check: bool, has_moves: bool) -> Self {
        match (in_check, has_moves) {
            (true, false) => PositionStatus::Checkmate,
            (false, false) => PositionStatus::Stalemate,
            (true, true) => PositionStatus::Check,
            (false, true) => PositionStatus::Playing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, PositionStatus::Checkmate | PositionStatus::Stalemate)
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PositionStatus::Playing => "playing",
            PositionStatus::Check => "check",
            PositionStatus::Checkmate => "checkmate",
            PositionStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

impl Board {
    /// Combine check and mobility of the side to move.
    pub fn status(&mut self) -> PositionStatus {
        let color = self.side_to_move;
        let in_check = self.is_in_check(color);
        let has_moves = self.has_legal_moves(color);
        log::trace!("status for {color}: in_check={in_check} has_moves={has_moves}");
        PositionStatus::from_flags(in_check, has_moves)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status() == PositionStatus::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status() == PositionStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_table() {
        assert_eq!(PositionStatus::from_flags(true, false), PositionStatus::Checkmate);
        assert_eq!(PositionStatus::from_flags(false, false), PositionStatus::Stalemate);
        assert_eq!(PositionStatus::from_flags(true, true), PositionStatus::Check);
        assert_eq!(PositionStatus::from_flags(false, true), PositionStatus::Playing);
    }

    #[test]
    fn test_start_position_is_playing() {
        let mut board = Board::new();
        assert_eq!(board.status(), PositionStatus::Playing);
        assert!(!board.is_checkmate());
        assert!(!board.is_stalemate());
    }
}
