use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Color, Square, SquareSet};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> SquareSet {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| !self.is_ally(to, color))
            .collect()
    }
}
