use super::super::{Board, BoardPiece, Square, SquareSet};

impl Board {
    pub(crate) fn pawn_destinations(&self, from: Square, pawn: BoardPiece) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let color = pawn.color;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                targets.insert(forward);
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                        targets.insert(double);
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(diag) = from.offset(dir, d_col) {
                if self.is_enemy(diag, color) {
                    targets.insert(diag);
                }
            }
        }

        // The passed pawn must stand right beside us and the target right
        // in front of it.
        if let Some(ep) = self.en_passant {
            let target_reachable = from.offset(dir, 0).map(Square::row) == Some(ep.target.row())
                && ep.target.col().abs_diff(from.col()) == 1;
            let pawn_adjacent = ep.pawn.row() == from.row() && ep.pawn.col().abs_diff(from.col()) == 1;
            if target_reachable && pawn_adjacent && self.is_enemy(ep.pawn, color) {
                targets.insert(ep.target);
            }
        }

        targets
    }
}
