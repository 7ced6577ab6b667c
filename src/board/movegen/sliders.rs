use super::super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Piece, Square, SquareSet};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn of(piece: Piece) -> Option<SliderType> {
        match piece {
            Piece::Bishop => Some(SliderType::Bishop),
            Piece::Rook => Some(SliderType::Rook),
            Piece::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn directions(self) -> impl Iterator<Item = (isize, isize)> {
        let (straight, diagonal): (&[_], &[_]) = match self {
            SliderType::Bishop => (&[], &BISHOP_DIRECTIONS),
            SliderType::Rook => (&ROOK_DIRECTIONS, &[]),
            SliderType::Queen => (&ROOK_DIRECTIONS, &BISHOP_DIRECTIONS),
        };
        straight.iter().chain(diagonal).copied()
    }
}

impl Board {
    pub(crate) fn slider_destinations(&self, from: Square, color: Color, slider: SliderType) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for (d_row, d_col) in slider.directions() {
            let mut sq = from;
            while let Some(next) = sq.offset(d_row, d_col) {
                if self.is_ally(next, color) {
                    break;
                }
                targets.insert(next);
                if !self.is_empty(next) {
                    break;
                }
                sq = next;
            }
        }
        targets
    }
}
