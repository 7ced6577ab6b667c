use std::fmt;

use crate::board::{Color, MoveRecord, PositionStatus};

/// Append-only list of executed moves for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        MoveHistory::default()
    }

    pub(crate) fn record(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// SAN of every move in order.
    pub fn notations(&self) -> impl Iterator<Item = &str> + '_ {
        self.moves.iter().map(|m| m.notation.as_str())
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Numbered movetext, e.g. `1. e4 e5 2. Nf3`. A history that starts with a
/// Black move opens with `1...`.
impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut number = 1;
        for (i, record) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match record.color {
                Color::White => write!(f, "{number}. {}", record.notation)?,
                Color::Black => {
                    if i == 0 {
                        write!(f, "{number}... ")?;
                    }
                    write!(f, "{}", record.notation)?;
                    number += 1;
                }
            }
        }
        Ok(())
    }
}
