//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the standard human-readable chess notation used in scoresheets,
//! books, and GUIs. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! Rendering is a pure function of a [`MoveRecord`]: everything that needs
//! the board (disambiguation, capture, check and mate) is captured in the
//! record first, so the text can be regenerated once the position after the
//! move has been evaluated.
//!
//! # Examples
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let mv = board.parse_san("e4").unwrap();
//! assert_eq!(board.move_to_san(&mv).as_deref(), Some("e4"));
//! ```

use super::error::SanError;
use super::make_unmake::AppliedMove;
use super::{Board, CastlingSide, Disambiguation, Move, MoveRecord, Piece, PositionStatus, Square};

/// Render the SAN text for a record.
#[must_use]
pub fn render_san(record: &MoveRecord) -> String {
    let mut san = String::with_capacity(8);

    match record.castle {
        Some(CastlingSide::KingSide) => san.push_str("O-O"),
        Some(CastlingSide::QueenSide) => san.push_str("O-O-O"),
        None => {
            if let Some(letter) = record.piece.san_letter() {
                san.push(letter);
            }

            match record.disambiguation {
                Disambiguation::None => {}
                Disambiguation::File => san.push(record.from.file_char()),
                Disambiguation::Rank => san.push(record.from.rank_char()),
                Disambiguation::Both => {
                    san.push(record.from.file_char());
                    san.push(record.from.rank_char());
                }
            }

            if record.is_capture {
                if record.piece == Piece::Pawn {
                    san.push(record.from.file_char());
                }
                san.push('x');
            }

            san.push_str(&record.to.to_string());

            if let Some(promo) = record.promotion.and_then(Piece::san_letter) {
                san.push('=');
                san.push(promo);
            }
        }
    }

    if record.gives_checkmate {
        san.push('#');
    } else if record.gives_check {
        san.push('+');
    }

    san
}

impl MoveRecord {
    /// Build the record for a move that was just applied. Check flags start
    /// out false; see [`MoveRecord::set_outcome`].
    #[must_use]
    pub(crate) fn from_applied(
        applied: &AppliedMove,
        disambiguation: Disambiguation,
        promotion: Option<Piece>,
    ) -> MoveRecord {
        let mut record = MoveRecord {
            from: applied.from,
            to: applied.to,
            piece: applied.piece,
            captured: applied.captured,
            color: applied.color,
            is_capture: applied.is_capture(),
            castle: applied.castle,
            is_en_passant: applied.is_en_passant,
            promotion,
            disambiguation,
            gives_check: false,
            gives_checkmate: false,
            notation: String::new(),
        };
        record.notation = render_san(&record);
        record
    }

    /// Backfill the check flags from the opponent's resulting position and
    /// regenerate the notation.
    pub fn set_outcome(&mut self, status: PositionStatus) {
        self.gives_check = matches!(status, PositionStatus::Check | PositionStatus::Checkmate);
        self.gives_checkmate = status == PositionStatus::Checkmate;
        self.notation = render_san(self);
    }
}

impl Board {
    /// Origin characters needed to tell the piece on `from` apart from other
    /// like pieces that could legally move to `to`. Pawns and kings never
    /// need any.
    pub fn disambiguation_for(&mut self, from: Square, to: Square) -> Disambiguation {
        let Some(mover) = self.piece_at(from) else {
            return Disambiguation::None;
        };
        if matches!(mover.kind, Piece::Pawn | Piece::King) {
            return Disambiguation::None;
        }

        let rivals: Vec<Square> = self
            .pieces(mover.color)
            .filter(|&(sq, p)| sq != from && p.kind == mover.kind)
            .map(|(sq, _)| sq)
            .collect();
        let ambiguous: Vec<Square> = rivals
            .into_iter()
            .filter(|&sq| self.is_legal_destination(sq, to))
            .collect();

        if ambiguous.is_empty() {
            return Disambiguation::None;
        }

        let same_file = ambiguous.iter().any(|sq| sq.col() == from.col());
        let same_rank = ambiguous.iter().any(|sq| sq.row() == from.row());

        match (same_file, same_rank) {
            (false, _) => Disambiguation::File,
            (true, false) => Disambiguation::Rank,
            (true, true) => Disambiguation::Both,
        }
    }

    /// Format a legal move in Standard Algebraic Notation, including the
    /// check or mate suffix.
    ///
    /// Returns `None` if `from` is empty. A promotion without a chosen piece
    /// is rendered as a queen.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> Option<String> {
        let mut scratch = self.clone();
        let disambiguation = scratch.disambiguation_for(mv.from, mv.to);
        let applied = scratch.apply_move(mv.from, mv.to)?;
        let promotion = applied
            .promotion_pending
            .then(|| mv.promotion.unwrap_or(Piece::Queen));
        if let Some(piece) = promotion {
            scratch.promote(mv.to, piece);
        }
        scratch.pass_turn();

        let mut record = MoveRecord::from_applied(&applied, disambiguation, promotion);
        record.set_outcome(scratch.status());
        Some(record.notation)
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Accepts notation like "e4", "Nf3", "Bxc6", "O-O", "e8=Q"
    /// with optional check indicators (+, #).
    pub fn parse_san(&mut self, san: &str) -> Result<Move, SanError> {
        let trimmed = san.trim();
        if trimmed.is_empty() {
            return Err(SanError::Empty);
        }

        // Remove check/checkmate indicators
        let body = trimmed.trim_end_matches(['+', '#']);

        match body {
            "O-O" | "0-0" => return self.find_castling_move(CastlingSide::KingSide, trimmed),
            "O-O-O" | "0-0-0" => return self.find_castling_move(CastlingSide::QueenSide, trimmed),
            _ => {}
        }

        let parsed = SanParts::parse(body)?;
        self.find_san_move(&parsed, trimmed)
    }

    fn find_castling_move(&mut self, side: CastlingSide, san: &str) -> Result<Move, SanError> {
        let Some(king_sq) = self.king_square(self.side_to_move) else {
            return Err(SanError::NoLegalMove { san: san.to_string() });
        };
        let target = Square(king_sq.row(), side.king_to_col());
        let is_castle = king_sq.col() == 4 && king_sq.row() == self.side_to_move.back_row();
        if is_castle && self.is_legal_destination(king_sq, target) {
            Ok(Move::new(king_sq, target))
        } else {
            Err(SanError::NoLegalMove { san: san.to_string() })
        }
    }

    /// Find the move matching the parsed SAN components.
    fn find_san_move(&mut self, parts: &SanParts, san: &str) -> Result<Move, SanError> {
        let matching: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| {
                mv.to == parts.dest
                    && self.piece_on(mv.from) == Some(parts.piece)
                    && mv.promotion == parts.promotion
                    && parts.file.map_or(true, |col| mv.from.col() == col)
                    && parts.rank.map_or(true, |row| mv.from.row() == row)
            })
            .collect();

        match matching.as_slice() {
            [] => Err(SanError::NoLegalMove { san: san.to_string() }),
            [mv] => Ok(*mv),
            _ => Err(SanError::Ambiguous {
                san: san.to_string(),
                candidates: matching.len(),
            }),
        }
    }
}

/// Components of a non-castling SAN token.
#[derive(Debug, PartialEq, Eq)]
struct SanParts {
    piece: Piece,
    file: Option<usize>,
    rank: Option<usize>,
    dest: Square,
    promotion: Option<Piece>,
}

impl SanParts {
    fn parse(body: &str) -> Result<SanParts, SanError> {
        let mut chars = body.chars().peekable();

        let piece = match chars.peek() {
            Some(&c) if c.is_ascii_uppercase() => {
                chars.next();
                Piece::from_char(c).ok_or(SanError::UnknownPiece { letter: c })?
            }
            Some(_) => Piece::Pawn,
            None => return Err(SanError::Empty),
        };

        let rest: String = chars.collect();
        let (squares, promotion) = match rest.split_once('=') {
            Some((head, promo)) => {
                let mut promo_chars = promo.chars();
                let choice = promo_chars
                    .next()
                    .and_then(Piece::from_char)
                    .filter(|p| p.is_promotion_choice() && promo_chars.next().is_none())
                    .ok_or_else(|| SanError::BadPromotion {
                        san: body.to_string(),
                    })?;
                (head, Some(choice))
            }
            None => (rest.as_str(), None),
        };

        // Patterns: "e4", "xe4", "1e4", "exe4", "R1d2", "Raxd2"
        let coords: Vec<char> = squares.chars().filter(|&c| c != 'x').collect();
        let invalid_square = || SanError::Malformed {
            san: body.to_string(),
        };
        if !(2..=4).contains(&coords.len()) {
            return Err(invalid_square());
        }
        let (prefix, dest_chars) = coords.split_at(coords.len() - 2);
        let dest: Square = dest_chars
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;

        let mut file = None;
        let mut rank = None;
        for &c in prefix {
            match c {
                'a'..='h' if file.is_none() && rank.is_none() => file = Some(c as usize - 'a' as usize),
                '1'..='8' if rank.is_none() => rank = Some(c as usize - '1' as usize),
                _ => return Err(invalid_square()),
            }
        }

        Ok(SanParts {
            piece,
            file,
            rank,
            dest,
            promotion,
        })
    }
}
