//! Move representation and long algebraic codec.
//!
//! A move is a from/to square pair plus an optional promotion kind. The
//! promotion kind is present exactly when a pawn move lands on the final
//! rank; parsing enforces that using the board for context.

use std::fmt;

use crate::board::board::Board;
use crate::errors::{ChessError, ChessResult};
use crate::notation::algebraic::algebraic_to_square;
use crate::pieces::piece_kind::PieceKind;
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Long algebraic form (for example `e2e4`, `a7a8q`).
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(letter) = self.promotion.and_then(PieceKind::promotion_letter) {
            out.push(letter);
        }
        out
    }

    /// Parse long algebraic notation against a board.
    ///
    /// The board resolves whether a promotion letter is required: a pawn
    /// move onto the final rank without one is rejected, as is a promotion
    /// letter on any other move.
    pub fn from_long_algebraic(board: &Board, text: &str) -> ChessResult<Self> {
        let text = text.trim();
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(ChessError::InvalidMoveString(text.to_owned()));
        }

        let from = algebraic_to_square(&text[0..2])?;
        let to = algebraic_to_square(&text[2..4])?;
        let piece = board.piece_at(from)?;
        let lands_on_final_rank =
            piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank();

        let promotion = match text.as_bytes().get(4) {
            Some(&letter) => {
                let kind = PieceKind::from_promotion_letter(char::from(letter))
                    .ok_or_else(|| ChessError::InvalidMoveString(text.to_owned()))?;
                if !lands_on_final_rank {
                    return Err(ChessError::InvalidMoveString(text.to_owned()));
                }
                Some(kind)
            }
            None => {
                if lands_on_final_rank {
                    return Err(ChessError::MissingPromotion(text.to_owned()));
                }
                None
            }
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_long_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::board::board::Board;
    use crate::errors::ChessError;
    use crate::pieces::piece_kind::PieceKind;

    #[test]
    fn parse_simple_move_round_trips() {
        let board = Board::new_game();
        let mv = Move::from_long_algebraic(&board, "e2e4").expect("e2e4 should parse");
        assert_eq!(mv.from.to_string(), "e2");
        assert_eq!(mv.to.to_string(), "e4");
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.to_long_algebraic(), "e2e4");
    }

    #[test]
    fn promotion_letter_is_required_on_the_final_rank() {
        let board = Board::from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");

        let err = Move::from_long_algebraic(&board, "e7e8").expect_err("should need a letter");
        assert!(matches!(err, ChessError::MissingPromotion(_)));

        let mv = Move::from_long_algebraic(&board, "e7e8Q").expect("uppercase letter accepted");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.to_long_algebraic(), "e7e8q");
    }

    #[test]
    fn promotion_letter_on_a_non_promotion_move_is_rejected() {
        let board = Board::new_game();
        let err = Move::from_long_algebraic(&board, "e2e4q").expect_err("should reject letter");
        assert!(matches!(err, ChessError::InvalidMoveString(_)));
    }

    #[test]
    fn moving_from_an_empty_square_is_rejected() {
        let board = Board::new_game();
        let err = Move::from_long_algebraic(&board, "e4e5").expect_err("e4 is empty");
        assert!(matches!(err, ChessError::EmptySquare(_)));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        let board = Board::new_game();
        for bad in ["", "e2", "e2e9", "i2i4", "e2e4qq"] {
            assert!(
                Move::from_long_algebraic(&board, bad).is_err(),
                "`{bad}` should fail to parse"
            );
        }
    }
}
