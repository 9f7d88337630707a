//! Errors used throughout the position engine.
//!
//! `ChessError` is the single error type across the crate. Parsing and
//! input-related variants are recoverable and suitable for presenting to
//! callers; `IllegalMove` is only produced by the strict move-application
//! boundary. Contract violations (undoing with an empty history) are not
//! represented here; those panic.

use thiserror::Error;

use crate::pieces::color::Color;
use crate::square::Square;

/// Unified error type for the position engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square index outside `0..=63` was supplied.
    #[error("square index {0} is out of range (must be 0..=63)")]
    SquareOutOfRange(i16),

    /// File/rank coordinates outside the 8x8 grid.
    #[error("file/rank ({file}, {rank}) is off the board")]
    OffBoard { file: i8, rank: i8 },

    /// A piece was requested on a square that holds none.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// No king of the given color is active on the board.
    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    /// An algebraic square (for example `e4`) failed to parse.
    #[error("invalid algebraic square `{0}`")]
    InvalidAlgebraicSquare(String),

    /// A long algebraic move string failed to parse.
    #[error("invalid move string `{0}`")]
    InvalidMoveString(String),

    /// A pawn move onto the final rank was given without a promotion piece.
    #[error("move `{0}` requires a promotion piece")]
    MissingPromotion(String),

    /// The strict boundary rejected a move absent from the legal set.
    #[error("move `{0}` is not legal in this position")]
    IllegalMove(String),

    /// A FEN string was malformed; no board state was installed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// Result alias used across the crate.
pub type ChessResult<T> = Result<T, ChessError>;
