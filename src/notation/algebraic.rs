//! Algebraic square coordinate conversions.
//!
//! Converts between human-readable coordinates (for example `e4`) and
//! `Square` values, reused by the FEN and move codecs.

use crate::errors::{ChessError, ChessResult};
use crate::square::Square;

/// Convert algebraic coordinates (for example `e4`) to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    Square::from_file_rank((file - b'a') as i8, (rank - b'1') as i8)
}

/// Convert a square to algebraic coordinates.
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
