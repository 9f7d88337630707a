//! Shared ray walking for the sliding pieces.
//!
//! A ray is walked square by square until any piece blocks it; the
//! blocking square is included only when it holds an opponent piece.

use crate::board::board::Board;
use crate::moves::chess_move::Move;
use crate::pieces::piece_record::PieceRecord;
use crate::square::Square;

pub fn ray_moves(board: &Board, piece: &PieceRecord, directions: &[(i8, i8)]) -> Vec<Move> {
    ray_destinations(board, piece, directions)
        .into_iter()
        .map(|to| Move::new(piece.square, to))
        .collect()
}

pub fn ray_destinations(
    board: &Board,
    piece: &PieceRecord,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut out = Vec::new();

    for &(d_file, d_rank) in directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(d_file, d_rank) {
            match board.color_on(next) {
                None => out.push(next),
                Some(color) if color != piece.color => {
                    out.push(next);
                    break;
                }
                Some(_) => break,
            }
            current = next;
        }
    }

    out
}
