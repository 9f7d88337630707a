use crate::board::board::Board;
use crate::moves::chess_move::Move;
use crate::pieces::piece_record::PieceRecord;
use crate::square::Square;

// File/rank deltas, so wraparound off the board edge is impossible.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn pseudo_legal(board: &Board, piece: &PieceRecord) -> Vec<Move> {
    attacking(board, piece)
        .into_iter()
        .map(|to| Move::new(piece.square, to))
        .collect()
}

pub fn attacking(board: &Board, piece: &PieceRecord) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_file, d_rank)| piece.square.offset(d_file, d_rank))
        .filter(|&to| board.color_on(to) != Some(piece.color))
        .collect()
}
