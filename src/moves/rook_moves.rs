use crate::board::board::Board;
use crate::moves::chess_move::Move;
use crate::moves::sliding::{ray_destinations, ray_moves};
use crate::pieces::piece_record::PieceRecord;
use crate::square::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn pseudo_legal(board: &Board, piece: &PieceRecord) -> Vec<Move> {
    ray_moves(board, piece, &ROOK_DIRECTIONS)
}

pub fn attacking(board: &Board, piece: &PieceRecord) -> Vec<Square> {
    ray_destinations(board, piece, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal;
    use crate::board::board::Board;
    use crate::square::Square;

    #[test]
    fn rook_on_an_open_board_covers_rank_and_file() {
        let board = Board::from_fen("k7/8/8/8/3R4/8/8/7K w - - 0 1").expect("FEN should parse");
        let d4 = Square::from_file_rank(3, 3).expect("d4");
        let rook = board.piece_at(d4).expect("rook on d4");

        let moves = pseudo_legal(&board, rook);
        assert_eq!(moves.len(), 14);
    }
}
