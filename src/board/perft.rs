//! Perft: exhaustive legal move enumeration used as the correctness
//! oracle for the whole make/undo and move-generation pipeline.

use crate::board::board::Board;
use crate::errors::ChessResult;
use crate::moves::chess_move::Move;
use crate::pieces::piece_kind::PieceKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

/// Count all legal move sequences of length `depth` from the current
/// position, classifying the leaf moves along the way. The board is
/// walked in place with make/undo and left exactly as it was given.
pub fn perft(board: &mut Board, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(board, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse(board: &mut Board, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in board.legal_moves() {
        if depth == 1 {
            counts.nodes += 1;
            classify_leaf(board, &mv, counts)?;
            continue;
        }

        board.make_move(&mv)?;
        perft_recurse(board, depth - 1, counts)?;
        board.undo_move();
    }
    Ok(())
}

fn classify_leaf(board: &Board, mv: &Move, counts: &mut PerftCounts) -> ChessResult<()> {
    let mover = board.piece_at(mv.from)?;

    let plain_capture = board.piece_index_at(mv.to).is_some();
    let en_passant_capture = mover.kind == PieceKind::Pawn
        && board.en_passant_target() == Some(mv.to)
        && mv.from.file() != mv.to.file()
        && !plain_capture;

    if plain_capture || en_passant_capture {
        counts.captures += 1;
    }
    if en_passant_capture {
        counts.en_passant += 1;
    }
    if mover.kind == PieceKind::King && (mv.from.file() - mv.to.file()).abs() == 2 {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, PerftCounts};
    use crate::board::board::Board;

    fn perft_nodes(fen: &str, depth: u8) -> usize {
        let mut board = Board::from_fen(fen).expect("perft FEN should parse");
        let before = board.to_fen();
        let counts = perft(&mut board, depth).expect("perft should run");
        assert_eq!(board.to_fen(), before, "perft must leave the board intact");
        counts.nodes
    }

    #[test]
    fn perft_depth_zero_counts_a_single_node() {
        let mut board = Board::new_game();
        let counts = perft(&mut board, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_startpos_shallow_depths() {
        let fen = crate::board::board::STARTING_POSITION_FEN;
        assert_eq!(perft_nodes(fen, 1), 20);
        assert_eq!(perft_nodes(fen, 2), 400);
        assert_eq!(perft_nodes(fen, 3), 8_902);
    }

    #[test]
    fn perft_startpos_depth_four() {
        assert_eq!(
            perft_nodes(crate::board::board::STARTING_POSITION_FEN, 4),
            197_281
        );
    }

    #[test]
    fn perft_castling_and_en_passant_position() {
        // Heavy on castles, en-passant, and pins.
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

        let mut board = Board::from_fen(fen).expect("FEN should parse");
        let depth_one = perft(&mut board, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);
        assert_eq!(depth_one.promotions, 0);

        assert_eq!(perft_nodes(fen, 2), 2_039);
    }

    #[test]
    fn perft_endgame_position_with_en_passant_pin() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(perft_nodes(fen, 1), 14);
        assert_eq!(perft_nodes(fen, 2), 191);
        assert_eq!(perft_nodes(fen, 3), 2_812);
    }

    #[test]
    fn perft_promotion_heavy_position() {
        let fen = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
        assert_eq!(perft_nodes(fen, 1), 6);
        assert_eq!(perft_nodes(fen, 2), 264);
    }
}
