//! Pawn movement: advances, captures, en-passant, and promotion fan-out.
//!
//! Promotion is signaled by landing on the final rank; every advance or
//! capture onto that rank is emitted once per promotion target. The
//! board's en-passant target square drives en-passant captures; file
//! adjacency is implied by the diagonal offset.

use crate::board::board::Board;
use crate::moves::chess_move::Move;
use crate::pieces::piece_kind::PieceKind;
use crate::pieces::piece_record::PieceRecord;
use crate::square::Square;

pub fn pseudo_legal(board: &Board, piece: &PieceRecord) -> Vec<Move> {
    let mut out = Vec::new();
    let direction = piece.color.pawn_direction();

    // Advances. The single step must be clear before a double step is
    // considered, and the double step only exists from the start rank.
    if let Some(one) = piece.square.offset(0, direction) {
        if board.color_on(one).is_none() {
            push_destination(&mut out, piece, one);

            if piece.square.rank() == piece.color.pawn_start_rank() {
                if let Some(two) = one.offset(0, direction) {
                    if board.color_on(two).is_none() {
                        out.push(Move::new(piece.square, two));
                    }
                }
            }
        }
    }

    // Diagonal captures, including onto the en-passant target square.
    for d_file in [-1i8, 1i8] {
        let Some(target) = piece.square.offset(d_file, direction) else {
            continue;
        };
        match board.color_on(target) {
            Some(color) if color != piece.color => push_destination(&mut out, piece, target),
            None if board.en_passant_target() == Some(target) => {
                out.push(Move::new(piece.square, target));
            }
            _ => {}
        }
    }

    out
}

/// Pawns threaten only their capture diagonals, never their advance squares.
pub fn attacking(piece: &PieceRecord) -> Vec<Square> {
    let direction = piece.color.pawn_direction();
    [-1i8, 1i8]
        .iter()
        .filter_map(|&d_file| piece.square.offset(d_file, direction))
        .collect()
}

fn push_destination(out: &mut Vec<Move>, piece: &PieceRecord, to: Square) {
    if to.rank() == piece.color.promotion_rank() {
        for kind in PieceKind::PROMOTION_TARGETS {
            out.push(Move::with_promotion(piece.square, to, kind));
        }
    } else {
        out.push(Move::new(piece.square, to));
    }
}
