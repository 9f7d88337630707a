//! Zobrist hashing for position identity and repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic
//! across runs, which keeps repetition tests and debugging reproducible.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::pieces::color::Color;
use crate::pieces::piece_kind::PieceKind;
use crate::square::Square;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color.iter_mut() {
            for sq in piece.iter_mut() {
                *sq = rng.next_u64();
            }
        }
    }

    let side_to_move = rng.next_u64();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.next_u64();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.next_u64();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Key for a `(color, kind, square)` occupancy term.
#[inline]
pub fn piece_square_key(color: Color, kind: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][kind.index()][square.index() as usize]
}

/// Key contribution of a castling rights combination.
#[inline]
pub fn castling_key(rights: CastlingRights) -> u64 {
    tables().castling[rights.mask()]
}

/// Key contribution of an en-passant file (`0..=7`).
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[(file & 0x07) as usize]
}

/// Side-to-move toggle key (xor in when dark is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key for the board's current state.
pub fn position_key(board: &Board) -> u64 {
    let mut key = 0u64;

    for piece in board.active_pieces() {
        key ^= piece_square_key(piece.color, piece.kind, piece.square);
    }

    if board.side_to_move() == Color::Dark {
        key ^= side_to_move_key();
    }

    key ^= castling_key(board.castling_rights());

    if let Some(target) = board.en_passant_target() {
        key ^= en_passant_file_key(target.file() as u8);
    }

    key
}
