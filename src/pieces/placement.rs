//! Immutable piece values and positional placement tables.
//!
//! Tables are written from the light side's perspective with a1 at index 0;
//! the dark tables are the same values mirrored vertically. Every piece
//! record holds a reference to the table matching its kind and color, so a
//! placement read is a single indexed lookup.

use crate::pieces::color::Color;
use crate::pieces::piece_kind::PieceKind;

/// Base material value in centipawns.
#[inline]
pub const fn base_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 5000,
    }
}

/// The 64-entry positional table for a kind and color.
pub const fn placement_table(kind: PieceKind, color: Color) -> &'static [i32; 64] {
    match (kind, color) {
        (PieceKind::Pawn, Color::Light) => &PAWN_PLACEMENT,
        (PieceKind::Pawn, Color::Dark) => &PAWN_PLACEMENT_DARK,
        (PieceKind::Knight, Color::Light) => &KNIGHT_PLACEMENT,
        (PieceKind::Knight, Color::Dark) => &KNIGHT_PLACEMENT_DARK,
        (PieceKind::Bishop, Color::Light) => &BISHOP_PLACEMENT,
        (PieceKind::Bishop, Color::Dark) => &BISHOP_PLACEMENT_DARK,
        (PieceKind::Rook, Color::Light) => &ROOK_PLACEMENT,
        (PieceKind::Rook, Color::Dark) => &ROOK_PLACEMENT_DARK,
        (PieceKind::Queen, Color::Light) => &QUEEN_PLACEMENT,
        (PieceKind::Queen, Color::Dark) => &QUEEN_PLACEMENT_DARK,
        (PieceKind::King, Color::Light) => &KING_PLACEMENT,
        (PieceKind::King, Color::Dark) => &KING_PLACEMENT_DARK,
    }
}

// Pawn: reward center control and advancement.
#[rustfmt::skip]
const PAWN_PLACEMENT: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

// Knight: reward centralization, punish the rim.
#[rustfmt::skip]
const KNIGHT_PLACEMENT: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PLACEMENT: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PLACEMENT: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PLACEMENT: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

// King: keep the king tucked away behind its pawns.
#[rustfmt::skip]
const KING_PLACEMENT: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

const PAWN_PLACEMENT_DARK: [i32; 64] = mirrored(&PAWN_PLACEMENT);
const KNIGHT_PLACEMENT_DARK: [i32; 64] = mirrored(&KNIGHT_PLACEMENT);
const BISHOP_PLACEMENT_DARK: [i32; 64] = mirrored(&BISHOP_PLACEMENT);
const ROOK_PLACEMENT_DARK: [i32; 64] = mirrored(&ROOK_PLACEMENT);
const QUEEN_PLACEMENT_DARK: [i32; 64] = mirrored(&QUEEN_PLACEMENT);
const KING_PLACEMENT_DARK: [i32; 64] = mirrored(&KING_PLACEMENT);

/// Flip a table vertically (rank r becomes rank 7 - r, files unchanged).
const fn mirrored(table: &[i32; 64]) -> [i32; 64] {
    let mut out = [0i32; 64];
    let mut sq = 0usize;
    while sq < 64 {
        out[sq] = table[sq ^ 56];
        sq += 1;
    }
    out
}
