//! Board-to-FEN serializer, the exact inverse of the parser for any
//! reachable position.

use crate::board::board::Board;
use crate::pieces::color::Color;
use crate::square::Square;

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_placement_field(board);
    let side_to_move = match board.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = board.castling_rights().fen_field();
    let en_passant = board
        .en_passant_target()
        .map(|square| square.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        board.half_move_clock(),
        board.full_move_number()
    )
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0i8..8).rev() {
        let mut empty_run = 0u8;

        for file in 0i8..8 {
            let square = Square::from_file_rank(file, rank)
                .expect("placement loop stays on the board");
            match board.piece_at(square) {
                Ok(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.kind.fen_char(piece.color));
                }
                Err(_) => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}
