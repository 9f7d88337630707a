//! FEN-to-Board parser.
//!
//! Builds a fully-populated board from a Forsyth-Edwards Notation string:
//! piece placement, side to move, castling rights, en-passant target, and
//! clocks. Construction is all-or-nothing; a malformed string installs no
//! partial state.

use tracing::debug;

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::errors::{ChessError, ChessResult};
use crate::notation::algebraic::algebraic_to_square;
use crate::pieces::color::Color;
use crate::pieces::piece_kind::PieceKind;
use crate::square::Square;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut fields = fen.split_whitespace();

    let placement_field = next_field(&mut fields, "piece placement")?;
    let side_field = next_field(&mut fields, "side to move")?;
    let castling_field = next_field(&mut fields, "castling rights")?;
    let en_passant_field = next_field(&mut fields, "en-passant square")?;
    let half_move_field = next_field(&mut fields, "half-move clock")?;
    let full_move_field = next_field(&mut fields, "full-move number")?;

    if fields.next().is_some() {
        return Err(ChessError::InvalidFen(
            "extra trailing fields".to_owned(),
        ));
    }

    let mut board = Board::empty();
    parse_placement(placement_field, &mut board)?;
    board.set_side_to_move(parse_side_to_move(side_field)?);
    board.set_castling_rights(CastlingRights::from_fen_field(castling_field)?);
    board.set_en_passant(parse_en_passant(en_passant_field)?);

    let half_move_clock = half_move_field.parse::<u16>().map_err(|_| {
        ChessError::InvalidFen(format!("invalid half-move clock `{half_move_field}`"))
    })?;
    let full_move_number = full_move_field.parse::<u16>().map_err(|_| {
        ChessError::InvalidFen(format!("invalid full-move number `{full_move_field}`"))
    })?;
    if full_move_number == 0 {
        return Err(ChessError::InvalidFen(
            "full-move number must be positive".to_owned(),
        ));
    }
    board.set_clocks(half_move_clock, full_move_number);

    board.seed_repetition_history();
    debug!(fen = %fen.trim(), "position loaded");
    Ok(board)
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> ChessResult<&'a str> {
    fields
        .next()
        .ok_or_else(|| ChessError::InvalidFen(format!("missing {name} field")))
}

fn parse_placement(placement: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "piece placement must contain 8 ranks".to_owned(),
        ));
    }

    for (fen_rank_index, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_index as i8;
        let mut file = 0i8;

        for ch in rank_text.chars() {
            if let Some(step) = ch.to_digit(10) {
                if !(1..=8).contains(&step) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count `{ch}`"
                    )));
                }
                file += step as i8;
                continue;
            }

            let (color, kind) = PieceKind::from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character `{ch}`"))
            })?;

            let square = Square::from_file_rank(file, rank).map_err(|_| {
                ChessError::InvalidFen(format!("rank {} has too many files", rank + 1))
            })?;
            board.add_piece(kind, color, square);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side: &str) -> ChessResult<Color> {
    match side {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field `{side}`"
        ))),
    }
}

fn parse_en_passant(field: &str) -> ChessResult<Option<Square>> {
    if field == "-" {
        return Ok(None);
    }
    algebraic_to_square(field)
        .map(Some)
        .map_err(|_| ChessError::InvalidFen(format!("invalid en-passant square `{field}`")))
}
