//! Static board evaluation.
//!
//! Scoring stays deliberately shallow: material, optionally weighted by
//! each piece's placement table. Anything deeper (search, mobility,
//! tapering) is out of scope for the position engine.

use crate::board::board::Board;
use crate::pieces::color::Color;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

/// Pure material balance from the piece base values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    fn balance_light_minus_dark(board: &Board) -> i32 {
        board
            .active_pieces()
            .iter()
            .map(|piece| match piece.color {
                Color::Light => piece.base_value(),
                Color::Dark => -piece.base_value(),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        let light_minus_dark = Self::balance_light_minus_dark(board);
        match board.side_to_move() {
            Color::Light => light_minus_dark,
            Color::Dark => -light_minus_dark,
        }
    }
}

/// Material plus each active piece's placement-table entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPlacementScorer;

impl MaterialPlacementScorer {
    #[inline]
    fn balance_light_minus_dark(board: &Board) -> i32 {
        board
            .active_pieces()
            .iter()
            .map(|piece| {
                let value = piece.base_value() + piece.placement_value();
                match piece.color {
                    Color::Light => value,
                    Color::Dark => -value,
                }
            })
            .sum()
    }
}

impl BoardScorer for MaterialPlacementScorer {
    fn score(&self, board: &Board) -> i32 {
        let light_minus_dark = Self::balance_light_minus_dark(board);
        match board.side_to_move() {
            Color::Light => light_minus_dark,
            Color::Dark => -light_minus_dark,
        }
    }
}
