//! Core mutable board state.
//!
//! `Board` owns the piece arena (every piece ever created, tombstoned
//! rather than deleted), the scalar position state, the parallel history
//! stacks used by make/undo, and the memoized query caches. It
//! orchestrates pseudo-legal generation, legal filtering, check and
//! terminal detection, and the draw-rule counters.

use std::cell::RefCell;

use tracing::trace;

use crate::board::castling::CastlingRights;
use crate::board::history::ScalarSnapshot;
use crate::board::zobrist;
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::notation::{fen_generator, fen_parser};
use crate::pieces::color::Color;
use crate::pieces::piece_kind::PieceKind;
use crate::pieces::piece_record::{PieceRecord, Tombstone};
use crate::square::Square;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const A1: Square = Square::from_file_rank_unchecked(0, 0);
const E1: Square = Square::from_file_rank_unchecked(4, 0);
const H1: Square = Square::from_file_rank_unchecked(7, 0);
const A8: Square = Square::from_file_rank_unchecked(0, 7);
const E8: Square = Square::from_file_rank_unchecked(4, 7);
const H8: Square = Square::from_file_rank_unchecked(7, 7);

#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<PieceRecord>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    half_move_clock: u16,
    full_move_number: u16,

    // Parallel history stacks: one entry each per make, popped per undo.
    snapshot_stack: Vec<ScalarSnapshot>,
    move_log: Vec<Move>,
    // Position keys of every reached position, seeded at load time.
    repetition_history: Vec<u64>,

    // Memoized queries, cleared at the top of make_move and undo_move.
    active_cache: RefCell<Option<Vec<usize>>>,
    occupancy_cache: RefCell<Option<[Option<usize>; 64]>>,
    legal_cache: Option<Vec<Move>>,
}

impl Board {
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        fen_parser::parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        fen_generator::generate_fen(self)
    }

    pub(crate) fn empty() -> Self {
        Self {
            pieces: Vec::new(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            half_move_clock: 0,
            full_move_number: 1,
            snapshot_stack: Vec::new(),
            move_log: Vec::new(),
            repetition_history: Vec::new(),
            active_cache: RefCell::new(None),
            occupancy_cache: RefCell::new(None),
            legal_cache: None,
        }
    }

    pub(crate) fn add_piece(&mut self, kind: PieceKind, color: Color, square: Square) {
        self.pieces.push(PieceRecord::new(kind, color, square));
    }

    pub(crate) fn set_side_to_move(&mut self, side: Color) {
        self.side_to_move = side;
    }

    pub(crate) fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    pub(crate) fn set_en_passant(&mut self, target: Option<Square>) {
        self.en_passant = target;
    }

    pub(crate) fn set_clocks(&mut self, half_move_clock: u16, full_move_number: u16) {
        self.half_move_clock = half_move_clock;
        self.full_move_number = full_move_number;
    }

    pub(crate) fn seed_repetition_history(&mut self) {
        self.repetition_history = vec![zobrist::position_key(self)];
    }

    // --- Accessors ---

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn half_move_clock(&self) -> u16 {
        self.half_move_clock
    }

    #[inline]
    pub fn full_move_number(&self) -> u16 {
        self.full_move_number
    }

    /// The whole arena, tombstoned records included.
    pub fn pieces(&self) -> &[PieceRecord] {
        &self.pieces
    }

    /// Number of moves currently recorded in the history stacks.
    pub fn history_depth(&self) -> usize {
        self.move_log.len()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    // --- Cached queries ---

    fn invalidate_caches(&mut self) {
        *self.active_cache.borrow_mut() = None;
        *self.occupancy_cache.borrow_mut() = None;
        self.legal_cache = None;
    }

    /// Arena indices of every active piece, memoized between mutations.
    pub fn active_piece_indices(&self) -> Vec<usize> {
        if let Some(cached) = self.active_cache.borrow().as_ref() {
            return cached.clone();
        }
        let computed: Vec<usize> = self
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.is_active())
            .map(|(index, _)| index)
            .collect();
        *self.active_cache.borrow_mut() = Some(computed.clone());
        computed
    }

    pub fn active_pieces(&self) -> Vec<&PieceRecord> {
        self.active_piece_indices()
            .into_iter()
            .map(|index| &self.pieces[index])
            .collect()
    }

    fn ensure_occupancy(&self) {
        if self.occupancy_cache.borrow().is_some() {
            return;
        }
        let mut table = [None; 64];
        for index in self.active_piece_indices() {
            table[self.pieces[index].square.index() as usize] = Some(index);
        }
        *self.occupancy_cache.borrow_mut() = Some(table);
    }

    /// Arena index of the active piece on `square`, memoized between
    /// mutations.
    pub fn piece_index_at(&self, square: Square) -> Option<usize> {
        self.ensure_occupancy();
        self.occupancy_cache
            .borrow()
            .as_ref()
            .expect("occupancy cache was filled above")[square.index() as usize]
    }

    pub fn piece_at(&self, square: Square) -> ChessResult<&PieceRecord> {
        self.piece_index_at(square)
            .map(|index| &self.pieces[index])
            .ok_or(ChessError::EmptySquare(square))
    }

    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_index_at(square)
            .map(|index| self.pieces[index].color)
    }

    // Uncached scan used while the board is mid-mutation, when the
    // memoized occupancy must not be rebuilt from a half-updated state.
    fn active_index_at(&self, square: Square) -> Option<usize> {
        self.pieces
            .iter()
            .position(|piece| piece.is_active() && piece.square == square)
    }

    // --- Attack and check queries ---

    /// Whether any active piece of `by` threatens `square`.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        for index in self.active_piece_indices() {
            let piece = &self.pieces[index];
            if piece.color != by {
                continue;
            }
            if piece.attacking_squares(self).contains(&square) {
                return true;
            }
        }
        false
    }

    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        self.active_pieces()
            .into_iter()
            .find(|piece| piece.kind == PieceKind::King && piece.color == color)
            .map(|piece| piece.square)
            .ok_or(ChessError::MissingKing(color))
    }

    /// Whether the side to move's king is currently attacked.
    pub fn in_check(&self) -> bool {
        match self.king_square(self.side_to_move) {
            Ok(square) => self.is_square_attacked(square, self.side_to_move.opposite()),
            Err(_) => false,
        }
    }

    // --- Legal move generation ---

    /// Every legal move for the side to move, memoized between mutations.
    ///
    /// Each pseudo-legal candidate is tentatively applied, the mover's king
    /// tested for attack, and the move undone again; the guard ties the
    /// undo to scope exit so the tentative state can never leak.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        if let Some(cached) = &self.legal_cache {
            return cached.clone();
        }

        let mover = self.side_to_move;
        let mut legal = Vec::new();

        for index in self.active_piece_indices() {
            let piece = self.pieces[index];
            if piece.color != mover {
                continue;
            }
            for candidate in piece.pseudo_legal_moves(self) {
                let keep = match TentativeMove::new(self, &candidate) {
                    Ok(tentative) => {
                        let board = tentative.board();
                        match board.king_square(mover) {
                            Ok(king) => !board.is_square_attacked(king, mover.opposite()),
                            Err(_) => true,
                        }
                    }
                    Err(_) => false,
                };
                if keep {
                    legal.push(candidate);
                }
            }
        }

        self.legal_cache = Some(legal.clone());
        legal
    }

    pub fn checkmate(&mut self) -> bool {
        self.legal_moves().is_empty() && self.in_check()
    }

    pub fn stalemate(&mut self) -> bool {
        self.legal_moves().is_empty() && !self.in_check()
    }

    // --- Draw rules ---

    pub fn is_fifty_move_draw(&self) -> bool {
        self.half_move_clock >= 100
    }

    pub fn is_seventy_five_move_draw(&self) -> bool {
        self.half_move_clock >= 150
    }

    /// How many times the current position has occurred, itself included.
    pub fn repetition_count(&self) -> usize {
        let current = zobrist::position_key(self);
        self.repetition_history
            .iter()
            .filter(|&&key| key == current)
            .count()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetition_count() >= 5
    }

    // --- Make / undo ---

    /// Apply a move, trusting the caller to have sourced it from
    /// `legal_moves`. Only structural problems are reported: an empty
    /// origin square or a missing promotion kind.
    pub fn make_move(&mut self, mv: &Move) -> ChessResult<()> {
        let mover_index = self
            .active_index_at(mv.from)
            .ok_or(ChessError::EmptySquare(mv.from))?;
        let mover_kind = self.pieces[mover_index].kind;
        let mover_color = self.pieces[mover_index].color;

        let promotes = mover_kind == PieceKind::Pawn
            && mv.to.rank() == mover_color.promotion_rank();
        if promotes && mv.promotion.is_none() {
            return Err(ChessError::MissingPromotion(mv.to_long_algebraic()));
        }

        self.invalidate_caches();

        self.snapshot_stack.push(ScalarSnapshot {
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            half_move_clock: self.half_move_clock,
            full_move_number: self.full_move_number,
        });
        self.move_log.push(*mv);

        let stamp = Tombstone {
            turn: self.full_move_number,
            by: self.side_to_move,
        };

        // Clock resets on pawn moves and captures.
        let destination_index = self.active_index_at(mv.to);
        if mover_kind == PieceKind::Pawn || destination_index.is_some() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }

        // Capture must be resolved before the mover's square changes.
        if let Some(captured_index) = destination_index {
            if self.pieces[captured_index].color != mover_color {
                self.pieces[captured_index].captured_on = Some(stamp);
            }
        }

        // A two-file king move is a castle: relocate the matching rook.
        if mover_kind == PieceKind::King && (mv.from.file() - mv.to.file()).abs() == 2 {
            let rank = mv.from.rank();
            if mv.to.file() > mv.from.file() {
                self.relocate_active(
                    Square::from_file_rank_unchecked(7, rank),
                    Square::from_file_rank_unchecked(5, rank),
                );
            } else {
                self.relocate_active(
                    Square::from_file_rank_unchecked(0, rank),
                    Square::from_file_rank_unchecked(3, rank),
                );
            }
        }

        // En-passant: the passed pawn sits one rank behind the destination.
        if mover_kind == PieceKind::Pawn
            && self.en_passant == Some(mv.to)
            && mv.from.file() != mv.to.file()
            && destination_index.is_none()
        {
            let passed =
                Square::from_file_rank_unchecked(mv.to.file(), mv.from.rank());
            if let Some(passed_index) = self.active_index_at(passed) {
                self.pieces[passed_index].captured_on = Some(stamp);
            }
        }

        self.pieces[mover_index].square = mv.to;

        // Promotion: tombstone the pawn and synthesize the promoted piece.
        if promotes {
            if let Some(promoted_kind) = mv.promotion {
                self.pieces[mover_index].promoted_on = Some(stamp);
                self.pieces
                    .push(PieceRecord::new(promoted_kind, mover_color, mv.to));
            }
        }

        self.recompute_castling_rights();

        // En-passant target exists only after a double pawn advance.
        self.en_passant = if mover_kind == PieceKind::Pawn
            && (mv.from.rank() - mv.to.rank()).abs() == 2
        {
            mv.from.offset(0, (mv.to.rank() - mv.from.rank()) / 2)
        } else {
            None
        };

        if self.side_to_move == Color::Dark {
            self.full_move_number = self.full_move_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();

        self.repetition_history.push(zobrist::position_key(self));
        trace!(mv = %mv, "move made");
        Ok(())
    }

    /// Apply a move only after validating it against the legal set.
    pub fn make_move_strict(&mut self, mv: &Move) -> ChessResult<()> {
        if !self.legal_moves().contains(mv) {
            return Err(ChessError::IllegalMove(mv.to_long_algebraic()));
        }
        self.make_move(mv)
    }

    /// Reverse the most recent move.
    ///
    /// # Panics
    ///
    /// Panics when the history is empty: an unpaired undo means the caller
    /// and the engine have desynchronized, which is not recoverable.
    pub fn undo_move(&mut self) -> Move {
        let mv = self
            .move_log
            .pop()
            .expect("undo_move called with an empty move history");
        let snapshot = self
            .snapshot_stack
            .pop()
            .expect("scalar snapshot stack out of sync with the move log");

        self.invalidate_caches();
        self.repetition_history.pop();

        self.side_to_move = snapshot.side_to_move;
        self.full_move_number = snapshot.full_move_number;
        let stamp = Tombstone {
            turn: snapshot.full_move_number,
            by: snapshot.side_to_move,
        };

        // Reverse a castle: the rook returns to its corner first.
        let was_king_move = self
            .active_index_at(mv.to)
            .map(|index| self.pieces[index].kind == PieceKind::King)
            .unwrap_or(false);
        if was_king_move && (mv.from.file() - mv.to.file()).abs() == 2 {
            let rank = mv.from.rank();
            if mv.to.file() > mv.from.file() {
                self.relocate_active(
                    Square::from_file_rank_unchecked(5, rank),
                    Square::from_file_rank_unchecked(7, rank),
                );
            } else {
                self.relocate_active(
                    Square::from_file_rank_unchecked(3, rank),
                    Square::from_file_rank_unchecked(0, rank),
                );
            }
        }

        // Reverse a promotion: discard the synthesized piece and restore
        // the tombstoned pawn underneath it.
        if let Some(pawn_index) = self
            .pieces
            .iter()
            .position(|piece| piece.kind == PieceKind::Pawn && piece.promoted_on == Some(stamp))
        {
            let pawn_color = self.pieces[pawn_index].color;
            if let Some(synthesized_index) = self.pieces.iter().position(|piece| {
                piece.is_active()
                    && piece.square == mv.to
                    && piece.color == pawn_color
                    && piece.kind != PieceKind::Pawn
            }) {
                self.pieces.remove(synthesized_index);
            }
            if let Some(pawn_index) = self
                .pieces
                .iter()
                .position(|piece| piece.promoted_on == Some(stamp))
            {
                self.pieces[pawn_index].promoted_on = None;
            }
        }

        // The mover (now the pawn again, after a promotion) walks back.
        if let Some(index) = self.active_index_at(mv.to) {
            self.pieces[index].square = mv.from;
        }

        // Reverse a capture: the victim's square was never changed, so
        // clearing the tombstone puts it straight back in place.
        if let Some(index) = self
            .pieces
            .iter()
            .position(|piece| piece.captured_on == Some(stamp))
        {
            self.pieces[index].captured_on = None;
        }

        self.castling_rights = snapshot.castling_rights;
        self.en_passant = snapshot.en_passant;
        self.half_move_clock = snapshot.half_move_clock;

        trace!(mv = %mv, "move undone");
        mv
    }

    fn relocate_active(&mut self, from: Square, to: Square) {
        if let Some(index) = self.active_index_at(from) {
            self.pieces[index].square = to;
        }
    }

    // Rights are re-derived from occupancy every move: a right survives
    // only while its king and rook still stand on their starting squares,
    // so a lost right can never come back.
    fn recompute_castling_rights(&mut self) {
        let light_king = self.piece_matches_at(E1, PieceKind::King, Color::Light);
        let dark_king = self.piece_matches_at(E8, PieceKind::King, Color::Dark);
        let light_h_rook = self.piece_matches_at(H1, PieceKind::Rook, Color::Light);
        let light_a_rook = self.piece_matches_at(A1, PieceKind::Rook, Color::Light);
        let dark_h_rook = self.piece_matches_at(H8, PieceKind::Rook, Color::Dark);
        let dark_a_rook = self.piece_matches_at(A8, PieceKind::Rook, Color::Dark);

        let rights = &mut self.castling_rights;
        rights.light_kingside &= light_king && light_h_rook;
        rights.light_queenside &= light_king && light_a_rook;
        rights.dark_kingside &= dark_king && dark_h_rook;
        rights.dark_queenside &= dark_king && dark_a_rook;
    }

    fn piece_matches_at(&self, square: Square, kind: PieceKind, color: Color) -> bool {
        self.active_index_at(square)
            .map(|index| {
                let piece = &self.pieces[index];
                piece.kind == kind && piece.color == color
            })
            .unwrap_or(false)
    }
}

/// Applies a move on construction and guarantees the matching undo when
/// dropped, so a tentative position can never leak past its scope.
struct TentativeMove<'a> {
    board: &'a mut Board,
}

impl<'a> TentativeMove<'a> {
    fn new(board: &'a mut Board, mv: &Move) -> ChessResult<Self> {
        board.make_move(mv)?;
        Ok(Self { board })
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for TentativeMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, STARTING_POSITION_FEN};
    use crate::errors::ChessError;
    use crate::moves::chess_move::Move;
    use crate::pieces::piece_kind::PieceKind;
    use crate::square::Square;

    fn square(text: &str) -> Square {
        crate::notation::algebraic::algebraic_to_square(text).expect("test square should parse")
    }

    fn parse_move(board: &Board, text: &str) -> Move {
        Move::from_long_algebraic(board, text).expect("test move should parse")
    }

    fn play(board: &mut Board, text: &str) {
        let mv = parse_move(board, text);
        board
            .make_move_strict(&mv)
            .expect("test move should be legal");
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut board = Board::new_game();
        assert_eq!(board.legal_moves().len(), 20);
    }

    #[test]
    fn make_and_undo_are_exact_inverses_for_a_regular_move() {
        let mut board = Board::new_game();
        let mv = parse_move(&board, "e2e4");

        board.make_move(&mv).expect("e2e4 should apply");
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR b KQkq e3 0 1"
        );

        board.undo_move();
        assert_eq!(board.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(board.history_depth(), 0);
    }

    #[test]
    fn make_and_undo_restore_a_captured_piece_in_place() {
        let mut board = Board::new_game();
        for text in ["e2e4", "d7d5"] {
            play(&mut board, text);
        }
        let before = board.to_fen();
        let arena_before = board.pieces().len();

        play(&mut board, "e4d5");
        assert_eq!(board.piece_at(square("d5")).expect("pawn").color,
            crate::pieces::color::Color::Light);
        assert_eq!(board.pieces().len(), arena_before, "capture never deletes");

        board.undo_move();
        assert_eq!(board.to_fen(), before);
        assert!(board.piece_at(square("d5")).is_ok(), "victim is back");
    }

    #[test]
    fn castling_moves_the_rook_and_undo_puts_both_back() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let before = board.to_fen();

        play(&mut board, "e1g1");
        assert_eq!(board.piece_at(square("g1")).expect("king").kind, PieceKind::King);
        assert_eq!(board.piece_at(square("f1")).expect("rook").kind, PieceKind::Rook);
        assert!(board.piece_at(square("h1")).is_err());
        assert!(!board.castling_rights().light_kingside);
        assert!(!board.castling_rights().light_queenside);

        board.undo_move();
        assert_eq!(board.to_fen(), before);
    }

    #[test]
    fn queenside_castling_relocates_the_a_file_rook() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");

        play(&mut board, "e8c8");
        assert_eq!(board.piece_at(square("c8")).expect("king").kind, PieceKind::King);
        assert_eq!(board.piece_at(square("d8")).expect("rook").kind, PieceKind::Rook);
        assert!(board.piece_at(square("a8")).is_err());
    }

    #[test]
    fn en_passant_removes_the_passed_pawn_not_the_destination_occupant() {
        let mut board =
            Board::from_fen("k7/8/8/3pP3/8/8/8/K7 w - d6 0 1").expect("FEN should parse");
        let before = board.to_fen();

        play(&mut board, "e5d6");
        assert!(board.piece_at(square("d5")).is_err(), "passed pawn removed");
        assert_eq!(
            board.piece_at(square("d6")).expect("capturer").kind,
            PieceKind::Pawn
        );

        board.undo_move();
        assert_eq!(board.to_fen(), before);
        assert!(board.piece_at(square("d5")).is_ok(), "passed pawn restored");
    }

    #[test]
    fn promotion_synthesizes_a_piece_and_undo_discards_it() {
        let mut board =
            Board::from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let before = board.to_fen();
        let arena_before = board.pieces().len();

        play(&mut board, "e7e8q");
        assert_eq!(
            board.piece_at(square("e8")).expect("promoted").kind,
            PieceKind::Queen
        );
        assert_eq!(board.pieces().len(), arena_before + 1);

        board.undo_move();
        assert_eq!(board.to_fen(), before);
        assert_eq!(board.pieces().len(), arena_before);
        assert_eq!(
            board.piece_at(square("e7")).expect("pawn").kind,
            PieceKind::Pawn
        );
    }

    #[test]
    fn promotion_without_a_kind_is_rejected_before_any_mutation() {
        let mut board =
            Board::from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let before = board.to_fen();

        let bare = Move::new(square("e7"), square("e8"));
        let err = board.make_move(&bare).expect_err("promotion kind required");
        assert!(matches!(err, ChessError::MissingPromotion(_)));
        assert_eq!(board.to_fen(), before);
        assert_eq!(board.history_depth(), 0);
    }

    #[test]
    fn castling_rights_are_monotonic() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        play(&mut board, "e1e2");
        assert!(!board.castling_rights().light_kingside);
        assert!(!board.castling_rights().light_queenside);

        play(&mut board, "a8b8");
        assert!(!board.castling_rights().dark_queenside);
        assert!(board.castling_rights().dark_kingside);

        // Returning to the starting squares does not restore anything.
        play(&mut board, "e2e1");
        play(&mut board, "b8a8");
        assert!(!board.castling_rights().light_kingside);
        assert!(!board.castling_rights().light_queenside);
        assert!(!board.castling_rights().dark_queenside);
    }

    #[test]
    fn half_move_clock_resets_on_pawn_moves_and_captures() {
        let mut board = Board::new_game();

        play(&mut board, "g1f3");
        assert_eq!(board.half_move_clock(), 1);
        play(&mut board, "b8c6");
        assert_eq!(board.half_move_clock(), 2);

        play(&mut board, "e2e4");
        assert_eq!(board.half_move_clock(), 0, "pawn move resets");

        play(&mut board, "c6d4");
        assert_eq!(board.half_move_clock(), 1);
        play(&mut board, "f3d4");
        assert_eq!(board.half_move_clock(), 0, "capture resets");
    }

    #[test]
    fn full_move_number_advances_after_dark_moves() {
        let mut board = Board::new_game();
        assert_eq!(board.full_move_number(), 1);

        play(&mut board, "e2e4");
        assert_eq!(board.full_move_number(), 1);
        play(&mut board, "e7e5");
        assert_eq!(board.full_move_number(), 2);
    }

    #[test]
    fn strict_mode_rejects_moves_outside_the_legal_set() {
        let mut board = Board::new_game();

        let illegal = Move::new(square("e2"), square("e5"));
        let err = board
            .make_move_strict(&illegal)
            .expect_err("e2e5 is not legal");
        assert!(matches!(err, ChessError::IllegalMove(_)));

        let legal = parse_move(&board, "e2e4");
        board.make_move_strict(&legal).expect("e2e4 is legal");
    }

    #[test]
    #[should_panic(expected = "empty move history")]
    fn undo_with_empty_history_panics() {
        let mut board = Board::new_game();
        board.undo_move();
    }

    #[test]
    fn smothered_corner_king_is_checkmated() {
        let mut board =
            Board::from_fen("k7/8/8/8/8/2b5/1q6/K7 w - - 0 1").expect("FEN should parse");
        assert!(board.legal_moves().is_empty());
        assert!(board.checkmate());
        assert!(!board.stalemate());
    }

    #[test]
    fn cornered_king_with_no_moves_but_no_check_is_stalemated() {
        let mut board =
            Board::from_fen("k7/8/8/8/8/2b5/1r6/K7 w - - 0 1").expect("FEN should parse");
        assert!(board.legal_moves().is_empty());
        assert!(board.stalemate());
        assert!(!board.checkmate());
    }

    #[test]
    fn legal_moves_are_stable_between_mutations_and_refresh_after() {
        let mut board = Board::new_game();
        let first = board.legal_moves();
        let second = board.legal_moves();
        assert_eq!(first, second);

        play(&mut board, "e2e4");
        let after = board.legal_moves();
        assert_ne!(first, after);

        board.undo_move();
        assert_eq!(board.legal_moves(), first);
    }

    #[test]
    fn occupancy_queries_refresh_after_mutations() {
        let mut board = Board::new_game();
        assert!(board.piece_at(square("e2")).is_ok());
        assert!(matches!(
            board.piece_at(square("e4")),
            Err(ChessError::EmptySquare(_))
        ));

        play(&mut board, "e2e4");
        assert!(board.piece_at(square("e2")).is_err());
        assert!(board.piece_at(square("e4")).is_ok());
    }

    #[test]
    fn history_stacks_grow_and_shrink_one_entry_per_transition() {
        let mut board = Board::new_game();
        play(&mut board, "e2e4");
        play(&mut board, "e7e5");
        assert_eq!(board.history_depth(), 2);

        board.undo_move();
        assert_eq!(board.history_depth(), 1);
        board.undo_move();
        assert_eq!(board.history_depth(), 0);
    }

    #[test]
    fn clock_based_draw_rules_trigger_at_their_thresholds() {
        let almost =
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 99 80").expect("FEN should parse");
        assert!(!almost.is_fifty_move_draw());

        let fifty = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 100 80").expect("FEN should parse");
        assert!(fifty.is_fifty_move_draw());
        assert!(!fifty.is_seventy_five_move_draw());

        let forced =
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 150 100").expect("FEN should parse");
        assert!(forced.is_seventy_five_move_draw());
    }

    #[test]
    fn knight_shuffles_accumulate_repetitions() {
        let mut board = Board::new_game();
        assert_eq!(board.repetition_count(), 1);

        for _ in 0..2 {
            for text in ["b1c3", "b8c6", "c3b1", "c6b8"] {
                play(&mut board, text);
            }
        }
        assert_eq!(board.repetition_count(), 3);
        assert!(board.is_threefold_repetition());
        assert!(!board.is_fivefold_repetition());

        for _ in 0..2 {
            for text in ["b1c3", "b8c6", "c3b1", "c6b8"] {
                play(&mut board, text);
            }
        }
        assert!(board.is_fivefold_repetition());

        board.undo_move();
        assert!(!board.is_fivefold_repetition());
    }

    #[test]
    fn tentative_probing_leaves_no_trace_in_the_arena() {
        let mut board = Board::new_game();
        let arena = board.pieces().len();
        let fen = board.to_fen();

        let _ = board.legal_moves();
        assert_eq!(board.pieces().len(), arena);
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.history_depth(), 0);
    }
}
