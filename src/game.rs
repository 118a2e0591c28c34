//! Game governance: turn alternation, draw clocks, history and undo.

use crate::core::board::{Applied, Board, Color, PieceKind, Square};
use crate::core::moves::Move;
use crate::engine::search::Searcher;
use rand::{Rng, RngExt};

/// Fifty-move rule threshold, in half-moves.
const FIFTY_MOVE_HALF_MOVES: u32 = 100;

/// One undo-stack entry: the board-level reversal record plus the clock
/// values the move overwrote.
struct Undo {
    applied: Applied,
    capture_clock: u32,
    pawn_clock: u32,
}

/// A governed two-player game over a [`Board`].
///
/// The game enforces turn order, maintains the replayable move history
/// (append-only during play, truncated by undo) and the two half-move
/// clocks behind the fifty-move rule.
pub struct Game {
    board: Board,
    history: Vec<Move>,
    undo_stack: Vec<Undo>,
    ply: u32,
    /// Half-moves since the last capture.
    capture_clock: u32,
    /// Half-moves since the last pawn advance.
    pawn_clock: u32,
}

impl Game {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            history: Vec::new(),
            undo_stack: Vec::new(),
            ply: 0,
            capture_clock: 0,
            pawn_clock: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Half-moves played so far.
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whose turn it is: White on even plies.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Validate and play a move for the side to move.
    ///
    /// Returns false and leaves the position untouched when the origin
    /// does not hold a piece of the side to move or the move is not
    /// fully legal. On success the capture and en-passant, castling and
    /// promotion side effects are observable through [`Game::board`].
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        let side = self.side_to_move();
        if !self.board.piece_at(from).is_some_and(|p| p.color == side) {
            return false;
        }
        if !self.board.is_legal(from, to) {
            return false;
        }
        self.play_unchecked(Move::new(from, to));
        true
    }

    /// Apply a move already known to be legal, updating clocks, history
    /// and the undo stack.
    fn play_unchecked(&mut self, mv: Move) {
        let moved_pawn = self
            .board
            .piece_at(mv.from)
            .is_some_and(|p| p.kind == PieceKind::Pawn);
        let (capture_clock, pawn_clock) = (self.capture_clock, self.pawn_clock);

        let applied = self.board.apply(mv);

        if applied.captured.is_some() {
            self.capture_clock = 0;
        } else {
            self.capture_clock += 1;
        }
        if moved_pawn {
            self.pawn_clock = 0;
        } else {
            self.pawn_clock += 1;
        }

        self.undo_stack.push(Undo {
            applied,
            capture_clock,
            pawn_clock,
        });
        self.history.push(mv);
        self.ply += 1;
    }

    /// Undo the most recent move, special-move effects included, and
    /// restore both clocks. A no-op on an empty history.
    pub fn undo_last(&mut self) -> bool {
        let Some(undo) = self.undo_stack.pop() else {
            return false;
        };
        self.board.revert(undo.applied);
        self.capture_clock = undo.capture_clock;
        self.pawn_clock = undo.pawn_clock;
        self.history.pop();
        self.ply -= 1;
        true
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    pub fn count_legal_moves(&mut self, color: Color) -> usize {
        self.board.count_legal_moves(color)
    }

    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        self.board.legal_moves(color)
    }

    /// Fifty-move rule: a draw once both clocks reach 100 half-moves.
    pub fn is_draw(&self) -> bool {
        self.capture_clock >= FIFTY_MOVE_HALF_MOVES && self.pawn_clock >= FIFTY_MOVE_HALF_MOVES
    }

    /// The game ends on mate (stalemate included) for the side to move,
    /// or on a fifty-move draw.
    pub fn is_over(&mut self) -> bool {
        let side = self.side_to_move();
        self.is_draw() || self.is_checkmate(side)
    }

    /// Ask the search for the side to move's best move.
    ///
    /// Read-only from the caller's perspective: the search makes and
    /// unmakes many moves internally, all reverted before returning.
    pub fn suggest_move(&mut self, searcher: &mut Searcher, depth: u32) -> Option<Move> {
        let side = self.side_to_move();
        searcher.choose_move(&mut self.board, side, depth)
    }

    /// A uniformly random fully-legal move for the side to move.
    pub fn random_move<R: Rng>(&mut self, rng: &mut R) -> Option<Move> {
        let side = self.side_to_move();
        let moves = self.board.legal_moves(side);
        if moves.is_empty() {
            return None;
        }
        Some(moves[rng.random_range(0..moves.len())])
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
