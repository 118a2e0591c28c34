//! Minimax search with alpha-beta pruning.
//!
//! Purely recursive, no state between top-level calls beyond the board
//! handed in. Every speculative move is reverted on every exit path,
//! pruning cutoffs included; the board a search returns from is
//! indistinguishable from the one it received.

use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::eval::evaluate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Instant;

pub const INFINITY: i32 = 100_000;
/// What a position with no legal reply is worth to the stuck side.
pub const MATE: i32 = 99_000;

/// Root move chooser. Owns the RNG that shuffles root moves so that
/// equal-scoring moves do not repeat between games.
pub struct Searcher {
    rng: StdRng,
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            rng: rand::make_rng(),
            nodes: 0,
        }
    }

    /// Seeded construction for reproducible move ordering.
    pub fn with_seed(seed: u64) -> Self {
        Searcher {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Pick the best move for `color`, searching `depth` plies.
    ///
    /// `depth` must be at least 1: a zero-ply search cannot produce a
    /// move, so this is a caller error rather than a result.
    pub fn choose_move(&mut self, board: &mut Board, color: Color, depth: u32) -> Option<Move> {
        assert!(depth >= 1, "search depth must be at least 1");
        let start = Instant::now();
        self.nodes = 0;

        let mut moves = board.legal_moves(color);
        moves.shuffle(&mut self.rng);

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let rec = board.apply(mv);
            let score = self.minimax(board, color, depth - 1, -INFINITY, INFINITY, false);
            board.revert(rec);
            if best.is_none_or(|(_, s)| score >= s) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            tracing::debug!(
                %mv,
                score,
                depth,
                nodes = self.nodes,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "search finished"
            );
        }
        best.map(|(mv, _)| mv)
    }

    /// Minimax value of the position. `maximizing` is true exactly when
    /// `root` is the side to move; scores are always from the root
    /// side's point of view.
    fn minimax(
        &mut self,
        board: &mut Board,
        root: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            let score = evaluate(board);
            return match root {
                Color::White => score,
                Color::Black => -score,
            };
        }

        let side = if maximizing { root } else { root.opposite() };
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            // The side to move is mated; stalemate scores the same.
            return if maximizing { -MATE } else { MATE };
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in moves {
                let rec = board.apply(mv);
                best = best.max(self.minimax(board, root, depth - 1, alpha, beta, false));
                board.revert(rec);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let rec = board.apply(mv);
                best = best.min(self.minimax(board, root, depth - 1, alpha, beta, true));
                board.revert(rec);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
