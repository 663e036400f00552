//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores come from [`evaluate`](super::evaluate), which is always positive
//! for White regardless of who is moving, so each node is told explicitly
//! whether it maximizes or minimizes that score.
//!
//! Children are searched in generation order and a later move only replaces
//! the best one on a strictly better score, so the first of several equal
//! moves wins.

mod log;
mod minimax;

pub use self::log::{LogLogger, SearchInfo, SearchLogger, StdoutLogger};
pub use minimax::minimax;

use super::{evaluate, generate_moves, Move, Position, Side};

/// Stand-in for an unbounded score. `-INFINITY` is the lower bound.
pub const INFINITY: i32 = i32::MAX;

/// Search depth used by move suggestions unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Result of a search node: its score and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at depth 0 or when the side to move has no moves.
    pub best_move: Option<Move>,
}

impl SearchResult {
    #[must_use]
    pub const fn leaf(score: i32) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Nodes scored by the evaluator
    pub leaves: u64,
    /// Move loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Search context for a single search
#[derive(Debug, Default)]
pub struct SearchContext {
    pub stats: SearchStats,
}

impl SearchContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a node without expanding it, if it is terminal.
    pub(crate) fn terminal(&mut self, position: &Position, depth: u32) -> Option<SearchResult> {
        self.stats.nodes += 1;
        if depth == 0 {
            self.stats.leaves += 1;
            return Some(SearchResult::leaf(evaluate(position)));
        }
        None
    }

    /// Alpha-beta search of `position` with `side` to move.
    pub fn alpha_beta(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        side: Side,
    ) -> SearchResult {
        if let Some(leaf) = self.terminal(position, depth) {
            return leaf;
        }

        let moves = generate_moves(position, side);
        if moves.is_empty() {
            self.stats.leaves += 1;
            return SearchResult::leaf(evaluate(position));
        }

        let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });
        for mv in &moves {
            let child = position.apply(mv);
            let score = self
                .alpha_beta(&child, depth - 1, alpha, beta, !maximizing, side.opponent())
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Alpha-beta search from `position` with `side` to move.
///
/// Call with `alpha = -INFINITY`, `beta = INFINITY` for a full-window
/// search. Total for any position and depth.
#[must_use]
pub fn search(
    position: &Position,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    side: Side,
) -> SearchResult {
    SearchContext::new().alpha_beta(position, depth, alpha, beta, maximizing, side)
}
