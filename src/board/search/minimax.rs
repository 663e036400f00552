use super::{SearchContext, SearchResult, INFINITY};
use crate::board::{evaluate, generate_moves, Position, Side};

impl SearchContext {
    /// Full-width minimax without pruning. Visits every node to `depth` and
    /// breaks ties the same way as [`SearchContext::alpha_beta`].
    pub fn minimax(
        &mut self,
        position: &Position,
        depth: u32,
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
            let score = self
                .minimax(&position.apply(mv), depth - 1, !maximizing, side.opponent())
                .score;
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
        }
        best
    }
}

/// Unpruned minimax from `position` with `side` to move.
#[must_use]
pub fn minimax(position: &Position, depth: u32, maximizing: bool, side: Side) -> SearchResult {
    SearchContext::new().minimax(position, depth, maximizing, side)
}
