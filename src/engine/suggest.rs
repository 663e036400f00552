//! Move suggestion service.
//!
//! The boundary a front end calls when the player asks for a suggested move:
//! hand over a snapshot of the board and the side to move, get back the move
//! to highlight (if any).

use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::config::{Perspective, SuggestConfig};
use crate::board::{
    LogLogger, Move, Position, SearchContext, SearchInfo, SearchLogger, SearchResult, SearchStats,
    Side, INFINITY,
};

/// Everything one suggestion search produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub side: Side,
    pub depth: u32,
    pub result: SearchResult,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchReport {
    #[must_use]
    pub fn info(&self) -> SearchInfo {
        SearchInfo {
            depth: self.depth,
            side: self.side,
            score: self.result.score,
            best_move: self.result.best_move,
            stats: self.stats,
            elapsed: self.elapsed,
        }
    }
}

pub struct MoveSuggestionService {
    config: SuggestConfig,
    logger: Box<dyn SearchLogger>,
    last_report: Mutex<Option<SearchReport>>,
}

impl Default for MoveSuggestionService {
    fn default() -> Self {
        Self::new(SuggestConfig::default())
    }
}

impl MoveSuggestionService {
    /// A service reporting through the `log` facade.
    #[must_use]
    pub fn new(config: SuggestConfig) -> Self {
        MoveSuggestionService {
            config,
            logger: Box::new(LogLogger),
            last_report: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl SearchLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Best move for `side`, or `None` when it has no move (or depth is 0).
    #[must_use]
    pub fn suggest(&self, position: &Position, side: Side) -> Option<Move> {
        self.analyse(position, side).result.best_move
    }

    /// Run the configured search and return the full report.
    pub fn analyse(&self, position: &Position, side: Side) -> SearchReport {
        let maximizing = match self.config.perspective {
            Perspective::FixedWhite => true,
            Perspective::SideToMove => side == Side::White,
        };
        log::debug!(
            "searching {} for {side} at depth {} (pruning {})",
            position.to_fen_placement(),
            self.config.depth,
            self.config.pruning
        );

        let start = Instant::now();
        let mut ctx = SearchContext::new();
        let result = if self.config.pruning {
            ctx.alpha_beta(
                position,
                self.config.depth,
                -INFINITY,
                INFINITY,
                maximizing,
                side,
            )
        } else {
            ctx.minimax(position, self.config.depth, maximizing, side)
        };

        let report = SearchReport {
            side,
            depth: self.config.depth,
            result,
            stats: ctx.stats,
            elapsed: start.elapsed(),
        };
        self.logger.info(&report.info());
        *self.last_report.lock() = Some(report);
        report
    }

    /// The report of the most recent `suggest` or `analyse` call.
    #[must_use]
    pub fn last_report(&self) -> Option<SearchReport> {
        *self.last_report.lock()
    }
}

/// Suggest a move with the default settings: alpha-beta at depth 3,
/// maximizing the White-positive score.
#[must_use]
pub fn suggest_move(position: &Position, side: Side) -> Option<Move> {
    MoveSuggestionService::default().suggest(position, side)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::board::search;

    struct CountingLogger(Arc<AtomicUsize>);

    impl SearchLogger for CountingLogger {
        fn info(&self, _info: &SearchInfo) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_suggest_matches_search_field() {
        let pos = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R");
        let expected = search(&pos, 3, -INFINITY, INFINITY, true, Side::White).best_move;
        assert_eq!(suggest_move(&pos, Side::White), expected);
    }

    #[test]
    fn test_last_report_is_stored() {
        let service = MoveSuggestionService::default();
        assert!(service.last_report().is_none());
        let mv = service.suggest(&Position::starting(), Side::White);
        let report = service.last_report().unwrap();
        assert_eq!(report.result.best_move, mv);
        assert_eq!(report.depth, 3);
        assert_eq!(report.side, Side::White);
        assert!(report.stats.nodes > report.stats.leaves);
    }

    #[test]
    fn test_logger_called_once_per_search() {
        let count = Arc::new(AtomicUsize::new(0));
        let service =
            MoveSuggestionService::default().with_logger(CountingLogger(Arc::clone(&count)));
        let pos = Position::starting();
        service.suggest(&pos, Side::White);
        service.suggest(&pos, Side::Black);
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_depth_zero_suggests_nothing() {
        let service = MoveSuggestionService::new(SuggestConfig::default().with_depth(0));
        assert_eq!(service.suggest(&Position::starting(), Side::White), None);
    }

    #[test]
    fn test_perspective_decides_what_black_is_told() {
        // Black queen on d4 can take the unprotected e3 pawn.
        let pos = Position::from_fen("4k3/8/8/8/3q4/4P3/8/4K3");

        let mut config = SuggestConfig::default().with_depth(2);
        config.perspective = Perspective::SideToMove;
        let side_view = MoveSuggestionService::new(config.clone());
        assert_eq!(
            side_view.suggest(&pos, Side::Black),
            Some("d4e3".parse().unwrap())
        );
        assert_eq!(side_view.last_report().unwrap().result.score, -9);

        // The fixed White view maximizes White's score at the root even when
        // Black moves, so winning the pawn is the worst choice and the first
        // quiet move is kept.
        config.perspective = Perspective::FixedWhite;
        let white_view = MoveSuggestionService::new(config);
        assert_eq!(
            white_view.suggest(&pos, Side::Black),
            Some("e8d8".parse().unwrap())
        );
        assert_eq!(white_view.last_report().unwrap().result.score, -8);
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let service = Arc::new(MoveSuggestionService::default());
        let handles: Vec<_> = Side::BOTH
            .into_iter()
            .map(|side| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.suggest(&Position::starting(), side))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
    }
}
