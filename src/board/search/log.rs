use std::time::Duration;

use super::SearchStats;
use crate::board::{Move, Side};

/// Summary of one finished search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub side: Side,
    pub score: i32,
    pub best_move: Option<Move>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchInfo {
    /// `info depth 3 side white score 0 nodes 1234 leaves 1000 cutoffs 80 time 2 move a2a3`
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "info depth {} side {} score {} nodes {} leaves {} cutoffs {} time {} move {}",
            self.depth,
            self.side.name(),
            self.score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs,
            self.elapsed.as_millis(),
            self.best_move
                .map_or_else(|| "none".to_string(), |mv| mv.to_string())
        )
    }
}

pub trait SearchLogger: Send + Sync {
    fn info(&self, info: &SearchInfo);
}

/// Prints the info line on stdout.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!("{}", info.to_line());
    }
}

/// Sends the info line through the `log` facade at info level.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        ::log::info!("{}", info.to_line());
    }
}
