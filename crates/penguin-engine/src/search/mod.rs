//! Iterative-deepening search and move ordering.

pub mod negamax;
pub mod ordering;

use std::time::{Duration, Instant};

use penguin_core::{Move, Position};
use tracing::{debug, info};

use crate::eval::Evaluator;
use crate::history::GameHistory;
use negamax::{INF, Line, MATE, SearchContext, negamax};

/// Deepest iteration when the search runs against a clock.
pub const MAX_TIMED_DEPTH: u8 = 11;

/// Fixed depth used when no clock information is available.
pub const UNTIMED_DEPTH: u8 = 7;

/// How deep and how long one search may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: u8,
    /// Per-move budget. An iteration that costs more than half of it ends the search.
    pub budget: Option<Duration>,
}

impl SearchLimits {
    /// Search exactly to `max_depth` with no clock.
    pub fn depth(max_depth: u8) -> SearchLimits {
        SearchLimits {
            max_depth,
            budget: None,
        }
    }

    /// Search against a per-move budget, up to [`MAX_TIMED_DEPTH`].
    pub fn timed(budget: Duration) -> SearchLimits {
        SearchLimits {
            max_depth: MAX_TIMED_DEPTH,
            budget: Some(budget),
        }
    }

    pub fn untimed() -> SearchLimits {
        SearchLimits::depth(UNTIMED_DEPTH)
    }
}

/// Outcome of the deepest completed iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Principal variation, best move first.
    pub moves: Vec<Move>,
    /// Centipawn score, or the depth the mate was found at when `mate` is set.
    pub score: i64,
    pub mate: bool,
    pub depth: u8,
    /// Nodes visited over all iterations.
    pub nodes: u64,
}

impl SearchReport {
    pub fn best_move(&self) -> Option<Move> {
        self.moves.first().copied()
    }
}

/// Iterative-deepening driver over [`negamax`].
pub struct Searcher<'a> {
    evaluator: &'a dyn Evaluator,
    history: &'a GameHistory,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a dyn Evaluator, history: &'a GameHistory) -> Searcher<'a> {
        Searcher { evaluator, history }
    }

    /// Search `position` for the side to move.
    ///
    /// Deepens one ply at a time from depth 1. Stops when a forced mate is
    /// found, when `limits.max_depth` is done, or when an iteration took more
    /// than half the budget. A started iteration always runs to completion.
    /// Calls `on_iter` after each completed iteration.
    pub fn search<F>(&self, position: &Position, limits: SearchLimits, mut on_iter: F) -> SearchReport
    where
        F: FnMut(&SearchReport),
    {
        let color = position.side_to_move();
        let mut ctx = SearchContext {
            evaluator: self.evaluator,
            history: self.history,
            nodes: 0,
        };
        let mut line = Line::new();
        let mut report = SearchReport {
            moves: Vec::new(),
            score: i64::from(i32::MIN),
            mate: false,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=limits.max_depth {
            let started = Instant::now();
            let score = negamax(position, depth, 0, -INF, INF, color, &mut line, &mut ctx);
            let elapsed = started.elapsed();

            report.moves = line.as_slice().to_vec();
            report.depth = depth;
            report.nodes = ctx.nodes;

            if score == MATE {
                report.score = i64::from(depth);
                report.mate = true;
                info!(depth, nodes = ctx.nodes, "forced mate found");
                on_iter(&report);
                break;
            }

            report.score = score;
            debug!(
                depth,
                score,
                nodes = ctx.nodes,
                elapsed_ms = elapsed.as_millis() as u64,
                "iteration complete"
            );
            on_iter(&report);

            if let Some(budget) = limits.budget {
                if elapsed > budget / 2 {
                    info!(
                        depth,
                        elapsed_ms = elapsed.as_millis() as u64,
                        budget_ms = budget.as_millis() as u64,
                        "stopping: iteration used over half the budget"
                    );
                    break;
                }
            }
        }

        report
    }
}

impl std::fmt::Debug for Searcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
