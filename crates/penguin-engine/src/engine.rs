//! The [`Engine`] interface and its implementation.

use penguin_core::{Position, ZobristKeys};
use tracing::{info, warn};

use crate::book::{FirstMoveBook, OpeningBook};
use crate::eval::{Evaluator, PieceSquareEvaluator};
use crate::history::GameHistory;
use crate::pv::PrincipalVariation;
use crate::search::{SearchLimits, Searcher};
use crate::time::TimeInfo;

/// Hash table sizes in megabytes, advertised to the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashInfo {
    pub default: usize,
    pub min: usize,
    pub max: usize,
}

/// A chess engine as seen by a protocol front end.
pub trait Engine {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn author(&self) -> &str;

    /// Forget everything learned about the current game.
    fn new_game(&mut self);

    /// Best line for the side to move in `position`.
    ///
    /// Searches against the clock when `time_info` is given, otherwise to a
    /// fixed default depth.
    fn pv(&mut self, position: &Position, time_info: Option<&TimeInfo>) -> PrincipalVariation;

    /// Best line from a search of exactly `depth` plies.
    /// Engines without a depth limit fall back to their untimed search.
    fn pv_at_depth(&mut self, position: &Position, _depth: u8) -> PrincipalVariation {
        self.pv(position, None)
    }

    /// Hash sizes the engine accepts, if it has a hash table at all.
    fn hash_info(&self) -> Option<HashInfo> {
        None
    }

    fn set_hash_size(&mut self, _megabytes: usize) {}

    /// Replace the repetition history with the positions of the game so far.
    fn set_position_history(&mut self, positions: &[Position]);
}

const NAME: &str = "penguin";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = "c0mplex";

/// Negamax engine with a first-move book and root repetition avoidance.
pub struct Penguin {
    evaluator: Box<dyn Evaluator>,
    history: GameHistory,
    book: Box<dyn OpeningBook>,
}

impl Penguin {
    pub fn new() -> Penguin {
        Penguin {
            evaluator: Box::new(PieceSquareEvaluator),
            history: GameHistory::new(),
            book: Box::new(FirstMoveBook::new()),
        }
    }

    pub fn with_book(mut self, book: impl OpeningBook + 'static) -> Penguin {
        self.book = Box::new(book);
        self
    }

    pub fn with_evaluator(mut self, evaluator: impl Evaluator + 'static) -> Penguin {
        self.evaluator = Box::new(evaluator);
        self
    }

    pub fn with_keys(mut self, keys: ZobristKeys) -> Penguin {
        self.history = GameHistory::with_keys(keys);
        self
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut GameHistory {
        &mut self.history
    }

    /// Short-circuit finished games and book positions, otherwise search within `limits`.
    fn think(&mut self, position: &Position, limits: SearchLimits) -> PrincipalVariation {
        let turn = position.side_to_move();

        if position.is_checkmate(turn) {
            return PrincipalVariation::new(Vec::new(), turn, 0, true);
        }
        if position.is_stalemate(turn) {
            return PrincipalVariation::new(Vec::new(), turn, 0, false);
        }

        if let Some(reply) = self.book.reply(position) {
            let score = self.evaluator.evaluate(&position.after(reply), turn);
            info!(%reply, score, "book reply");
            return PrincipalVariation::new(vec![reply], turn, i64::from(score), false);
        }

        let report = Searcher::new(self.evaluator.as_ref(), &self.history).search(position, limits, |_| {});

        let mut moves = report.moves;
        let mut score = report.score;
        if moves.is_empty() {
            // Every root move was pruned by repetition or none beat the window.
            if let Some(&fallback) = position.legal_moves().as_slice().first() {
                score = i64::from(self.evaluator.evaluate(&position.after(fallback), turn));
                warn!(%fallback, score, depth = report.depth, "search produced no line, playing first legal move");
                moves.push(fallback);
            }
        }

        if let Some(&best) = moves.first() {
            self.history.record(&position.after(best));
        }

        PrincipalVariation::new(moves, turn, score, report.mate)
            .with_stats(report.depth, report.nodes)
    }
}

impl Default for Penguin {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Penguin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Penguin")
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl Engine for Penguin {
    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn author(&self) -> &str {
        AUTHOR
    }

    fn new_game(&mut self) {
        self.history.clear();
        self.book.reset();
    }

    fn pv(&mut self, position: &Position, time_info: Option<&TimeInfo>) -> PrincipalVariation {
        let limits = match time_info {
            Some(clocks) => SearchLimits::timed(clocks.move_budget(position.side_to_move())),
            None => SearchLimits::untimed(),
        };
        self.think(position, limits)
    }

    fn pv_at_depth(&mut self, position: &Position, depth: u8) -> PrincipalVariation {
        self.think(position, SearchLimits::depth(depth.max(1)))
    }

    fn hash_info(&self) -> Option<HashInfo> {
        Some(HashInfo {
            default: 16,
            min: 1,
            max: 65536,
        })
    }

    fn set_hash_size(&mut self, megabytes: usize) {
        info!(megabytes, "hash size ignored: the search keeps no table");
    }

    fn set_position_history(&mut self, positions: &[Position]) {
        self.history.set_positions(positions);
    }
}
