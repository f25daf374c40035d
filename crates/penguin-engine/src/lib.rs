//! Search and evaluation for penguin.

pub mod book;
pub mod engine;
pub mod eval;
pub mod history;
pub mod pv;
pub mod search;
pub mod time;

pub use book::{FirstMoveBook, NoBook, OpeningBook};
pub use engine::{Engine, HashInfo, Penguin};
pub use eval::{Evaluator, PieceSquareEvaluator};
pub use history::GameHistory;
pub use pv::PrincipalVariation;
pub use search::{MAX_TIMED_DEPTH, SearchLimits, SearchReport, Searcher, UNTIMED_DEPTH};
pub use time::{SideClock, TimeInfo};
