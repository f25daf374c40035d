//! Integration tests for the engine's search.
//!
//! Covers mate detection, determinism, root repetition avoidance and the
//! short-circuits taken before searching.

use std::time::Duration;

use penguin_core::{Color, Move, Position};
use penguin_engine::{
    Engine, GameHistory, NoBook, Penguin, PieceSquareEvaluator, SearchLimits, SearchReport,
    Searcher, SideClock, TimeInfo,
};

const SCHOLARS_MATE_FEN: &str =
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

const SICILIAN_FEN: &str = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2";

const BACK_RANK_MATED_FEN: &str = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1";

const STALEMATE_FEN: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

const HANGING_QUEEN_FEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";

/// Helper: search `position` to `depth` with the given history.
fn search_depth(position: &Position, depth: u8, history: &GameHistory) -> SearchReport {
    Searcher::new(&PieceSquareEvaluator, history).search(position, SearchLimits::depth(depth), |_| {})
}

/// Two seconds on each clock: a 100 ms budget per move.
fn short_clock() -> TimeInfo {
    TimeInfo {
        white: SideClock::new(Duration::from_secs(2)),
        black: SideClock::new(Duration::from_secs(2)),
        moves_to_go: None,
    }
}

fn mv(text: &str) -> Move {
    Move::from_uci(text).unwrap()
}

// ── Mate detection ────────────────────────────────────────────────────────────

#[test]
fn engine_finds_scholars_mate() {
    let mut engine = Penguin::new();
    let position: Position = SCHOLARS_MATE_FEN.parse().unwrap();
    let pv = engine.pv(&position, Some(&short_clock()));
    assert_eq!(pv.moves(), &[mv("h5f7")], "expected the one-move mating line");
    assert!(pv.is_mate());
    assert_eq!(pv.score(), 1, "mate found at depth 1");
    assert_eq!(pv.turn(), Color::White);
}

#[test]
fn mate_is_found_without_clock_at_depth_one() {
    let mut engine = Penguin::new().with_book(NoBook);
    let position: Position = SCHOLARS_MATE_FEN.parse().unwrap();
    // Untimed search would go to depth 7, but mate stops it at depth 1.
    let pv = engine.pv(&position, None);
    assert!(pv.is_mate());
    assert_eq!(pv.depth(), 1);
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn fixed_depth_search_is_deterministic() {
    let position: Position = SICILIAN_FEN.parse().unwrap();
    let history = GameHistory::new();
    let first = search_depth(&position, 3, &history);
    let second = search_depth(&position, 3, &history);
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn wins_hanging_queen() {
    let position: Position = HANGING_QUEEN_FEN.parse().unwrap();
    let report = search_depth(&position, 2, &GameHistory::new());
    assert_eq!(report.best_move(), Some(mv("d2d5")));
    assert!(report.score > 300, "score {} should reflect the won queen", report.score);
}

// ── Repetition avoidance ──────────────────────────────────────────────────────

#[test]
fn root_skips_move_into_twice_seen_position() {
    let position: Position = SCHOLARS_MATE_FEN.parse().unwrap();
    let mut history = GameHistory::new();
    let mating = position.after(mv("h5f7"));
    history.record(&mating);
    history.record(&mating);

    let report = search_depth(&position, 1, &history);
    assert_ne!(report.best_move(), Some(mv("h5f7")));
    assert!(!report.mate, "the only mate was excluded");
    assert!(report.best_move().is_some());
}

#[test]
fn once_seen_position_is_still_playable() {
    let position: Position = SCHOLARS_MATE_FEN.parse().unwrap();
    let mut history = GameHistory::new();
    history.record(&position.after(mv("h5f7")));

    let report = search_depth(&position, 1, &history);
    assert_eq!(report.best_move(), Some(mv("h5f7")));
}

#[test]
fn engine_uses_position_history() {
    let mut engine = Penguin::new();
    let position: Position = HANGING_QUEEN_FEN.parse().unwrap();
    let capture = position.after(mv("d2d5"));
    engine.set_position_history(&[capture, capture]);

    let pv = engine.pv(&position, Some(&short_clock()));
    assert_ne!(pv.best_move(), Some(mv("d2d5")));
    assert!(position.legal_moves().contains(pv.best_move().unwrap()));
}

#[test]
fn engine_records_position_after_its_move() {
    let mut engine = Penguin::new().with_book(NoBook);
    let position: Position = HANGING_QUEEN_FEN.parse().unwrap();
    let pv = engine.pv(&position, Some(&short_clock()));
    let best = pv.best_move().unwrap();

    let history = engine.history();
    assert_eq!(history.count(history.hash(&position.after(best))), 1);
}

// ── Short-circuits ────────────────────────────────────────────────────────────

#[test]
fn checkmated_position_returns_empty_mate_line() {
    let mut engine = Penguin::new();
    let position: Position = BACK_RANK_MATED_FEN.parse().unwrap();
    let pv = engine.pv(&position, Some(&short_clock()));
    assert!(pv.is_empty());
    assert!(pv.is_mate());
    assert_eq!(pv.score(), 0);
    assert_eq!(pv.turn(), Color::Black);
}

#[test]
fn stalemated_position_returns_empty_line() {
    let mut engine = Penguin::new();
    let position: Position = STALEMATE_FEN.parse().unwrap();
    let pv = engine.pv(&position, None);
    assert!(pv.is_empty());
    assert!(!pv.is_mate());
}

#[test]
fn book_answers_black_after_non_e4_opening() {
    let mut engine = Penguin::new();
    let position = Position::starting_position().after(mv("g1f3"));
    let pv = engine.pv(&position, Some(&short_clock()));
    assert_eq!(pv.moves(), &[mv("e7e5")]);
    assert_eq!(pv.turn(), Color::Black);
}

#[test]
fn book_waits_for_a_starting_position() {
    let mut engine = Penguin::new();
    let position: Position = HANGING_QUEEN_FEN.parse().unwrap();
    let searched = engine.pv(&position, Some(&short_clock()));
    assert!(searched.depth() >= 1, "custom position must be searched");

    let start = Position::starting_position();
    assert_eq!(engine.pv(&start, Some(&short_clock())).moves(), &[mv("e2e4")]);
}

// ── Timed search ──────────────────────────────────────────────────────────────

#[test]
fn timed_search_returns_legal_move() {
    let mut engine = Penguin::new().with_book(NoBook);
    let start = Position::starting_position();
    let pv = engine.pv(&start, Some(&short_clock()));
    let best = pv.best_move().expect("timed search should produce a move");
    assert!(start.legal_moves().contains(best));
    assert!(pv.depth() >= 1);
    assert!(pv.nodes() > 0);
}
