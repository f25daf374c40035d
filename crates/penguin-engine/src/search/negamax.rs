//! Fail-hard negamax alpha-beta search with principal-variation lines.

use penguin_core::{Color, Move, Position};

use crate::eval::Evaluator;
use crate::history::GameHistory;
use crate::search::ordering::order_moves;

/// Score returned when the side to move delivers checkmate.
pub const MATE: i64 = i32::MAX as i64;

/// Unreachable bound used for the root window.
pub const INF: i64 = i64::MAX;

/// Capacity of a [`Line`] buffer.
pub const MAX_LINE: usize = 256;

/// Fixed-capacity move sequence owned by one search frame.
///
/// A frame fills its line bottom-up: when a move improves alpha, the line
/// becomes that move followed by the child's line.
#[derive(Clone)]
pub struct Line {
    moves: [Move; MAX_LINE],
    len: usize,
}

impl Line {
    pub fn new() -> Line {
        Line {
            moves: [Move::NULL; MAX_LINE],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn set_single(&mut self, mv: Move) {
        self.moves[0] = mv;
        self.len = 1;
    }

    /// Replace this line with `mv` followed by `child`, truncated to capacity.
    fn adopt(&mut self, mv: Move, child: &Line) {
        let tail = child.len.min(MAX_LINE - 1);
        self.moves[0] = mv;
        self.moves[1..=tail].copy_from_slice(&child.moves[..tail]);
        self.len = tail + 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// State threaded through one search invocation.
pub(super) struct SearchContext<'a> {
    pub evaluator: &'a dyn Evaluator,
    pub history: &'a GameHistory,
    pub nodes: u64,
}

/// Negamax alpha-beta search.
///
/// Returns the score of `position` for `color` clamped to `[alpha, beta]`
/// and fills `line` with the best continuation found. Moves are pseudo-legal
/// until applied; any that leave the mover in check are dropped. At the root,
/// moves leading to a position already seen twice in the game are skipped.
#[allow(clippy::too_many_arguments)]
pub(super) fn negamax(
    position: &Position,
    depth: u8,
    ply: u8,
    mut alpha: i64,
    beta: i64,
    color: Color,
    line: &mut Line,
    ctx: &mut SearchContext<'_>,
) -> i64 {
    line.clear();
    ctx.nodes += 1;

    if depth == 0 {
        return i64::from(ctx.evaluator.evaluate(position, color));
    }

    let mut moves = position.pseudo_legal_moves();
    order_moves(position, &mut moves);

    let mover = position.side_to_move();
    let mut child_line = Line::new();
    let mut searched_any = false;

    for &mv in &moves {
        let child = position.after(mv);

        if ply == 0 && ctx.history.count(ctx.history.hash(&child)) >= 2 {
            continue;
        }
        if child.is_check(mover) {
            continue;
        }
        searched_any = true;

        if child.is_checkmate(!mover) {
            line.set_single(mv);
            return MATE;
        }

        let score = -negamax(
            &child,
            depth - 1,
            ply + 1,
            -beta,
            -alpha,
            !color,
            &mut child_line,
            ctx,
        );

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
            line.adopt(mv, &child_line);
        }
    }

    // Stalemate below the root: the parent never recurses into checkmate.
    if !searched_any && ply > 0 {
        return 0i64.clamp(alpha, beta);
    }

    alpha
}
