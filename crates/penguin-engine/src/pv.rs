//! The engine's answer for one position.

use std::fmt;

use penguin_core::{Color, Move};

/// Principal variation: the expected line from a position, with its score.
///
/// When `mate` is set the score is the search depth at which the mate was
/// found rather than a centipawn value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalVariation {
    moves: Vec<Move>,
    turn: Color,
    score: i64,
    mate: bool,
    depth: u8,
    nodes: u64,
}

impl PrincipalVariation {
    pub fn new(moves: Vec<Move>, turn: Color, score: i64, mate: bool) -> PrincipalVariation {
        PrincipalVariation {
            moves,
            turn,
            score,
            mate,
            depth: 0,
            nodes: 0,
        }
    }

    /// Attach search statistics.
    pub fn with_stats(mut self, depth: u8, nodes: u64) -> PrincipalVariation {
        self.depth = depth;
        self.nodes = nodes;
        self
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn best_move(&self) -> Option<Move> {
        self.moves.first().copied()
    }

    /// Side to move in the position the line starts from.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn is_mate(&self) -> bool {
        self.mate
    }

    /// Deepest completed iteration; zero when no search ran.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Moves in UCI notation separated by spaces.
impl fmt::Display for PrincipalVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
