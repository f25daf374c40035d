//! Time management: convert clock parameters into a per-move budget.

use std::time::Duration;

use penguin_core::Color;

/// Moves assumed left in the game when the GUI sends no `movestogo`.
const DEFAULT_MOVES_LEFT: u32 = 20;

/// Extra moves added to `movestogo` to keep a reserve for overhead.
const MOVES_TO_GO_RESERVE: u32 = 2;

/// One side's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideClock {
    pub remaining: Duration,
    /// Reported by the GUI but not used for budgeting.
    pub increment: Duration,
}

impl SideClock {
    pub fn new(remaining: Duration) -> SideClock {
        SideClock {
            remaining,
            increment: Duration::ZERO,
        }
    }
}

/// Clock state for both sides, as received with `go`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeInfo {
    pub white: SideClock,
    pub black: SideClock,
    pub moves_to_go: Option<u32>,
}

impl TimeInfo {
    pub fn remaining(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white.remaining,
            Color::Black => self.black.remaining,
        }
    }

    /// Time allotted to the move of `color`.
    ///
    /// `remaining / (movestogo + 2)` when the GUI sent `movestogo`,
    /// otherwise `remaining / 20`.
    pub fn move_budget(&self, color: Color) -> Duration {
        let remaining = self.remaining(color);
        match self.moves_to_go {
            Some(moves) => remaining / moves.saturating_add(MOVES_TO_GO_RESERVE),
            None => remaining / DEFAULT_MOVES_LEFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use penguin_core::Color;

    use super::{SideClock, TimeInfo};

    fn clocks(white_ms: u64, black_ms: u64, moves_to_go: Option<u32>) -> TimeInfo {
        TimeInfo {
            white: SideClock::new(Duration::from_millis(white_ms)),
            black: SideClock::new(Duration::from_millis(black_ms)),
            moves_to_go,
        }
    }

    #[test]
    fn budget_without_moves_to_go_is_one_twentieth() {
        let info = clocks(60_000, 30_000, None);
        assert_eq!(info.move_budget(Color::White), Duration::from_millis(3_000));
        assert_eq!(info.move_budget(Color::Black), Duration::from_millis(1_500));
    }

    #[test]
    fn budget_with_moves_to_go_keeps_two_move_reserve() {
        let info = clocks(60_000, 60_000, Some(10));
        assert_eq!(info.move_budget(Color::White), Duration::from_millis(5_000));

        let last_move = clocks(6_000, 6_000, Some(0));
        assert_eq!(last_move.move_budget(Color::Black), Duration::from_millis(3_000));
    }

    #[test]
    fn empty_clock_gives_zero_budget() {
        let info = clocks(0, 0, None);
        assert_eq!(info.move_budget(Color::White), Duration::ZERO);
    }
}
