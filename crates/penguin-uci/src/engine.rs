//! Synchronous UCI command loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use penguin_core::Position;
use penguin_engine::{Engine, PrincipalVariation, SideClock, TimeInfo};

use crate::command::{Command, GoParams, PositionInfo, UciOption, parse_command};
use crate::error::UciError;

/// The UCI front end, holding the current position and the engine.
///
/// Commands are handled one at a time on the calling thread; `go` blocks
/// until the engine answers.
pub struct UciEngine<E> {
    engine: E,
    position: Position,
}

impl<E: Engine> UciEngine<E> {
    /// Create a front end for `engine`, starting from the initial position.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            position: Position::starting_position(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Run the UCI loop on stdin and stdout until `quit` or end of input.
    pub fn run(mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the UCI loop over arbitrary input and output streams.
    ///
    /// Parse errors are logged and the offending line is skipped; only I/O
    /// errors end the loop early.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, out)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            out.flush()?;
        }

        info!("penguin shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.handle_ucinewgame(),
            Command::Position(info) => self.handle_position(info),
            Command::Go(params) => self.handle_go(&params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Stop | Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name {} {}", self.engine.name(), self.engine.version())?;
        writeln!(out, "id author {}", self.engine.author())?;
        if let Some(hash) = self.engine.hash_info() {
            writeln!(
                out,
                "option name Hash type spin default {} min {} max {}",
                hash.default, hash.min, hash.max
            )?;
        }
        writeln!(out, "uciok")
    }

    fn handle_ucinewgame(&mut self) {
        self.engine.new_game();
        self.position = Position::starting_position();
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Hash(megabytes) => self.engine.set_hash_size(megabytes),
            UciOption::Other(name) => debug!(%name, "ignoring unknown option"),
        }
    }

    fn handle_position(&mut self, info: PositionInfo) {
        debug!(
            fen = %info.position,
            plies = info.history.len().saturating_sub(1),
            "position set\n{}",
            info.position.pretty()
        );
        self.position = info.position;
        self.engine.set_position_history(&info.history);
    }

    fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let pv = if let Some(depth) = params.depth {
            self.engine.pv_at_depth(&self.position, depth)
        } else if params.has_clock() && !params.infinite {
            let clocks = time_info(params);
            self.engine.pv(&self.position, Some(&clocks))
        } else {
            self.engine.pv(&self.position, None)
        };

        write_info(out, &pv)?;
        match pv.moves() {
            [] => writeln!(out, "bestmove 0000"),
            [best] => writeln!(out, "bestmove {best}"),
            [best, reply, ..] => writeln!(out, "bestmove {best} ponder {reply}"),
        }
    }
}

impl<E: Engine + Default> Default for UciEngine<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

/// Build the engine's clock view from `go` parameters; a missing clock reads as zero.
fn time_info(params: &GoParams) -> TimeInfo {
    TimeInfo {
        white: SideClock {
            remaining: params.wtime.unwrap_or_default(),
            increment: params.winc.unwrap_or_default(),
        },
        black: SideClock {
            remaining: params.btime.unwrap_or_default(),
            increment: params.binc.unwrap_or_default(),
        },
        moves_to_go: params.movestogo,
    }
}

/// Write the `info` line for a finished search. Nothing is written for an empty line.
fn write_info<W: Write>(out: &mut W, pv: &PrincipalVariation) -> io::Result<()> {
    if pv.is_empty() {
        return Ok(());
    }
    if pv.is_mate() {
        // A mate found at depth d is delivered on move (d + 1) / 2.
        writeln!(
            out,
            "info depth {} score mate {} nodes {} pv {}",
            pv.depth(),
            (pv.score() + 1) / 2,
            pv.nodes(),
            pv
        )
    } else {
        writeln!(
            out,
            "info depth {} score cp {} nodes {} pv {}",
            pv.depth(),
            pv.score(),
            pv.nodes(),
            pv
        )
    }
}
