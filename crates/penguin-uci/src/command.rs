//! UCI command parsing.

use std::time::Duration;

use penguin_core::{Move, Position};

use crate::error::UciError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` searches to the engine's default depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// White's increment per move.
    pub winc: Option<Duration>,
    /// Black's increment per move.
    pub binc: Option<Duration>,
    /// Moves until next time control.
    pub movestogo: Option<u32>,
    /// Search to this depth only.
    pub depth: Option<u8>,
    /// Search without a clock.
    pub infinite: bool,
}

impl GoParams {
    /// Whether either side's clock was sent.
    pub fn has_clock(&self) -> bool {
        self.wtime.is_some() || self.btime.is_some()
    }
}

/// Options adjustable via `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOption {
    /// Hash table size in megabytes.
    Hash(usize),
    /// Any option the engine does not know; ignored.
    Other(String),
}

/// A position together with every position of the game leading to it.
#[derive(Debug, Clone)]
pub struct PositionInfo {
    pub position: Position,
    /// Positions from the root of the `position` command up to and including `position`.
    pub history: Vec<Position>,
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(PositionInfo),
    /// `go` -- search the current position.
    Go(GoParams),
    /// `setoption name <id> [value <x>]`.
    SetOption(UciOption),
    /// `stop` -- searches are synchronous, so there is never one to stop.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored, as UCI requires).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match keyword {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args).map(Command::Position),
        "go" => parse_go(args).map(Command::Go),
        "setoption" => parse_setoption(args).map(Command::SetOption),
        _ => Ok(Command::Unknown(keyword.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <fen-string> [moves e2e4 e7e5 ...]`
///
/// Every move must be legal in the position it is applied to.
fn parse_position(tokens: &[&str]) -> Result<PositionInfo, UciError> {
    let moves_at = tokens.iter().position(|&t| t == "moves").unwrap_or(tokens.len());
    let (setup, rest) = tokens.split_at(moves_at);

    let mut position = match setup.split_first() {
        Some((&"startpos", [])) => Position::starting_position(),
        Some((&"fen", fields)) => {
            let fen = fields.join(" ");
            fen.parse::<Position>()
                .map_err(|source| UciError::InvalidFen { fen, source })?
        }
        _ => return Err(UciError::MalformedPosition),
    };

    let mut history = vec![position];
    for &text in rest.iter().skip(1) {
        let mv = Move::from_uci(text)
            .filter(|&mv| position.legal_moves().contains(mv))
            .ok_or_else(|| UciError::InvalidMove {
                uci_move: text.to_string(),
            })?;
        position.apply_move(mv);
        history.push(position);
    }

    Ok(PositionInfo { position, history })
}

/// Parse the `go` command arguments.
///
/// Supports: wtime, btime, winc, binc, movestogo, depth, infinite.
/// Unknown tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<GoParams, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        let value = tokens.get(i + 1);
        match tokens[i] {
            "wtime" => params.wtime = Some(parse_millis(value, "wtime")?),
            "btime" => params.btime = Some(parse_millis(value, "btime")?),
            "winc" => params.winc = Some(parse_millis(value, "winc")?),
            "binc" => params.binc = Some(parse_millis(value, "binc")?),
            "movestogo" => params.movestogo = Some(parse_int(value, "movestogo")?),
            "depth" => params.depth = Some(parse_int(value, "depth")?),
            "infinite" => {
                params.infinite = true;
                i += 1;
                continue;
            }
            _ => {
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    Ok(params)
}

/// Parse `name <id> [value <x>]`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<UciOption, UciError> {
    let Some((&"name", rest)) = tokens.split_first() else {
        return Err(UciError::MalformedOption);
    };
    let value_at = rest.iter().position(|&t| t == "value").unwrap_or(rest.len());
    let name = rest[..value_at].join(" ");
    if name.is_empty() {
        return Err(UciError::MalformedOption);
    }
    let value = rest.get(value_at + 1..).unwrap_or_default().join(" ");

    if name.eq_ignore_ascii_case("hash") {
        let megabytes = value.parse().map_err(|_| UciError::InvalidOptionValue {
            name,
            value: value.clone(),
        })?;
        return Ok(UciOption::Hash(megabytes));
    }
    Ok(UciOption::Other(name))
}

/// Parse a millisecond value from a token.
fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, UciError> {
    parse_int::<i64>(token, param).map(|ms| Duration::from_millis(ms.max(0) as u64))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use penguin_core::{Move, Position};

    use super::*;

    fn go(line: &str) -> GoParams {
        match parse_command(line).unwrap() {
            Command::Go(params) => params,
            other => panic!("expected Go, got {other:?}"),
        }
    }

    fn position(line: &str) -> PositionInfo {
        match parse_command(line).unwrap() {
            Command::Position(info) => info,
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
        assert!(matches!(parse_command("ucinewgame").unwrap(), Command::UciNewGame));
        assert!(matches!(parse_command("stop").unwrap(), Command::Stop));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        let info = position("position startpos");
        assert_eq!(info.position, Position::starting_position());
        assert_eq!(info.history.len(), 1);
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        let info = position("position startpos moves e2e4 e7e5 g1f3");
        let expected: Position = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(info.position, expected);
        assert_eq!(info.history.len(), 4);
        assert_eq!(info.history.last(), Some(&info.position));
    }

    #[test]
    fn parse_position_fen_with_and_without_counters() {
        let full = position("position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let short = position("position fen 4k3/8/8/8/8/8/4P3/4K3 w - -");
        assert_eq!(full.position, short.position);
    }

    #[test]
    fn parse_position_fen_with_moves() {
        let info = position("position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1 moves e2e4");
        assert_eq!(
            info.position.piece_at(Move::from_uci("e2e4").unwrap().to()),
            Some(penguin_core::Piece::WHITE_PAWN)
        );
    }

    #[test]
    fn parse_position_rejects_illegal_move() {
        let result = parse_command("position startpos moves e2e5");
        assert!(matches!(result, Err(UciError::InvalidMove { .. })));

        let garbage = parse_command("position startpos moves zz");
        assert!(matches!(garbage, Err(UciError::InvalidMove { .. })));
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(
            parse_command("position"),
            Err(UciError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position startpos e2e4"),
            Err(UciError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(UciError::InvalidFen { .. })
        ));
        let overlong = format!("position fen {}/8/8/8/8/8/8/4K2k w - - 0 1", "8".repeat(33));
        assert!(matches!(
            parse_command(&overlong),
            Err(UciError::InvalidFen { .. })
        ));
    }

    #[test]
    fn parse_go_bare_defaults() {
        let params = go("go");
        assert_eq!(params, GoParams::default());
        assert!(!params.has_clock());
    }

    #[test]
    fn parse_go_clock() {
        let params = go("go wtime 300000 btime 290000 winc 2000 binc 1000 movestogo 20");
        assert_eq!(params.wtime, Some(Duration::from_millis(300_000)));
        assert_eq!(params.btime, Some(Duration::from_millis(290_000)));
        assert_eq!(params.winc, Some(Duration::from_millis(2_000)));
        assert_eq!(params.binc, Some(Duration::from_millis(1_000)));
        assert_eq!(params.movestogo, Some(20));
        assert!(params.has_clock());
    }

    #[test]
    fn parse_go_negative_time_clamps_to_zero() {
        assert_eq!(go("go wtime -50").wtime, Some(Duration::ZERO));
    }

    #[test]
    fn parse_go_depth_and_unknown_tokens() {
        let params = go("go ponder depth 4 infinite");
        assert_eq!(params.depth, Some(4));
        assert!(params.infinite);
    }

    #[test]
    fn parse_go_errors() {
        assert!(matches!(
            parse_command("go wtime"),
            Err(UciError::MissingGoValue { .. })
        ));
        assert!(matches!(
            parse_command("go depth abc"),
            Err(UciError::InvalidGoValue { .. })
        ));
    }

    #[test]
    fn parse_setoption_hash() {
        let cmd = parse_command("setoption name Hash value 64").unwrap();
        assert!(matches!(cmd, Command::SetOption(UciOption::Hash(64))));
    }

    #[test]
    fn parse_setoption_other_and_errors() {
        let cmd = parse_command("setoption name Move Overhead value 30").unwrap();
        assert!(matches!(cmd, Command::SetOption(UciOption::Other(name)) if name == "Move Overhead"));

        assert!(matches!(
            parse_command("setoption Hash 64"),
            Err(UciError::MalformedOption)
        ));
        assert!(matches!(
            parse_command("setoption name Hash value lots"),
            Err(UciError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
