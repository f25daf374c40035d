//! UCI protocol errors.

use penguin_core::FenError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN {fen:?}: {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: FenError,
    },

    /// A move in the `position` command is malformed or illegal in its position.
    #[error("invalid move: {uci_move}")]
    InvalidMove { uci_move: String },

    /// A `go` parameter was given without a value.
    #[error("missing value for go parameter {param}")]
    MissingGoValue { param: String },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value {value:?} for go parameter {param}")]
    InvalidGoValue { param: String, value: String },

    /// A `setoption` command did not follow `setoption name <id> [value <x>]`.
    #[error("malformed setoption command")]
    MalformedOption,

    /// A `setoption` value could not be parsed for its option.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
