//! Driver errors.

use gambit_core::{Color, FenError, GameOutcome, RulesError, Square};

/// Errors that can occur while reading or executing a driver command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command needs an argument that was not given.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command word.
        command: String,
    },

    /// A square argument is not algebraic text like `e4`.
    #[error("invalid square: {found}")]
    InvalidSquare {
        /// The text that failed to parse.
        found: String,
    },

    /// A move argument is not coordinate text like `e2e4` or `e7e8q`.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The text that failed to parse.
        text: String,
    },

    /// A `set` command names an unknown option or value.
    #[error("invalid setting: {text}")]
    InvalidSetting {
        /// The rest of the `set` line.
        text: String,
    },

    /// The origin square of a move is empty.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty square.
        square: Square,
    },

    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {}'s turn", expected.name())]
    WrongSide {
        /// The side to move.
        expected: Color,
    },

    /// The game has already ended.
    #[error("game over: {outcome}")]
    GameOver {
        /// How it ended.
        outcome: GameOutcome,
    },

    /// A rules query or move commit was rejected.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// A FEN string failed to parse.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),

    /// An I/O error occurred while reading input or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
