//! Driver command parsing.

use gambit_core::{PromotionPiece, Setup, Square};

use crate::error::CliError;

/// A move typed in coordinate form, before the moving piece is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Promotion piece, if one was typed.
    pub promotion: Option<PromotionPiece>,
}

/// A driver option changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set annotate on|off` -- label destinations with their move kind.
    Annotate(bool),
    /// `set board on|off` -- print the board after every move.
    Board(bool),
}

/// A parsed driver command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the standard setup.
    New,
    /// `fen <fen-string>` -- start from a FEN setup.
    Fen(Setup),
    /// `show` -- print the current setup.
    Show,
    /// `moves <square>` -- list legal destinations of the piece there.
    Moves(Square),
    /// `play <move>` -- make a move for the side to move.
    Play(MoveText),
    /// `outcome` -- report the game state.
    Outcome,
    /// `set <option> on|off` -- change a driver option.
    Set(Setting),
    /// `quit` -- leave the loop.
    Quit,
    /// Unrecognized command word.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "show" => Ok(Command::Show),
        "outcome" => Ok(Command::Outcome),
        "quit" => Ok(Command::Quit),
        "fen" => {
            if tokens.len() < 2 {
                return Err(missing("fen"));
            }
            Ok(Command::Fen(tokens[1..].join(" ").parse()?))
        }
        "moves" => {
            let arg = tokens.get(1).ok_or_else(|| missing("moves"))?;
            Ok(Command::Moves(parse_square(arg)?))
        }
        "play" => {
            let arg = tokens.get(1).ok_or_else(|| missing("play"))?;
            Ok(Command::Play(parse_move(arg)?))
        }
        "set" => parse_set(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn missing(command: &str) -> CliError {
    CliError::MissingArgument {
        command: command.to_string(),
    }
}

fn parse_square(text: &str) -> Result<Square, CliError> {
    Square::from_algebraic(text).ok_or_else(|| CliError::InvalidSquare {
        found: text.to_string(),
    })
}

/// Parse coordinate move text: `e2e4`, or `e7e8q` with a promotion letter.
fn parse_move(text: &str) -> Result<MoveText, CliError> {
    let invalid = || CliError::InvalidMove {
        text: text.to_string(),
    };
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text[4..].chars().next() {
        Some(c) => Some(PromotionPiece::from_char(c).ok_or_else(invalid)?),
        None => None,
    };
    Ok(MoveText { from, to, promotion })
}

fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let invalid = || CliError::InvalidSetting {
        text: tokens.join(" "),
    };
    let [name, value] = tokens else {
        return Err(invalid());
    };
    let on = match *value {
        "on" => true,
        "off" => false,
        _ => return Err(invalid()),
    };
    match *name {
        "annotate" => Ok(Command::Set(Setting::Annotate(on))),
        "board" => Ok(Command::Set(Setting::Board(on))),
        _ => Err(invalid()),
    }
}
