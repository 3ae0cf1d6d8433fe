//! The read-eval-reply loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{
    CastleSide, Destination, GameOutcome, Move, MoveKind, Setup, Square, commit_move,
    legal_destinations, notation, outcome,
};

use crate::command::{Command, MoveText, Setting, parse_command};
use crate::error::CliError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Label each destination printed by `moves` with its move kind.
    pub annotate: bool,
    /// Print the board after every move.
    pub show_board: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            annotate: true,
            show_board: false,
        }
    }
}

/// Plays one local game over a text stream.
///
/// Holds the only mutable game state: the current setup, including the
/// previous position needed for en passant. Replies go to `output`, one
/// line per command; rejected commands are reported and the loop goes on.
pub struct Driver<R, W> {
    input: R,
    output: W,
    setup: Setup,
    config: DriverConfig,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Create a driver at the standard starting setup.
    pub fn new(input: R, output: W) -> Self {
        Self::with_setup(input, output, Setup::default())
    }

    /// Create a driver starting from `setup`.
    pub fn with_setup(input: R, output: W, setup: Setup) -> Self {
        Self {
            input,
            output,
            setup,
            config: DriverConfig::default(),
        }
    }

    /// The current setup.
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// The current configuration.
    pub fn config(&self) -> DriverConfig {
        self.config
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the loop with an error.
    pub fn run(&mut self) -> Result<(), CliError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {}
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(self.output, "error: {e}")?;
                }
            }
        }

        info!("gambit shutting down");
        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, cmd: Command) -> Result<(), CliError> {
        match cmd {
            Command::New => {
                self.setup = Setup::default();
                writeln!(self.output, "ok")?;
            }
            Command::Fen(setup) => {
                self.setup = setup;
                writeln!(self.output, "ok")?;
            }
            Command::Show => self.handle_show()?,
            Command::Moves(square) => self.handle_moves(square)?,
            Command::Play(mv) => self.handle_play(mv)?,
            Command::Outcome => {
                let state = self.current_outcome()?;
                writeln!(self.output, "{state}")?;
            }
            Command::Set(setting) => {
                match setting {
                    Setting::Annotate(on) => self.config.annotate = on,
                    Setting::Board(on) => self.config.show_board = on,
                }
                writeln!(self.output, "ok")?;
            }
            Command::Quit => {}
            Command::Unknown(word) => {
                writeln!(self.output, "error: unknown command '{word}'")?;
            }
        }
        Ok(())
    }

    fn current_outcome(&self) -> Result<GameOutcome, CliError> {
        let s = &self.setup;
        Ok(outcome(&s.position, s.previous.as_ref(), s.castling, s.side_to_move)?)
    }

    fn handle_show(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "{}", self.setup)?;
        writeln!(self.output, "{}", self.setup.position.pretty())?;
        Ok(())
    }

    fn handle_moves(&mut self, square: Square) -> Result<(), CliError> {
        let s = &self.setup;
        let piece = s
            .position
            .piece_at(square)
            .ok_or(CliError::EmptySquare { square })?;
        let dests =
            legal_destinations(&s.position, s.previous.as_ref(), s.castling, piece, square)?;

        if dests.is_empty() {
            writeln!(self.output, "no legal moves")?;
            return Ok(());
        }
        let words: Vec<String> = dests.iter().map(|d| self.render_destination(*d)).collect();
        writeln!(self.output, "{}", words.join(" "))?;
        Ok(())
    }

    fn render_destination(&self, dest: Destination) -> String {
        if self.config.annotate {
            format!("{}:{}", dest.square, kind_label(dest.kind))
        } else {
            dest.square.to_string()
        }
    }

    fn handle_play(&mut self, text: MoveText) -> Result<(), CliError> {
        let state = self.current_outcome()?;
        if state.is_terminal() {
            return Err(CliError::GameOver { outcome: state });
        }

        let s = self.setup;
        let piece = s
            .position
            .piece_at(text.from)
            .ok_or(CliError::EmptySquare { square: text.from })?;
        if piece.color() != s.side_to_move {
            return Err(CliError::WrongSide {
                expected: s.side_to_move,
            });
        }

        let mv = Move::new(piece, text.from, text.to).with_promotion(text.promotion);
        let commit = commit_move(&s.position, s.previous.as_ref(), s.castling, mv)?;
        let san = notation(&s.position, mv);
        info!(%mv, %san, capture = commit.kind.is_capture(), "move played");

        self.setup = Setup {
            position: commit.position,
            previous: Some(s.position),
            side_to_move: s.side_to_move.flip(),
            castling: commit.castling,
        };

        let mut reply = format!("played {san}");
        if let Some(update) = commit.rights_update {
            reply.push_str(&format!("; {} castling {}", update.color.name(), update.access));
        }
        match self.current_outcome()? {
            GameOutcome::Ongoing => {}
            state => reply.push_str(&format!("; {state}")),
        }
        writeln!(self.output, "{reply}")?;

        if self.config.show_board {
            writeln!(self.output, "{}", self.setup.position.pretty())?;
        }
        Ok(())
    }
}

fn kind_label(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Quiet => "quiet",
        MoveKind::Capture => "capture",
        MoveKind::DoublePush => "double-push",
        MoveKind::EnPassant => "en-passant",
        MoveKind::Castle(CastleSide::KingSide) => "castle-kingside",
        MoveKind::Castle(CastleSide::QueenSide) => "castle-queenside",
    }
}
