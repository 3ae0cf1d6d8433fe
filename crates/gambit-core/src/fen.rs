//! FEN parsing and serialization for [`Position`] and [`Setup`].

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses the FEN piece-placement field alone.
impl FromStr for Position {
    type Err = FenError;

    fn from_str(placement: &str) -> Result<Position, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN ranks go from 8 to 1 (top to bottom)
            let rank = 7 - rank_index as u8;
            let mut file: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as u8;
                    if file > 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file as usize,
                        });
                    }
                    continue;
                }

                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file as usize + 1,
                    });
                }
                position.set(Square::at(rank, file), Some(piece));
                file += 1;
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file as usize,
                });
            }
        }
        Ok(position)
    }
}

/// Everything a FEN string says that the rules engine uses.
///
/// The en passant field is turned into a previous position: the current one
/// with the double-pushed pawn back on its start square. The move counters
/// are accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setup {
    /// Piece placement.
    pub position: Position,
    /// The position before the last move, when en passant is possible.
    pub previous: Option<Position>,
    /// The side to move.
    pub side_to_move: Color,
    /// Castling rights of both sides.
    pub castling: CastleRights,
}

impl Setup {
    /// Setup with no en passant history.
    pub const fn new(position: Position, side_to_move: Color, castling: CastleRights) -> Setup {
        Setup {
            position,
            previous: None,
            side_to_move,
            castling,
        }
    }

    /// The square behind a pawn that just advanced two squares, if any.
    pub fn en_passant(&self) -> Option<Square> {
        let prev = self.previous.as_ref()?;
        let mover = self.side_to_move.flip();
        let pawn = Piece::new(mover, PieceKind::Pawn);
        let fwd = mover.forward();

        (0u8..8).find_map(|file| {
            let start = Square::at(mover.pawn_start_rank(), file);
            let pushed = start.offset(2 * fwd, 0)?;
            let double_stepped = prev.piece_at(start) == Some(pawn)
                && self.position.is_empty_at(start)
                && self.position.piece_at(pushed) == Some(pawn);
            if double_stepped { start.offset(fwd, 0) } else { None }
        })
    }
}

impl Default for Setup {
    fn default() -> Setup {
        Setup::new(Position::starting_position(), Color::White, CastleRights::ALL)
    }
}

/// Rebuild the position before a double push that left `target` behind it.
fn previous_from_en_passant(
    position: &Position,
    mover: Color,
    target: &str,
) -> Result<Position, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: target.to_string(),
    };
    let sq = Square::from_algebraic(target).ok_or_else(invalid)?;
    let fwd = mover.forward();
    if sq.rank() as i8 != mover.pawn_start_rank() as i8 + fwd {
        return Err(invalid());
    }

    let pawn = Piece::new(mover, PieceKind::Pawn);
    let (Some(pushed), Some(start)) = (sq.offset(fwd, 0), sq.offset(-fwd, 0)) else {
        return Err(invalid());
    };
    if position.piece_at(pushed) != Some(pawn)
        || !position.is_empty_at(sq)
        || !position.is_empty_at(start)
    {
        return Err(invalid());
    }
    Ok(position.with(pushed, None).with(start, Some(pawn)))
}

impl FromStr for Setup {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Setup, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let position: Position = fields[0].parse()?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let previous = match fields[3] {
            "-" => None,
            target => Some(previous_from_en_passant(&position, side_to_move.flip(), target)?),
        };

        Ok(Setup {
            position,
            previous,
            side_to_move,
            castling,
        })
    }
}

/// Writes all six FEN fields; the counters are always `0 1`.
impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position, self.side_to_move, self.castling.to_fen())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " 0 1")
    }
}
