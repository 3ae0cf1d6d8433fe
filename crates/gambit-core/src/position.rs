//! The 8x8 position grid.

use std::fmt;

use crate::color::Color;
use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement on an 8x8 board, indexed `[rank][file]`.
///
/// A `Position` is a plain value. Rule operations take it by reference and
/// return new positions; a caller's copy is never modified behind its back.
/// The engine trusts externally supplied positions and only reports a
/// missing king when a query needs it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Position {
        Position {
            squares: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                position.squares[color.home_rank() as usize][file] = Some(Piece::new(color, kind));
            }
            position.squares[color.pawn_start_rank() as usize] =
                [Some(Piece::new(color, PieceKind::Pawn)); 8];
        }
        position
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place `piece` on `sq`, or clear it with `None`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.rank() as usize][sq.file() as usize] = piece;
    }

    /// Return a copy of this position with `piece` placed on `sq`.
    #[must_use]
    pub fn with(mut self, sq: Square, piece: Option<Piece>) -> Position {
        self.set(sq, piece);
        self
    }

    /// Iterate over every occupied square and its piece, in square index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterate over the pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color() == color)
    }

    /// Number of pieces on the board, both colors.
    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }

    /// Return the square of the king for the given side.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::NoKingFound`] if that side has no king.
    pub fn king_square(&self, color: Color) -> Result<Square, RulesError> {
        self.pieces(color)
            .find(|(_, p)| p.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
            .ok_or(RulesError::NoKingFound { color })
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

/// Writes the FEN piece-placement field.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_run = 0;
            for file in 0u8..8 {
                match self.piece_at(Square::at(rank, file)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = self
                    .0
                    .piece_at(Square::at(rank, file))
                    .map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
