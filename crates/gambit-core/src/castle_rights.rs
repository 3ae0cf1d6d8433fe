//! Castling rights stored as a 4-bit field within a `u8`.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File of the rook that castles toward this side.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_dest_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on, adjacent to the king's destination.
    #[inline]
    pub const fn rook_dest_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// File step from the king toward the rook.
    #[inline]
    pub(crate) const fn step(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// The side a two-file king move toward `dest_file` castles to.
    #[inline]
    pub const fn from_king_dest(king_file: u8, dest_file: u8) -> CastleSide {
        if dest_file > king_file {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }
}

/// What one color may still castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleAccess {
    Both,
    KingSideOnly,
    QueenSideOnly,
    None,
}

impl CastleAccess {
    /// Return `true` if castling toward `side` is still allowed.
    #[inline]
    pub const fn allows(self, side: CastleSide) -> bool {
        matches!(
            (self, side),
            (CastleAccess::Both, _)
                | (CastleAccess::KingSideOnly, CastleSide::KingSide)
                | (CastleAccess::QueenSideOnly, CastleSide::QueenSide)
        )
    }
}

impl fmt::Display for CastleAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CastleAccess::Both => "both",
            CastleAccess::KingSideOnly => "kingside",
            CastleAccess::QueenSideOnly => "queenside",
            CastleAccess::None => "none",
        };
        f.write_str(s)
    }
}

/// Castling rights for both colors: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// Rights only ever shrink. A king move clears its color; a rook leaving its
/// home corner clears that side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// White king-side castling.
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    /// White queen-side castling.
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    /// Black king-side castling.
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    /// Black queen-side castling.
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Both white castling rights.
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    /// Both black castling rights.
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether a specific color and side can castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side).0) != 0
    }

    /// Project the rights of one color.
    pub const fn access(self, color: Color) -> CastleAccess {
        match (
            self.has(color, CastleSide::KingSide),
            self.has(color, CastleSide::QueenSide),
        ) {
            (true, true) => CastleAccess::Both,
            (true, false) => CastleAccess::KingSideOnly,
            (false, true) => CastleAccess::QueenSideOnly,
            (false, false) => CastleAccess::None,
        }
    }

    /// Remove all castling rights for the given color.
    #[inline]
    pub const fn remove_color(self, color: Color) -> CastleRights {
        match color {
            Color::White => self.remove(Self::WHITE_BOTH),
            Color::Black => self.remove(Self::BLACK_BOTH),
        }
    }

    /// Rights after `piece` moves away from `from`.
    ///
    /// Only the mover's own rights can change: all of them when the king
    /// moves, one side when a rook leaves its home corner.
    pub fn after_move(self, piece: Piece, from: Square) -> CastleRights {
        let color = piece.color();
        match piece.kind() {
            PieceKind::King => self.remove_color(color),
            PieceKind::Rook if from.rank() == color.home_rank() => {
                match CastleSide::ALL.into_iter().find(|s| s.rook_file() == from.file()) {
                    Some(side) => self.remove(Self::flag(color, side)),
                    None => self,
                }
            }
            _ => self,
        }
    }

    /// Return the single-bit flag for a color and side.
    #[inline]
    const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Parse castling rights from the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.insert(flag);
        }
        Ok(rights)
    }

    /// Serialize castling rights to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        let mut s = String::with_capacity(4);
        for (flag, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.contains(flag) {
                s.push(c);
            }
        }
        s
    }
}

impl Default for CastleRights {
    /// Full rights, as at the start of a game.
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
