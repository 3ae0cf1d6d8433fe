//! Move representation and destination annotations.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What kind of move reaches a legal destination.
///
/// Annotations are a convenience for rendering; legality does not depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move to an empty square.
    Quiet,
    /// Move onto an enemy piece.
    Capture,
    /// Pawn advancing two squares from its start rank.
    DoublePush,
    /// Pawn capturing a pawn that just passed it.
    EnPassant,
    /// King castling toward the given side.
    Castle(CastleSide),
}

impl MoveKind {
    /// Return `true` if the move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Return the UCI character for this promotion.
    pub const fn uci_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    /// Parse a UCI promotion character (case-insensitive).
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }
}

/// A candidate move: a piece travelling from one square to another.
///
/// A `Move` carries no legality guarantee until it has passed
/// [`commit_move`](crate::commit_move) or come out of the legal move
/// generator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without a promotion choice.
    pub const fn new(piece: Piece, from: Square, to: Square) -> Move {
        Move {
            piece,
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting pawn move.
    pub const fn new_promotion(
        piece: Piece,
        from: Square,
        to: Square,
        promo: PromotionPiece,
    ) -> Move {
        Move {
            piece,
            from,
            to,
            promotion: Some(promo),
        }
    }

    /// Create a move from raw `(rank, file)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::OutOfBounds`] if any coordinate is off the board.
    pub fn from_coords(piece: Piece, from: (i16, i16), to: (i16, i16)) -> Result<Move, RulesError> {
        let from = Square::new(from.0, from.1)?;
        let to = Square::new(to.0, to.1)?;
        Ok(Move::new(piece, from, to))
    }

    /// Return this move with the given promotion choice.
    #[must_use]
    pub fn with_promotion(self, promo: Option<PromotionPiece>) -> Move {
        Move {
            promotion: promo,
            ..self
        }
    }

    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Format as a UCI move string (e.g. "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(promo) = self.promotion {
            s.push(promo.uci_char());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {})", self.piece, self.to_uci())
    }
}
