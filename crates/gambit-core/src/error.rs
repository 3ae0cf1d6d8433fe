//! Error types for rule queries, move commits and setup parsing.

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Errors reported by rule queries and move commits.
///
/// Every variant is local to the query that produced it; the input position
/// is never modified, so retrying with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A raw coordinate lies outside the 8x8 board.
    #[error("square ({rank}, {file}) is outside the board")]
    OutOfBounds {
        /// The rank that was supplied.
        rank: i16,
        /// The file that was supplied.
        file: i16,
    },
    /// Text that does not name a square at all.
    #[error("invalid square name \"{found}\"")]
    InvalidSquareName {
        /// The text that was supplied.
        found: String,
    },
    /// The position has no king for a side that needs one.
    #[error("no {} king on the board", color.name())]
    NoKingFound {
        /// The side whose king is missing.
        color: Color,
    },
    /// The piece named by a query does not stand on the named square.
    #[error("no {piece} on {square}")]
    PieceNotOnSquare {
        /// The piece the caller expected.
        piece: Piece,
        /// The square it was expected on.
        square: Square,
    },
    /// The requested move is not among the legal moves of that piece.
    #[error("illegal move {from}{to}")]
    IllegalMoveRequested {
        /// Origin square of the rejected move.
        from: Square,
        /// Destination square of the rejected move.
        to: Square,
    },
    /// A pawn reaches its last rank but no promotion piece was chosen.
    #[error("move to {to} requires a promotion piece")]
    PromotionRequired {
        /// The promotion square.
        to: Square,
    },
    /// A promotion piece was supplied for a move that does not promote.
    #[error("move to {to} does not promote")]
    UnexpectedPromotion {
        /// The destination of the non-promoting move.
        to: Square,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string has fewer than 4 or more than 6 space-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in FEN order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square behind a double-pushed pawn.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, RulesError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn rules_error_display() {
        let err = RulesError::NoKingFound { color: Color::Black };
        assert_eq!(format!("{err}"), "no black king on the board");

        let err = RulesError::IllegalMoveRequested {
            from: Square::E2,
            to: Square::E5,
        };
        assert_eq!(format!("{err}"), "illegal move e2e5");

        let err = RulesError::OutOfBounds { rank: 8, file: -1 };
        assert_eq!(format!("{err}"), "square (8, -1) is outside the board");

        let err = RulesError::InvalidSquareName { found: "e".to_string() };
        assert_eq!(format!("{err}"), "invalid square name \"e\"");
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert_eq!(format!("{err}"), "expected 4 to 6 FEN fields, found 2");
    }
}
