//! Attack and check detection.

use crate::color::Color;
use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::leapers::{KING_OFFSETS, KNIGHT_OFFSETS};
use super::pawns::CAPTURE_FILES;
use super::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, first_blocker};

/// Return `true` if a piece of `by` could capture on `sq`.
///
/// Patterns are cast backwards from `sq` with the same offsets and rays the
/// move generator uses. Pawns attack only along their capture diagonals; a
/// forward push never attacks. Whatever stands on `sq` itself is ignored.
pub fn is_attacked(position: &Position, sq: Square, by: Color) -> bool {
    // A pawn of `by` attacks `sq` from one rank behind it, as seen from `by`.
    let pawn = Piece::new(by, PieceKind::Pawn);
    let behind = -by.forward();
    if CAPTURE_FILES
        .iter()
        .filter_map(|&df| sq.offset(behind, df))
        .any(|from| position.piece_at(from) == Some(pawn))
    {
        return true;
    }

    let leaps = |offsets: &[(i8, i8)], kind: PieceKind| {
        offsets
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .any(|from| position.piece_at(from) == Some(Piece::new(by, kind)))
    };
    if leaps(&KNIGHT_OFFSETS[..], PieceKind::Knight) || leaps(&KING_OFFSETS[..], PieceKind::King) {
        return true;
    }

    let rays = |dirs: &[(i8, i8)], kind: PieceKind| {
        dirs.iter().any(|&dir| {
            matches!(
                first_blocker(position, sq, dir),
                Some((_, p))
                    if p.color() == by && (p.kind() == kind || p.kind() == PieceKind::Queen)
            )
        })
    };
    rays(&ROOK_DIRECTIONS[..], PieceKind::Rook) || rays(&BISHOP_DIRECTIONS[..], PieceKind::Bishop)
}

/// Return `true` if `side`'s king is attacked by the other side.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if `side` has no king.
pub fn is_in_check(position: &Position, side: Color) -> Result<bool, RulesError> {
    let king_sq = position.king_square(side)?;
    Ok(is_attacked(position, king_sq, side.flip()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_attacks() {
        let position = Position::starting_position();
        // f3 attacked by the g1 knight and the e2/g2 pawns.
        assert!(is_attacked(&position, Square::F3, Color::White));
        assert!(is_attacked(&position, Square::F6, Color::Black));
        assert!(!is_attacked(&position, Square::E4, Color::White));
        assert!(!is_attacked(&position, Square::E5, Color::Black));
        assert!(!is_in_check(&position, Color::White).unwrap());
    }

    #[test]
    fn pawn_push_square_is_not_attacked() {
        // White pawn e2 alone: e3 is a push square, d3/f3 are attacked.
        let position = Position::empty().with(Square::E2, Some(Piece::WHITE_PAWN));
        assert!(!is_attacked(&position, Square::E3, Color::White));
        assert!(is_attacked(&position, Square::D3, Color::White));
        assert!(is_attacked(&position, Square::F3, Color::White));
        // Pawns never attack backwards.
        assert!(!is_attacked(&position, Square::D1, Color::White));
    }

    #[test]
    fn black_pawn_attacks_downward() {
        let position = Position::empty().with(Square::D5, Some(Piece::BLACK_PAWN));
        assert!(is_attacked(&position, Square::C4, Color::Black));
        assert!(is_attacked(&position, Square::E4, Color::Black));
        assert!(!is_attacked(&position, Square::C6, Color::Black));
    }

    #[test]
    fn slider_attack_is_blocked() {
        // Black rook a1, white king e1, white knight c1 between them.
        let position: Position = "4k3/8/8/8/8/8/8/r1N1K3".parse().unwrap();
        assert!(!is_in_check(&position, Color::White).unwrap());
        let open = position.with(Square::C1, None);
        assert!(is_in_check(&open, Color::White).unwrap());
    }

    #[test]
    fn queen_attacks_both_ways() {
        let position: Position = "4k3/8/8/8/8/8/8/q3K3".parse().unwrap();
        assert!(is_attacked(&position, Square::E1, Color::Black));
        assert!(is_attacked(&position, Square::H8, Color::Black));
        assert!(is_attacked(&position, Square::A8, Color::Black));
        assert!(!is_attacked(&position, Square::B3, Color::Black));
    }

    #[test]
    fn knight_and_king_attacks() {
        let position: Position = "8/8/8/8/3n4/8/8/k7".parse().unwrap();
        assert!(is_attacked(&position, Square::E2, Color::Black));
        assert!(is_attacked(&position, Square::C6, Color::Black));
        assert!(is_attacked(&position, Square::B2, Color::Black));
        assert!(!is_attacked(&position, Square::D5, Color::Black));
    }

    #[test]
    fn missing_king_is_an_error() {
        let position = Position::empty().with(Square::E1, Some(Piece::WHITE_KING));
        assert_eq!(
            is_in_check(&position, Color::Black),
            Err(RulesError::NoKingFound { color: Color::Black })
        );
    }
}
