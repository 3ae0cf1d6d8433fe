//! Move execution via copy-make, and the commit protocol on top of it.

use tracing::debug;

use crate::castle_rights::{CastleAccess, CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::RulesError;
use crate::movegen::legal_destinations;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Move `piece` from `from` to `to` and return the resulting position.
///
/// No legality checks. A king moving more than one file also moves the
/// rook of that side; a pawn moving diagonally onto an empty square removes
/// the pawn it passed. Promotion is not applied: the pawn lands as a pawn.
#[must_use]
pub fn apply_move(position: &Position, piece: Piece, from: Square, to: Square) -> Position {
    let mut next = *position;
    next.set(from, None);
    next.set(to, Some(piece));

    match piece.kind() {
        PieceKind::King if from.file().abs_diff(to.file()) > 1 => {
            let side = CastleSide::from_king_dest(from.file(), to.file());
            let rank = from.rank();
            let rook_from = Square::at(rank, side.rook_file());
            let rook = Piece::new(piece.color(), PieceKind::Rook);
            if next.piece_at(rook_from) == Some(rook) {
                next.set(rook_from, None);
                next.set(Square::at(rank, side.rook_dest_file()), Some(rook));
            }
        }
        PieceKind::Pawn if from.file() != to.file() && position.is_empty_at(to) => {
            next.set(Square::at(from.rank(), to.file()), None);
        }
        _ => {}
    }
    next
}

/// Return `true` if `piece` landing on `to` must promote.
#[inline]
pub fn promotion_required(piece: Piece, to: Square) -> bool {
    piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank()
}

/// Castling access of one color after a commit that may have changed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightsUpdate {
    /// The color whose rights were re-evaluated.
    pub color: Color,
    /// That color's access after the move.
    pub access: CastleAccess,
}

/// The result of a successful [`commit_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// The position after the move, with any promotion applied.
    pub position: Position,
    /// Castling rights after the move.
    pub castling: CastleRights,
    /// Present when the mover was a king, or a rook leaving its home corner.
    pub rights_update: Option<RightsUpdate>,
    /// How the move was made.
    pub kind: MoveKind,
}

/// Validate `mv` against the legal moves of its piece and execute it.
///
/// `prev` is the position before the opponent's last move, for en passant.
///
/// # Errors
///
/// - [`RulesError::PieceNotOnSquare`] if the piece is not on the origin.
/// - [`RulesError::NoKingFound`] if the mover has no king.
/// - [`RulesError::IllegalMoveRequested`] if the destination is not legal.
/// - [`RulesError::PromotionRequired`] if a pawn reaches its last rank
///   without a promotion piece.
/// - [`RulesError::UnexpectedPromotion`] if a promotion piece is given for
///   a move that does not promote.
pub fn commit_move(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    mv: Move,
) -> Result<Commit, RulesError> {
    let (piece, from, to) = (mv.piece(), mv.from(), mv.to());

    let legal = legal_destinations(position, prev, rights, piece, from).inspect_err(|e| {
        debug!(%mv, error = %e, "commit rejected");
    })?;
    let Some(dest) = legal.into_iter().find(|d| d.square == to) else {
        debug!(%mv, "commit rejected: destination not legal");
        return Err(RulesError::IllegalMoveRequested { from, to });
    };

    let landed = match (promotion_required(piece, to), mv.promotion()) {
        (true, Some(promo)) => Piece::new(piece.color(), promo.to_piece_kind()),
        (true, None) => {
            debug!(%mv, "commit rejected: promotion piece missing");
            return Err(RulesError::PromotionRequired { to });
        }
        (false, Some(_)) => {
            debug!(%mv, "commit rejected: move does not promote");
            return Err(RulesError::UnexpectedPromotion { to });
        }
        (false, None) => piece,
    };

    let mut next = apply_move(position, piece, from, to);
    if landed != piece {
        next.set(to, Some(landed));
    }

    let color = piece.color();
    let castling = rights.after_move(piece, from);
    let touches_rights = match piece.kind() {
        PieceKind::King => true,
        PieceKind::Rook => {
            from.rank() == color.home_rank()
                && CastleSide::ALL.iter().any(|s| s.rook_file() == from.file())
        }
        _ => false,
    };
    let rights_update = touches_rights.then(|| RightsUpdate {
        color,
        access: castling.access(color),
    });

    debug!(%mv, kind = ?dest.kind, castling = %castling, "move committed");
    Ok(Commit {
        position: next,
        castling,
        rights_update,
        kind: dest.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::PromotionPiece;

    #[test]
    fn apply_plain_move() {
        let position = Position::starting_position();
        let next = apply_move(&position, Piece::WHITE_PAWN, Square::E2, Square::E4);
        assert_eq!(next.piece_at(Square::E2), None);
        assert_eq!(next.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(next.piece_count(), 32);
        // Input untouched.
        assert_eq!(position.piece_at(Square::E2), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn apply_castling_moves_rook() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let next = apply_move(&position, Piece::WHITE_KING, Square::E1, Square::G1);
        assert_eq!(next.to_string(), "r3k2r/8/8/8/8/8/8/R4RK1");
        let next = apply_move(&position, Piece::BLACK_KING, Square::E8, Square::C8);
        assert_eq!(next.to_string(), "2kr3r/8/8/8/8/8/8/R3K2R");
    }

    #[test]
    fn apply_king_leap_without_rook_keeps_other_pieces() {
        let position: Position = "4k3/8/8/8/8/8/8/4KB2".parse().unwrap();
        let next = apply_move(&position, Piece::WHITE_KING, Square::E1, Square::G1);
        assert_eq!(next.piece_at(Square::F1), Some(Piece::WHITE_BISHOP));
        assert_eq!(next.to_string(), "4k3/8/8/8/8/8/8/5BK1");

        // An enemy rook in the corner stays where it is.
        let position: Position = "4k3/8/8/8/8/8/8/4K2r".parse().unwrap();
        let next = apply_move(&position, Piece::WHITE_KING, Square::E1, Square::G1);
        assert_eq!(next.to_string(), "4k3/8/8/8/8/8/8/6Kr");
    }

    #[test]
    fn apply_en_passant_removes_passed_pawn() {
        let position: Position = "8/8/8/3pP3/8/8/8/8".parse().unwrap();
        let next = apply_move(&position, Piece::WHITE_PAWN, Square::E5, Square::D6);
        assert_eq!(next.to_string(), "8/8/3P4/8/8/8/8/8");
    }

    #[test]
    fn apply_diagonal_capture_keeps_neighbours() {
        let position: Position = "8/8/3n4/3pP3/8/8/8/8".parse().unwrap();
        let next = apply_move(&position, Piece::WHITE_PAWN, Square::E5, Square::D6);
        assert_eq!(next.piece_at(Square::D5), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn promotion_rank_per_color() {
        assert!(promotion_required(Piece::WHITE_PAWN, Square::A8));
        assert!(!promotion_required(Piece::WHITE_PAWN, Square::A7));
        assert!(promotion_required(Piece::BLACK_PAWN, Square::H1));
        assert!(!promotion_required(Piece::WHITE_ROOK, Square::A8));
    }

    #[test]
    fn commit_double_push() {
        let position = Position::starting_position();
        let commit = commit_move(
            &position,
            None,
            CastleRights::ALL,
            Move::new(Piece::WHITE_PAWN, Square::E2, Square::E4),
        )
        .unwrap();
        assert_eq!(commit.kind, MoveKind::DoublePush);
        assert_eq!(commit.castling, CastleRights::ALL);
        assert_eq!(commit.rights_update, None);
    }

    #[test]
    fn commit_illegal_destination() {
        let position = Position::starting_position();
        let err = commit_move(
            &position,
            None,
            CastleRights::ALL,
            Move::new(Piece::WHITE_PAWN, Square::E2, Square::E5),
        );
        assert_eq!(
            err,
            Err(RulesError::IllegalMoveRequested {
                from: Square::E2,
                to: Square::E5,
            })
        );
    }

    #[test]
    fn commit_king_move_clears_rights() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let commit = commit_move(
            &position,
            None,
            CastleRights::ALL,
            Move::new(Piece::WHITE_KING, Square::E1, Square::G1),
        )
        .unwrap();
        assert_eq!(commit.kind, MoveKind::Castle(CastleSide::KingSide));
        assert_eq!(commit.position.to_string(), "r3k2r/8/8/8/8/8/8/R4RK1");
        assert_eq!(commit.castling, CastleRights::BLACK_BOTH);
        assert_eq!(
            commit.rights_update,
            Some(RightsUpdate {
                color: Color::White,
                access: CastleAccess::None,
            })
        );
    }

    #[test]
    fn commit_rook_move_clears_one_side() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let commit = commit_move(
            &position,
            None,
            CastleRights::ALL,
            Move::new(Piece::BLACK_ROOK, Square::A8, Square::B8),
        )
        .unwrap();
        assert_eq!(
            commit.rights_update,
            Some(RightsUpdate {
                color: Color::Black,
                access: CastleAccess::KingSideOnly,
            })
        );
        assert!(commit.castling.has(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn commit_promotion_protocol() {
        let position: Position = "7k/P7/8/8/8/8/8/K7".parse().unwrap();
        let push = Move::new(Piece::WHITE_PAWN, Square::A7, Square::A8);

        assert_eq!(
            commit_move(&position, None, CastleRights::NONE, push),
            Err(RulesError::PromotionRequired { to: Square::A8 })
        );

        let commit = commit_move(
            &position,
            None,
            CastleRights::NONE,
            push.with_promotion(Some(PromotionPiece::Knight)),
        )
        .unwrap();
        assert_eq!(commit.position.piece_at(Square::A8), Some(Piece::WHITE_KNIGHT));
        assert_eq!(commit.position.piece_at(Square::A7), None);
    }

    #[test]
    fn commit_rejects_unneeded_promotion() {
        let position = Position::starting_position();
        let mv =
            Move::new_promotion(Piece::WHITE_PAWN, Square::E2, Square::E3, PromotionPiece::Queen);
        assert_eq!(
            commit_move(&position, None, CastleRights::ALL, mv),
            Err(RulesError::UnexpectedPromotion { to: Square::E3 })
        );
    }

    #[test]
    fn commit_en_passant() {
        let prev: Position = "4k3/8/8/8/5p2/8/6P1/4K3".parse().unwrap();
        let position: Position = "4k3/8/8/8/5pP1/8/8/4K3".parse().unwrap();
        let commit = commit_move(
            &position,
            Some(&prev),
            CastleRights::NONE,
            Move::new(Piece::BLACK_PAWN, Square::F4, Square::G3),
        )
        .unwrap();
        assert_eq!(commit.kind, MoveKind::EnPassant);
        assert_eq!(commit.position.to_string(), "4k3/8/8/8/8/6p1/8/4K3");
    }
}
