//! Castling candidates.

use crate::castle_rights::{CastleAccess, CastleRights, CastleSide};
use crate::chess_move::MoveKind;
use crate::make_move::apply_move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::Destination;
use super::check::is_attacked;

/// File the king starts on.
const KING_FILE: u8 = 4;

/// Add the two-square king move for every side that may castle right now.
///
/// Requires the king on its home square, not in check, rights for that side,
/// an own rook in the corner, an empty stretch between them, and a king that
/// is safe after each of its one- and two-square steps.
pub(super) fn gen_castles(
    position: &Position,
    rights: CastleRights,
    king: Piece,
    from: Square,
    out: &mut Vec<Destination>,
) {
    let color = king.color();
    let home = color.home_rank();
    let access = rights.access(color);
    if from != Square::at(home, KING_FILE) || access == CastleAccess::None {
        return;
    }
    let them = color.flip();
    if is_attacked(position, from, them) {
        return;
    }

    let rook = Piece::new(color, PieceKind::Rook);
    for side in CastleSide::ALL {
        let rook_home = Square::at(home, side.rook_file());
        if !access.allows(side) || position.piece_at(rook_home) != Some(rook) {
            continue;
        }

        let (lo, hi) = if side.rook_file() < KING_FILE {
            (side.rook_file() + 1, KING_FILE)
        } else {
            (KING_FILE + 1, side.rook_file())
        };
        if (lo..hi).any(|file| !position.is_empty_at(Square::at(home, file))) {
            continue;
        }

        let path = Square::at(home, (KING_FILE as i8 + side.step()) as u8);
        let dest = Square::at(home, side.king_dest_file());
        let safe = [path, dest]
            .into_iter()
            .all(|sq| !is_attacked(&apply_move(position, king, from, sq), sq, them));
        if safe {
            out.push(Destination::new(dest, MoveKind::Castle(side)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str, rights: CastleRights, from: Square) -> Vec<Destination> {
        let position: Position = fen.parse().unwrap();
        let king = position.piece_at(from).unwrap();
        let mut out = Vec::new();
        gen_castles(&position, rights, king, from, &mut out);
        out
    }

    #[test]
    fn both_sides_when_clear() {
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R", CastleRights::ALL, Square::E1);
        assert_eq!(
            out,
            [
                Destination::new(Square::G1, MoveKind::Castle(CastleSide::KingSide)),
                Destination::new(Square::C1, MoveKind::Castle(CastleSide::QueenSide)),
            ]
        );
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R", CastleRights::ALL, Square::E8);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn rights_gate_each_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R", rights, Square::E1);
        assert_eq!(out, [Destination::new(Square::G1, MoveKind::Castle(CastleSide::KingSide))]);
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R", CastleRights::NONE, Square::E1);
        assert!(out.is_empty());
    }

    #[test]
    fn b_file_blocker_stops_queenside_only() {
        let out = castles("4k3/8/8/8/8/8/8/RN2K2R", CastleRights::ALL, Square::E1);
        assert_eq!(out, [Destination::new(Square::G1, MoveKind::Castle(CastleSide::KingSide))]);
    }

    #[test]
    fn missing_rook_stops_castling() {
        let out = castles("4k3/8/8/8/8/8/8/4K2R", CastleRights::ALL, Square::E1);
        assert_eq!(out.len(), 1);
        // An enemy rook in the corner does not count.
        let out = castles("4k3/8/8/8/8/8/8/r3K3", CastleRights::ALL, Square::E1);
        assert!(out.is_empty());
    }

    #[test]
    fn no_castling_out_of_check() {
        let out = castles("4r1k1/8/8/8/8/8/8/R3K2R", CastleRights::ALL, Square::E1);
        assert!(out.is_empty());
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Bishop a6 covers f1.
        let out = castles("4k3/8/b7/8/8/8/8/R3K2R", CastleRights::ALL, Square::E1);
        assert_eq!(out, [Destination::new(Square::C1, MoveKind::Castle(CastleSide::QueenSide))]);
    }

    #[test]
    fn no_castling_into_attacked_square() {
        // Rook g8 covers g1; queenside is untouched.
        let out = castles("4k1r1/8/8/8/8/8/8/R3K2R", CastleRights::ALL, Square::E1);
        assert_eq!(out, [Destination::new(Square::C1, MoveKind::Castle(CastleSide::QueenSide))]);
    }

    #[test]
    fn attacked_b_file_square_does_not_stop_queenside() {
        // Rook b8 covers b1, which the king never crosses.
        let out = castles("1r2k3/8/8/8/8/8/8/R3K3", CastleRights::ALL, Square::E1);
        assert_eq!(out, [Destination::new(Square::C1, MoveKind::Castle(CastleSide::QueenSide))]);
    }

    #[test]
    fn king_off_home_square() {
        let out = castles("4k3/8/8/8/8/8/8/R2K3R", CastleRights::ALL, Square::D1);
        assert!(out.is_empty());
    }
}
