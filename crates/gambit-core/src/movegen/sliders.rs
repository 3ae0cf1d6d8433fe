//! Bishop, rook and queen move generation.

use crate::chess_move::MoveKind;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::Destination;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Ray directions for a sliding piece kind; empty for everything else.
pub(super) fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN: [(i8, i8); 8] = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    match kind {
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Queen => &QUEEN,
        _ => &[],
    }
}

/// First occupied square along `dir` from `from` (exclusive), with its piece.
pub(super) fn first_blocker(
    position: &Position,
    from: Square,
    dir: (i8, i8),
) -> Option<(Square, Piece)> {
    let mut sq = from;
    while let Some(next) = sq.offset(dir.0, dir.1) {
        if let Some(piece) = position.piece_at(next) {
            return Some((next, piece));
        }
        sq = next;
    }
    None
}

/// Walk every ray of a sliding piece: empty squares are quiet moves, the
/// first enemy piece is a capture, the first friendly piece ends the ray.
pub(super) fn gen_slider(
    position: &Position,
    piece: Piece,
    from: Square,
    out: &mut Vec<Destination>,
) {
    for &(dr, df) in directions(piece.kind()) {
        let mut sq = from;
        while let Some(next) = sq.offset(dr, df) {
            match position.piece_at(next) {
                None => out.push(Destination::new(next, MoveKind::Quiet)),
                Some(other) => {
                    if other.color() != piece.color() {
                        out.push(Destination::new(next, MoveKind::Capture));
                    }
                    break;
                }
            }
            sq = next;
        }
    }
}
