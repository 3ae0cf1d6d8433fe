//! Knight and king step generation.

use crate::chess_move::MoveKind;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::Destination;

pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Offsets for a leaping piece kind; empty for everything else.
pub(super) fn offsets(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Knight => &KNIGHT_OFFSETS,
        PieceKind::King => &KING_OFFSETS,
        _ => &[],
    }
}

/// Every on-board offset square not held by a friendly piece.
///
/// King steps stop here; castling is added by the castling generator.
pub(super) fn gen_leaper(
    position: &Position,
    piece: Piece,
    from: Square,
    out: &mut Vec<Destination>,
) {
    for &(dr, df) in offsets(piece.kind()) {
        let Some(to) = from.offset(dr, df) else {
            continue;
        };
        match position.piece_at(to) {
            None => out.push(Destination::new(to, MoveKind::Quiet)),
            Some(other) if other.color() != piece.color() => {
                out.push(Destination::new(to, MoveKind::Capture));
            }
            Some(_) => {}
        }
    }
}
