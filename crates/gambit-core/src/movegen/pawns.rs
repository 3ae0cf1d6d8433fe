//! Pawn move generation: pushes, diagonal captures and en passant.

use crate::chess_move::MoveKind;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::Destination;

/// File steps of the two capture diagonals.
pub(super) const CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Single push onto an empty square, and the double push from the start rank
/// when both squares ahead are empty.
pub(super) fn gen_pushes(
    position: &Position,
    piece: Piece,
    from: Square,
    out: &mut Vec<Destination>,
) {
    let color = piece.color();
    let fwd = color.forward();

    let Some(one) = from.offset(fwd, 0) else {
        return;
    };
    if !position.is_empty_at(one) {
        return;
    }
    out.push(Destination::new(one, MoveKind::Quiet));

    if from.rank() == color.pawn_start_rank()
        && let Some(two) = from.offset(2 * fwd, 0)
        && position.is_empty_at(two)
    {
        out.push(Destination::new(two, MoveKind::DoublePush));
    }
}

/// Forward diagonals holding an enemy piece.
pub(super) fn gen_captures(
    position: &Position,
    piece: Piece,
    from: Square,
    out: &mut Vec<Destination>,
) {
    let fwd = piece.color().forward();
    for df in CAPTURE_FILES {
        let Some(to) = from.offset(fwd, df) else {
            continue;
        };
        if position.color_at(to) == Some(piece.color().flip()) {
            out.push(Destination::new(to, MoveKind::Capture));
        }
    }
}

/// En passant captures, decided by comparing against the previous position.
///
/// The pawn must stand on its en passant rank with an enemy pawn beside it.
/// That enemy pawn must have arrived by a double step in the last move: its
/// start square is empty now, and in `prev` it stood there while the square
/// beside us was empty.
pub(super) fn gen_en_passant(
    position: &Position,
    prev: &Position,
    piece: Piece,
    from: Square,
    out: &mut Vec<Destination>,
) {
    let color = piece.color();
    if from.rank() != color.en_passant_rank() {
        return;
    }
    let fwd = color.forward();
    let enemy_pawn = Piece::new(color.flip(), PieceKind::Pawn);

    for df in CAPTURE_FILES {
        let (Some(beside), Some(landing), Some(start)) = (
            from.offset(0, df),
            from.offset(fwd, df),
            from.offset(2 * fwd, df),
        ) else {
            continue;
        };
        let double_stepped = position.piece_at(beside) == Some(enemy_pawn)
            && position.is_empty_at(landing)
            && position.is_empty_at(start)
            && prev.piece_at(start) == Some(enemy_pawn)
            && prev.is_empty_at(landing)
            && prev.is_empty_at(beside);
        if double_stepped {
            out.push(Destination::new(landing, MoveKind::EnPassant));
        }
    }
}
