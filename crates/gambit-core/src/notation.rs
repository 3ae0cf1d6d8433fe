//! Short algebraic notation for a move list.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Render `mv`, played from `position`, in short algebraic form.
///
/// `O-O` and `O-O-O` for castling, a piece letter for non-pawns, `x` on
/// captures (pawn captures lead with the origin file), and an `=Q` style
/// suffix on promotion. No check marks and no disambiguation.
pub fn notation(position: &Position, mv: Move) -> String {
    let (piece, from, to) = (mv.piece(), mv.from(), mv.to());

    if piece.kind() == PieceKind::King && from.file().abs_diff(to.file()) > 1 {
        return match CastleSide::from_king_dest(from.file(), to.file()) {
            CastleSide::KingSide => "O-O".to_string(),
            CastleSide::QueenSide => "O-O-O".to_string(),
        };
    }

    let mut out = String::new();
    let is_pawn = piece.kind() == PieceKind::Pawn;
    let capture = !position.is_empty_at(to) || (is_pawn && from.file() != to.file());

    if is_pawn {
        if capture {
            out.push(char::from(b'a' + from.file()));
        }
    } else {
        out.push(piece.kind().fen_char().to_ascii_uppercase());
    }
    if capture {
        out.push('x');
    }
    out.push_str(&to.to_string());
    if let Some(promo) = mv.promotion() {
        out.push('=');
        out.push(promo.to_piece_kind().fen_char().to_ascii_uppercase());
    }
    out
}
