//! Move generation and legality.
//!
//! Candidates come from per-piece generators; legality is decided by
//! simulating each candidate and testing the mover's king for attack.

mod castling;
mod check;
mod leapers;
mod pawns;
mod sliders;

use tracing::trace;

use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::color::Color;
use crate::error::RulesError;
use crate::make_move::{apply_move, promotion_required};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

pub use self::check::{is_attacked, is_in_check};

use self::castling::gen_castles;
use self::leapers::gen_leaper;
use self::pawns::{gen_captures, gen_en_passant, gen_pushes};
use self::sliders::gen_slider;

/// A destination square together with the kind of move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    /// The square the piece lands on.
    pub square: Square,
    /// How the move gets there.
    pub kind: MoveKind,
}

impl Destination {
    /// Create a new destination.
    #[inline]
    pub const fn new(square: Square, kind: MoveKind) -> Destination {
        Destination { square, kind }
    }
}

/// Movement-pattern destinations for `piece` on `from`, ignoring self-check.
///
/// Pawns get pushes and diagonal captures; en passant and castling need
/// more context and are only produced by [`legal_destinations`].
pub fn pseudo_moves(position: &Position, piece: Piece, from: Square) -> Vec<Square> {
    pseudo_destinations(position, piece, from)
        .into_iter()
        .map(|d| d.square)
        .collect()
}

fn pseudo_destinations(position: &Position, piece: Piece, from: Square) -> Vec<Destination> {
    let mut out = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => {
            gen_pushes(position, piece, from, &mut out);
            gen_captures(position, piece, from, &mut out);
        }
        PieceKind::Knight | PieceKind::King => gen_leaper(position, piece, from, &mut out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_slider(position, piece, from, &mut out)
        }
    }
    out
}

/// Every candidate for `piece`, special moves included, before the self-check filter.
fn candidates(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    piece: Piece,
    from: Square,
) -> Vec<Destination> {
    let mut out = pseudo_destinations(position, piece, from);
    match piece.kind() {
        PieceKind::Pawn => {
            if let Some(prev) = prev {
                gen_en_passant(position, prev, piece, from, &mut out);
            }
        }
        PieceKind::King => gen_castles(position, rights, piece, from, &mut out),
        _ => {}
    }
    out
}

/// Legal destinations for `piece` on `from`, annotated with their [`MoveKind`].
///
/// `prev` is the position before the opponent's last move and is needed only
/// for en passant; pass `None` when it is unknown.
///
/// # Errors
///
/// Returns [`RulesError::PieceNotOnSquare`] if `piece` is not on `from`, and
/// [`RulesError::NoKingFound`] if the mover has no king.
pub fn legal_destinations(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    piece: Piece,
    from: Square,
) -> Result<Vec<Destination>, RulesError> {
    if position.piece_at(from) != Some(piece) {
        return Err(RulesError::PieceNotOnSquare { piece, square: from });
    }
    let us = piece.color();
    position.king_square(us)?;

    let mut legal = Vec::new();
    for dest in candidates(position, prev, rights, piece, from) {
        let next = apply_move(position, piece, from, dest.square);
        if is_in_check(&next, us)? {
            trace!(%piece, %from, to = %dest.square, "candidate leaves king in check");
            continue;
        }
        legal.push(dest);
    }
    Ok(legal)
}

/// Legal destination squares for `piece` on `from`.
///
/// # Errors
///
/// Same as [`legal_destinations`].
pub fn legal_moves(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    piece: Piece,
    from: Square,
) -> Result<Vec<Square>, RulesError> {
    Ok(legal_destinations(position, prev, rights, piece, from)?
        .into_iter()
        .map(|d| d.square)
        .collect())
}

/// Every legal move for `side`, one entry per promotion piece on promoting moves.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if `side` has no king.
pub fn all_legal_moves(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side: Color,
) -> Result<Vec<Move>, RulesError> {
    position.king_square(side)?;

    let mut moves = Vec::new();
    for (from, piece) in position.pieces(side) {
        for dest in legal_destinations(position, prev, rights, piece, from)? {
            if promotion_required(piece, dest.square) {
                moves.extend(
                    PromotionPiece::ALL
                        .into_iter()
                        .map(|promo| Move::new_promotion(piece, from, dest.square, promo)),
                );
            } else {
                moves.push(Move::new(piece, from, dest.square));
            }
        }
    }
    Ok(moves)
}

/// Return `true` if `side` has at least one legal move.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if `side` has no king.
pub fn has_legal_moves(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side: Color,
) -> Result<bool, RulesError> {
    position.king_square(side)?;
    for (from, piece) in position.pieces(side) {
        if !legal_destinations(position, prev, rights, piece, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
