//! Terminal-state evaluation.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::RulesError;
use crate::movegen::{has_legal_moves, is_in_check};
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The state of the game for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Play continues and the side to move is not in check.
    Ongoing,
    /// Play continues with the side to move in check.
    Check,
    /// The side to move is mated.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side can mate.
    InsufficientMaterial,
}

impl GameOutcome {
    /// Return `true` if no further moves can be played.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameOutcome::Checkmate { .. }
                | GameOutcome::Stalemate
                | GameOutcome::InsufficientMaterial
        )
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => f.write_str("ongoing"),
            GameOutcome::Check => f.write_str("check"),
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            GameOutcome::Stalemate => f.write_str("stalemate"),
            GameOutcome::InsufficientMaterial => f.write_str("draw by insufficient material"),
        }
    }
}

/// Return `true` if `side` is in check and has no legal move.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if `side` has no king.
pub fn is_checkmate(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side: Color,
) -> Result<bool, RulesError> {
    Ok(is_in_check(position, side)? && !has_legal_moves(position, prev, rights, side)?)
}

/// Return `true` if `side` is not in check and has no legal move.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if `side` has no king.
pub fn is_stalemate(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side: Color,
) -> Result<bool, RulesError> {
    Ok(!is_in_check(position, side)? && !has_legal_moves(position, prev, rights, side)?)
}

/// Return `true` if the material on the board cannot deliver mate.
///
/// Covers bare kings, a king and a single minor piece against a king, and
/// one bishop each with both bishops on squares of the same color.
pub fn is_insufficient_material(position: &Position) -> bool {
    let extras: Vec<_> = position
        .occupied()
        .filter(|(_, piece)| piece.kind() != PieceKind::King)
        .collect();

    match (position.piece_count(), extras.as_slice()) {
        (2, []) => true,
        (3, [(_, minor)]) => matches!(minor.kind(), PieceKind::Knight | PieceKind::Bishop),
        (4, [(sq_a, a), (sq_b, b)]) => {
            a.kind() == PieceKind::Bishop
                && b.kind() == PieceKind::Bishop
                && a.color() != b.color()
                && sq_a.parity() == sq_b.parity()
        }
        _ => false,
    }
}

/// Classify the position for `side_to_move`.
///
/// Checked in order: checkmate, stalemate, insufficient material, check.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if `side_to_move` has no king.
pub fn outcome(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side_to_move: Color,
) -> Result<GameOutcome, RulesError> {
    let in_check = is_in_check(position, side_to_move)?;
    let can_move = has_legal_moves(position, prev, rights, side_to_move)?;

    Ok(match (in_check, can_move) {
        (true, false) => GameOutcome::Checkmate {
            winner: side_to_move.flip(),
        },
        (false, false) => GameOutcome::Stalemate,
        _ if is_insufficient_material(position) => GameOutcome::InsufficientMaterial,
        (true, true) => GameOutcome::Check,
        (false, true) => GameOutcome::Ongoing,
    })
}
