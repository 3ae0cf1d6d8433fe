//! Perft (performance test) for move generation correctness verification.

use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::RulesError;
use crate::make_move::commit_move;
use crate::movegen::all_legal_moves;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Every promoting move counts
/// once per promotion piece.
///
/// # Errors
///
/// Returns [`RulesError::NoKingFound`] if a side to move has no king.
pub fn perft(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side: Color,
    depth: usize,
) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = all_legal_moves(position, prev, rights, side)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        nodes += child_nodes(position, prev, rights, mv, depth)?;
    }
    Ok(nodes)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
///
/// # Errors
///
/// Same as [`perft`].
pub fn divide(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    side: Color,
    depth: usize,
) -> Result<Vec<(String, u64)>, RulesError> {
    let mut results = Vec::new();
    for mv in all_legal_moves(position, prev, rights, side)? {
        let count = if depth <= 1 { 1 } else { child_nodes(position, prev, rights, mv, depth)? };
        results.push((mv.to_uci(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}

fn child_nodes(
    position: &Position,
    prev: Option<&Position>,
    rights: CastleRights,
    mv: Move,
    depth: usize,
) -> Result<u64, RulesError> {
    let commit = commit_move(position, prev, rights, mv)?;
    perft(
        &commit.position,
        Some(position),
        commit.castling,
        mv.piece().color().flip(),
        depth - 1,
    )
}
