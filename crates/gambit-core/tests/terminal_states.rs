//! Integration tests for checkmate, stalemate and insufficient material.

use gambit_core::{
    CastleRights, Color, GameOutcome, Position, Setup, all_legal_moves, is_checkmate, is_in_check,
    is_insufficient_material, is_stalemate, legal_moves, outcome,
};

fn eval(fen: &str) -> GameOutcome {
    let setup: Setup = fen.parse().unwrap();
    outcome(&setup.position, setup.previous.as_ref(), setup.castling, setup.side_to_move).unwrap()
}

// ── Checkmate ─────────────────────────────────────────────────────────────────

#[test]
fn back_rank_mate_has_no_moves_for_any_piece() {
    let setup: Setup = "3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
    let position = setup.position;
    assert!(is_checkmate(&position, None, CastleRights::NONE, Color::Black).unwrap());
    for (from, piece) in position.pieces(Color::Black) {
        let moves = legal_moves(&position, None, CastleRights::NONE, piece, from).unwrap();
        assert!(moves.is_empty(), "{piece:?} on {from} should be stuck");
    }
    assert_eq!(
        eval("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"),
        GameOutcome::Checkmate { winner: Color::White }
    );
}

#[test]
fn scholars_mate() {
    let fen = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
    assert_eq!(eval(fen), GameOutcome::Checkmate { winner: Color::White });
}

#[test]
fn smothered_mate() {
    // Knight f7 mates the king on h8 boxed in by its own rook and pawns.
    let fen = "6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1";
    assert_eq!(eval(fen), GameOutcome::Checkmate { winner: Color::White });
}

#[test]
fn mate_can_be_escaped_by_capture() {
    // Same back-rank pattern, but the black rook on d2 can take on d8.
    let fen = "3R2k1/5ppp/8/8/8/8/3r4/6K1 b - - 0 1";
    assert_eq!(eval(fen), GameOutcome::Check);
}

// ── Stalemate ─────────────────────────────────────────────────────────────────

#[test]
fn stalemate_is_not_check() {
    let setup: Setup = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
    let position = setup.position;
    assert!(!is_in_check(&position, Color::Black).unwrap());
    assert!(is_stalemate(&position, None, CastleRights::NONE, Color::Black).unwrap());
    assert!(!is_checkmate(&position, None, CastleRights::NONE, Color::Black).unwrap());
    assert_eq!(eval("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), GameOutcome::Stalemate);
}

#[test]
fn king_and_pawn_stalemate() {
    // Black king a8 hemmed in by the pawn on a7 and the king on a6.
    let fen = "k7/P7/K7/8/8/8/8/8 b - - 0 1";
    let setup: Setup = fen.parse().unwrap();
    let moves = all_legal_moves(&setup.position, None, CastleRights::NONE, Color::Black).unwrap();
    assert!(moves.is_empty(), "{moves:?}");
    assert_eq!(eval(fen), GameOutcome::Stalemate);
}

// ── Insufficient material ─────────────────────────────────────────────────────

#[test]
fn bare_kings() {
    let position: Position = "8/8/3k4/8/8/3K4/8/8".parse().unwrap();
    assert!(is_insufficient_material(&position));
    assert!(!is_checkmate(&position, None, CastleRights::NONE, Color::White).unwrap());
    assert!(!is_stalemate(&position, None, CastleRights::NONE, Color::White).unwrap());
    assert_eq!(eval("8/8/3k4/8/8/3K4/8/8 w - - 0 1"), GameOutcome::InsufficientMaterial);
}

#[test]
fn opposite_bishops_on_same_shade() {
    // c8 (7+2) and f1 (0+5) are both odd.
    let position: Position = "2b1k3/8/8/8/8/8/8/4KB2".parse().unwrap();
    assert!(is_insufficient_material(&position));
}

#[test]
fn opposite_bishops_on_different_shades() {
    // c8 (7+2) odd, c1 (0+2) even.
    let position: Position = "2b1k3/8/8/8/8/8/8/2B1K3".parse().unwrap();
    assert!(!is_insufficient_material(&position));
    assert_eq!(eval("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1"), GameOutcome::Ongoing);
}

#[test]
fn knight_and_bishop_is_enough_material() {
    let position: Position = "4k3/8/8/8/8/8/8/2B1KN2".parse().unwrap();
    assert!(!is_insufficient_material(&position));
}

#[test]
fn queen_is_enough_material() {
    let position: Position = "4k3/8/8/8/8/8/8/3QK3".parse().unwrap();
    assert!(!is_insufficient_material(&position));
}
