//! Perft node counts on well-known test positions.

use gambit_core::{Setup, divide, perft};

fn run(fen: &str, depth: usize) -> u64 {
    let setup: Setup = fen.parse().unwrap();
    perft(
        &setup.position,
        setup.previous.as_ref(),
        setup.castling,
        setup.side_to_move,
        depth,
    )
    .unwrap()
}

// --- Position 4: castling rights for black only, promotions on both sides ---

const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

#[test]
fn perft_position4_depth_1() {
    assert_eq!(run(POSITION_4, 1), 6);
}

#[test]
fn perft_position4_depth_2() {
    assert_eq!(run(POSITION_4, 2), 264);
}

#[test]
#[ignore] // slow
fn perft_position4_depth_3() {
    assert_eq!(run(POSITION_4, 3), 9_467);
}

// --- Position 5: underpromotion captures and a discovered check ---

const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn perft_position5_depth_1() {
    assert_eq!(run(POSITION_5, 1), 44);
}

#[test]
fn perft_position5_depth_2() {
    assert_eq!(run(POSITION_5, 2), 1_486);
}

#[test]
fn perft_en_passant_fen() {
    // After 1. e4 the FEN's en passant field has nothing to capture with.
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    assert_eq!(run(fen, 1), 20);
    assert_eq!(run(fen, 2), 600);
}

#[test]
fn divide_position5_counts_each_promotion() {
    let setup: Setup = POSITION_5.parse().unwrap();
    let split = divide(&setup.position, None, setup.castling, setup.side_to_move, 1).unwrap();
    let promotions: Vec<&str> = split
        .iter()
        .map(|(uci, _)| uci.as_str())
        .filter(|uci| uci.starts_with("d7c8"))
        .collect();
    assert_eq!(promotions, ["d7c8b", "d7c8n", "d7c8q", "d7c8r"]);
}
