//! Chess rules engine: position model, move generation, legality and game outcome.
//!
//! Every operation is a pure function over [`Position`] values. The caller
//! keeps the game state (current and previous position, castling rights,
//! side to move) and passes it in.

mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod movegen;
mod notation;
mod outcome;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use castle_rights::{CastleAccess, CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{FenError, RulesError};
pub use fen::{STARTING_FEN, Setup};
pub use make_move::{Commit, RightsUpdate, apply_move, commit_move, promotion_required};
pub use movegen::{
    Destination, all_legal_moves, has_legal_moves, is_attacked, is_in_check, legal_destinations,
    legal_moves, pseudo_moves,
};
pub use notation::notation;
pub use outcome::{GameOutcome, is_checkmate, is_insufficient_material, is_stalemate, outcome};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use square::Square;
