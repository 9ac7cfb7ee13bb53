pub mod core;
pub mod engine;
pub mod uci;

pub use crate::core::{
    Board, Castling, CastlingRights, Color, FenError, INITIAL_FEN, Move, Piece, PieceType,
    Position, Rejection, Square, SquareError,
};
pub use engine::{apply, evaluate, legal_moves};
pub use uci::Uci;
