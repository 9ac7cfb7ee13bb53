//! Core chess types and representations
//!
//! This module contains the value types the rules engine works on:
//! - Squares and pieces
//! - Board state and position
//! - FEN encoding
//! - Move values

pub mod board;
pub mod error;
pub mod fen;
pub mod moves;
pub mod piece;
pub mod square;

pub use board::{Board, Castling, CastlingRights, INITIAL_FEN, Position};
pub use error::{FenError, Rejection, SquareError};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
