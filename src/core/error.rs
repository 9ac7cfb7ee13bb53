//! Error types
//!
//! Everything here is recoverable: malformed input text or a move the rules
//! do not allow. Caller misuse of the engine's preconditions panics instead.

use super::piece::Piece;
use thiserror::Error;

/// Text that does not name one of the 64 squares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square: {0:?}")]
pub struct SquareError(pub String);

/// Why a FEN string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("piece placement must contain exactly 8 rows, found {0}")]
    RowCount(usize),

    #[error("row for rank {rank} covers {columns} columns, expected 8")]
    RowLength { rank: u8, columns: u32 },

    #[error("piece {piece} on rank {rank} lies beyond the h-file")]
    ColumnOverflow { rank: u8, piece: char },

    #[error("invalid piece character {0:?}")]
    InvalidPiece(char),

    #[error("invalid en passant target {0:?}")]
    InvalidEnPassant(String),

    #[error("invalid half-move clock {0:?}")]
    InvalidHalfMoveClock(String),

    #[error("invalid full-move number {0:?}")]
    InvalidFullMoveNumber(String),
}

/// A move the rules engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("it is not this side's turn")]
    NotYourTurn,

    #[error("cannot capture own piece")]
    CaptureOwnPiece,

    #[error("{0} cannot move that way")]
    InvalidPieceMove(Piece),

    #[error("no piece on the source square")]
    NoPieceAtSource,
}
