//! Move legality
//!
//! Decides whether a piece may move from one square to another and, if so,
//! builds the fully described `Move`. Legality here is piece movement only:
//! nothing checks whether the mover's king is left, or passes through, check.

use crate::core::board::{Castling, Position};
use crate::core::error::Rejection;
use crate::core::moves::Move;
use crate::core::piece::{Color, Piece, PieceType};
use crate::core::square::Square;

/// How a pawn got to its destination.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PawnMove {
    Push,
    DoublePush,
    Capture,
    EnPassant,
}

/// Check `from -> to` for the side to move.
///
/// Rejections are tried in a fixed order: wrong side to move, then capturing
/// an own piece, then the piece's movement pattern.
///
/// # Panics
///
/// Panics if `from` is empty. Callers only ask about squares holding a piece.
pub fn evaluate(position: &Position, from: Square, to: Square) -> Result<Move, Rejection> {
    let Some(piece) = position.board.get(from) else {
        panic!("evaluate called with no piece at {from}");
    };

    if piece.color != position.turn {
        return Err(Rejection::NotYourTurn);
    }

    let target = position.board.get(to);
    if target.is_some_and(|t| t.color == piece.color) {
        return Err(Rejection::CaptureOwnPiece);
    }

    let mut castling = None;
    let mut is_en_passant = false;

    let valid = match piece.piece_type {
        PieceType::Pawn => match pawn_move(position, from, to, piece.color) {
            Some(kind) => {
                is_en_passant = kind == PawnMove::EnPassant;
                true
            }
            None => false,
        },
        PieceType::Knight => is_knight_move(from, to),
        PieceType::Bishop => is_bishop_move(position, from, to),
        PieceType::Rook => is_rook_move(position, from, to),
        PieceType::Queen => is_bishop_move(position, from, to) || is_rook_move(position, from, to),
        PieceType::King => {
            if is_king_step(from, to) {
                true
            } else {
                castling = castling_move(position, from, to, piece.color);
                castling.is_some()
            }
        }
    };

    if !valid {
        return Err(Rejection::InvalidPieceMove(piece));
    }

    let promotion = (piece.is_pawn() && to.rank() == piece.color.promotion_rank())
        .then(|| Piece::new(PieceType::Queen, piece.color));

    Ok(Move::new(
        from,
        to,
        piece,
        target.is_some() || is_en_passant,
        castling,
        is_en_passant,
        promotion,
    ))
}

/// File and rank distance, both non-negative.
#[inline]
fn deltas(from: Square, to: Square) -> (u8, u8) {
    (from.file().abs_diff(to.file()), from.rank().abs_diff(to.rank()))
}

fn pawn_move(position: &Position, from: Square, to: Square, color: Color) -> Option<PawnMove> {
    let forward = color.forward();
    let rank_step = to.rank() as i8 - from.rank() as i8;
    let (file_diff, _) = deltas(from, to);
    let board = &position.board;

    if file_diff == 0 {
        if rank_step == forward {
            return (!board.has(to)).then_some(PawnMove::Push);
        }
        if from.rank() == color.pawn_start_rank() && rank_step == 2 * forward {
            let clear = !board.has(to) && is_path_clear(position, from, to);
            return clear.then_some(PawnMove::DoublePush);
        }
        return None;
    }

    if file_diff == 1 && rank_step == forward {
        if board.has(to) {
            return Some(PawnMove::Capture);
        }
        // The target is only meaningful on the rank the opponent's double push skipped.
        let en_passant = position
            .en_passant
            .is_some_and(|ep| ep == to && ep.rank() == color.opposite().en_passant_rank());
        return en_passant.then_some(PawnMove::EnPassant);
    }

    None
}

fn is_knight_move(from: Square, to: Square) -> bool {
    matches!(deltas(from, to), (1, 2) | (2, 1))
}

fn is_bishop_move(position: &Position, from: Square, to: Square) -> bool {
    let (file_diff, rank_diff) = deltas(from, to);
    file_diff == rank_diff && is_path_clear(position, from, to)
}

fn is_rook_move(position: &Position, from: Square, to: Square) -> bool {
    (from.file() == to.file() || from.rank() == to.rank()) && is_path_clear(position, from, to)
}

fn is_king_step(from: Square, to: Square) -> bool {
    let (file_diff, rank_diff) = deltas(from, to);
    file_diff <= 1 && rank_diff <= 1
}

/// A two-file king move from its home square, with the right still held,
/// the rook at home and nothing standing between king and rook.
///
/// The right alone is not enough: the own rook must also stand on its home
/// square, since a rook captured there leaves the right set.
fn castling_move(position: &Position, from: Square, to: Square, color: Color) -> Option<Castling> {
    if from != Castling::king_home(color) || to.rank() != color.home_rank() {
        return None;
    }
    let side = Castling::from_king_destination(to.file())?;
    if !position.castling.has(color, side) {
        return None;
    }
    let rook_home = side.rook_home(color);
    if position.board.get(rook_home) != Some(Piece::new(PieceType::Rook, color)) {
        return None;
    }
    is_path_clear(position, from, rook_home).then_some(side)
}

fn is_path_clear(position: &Position, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .into_iter()
        .all(|sq| !position.board.has(sq))
}

/// Squares strictly between `from` and `to` along a rank, file or diagonal.
/// Any other pair of squares has nothing in between.
pub(crate) fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let d_file = to.file() as i8 - from.file() as i8;
    let d_rank = to.rank() as i8 - from.rank() as i8;
    let aligned = d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs();
    if !aligned {
        return Vec::new();
    }

    let step = (d_file.signum(), d_rank.signum());
    let mut squares = Vec::new();
    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            break;
        }
        squares.push(sq);
        current = sq.offset(step.0, step.1);
    }
    squares
}
