//! Move application
//!
//! Turns a position and one of its validated moves into the successor
//! position. The input is never modified: the board is cloned and edited.

use crate::core::board::{Castling, Position};
use crate::core::moves::Move;
use crate::core::piece::{Color, PieceType};
use crate::core::square::Square;

/// Play `mv` on `position`, returning the new position.
///
/// # Panics
///
/// Panics if the board does not hold `mv.piece()` on `mv.from()`, i.e. the
/// move was not produced by evaluating this position.
pub fn apply(position: &Position, mv: &Move) -> Position {
    let from = mv.from();
    let to = mv.to();
    let piece = mv.piece();
    let us = piece.color;

    match position.board.get(from) {
        Some(found) if found == piece => {}
        found => panic!(
            "cannot apply {} ({from}{to}): expected {piece} on {from}, found {}",
            mv.algebraic(),
            found.map_or_else(|| "nothing".to_string(), |p| p.to_string()),
        ),
    }

    let mut board = position.board.clone();
    let mut castling = position.castling;
    let mut halfmove_clock = position.halfmove_clock.saturating_add(1);
    let fullmove_number = match us {
        Color::Black => position.fullmove_number.saturating_add(1),
        Color::White => position.fullmove_number,
    };
    let mut en_passant = None;

    if let Some(side) = mv.castling() {
        let rank = us.home_rank();
        let king_from = Castling::king_home(us);
        let rook_from = side.rook_home(us);
        board.remove(king_from);
        board.set(Square::at(side.king_to_file(), rank), piece);
        if let Some(rook) = board.remove(rook_from) {
            board.set(Square::at(side.rook_to_file(), rank), rook);
        }
        castling.clear_color(us);
        return Position {
            board,
            turn: position.turn.opposite(),
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };
    }

    board.remove(from);
    if mv.is_en_passant() {
        // The captured pawn sits beside the mover, not on the target square.
        board.remove(to.with_rank(from.rank()));
    }
    board.set(to, mv.promotion().unwrap_or(piece));

    match piece.piece_type {
        PieceType::King => castling.clear_color(us),
        PieceType::Rook => {
            if let Some(side) = Castling::for_rook_home(us, from) {
                castling.clear(us, side);
            }
        }
        _ => {}
    }

    if piece.is_pawn() || mv.is_capture() {
        halfmove_clock = 0;
    }

    if piece.is_pawn() && from.rank().abs_diff(to.rank()) == 2 {
        en_passant = to.offset(0, -us.forward());
    }

    Position {
        board,
        turn: position.turn.opposite(),
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    }
}
