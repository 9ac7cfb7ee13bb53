//! Move enumeration
//!
//! Lists every move the legality engine accepts for the side to move. The
//! list is pseudo-legal in the usual sense: moves that leave the king in
//! check are included, matching `evaluate`.

use super::legality::evaluate;
use crate::core::board::Position;
use crate::core::moves::Move;
use crate::core::square::Square;

/// All moves for the side to move, grouped by source square from a1 up.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    position
        .board()
        .pieces()
        .filter(|(_, piece)| piece.color == position.turn())
        .flat_map(|(from, _)| legal_moves_from(position, from))
        .collect()
}

/// Moves of the piece on `from`. Empty when the square is empty or holds a
/// piece of the side not to move.
pub fn legal_moves_from(position: &Position, from: Square) -> Vec<Move> {
    match position.piece_at(from) {
        Some(piece) if piece.color == position.turn() => Square::all()
            .filter_map(|to| evaluate(position, from, to).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Destination squares of the piece on `from`, for highlighting.
pub fn destinations(position: &Position, from: Square) -> Vec<Square> {
    legal_moves_from(position, from)
        .iter()
        .map(Move::to)
        .collect()
}
