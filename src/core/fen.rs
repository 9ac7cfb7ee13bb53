//! Forsyth-Edwards Notation
//!
//! `parse` is lenient about the trailing fields: missing ones take their
//! starting-position defaults and any turn token other than `w` means black.
//! `validate` and `validate_strict` answer yes/no without building a
//! `Position`, for gating user input.

use super::board::{Board, CastlingRights, Position};
use super::error::FenError;
use super::piece::{Color, Piece};
use super::square::Square;

const DEFAULT_FIELDS: [&str; 5] = ["w", "-", "-", "0", "1"];

/// Parse a FEN string into a position.
///
/// Fields are separated by single spaces; at most six are read.
pub fn parse(fen: &str) -> Result<Position, FenError> {
    let mut fields = fen.split(' ');
    let placement = fields.next().unwrap_or("");
    let mut rest = DEFAULT_FIELDS;
    for (slot, field) in rest.iter_mut().zip(fields) {
        *slot = field;
    }
    let [turn, castling, en_passant, halfmove, fullmove] = rest;

    let board = parse_placement(placement)?;

    let turn = if turn == "w" { Color::White } else { Color::Black };

    let castling = CastlingRights {
        white_king_side: castling.contains('K'),
        white_queen_side: castling.contains('Q'),
        black_king_side: castling.contains('k'),
        black_queen_side: castling.contains('q'),
    };

    let en_passant = match en_passant {
        "-" => None,
        s => Some(
            s.parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant(s.to_string()))?,
        ),
    };

    let halfmove_clock = halfmove
        .parse::<u32>()
        .map_err(|_| FenError::InvalidHalfMoveClock(halfmove.to_string()))?;

    let fullmove_number = fullmove
        .parse::<u32>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| FenError::InvalidFullMoveNumber(fullmove.to_string()))?;

    Ok(Position {
        board,
        turn,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

/// Parse the piece placement field. The first row is rank 8.
fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, rank) in rows.iter().zip((0..8u8).rev()) {
        let mut columns: u32 = 0;
        for c in row.chars() {
            if let Some(empty) = c.to_digit(10) {
                columns += empty;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
            let sq = u8::try_from(columns)
                .ok()
                .and_then(|file| Square::new(file, rank))
                .ok_or(FenError::ColumnOverflow {
                    rank: rank + 1,
                    piece: c,
                })?;
            board.set(sq, piece);
            columns += 1;
        }
        if columns != 8 {
            return Err(FenError::RowLength {
                rank: rank + 1,
                columns,
            });
        }
    }

    Ok(board)
}

/// Render a position as a six-field FEN string.
pub fn serialize(position: &Position) -> String {
    let en_passant = position
        .en_passant
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());
    format!(
        "{} {} {} {} {} {}",
        placement(&position.board),
        position.turn.to_char(),
        position.castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

/// Render just the piece placement field, rank 8 first.
pub fn placement(board: &Board) -> String {
    let mut fen = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match board.get(Square::at(file, rank)) {
                Some(piece) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }
    fen
}

/// Structural check of the placement field only: 8 rows, each covering
/// exactly 8 columns, using only recognised piece letters.
pub fn validate(fen: &str) -> bool {
    let placement = match fen.split(' ').next() {
        Some(p) if !p.is_empty() => p,
        _ => return false,
    };

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return false;
    }

    rows.iter().all(|row| {
        let mut sum = 0;
        for c in row.chars() {
            match c.to_digit(10) {
                Some(n) => sum += n,
                None if Piece::from_char(c).is_some() => sum += 1,
                None => return false,
            }
        }
        sum == 8
    })
}

/// Full input gate: exactly six fields, each in its canonical alphabet.
pub fn validate_strict(fen: &str) -> bool {
    let fields: Vec<&str> = fen.split(' ').collect();
    let [placement, turn, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return false;
    };

    if !validate(placement) {
        return false;
    }
    if !matches!(*turn, "w" | "b") {
        return false;
    }
    if !valid_castling_field(castling) {
        return false;
    }
    if *en_passant != "-" {
        match en_passant.parse::<Square>() {
            Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => {}
            _ => return false,
        }
    }
    let clock_ok = halfmove.parse::<u32>().is_ok();
    let number_ok = fullmove.parse::<u32>().is_ok_and(|n| n >= 1);
    clock_ok && number_ok
}

fn valid_castling_field(field: &str) -> bool {
    if field == "-" {
        return true;
    }
    // Each letter at most once, in K, Q, k, q order.
    let mut order = "KQkq".chars();
    !field.is_empty() && field.chars().all(|c| order.by_ref().any(|k| k == c))
}
