//! Move representation
//!
//! A `Move` is a fully described, already validated move. Its fields are
//! private and it has no public constructor: the only way to obtain one is
//! from the legality engine, so the application engine never sees a move the
//! rules have not checked.

use super::board::Castling;
use super::piece::{Color, Piece};
use super::square::Square;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    turn: Color,
    is_capture: bool,
    castling: Option<Castling>,
    is_en_passant: bool,
    promotion: Option<Piece>,
    algebraic: String,
}

impl Move {
    pub(crate) fn new(
        from: Square,
        to: Square,
        piece: Piece,
        is_capture: bool,
        castling: Option<Castling>,
        is_en_passant: bool,
        promotion: Option<Piece>,
    ) -> Self {
        let mut mv = Move {
            from,
            to,
            piece,
            turn: piece.color,
            is_capture,
            castling,
            is_en_passant,
            promotion,
            algebraic: String::new(),
        };
        mv.algebraic = mv.render_algebraic();
        mv
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece as it stood on `from`.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// True for en passant as well, where `to` itself is empty.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.is_capture
    }

    #[inline]
    pub fn castling(&self) -> Option<Castling> {
        self.castling
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    /// Piece placed on `to` instead of the pawn, if promoting.
    #[inline]
    pub fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    pub fn algebraic(&self) -> &str {
        &self.algebraic
    }

    /// Coordinate notation, e.g. "e2e4", "e7e8q".
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(p) => format!("{}{}{}", self.from, self.to, p.piece_type.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    // Castling is O-O / O-O-O. Otherwise: piece letter (none for pawns), the
    // source file for pawn captures, 'x' for captures, destination, "=Q" style
    // promotion suffix. The piece letter keeps its FEN case.
    fn render_algebraic(&self) -> String {
        if let Some(side) = self.castling {
            return side.notation().to_string();
        }

        let mut notation = String::new();
        let is_pawn = self.piece.is_pawn();
        if !is_pawn {
            notation.push(self.piece.to_char());
        }
        if self.is_capture {
            if is_pawn {
                notation.push(self.from.file_char());
            }
            notation.push('x');
        }
        notation.push_str(&self.to.to_string());
        if let Some(promoted) = self.promotion {
            notation.push('=');
            notation.push(promoted.to_char().to_ascii_uppercase());
        }
        notation
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.algebraic)
    }
}
