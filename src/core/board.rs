//! Board state
//!
//! `Board` maps squares to pieces. `Position` bundles a board with the rest
//! of the game state FEN records: side to move, castling rights, en passant
//! target and the two clocks. Positions are values: the engine never edits
//! one in place, it clones the board and returns a new `Position`.

use super::error::{FenError, Rejection};
use super::fen;
use super::moves::Move;
use super::piece::{Color, Piece, PieceType};
use super::square::Square;
use std::fmt;
use std::str::FromStr;

/// Canonical starting position.
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece placement, indexed by square (a1 = 0).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn has(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Remove a piece from the board
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|piece| (Square::from_index(i), piece)))
    }

    pub fn count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }

    /// Get the king square for a color
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceType::King, color);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                match Square::new(file, rank).and_then(|sq| self.get(sq)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", fen::placement(self))
    }
}

/// Which flank a castling move goes to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Castling {
    KingSide,
    QueenSide,
}

impl Castling {
    /// Castling side selected by the king's destination file, if any.
    pub const fn from_king_destination(file: u8) -> Option<Self> {
        match file {
            6 => Some(Castling::KingSide),
            2 => Some(Castling::QueenSide),
            _ => None,
        }
    }

    pub const fn king_to_file(self) -> u8 {
        match self {
            Castling::KingSide => 6,
            Castling::QueenSide => 2,
        }
    }

    pub const fn rook_from_file(self) -> u8 {
        match self {
            Castling::KingSide => 7,
            Castling::QueenSide => 0,
        }
    }

    pub const fn rook_to_file(self) -> u8 {
        match self {
            Castling::KingSide => 5,
            Castling::QueenSide => 3,
        }
    }

    /// Home square of the king for `color`.
    pub fn king_home(color: Color) -> Square {
        Square::at(4, color.home_rank())
    }

    /// Home square of this flank's rook for `color`.
    pub fn rook_home(self, color: Color) -> Square {
        Square::at(self.rook_from_file(), color.home_rank())
    }

    /// Flank whose rook starts on `sq` for `color`.
    pub fn for_rook_home(color: Color, sq: Square) -> Option<Self> {
        [Castling::KingSide, Castling::QueenSide]
            .into_iter()
            .find(|side| side.rook_home(color) == sq)
    }

    pub const fn notation(self) -> &'static str {
        match self {
            Castling::KingSide => "O-O",
            Castling::QueenSide => "O-O-O",
        }
    }
}

/// Castling rights
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub fn has(self, color: Color, side: Castling) -> bool {
        match (color, side) {
            (Color::White, Castling::KingSide) => self.white_king_side,
            (Color::White, Castling::QueenSide) => self.white_queen_side,
            (Color::Black, Castling::KingSide) => self.black_king_side,
            (Color::Black, Castling::QueenSide) => self.black_queen_side,
        }
    }

    /// Rights never come back once cleared.
    pub fn clear(&mut self, color: Color, side: Castling) {
        match (color, side) {
            (Color::White, Castling::KingSide) => self.white_king_side = false,
            (Color::White, Castling::QueenSide) => self.white_queen_side = false,
            (Color::Black, Castling::KingSide) => self.black_king_side = false,
            (Color::Black, Castling::QueenSide) => self.black_queen_side = false,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, Castling::KingSide);
        self.clear(color, Castling::QueenSide);
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for CastlingRights {
    /// FEN castling field: letters in K, Q, k, q order or `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let flags = [
            (self.white_king_side, 'K'),
            (self.white_queen_side, 'Q'),
            (self.black_king_side, 'k'),
            (self.black_queen_side, 'q'),
        ];
        for (set, letter) in flags {
            if set {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Full game state as recorded by FEN.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Assemble a position from its parts.
    ///
    /// A full-move number of 0 is raised to 1.
    pub fn new(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        Position {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number: fullmove_number.max(1),
        }
    }

    /// The standard starting position.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for color in [Color::White, Color::Black] {
            for (file, piece_type) in (0u8..).zip(back_rank) {
                if let Some(sq) = Square::new(file, color.home_rank()) {
                    board.set(sq, Piece::new(piece_type, color));
                }
                if let Some(sq) = Square::new(file, color.pawn_start_rank()) {
                    board.set(sq, Piece::new(PieceType::Pawn, color));
                }
            }
        }
        Position::new(board, Color::White, CastlingRights::ALL, None, 0, 1)
    }

    /// Parse a FEN string. See [`fen::parse`].
    pub fn from_fen(text: &str) -> Result<Self, FenError> {
        fen::parse(text)
    }

    pub fn to_fen(&self) -> String {
        fen::serialize(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Check a move for the side to move.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty. Use [`Position::play`] when the source
    /// square is not known to be occupied.
    pub fn evaluate(&self, from: Square, to: Square) -> Result<Move, Rejection> {
        crate::engine::legality::evaluate(self, from, to)
    }

    /// Produce the successor position. See [`crate::engine::apply::apply`].
    pub fn apply(&self, mv: &Move) -> Position {
        crate::engine::apply::apply(self, mv)
    }

    /// Evaluate and apply in one step, returning the move made alongside the
    /// new position. An empty source square is a rejection here, not a panic.
    pub fn play(&self, from: Square, to: Square) -> Result<(Move, Position), Rejection> {
        if !self.board.has(from) {
            return Err(Rejection::NoPieceAtSource);
        }
        let mv = self.evaluate(from, to)?;
        let next = self.apply(&mv);
        Ok((mv, next))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fen::parse(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        write!(f, "  FEN: {}", self.to_fen())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        fen::parse(&s).map_err(serde::de::Error::custom)
    }
}
