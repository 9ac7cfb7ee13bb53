//! Core Module Tests
//!
//! Tests for squares, pieces, castling rights and the board map.

use chess_rules::core::board::{Board, Castling, CastlingRights, INITIAL_FEN, Position};
use chess_rules::core::piece::{Color, Piece, PieceType};
use chess_rules::core::square::Square;
use std::collections::HashSet;

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_from_str() {
    assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
    assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
    assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
}

#[test]
fn test_square_rejects_bad_text() {
    for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", "4e", " e4"] {
        assert!(bad.parse::<Square>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn test_square_error_names_the_input() {
    let err = "z9".parse::<Square>().unwrap_err();
    assert!(err.to_string().contains("z9"));
}

#[test]
fn test_square_roundtrip_all() {
    let mut seen = HashSet::new();
    for sq in Square::all() {
        let text = sq.to_string();
        assert_eq!(text.len(), 2);
        assert_eq!(text.parse::<Square>(), Ok(sq));
        assert!(seen.insert(text));
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn test_square_file_rank() {
    let sq = Square::new(4, 3).unwrap();
    assert_eq!(sq, Square::E4);
    assert_eq!(sq.file(), 4);
    assert_eq!(sq.rank(), 3);
    assert_eq!(sq.index(), 28);
    assert_eq!(Square::new(8, 0), None);
    assert_eq!(Square::new(0, 8), None);
}

#[test]
fn test_square_offset() {
    assert_eq!(Square::E4.offset(1, 2), Some(Square::F6));
    assert_eq!(Square::E4.offset(-4, -3), Some(Square::A1));
    assert_eq!(Square::A1.offset(-1, 0), None);
    assert_eq!(Square::H8.offset(0, 1), None);
}

// ============================================================================
// Piece Tests
// ============================================================================

#[test]
fn test_piece_chars() {
    for c in "PNBRQKpnbrqk".chars() {
        let piece = Piece::from_char(c).unwrap();
        assert_eq!(piece.to_char(), c);
        let expected = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        assert_eq!(piece.color, expected);
    }
    assert_eq!(Piece::from_char('x'), None);
    assert_eq!(Piece::from_char('1'), None);
}

#[test]
fn test_piece_classification() {
    let white_pawn = Piece::new(PieceType::Pawn, Color::White);
    let black_king = Piece::new(PieceType::King, Color::Black);
    let queen = Piece::new(PieceType::Queen, Color::White);
    assert!(white_pawn.is_pawn() && !white_pawn.is_king());
    assert!(black_king.is_king() && !black_king.is_pawn());
    assert!(!queen.is_pawn() && !queen.is_king());
}

#[test]
fn test_piece_type_char_roundtrip() {
    let letters: String = PieceType::ALL.iter().map(|t| t.to_char()).collect();
    assert_eq!(letters, "pnbrqk");
    for piece_type in PieceType::ALL {
        let upper = piece_type.to_char().to_ascii_uppercase();
        assert_eq!(PieceType::from_char(upper), Some(piece_type));
        for color in [Color::White, Color::Black] {
            let piece = Piece::new(piece_type, color);
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
        }
    }
}

#[test]
fn test_color_ranks() {
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(Color::White.pawn_start_rank(), 1);
    assert_eq!(Color::Black.pawn_start_rank(), 6);
    assert_eq!(Color::White.promotion_rank(), 7);
    assert_eq!(Color::Black.promotion_rank(), 0);
    assert_eq!(Color::White.en_passant_rank(), 2);
    assert_eq!(Color::Black.en_passant_rank(), 5);
    assert_eq!(Color::White.to_string(), "white");
}

// ============================================================================
// Castling Tests
// ============================================================================

#[test]
fn test_castling_squares() {
    assert_eq!(Castling::king_home(Color::White), Square::E1);
    assert_eq!(Castling::king_home(Color::Black), Square::E8);
    assert_eq!(Castling::KingSide.rook_home(Color::White), Square::H1);
    assert_eq!(Castling::QueenSide.rook_home(Color::Black), Square::A8);
    assert_eq!(
        Castling::for_rook_home(Color::Black, Square::H8),
        Some(Castling::KingSide)
    );
    assert_eq!(Castling::for_rook_home(Color::White, Square::H8), None);
}

#[test]
fn test_castling_rights_fen_field() {
    assert_eq!(CastlingRights::ALL.to_string(), "KQkq");
    assert_eq!(CastlingRights::NONE.to_string(), "-");

    let mut rights = CastlingRights::ALL;
    rights.clear(Color::White, Castling::QueenSide);
    rights.clear(Color::Black, Castling::KingSide);
    assert_eq!(rights.to_string(), "Kq");

    rights.clear_color(Color::White);
    assert!(!rights.has(Color::White, Castling::KingSide));
    assert!(rights.has(Color::Black, Castling::QueenSide));
    assert_eq!(rights.to_string(), "q");
}

// ============================================================================
// Board Tests
// ============================================================================

#[test]
fn test_board_edit() {
    let mut board = Board::empty();
    let knight = Piece::new(PieceType::Knight, Color::White);
    assert!(!board.has(Square::G1));

    board.set(Square::G1, knight);
    assert_eq!(board.get(Square::G1), Some(knight));
    assert_eq!(board.count(), 1);

    assert_eq!(board.remove(Square::G1), Some(knight));
    assert_eq!(board.remove(Square::G1), None);
    assert_eq!(board.count(), 0);
}

#[test]
fn test_board_clone_is_independent() {
    let original = Position::initial().board().clone();
    let mut copy = original.clone();
    copy.remove(Square::E2);
    assert!(original.has(Square::E2));
    assert!(!copy.has(Square::E2));
}

#[test]
fn test_initial_position() {
    let pos = Position::initial();
    assert_eq!(pos.turn(), Color::White);
    assert_eq!(pos.castling(), CastlingRights::ALL);
    assert_eq!(pos.en_passant(), None);
    assert_eq!(pos.halfmove_clock(), 0);
    assert_eq!(pos.fullmove_number(), 1);
    assert_eq!(pos.board().count(), 32);
    assert_eq!(pos.board().king_square(Color::White), Some(Square::E1));
    assert_eq!(pos.board().king_square(Color::Black), Some(Square::E8));
    assert_eq!(pos.to_fen(), INITIAL_FEN);
    assert_eq!(pos, Position::default());
}

#[test]
fn test_position_display() {
    let text = Position::initial().to_string();
    assert!(text.contains("8 r n b q k b n r"));
    assert!(text.contains("a b c d e f g h"));
    assert!(text.contains(INITIAL_FEN));
}
