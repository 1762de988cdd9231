use super::*;

// ==================== CASTLING TESTS ====================

const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_castling_both_sides_available() {
    let pos = fen(CASTLING_FEN);
    let moves = pos.legal_moves(sq("e1"));
    assert!(has_move(&moves, "g1"), "White should castle kingside");
    assert!(has_move(&moves, "c1"), "White should castle queenside");

    let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let moves = pos.legal_moves(sq("e8"));
    assert!(has_move(&moves, "g8"));
    assert!(has_move(&moves, "c8"));
}

#[test]
fn test_castling_kingside_execution() {
    let mut pos = fen(CASTLING_FEN);
    let effect = pos.mk_move(sq("e1"), sq("g1"), Type::Queen);

    assert!(effect.castling);
    assert_eq!(pos.piece_at(sq("g1")), Some(Piece::new(Color::White, Type::King)));
    assert_eq!(pos.piece_at(sq("f1")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(pos.piece_at(sq("h1")), None);
    assert_eq!(pos.piece_at(sq("e1")), None);
    assert!(!pos.castling().white_kingside);
    assert!(!pos.castling().white_queenside);
    assert!(pos.castling().black_kingside);
}

#[test]
fn test_castling_queenside_execution() {
    let mut pos = fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    pos.mk_move(sq("e8"), sq("c8"), Type::Queen);

    assert_eq!(pos.piece_at(sq("c8")), Some(Piece::new(Color::Black, Type::King)));
    assert_eq!(pos.piece_at(sq("d8")), Some(Piece::new(Color::Black, Type::Rook)));
    assert_eq!(pos.piece_at(sq("a8")), None);
    assert_eq!(pos.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
}

#[test]
fn test_no_castling_through_check() {
    // Rook on f8 covers f1
    let pos = fen("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "g1"), "King may not pass through f1");
    assert!(has_move(&moves, "c1"));
}

#[test]
fn test_no_castling_out_of_check() {
    let pos = fen("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "g1"));
    assert!(!has_move(&moves, "c1"));
}

#[test]
fn test_no_castling_into_check() {
    let pos = fen("2r5/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "c1"));
    assert!(has_move(&moves, "g1"));
}

#[test]
fn test_queenside_b_file_attacked_is_allowed() {
    let pos = fen("1r6/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(has_move(&moves, "c1"), "An attacked b1 does not prevent castling");
}

#[test]
fn test_no_castling_with_pieces_between() {
    let pos = fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "g1"));
    assert!(!has_move(&moves, "c1"), "Knight on b1 blocks queenside castling");
}

#[test]
fn test_no_castling_without_rights() {
    let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "g1"));
    assert!(!has_move(&moves, "c1"));
}

#[test]
fn test_no_castling_without_rook() {
    let pos = fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "g1"));
    assert!(!has_move(&moves, "c1"));
}

#[test]
fn test_king_move_revokes_both_rights() {
    let mut pos = fen(CASTLING_FEN);
    play(&mut pos, &["e1f1", "e8d8", "f1e1"]);
    assert!(!pos.castling().white_kingside);
    assert!(!pos.castling().white_queenside);
    assert!(!pos.castling().black_kingside);
    assert!(!pos.castling().black_queenside);

    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, "g1"), "Returning home does not restore castling");
}

#[test]
fn test_rook_move_revokes_one_right() {
    let mut pos = fen(CASTLING_FEN);
    play(&mut pos, &["h1h2"]);
    assert!(!pos.castling().white_kingside);
    assert!(pos.castling().white_queenside);
}

#[test]
fn test_rook_capture_revokes_opponent_right() {
    let mut pos = fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1");
    play(&mut pos, &["g2h1"]);
    assert_eq!(pos.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2b w Qkq - 0 2");
}
