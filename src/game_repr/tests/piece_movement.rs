use super::*;

// ==================== KNIGHT / SLIDER TESTS ====================

#[test]
fn test_knight_moves_center() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", 'N');

    let moves = pos.legal_moves(sq("d4"));
    assert_eq!(moves.len(), 8);
    for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        assert!(has_move(&moves, target), "Knight should reach {target}");
    }
}

#[test]
fn test_knight_moves_corner_and_jumps() {
    let pos = Position::default();
    let moves = pos.legal_moves(sq("b1"));
    assert_eq!(moves.len(), 2, "Knight jumps over its own pawns");
    assert!(has_move(&moves, "a3"));
    assert!(has_move(&moves, "c3"));
}

#[test]
fn test_rook_rays_stop_at_blockers() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", 'R');
    place_piece(&mut pos, "d6", 'p');
    place_piece(&mut pos, "f4", 'P');

    let moves = pos.legal_moves(sq("d4"));
    assert!(has_move(&moves, "d5"));
    assert!(has_move(&moves, "d6"), "Rook captures the first enemy piece");
    assert!(!has_move(&moves, "d7"), "Ray stops at the captured piece");
    assert!(has_move(&moves, "e4"));
    assert!(!has_move(&moves, "f4"), "Ray stops before own piece");
    assert!(has_move(&moves, "a4"));
    assert!(has_move(&moves, "d1"));
    assert_eq!(moves.len(), 2 + 1 + 3 + 3);
}

#[test]
fn test_bishop_diagonals() {
    let mut pos = empty_board();
    place_piece(&mut pos, "c1", 'B');

    let moves = pos.legal_moves(sq("c1"));
    assert_eq!(moves.len(), 7);
    assert!(has_move(&moves, "h6"));
    assert!(has_move(&moves, "a3"));
    assert!(!has_move(&moves, "c2"));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", 'Q');

    let moves = pos.legal_moves(sq("d4"));
    assert_eq!(moves.len(), 27);
}

#[test]
fn test_pinned_piece_moves_only_along_pin() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", 'K');
    place_piece(&mut pos, "e4", 'R');
    place_piece(&mut pos, "e8", 'r');

    let moves = pos.legal_moves(sq("e4"));
    assert!(moves.iter().all(|m| m.file() == 4), "Pinned rook stays on the e-file");
    assert!(has_move(&moves, "e8"));
    assert_eq!(moves.len(), 6);

    let mut pos = empty_board();
    place_piece(&mut pos, "e1", 'K');
    place_piece(&mut pos, "e4", 'N');
    place_piece(&mut pos, "e8", 'r');
    assert!(pos.legal_moves(sq("e4")).is_empty(), "Pinned knight cannot move");
}

#[test]
fn test_only_side_to_move_has_moves() {
    let pos = Position::default();
    assert!(pos.legal_moves(sq("e7")).is_empty());
    assert!(pos.legal_moves(sq("e4")).is_empty(), "Empty square has no moves");
    assert_eq!(pos.legal_moves(sq("e2")).len(), 2);
}

#[test]
fn test_initial_position_has_twenty_moves() {
    let pos = Position::default();
    let moves = pos.all_legal_moves();
    assert_eq!(moves.len(), 20);

    let knight_moves = moves
        .iter()
        .filter(|(from, _)| pos.piece_at(*from).map(|p| p.piece_type) == Some(Type::Knight))
        .count();
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_pseudo_legal_ignores_pins() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", 'K');
    place_piece(&mut pos, "e4", 'N');
    place_piece(&mut pos, "e8", 'r');

    assert_eq!(pos.knight_moves(sq("e4")).len(), 8);
    assert_eq!(pos.pseudo_legal_moves(sq("e4")).len(), 8);
    assert!(pos.legal_moves(sq("e4")).is_empty());

    place_piece(&mut pos, "a2", 'P');
    assert_eq!(pos.pawn_moves(sq("a2")).len(), 2);
    assert_eq!(pos.rook_moves(sq("e8")).len(), 11, "Seven along the rank, four down to the knight");
}
