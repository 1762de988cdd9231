use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board, white to move, no castling rights
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to parse a square name
pub fn sq(name: &str) -> Square {
    name.parse().expect("test square")
}

/// Helper function to place a piece given its FEN letter
pub fn place_piece(pos: &mut Position, square: &str, piece: char) {
    pos.set_piece(sq(square), Some(Piece::from_char(piece).expect("test piece")));
}

/// Helper function to check if a destination exists in the move list
pub fn has_move(moves: &[Square], to: &str) -> bool {
    moves.contains(&sq(to))
}

/// Helper function to build a position from a FEN that is known to be valid
pub fn fen(text: &str) -> Position {
    Position::from_fen(text).expect("test FEN")
}

/// Plays a sequence of coordinate moves (`e2e4`, `e7e8n`) after checking each is legal
pub fn play(pos: &mut Position, moves: &[&str]) {
    for mv in moves {
        let from = sq(&mv[0..2]);
        let to = sq(&mv[2..4]);
        let promotion = mv
            .chars()
            .nth(4)
            .and_then(Type::from_promotion_char)
            .unwrap_or(Type::Queen);
        assert!(pos.is_legal(from, to), "{mv} should be legal in {}", pos.to_fen());
        pos.mk_move(from, to, promotion);
    }
}

// ==================== TEST MODULES ====================

mod piece_movement;
mod castling;
mod perft;
