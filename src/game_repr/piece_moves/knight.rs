use super::MoveList;
use crate::game_repr::attacks::KNIGHT_OFFSETS;
use crate::game_repr::{Position, Square};

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.jump_moves_into(from, &KNIGHT_OFFSETS, moves);
    }

    pub fn knight_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new(); // Knights have max 8 moves
        self.knight_moves_into(from, &mut moves);
        moves
    }
}
