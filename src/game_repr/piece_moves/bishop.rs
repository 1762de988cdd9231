use super::MoveList;
use crate::game_repr::attacks::BISHOP_DIRECTIONS;
use crate::game_repr::{Position, Square};

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves_into(from, &BISHOP_DIRECTIONS, moves);
    }

    pub fn bishop_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new(); // at most 13
        self.bishop_moves_into(from, &mut moves);
        moves
    }
}
