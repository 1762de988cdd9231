use super::MoveList;
use crate::game_repr::attacks::ROOK_DIRECTIONS;
use crate::game_repr::{Position, Square};

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves_into(from, &ROOK_DIRECTIONS, moves);
    }

    pub fn rook_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.rook_moves_into(from, &mut moves);
        moves
    }
}
