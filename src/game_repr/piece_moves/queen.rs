use super::MoveList;
use crate::game_repr::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_repr::{Position, Square};

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves_into(from, &BISHOP_DIRECTIONS, moves);
        self.ray_moves_into(from, &ROOK_DIRECTIONS, moves);
    }

    pub fn queen_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.queen_moves_into(from, &mut moves);
        moves
    }
}
