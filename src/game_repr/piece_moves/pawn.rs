use super::MoveList;
use crate::game_repr::{Position, Square};

impl Position {
    /// Pawn pushes, the double step from the home rank, diagonal captures and
    /// the en passant capture onto `self.en_passant`.
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(pawn) = self.piece_at(from) else {
            return;
        };
        let forward = pawn.color.forward();

        if let Some(one) = from.offset(forward, 0) {
            if self.piece_at(one).is_none() {
                moves.push(one);

                if from.rank() == pawn.color.pawn_rank() {
                    if let Some(two) = one.offset(forward, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(forward, df) else {
                continue;
            };
            let enemy_there = self
                .piece_at(target)
                .is_some_and(|p| p.color != pawn.color);
            if enemy_there || self.en_passant == Some(target) {
                moves.push(target);
            }
        }
    }

    pub fn pawn_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pawn_moves_into(from, &mut moves);
        moves
    }
}
