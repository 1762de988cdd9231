use rayon::prelude::*;

use super::*;

const PROMOTION_CHOICES: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

impl Position {
    /// Every legal move of the side to move, promotions expanded to all four pieces
    fn expanded_moves(&self) -> Vec<(Square, Square, Type)> {
        let mut moves = Vec::with_capacity(64);
        for (from, to) in self.all_legal_moves() {
            if self.is_promotion_move(from, to) {
                moves.extend(PROMOTION_CHOICES.iter().map(|&kind| (from, to, kind)));
            } else {
                moves.push((from, to, Type::Queen));
            }
        }
        moves
    }

    /// Perft (Performance Test) - counts nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.expanded_moves();

        // Bulk counting at depth 1
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&(from, to, promotion)| {
                let mut child = self.clone();
                child.mk_move(from, to, promotion);
                child.perft(depth - 1)
            })
            .sum()
    }

    /// Same count as [`Position::perft`], with the root moves split across the rayon pool
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.perft(depth);
        }

        self.expanded_moves()
            .par_iter()
            .map(|&(from, to, promotion)| {
                let mut child = self.clone();
                child.mk_move(from, to, promotion);
                child.perft(depth - 1)
            })
            .sum()
    }

    /// Divide - perft count for each first-level move in coordinate notation (debugging tool)
    pub fn divide(&self, depth: u32) -> Vec<(String, u64)> {
        self.expanded_moves()
            .par_iter()
            .map(|&(from, to, promotion)| {
                let mut child = self.clone();
                child.mk_move(from, to, promotion);
                let mut name = format!("{}{}", from, to);
                if self.is_promotion_move(from, to) {
                    name.push(promotion.to_char());
                }
                (name, child.perft(depth.saturating_sub(1)))
            })
            .collect()
    }
}
