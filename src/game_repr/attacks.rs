use super::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),   // SSE
    (2, -1),  // SSW
    (1, 2),   // SEE
    (1, -2),  // SWW
    (-1, 2),  // NEE
    (-1, -2), // NWW
    (-2, 1),  // NNE
    (-2, -1), // NNW
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Position {
    /// Checks if a square is under attack by any piece of the given color.
    ///
    /// Pawns attack diagonally forward whether or not the target is occupied,
    /// so this answers "could `by_color` capture here", not "can it move here".
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        let (target_rank, target_file) = (square.rank() as i8, square.file() as i8);

        self.pieces()
            .filter(|(_, piece)| piece.color == by_color)
            .any(|(from, piece)| {
                let dr = target_rank - from.rank() as i8;
                let df = target_file - from.file() as i8;

                match piece.piece_type {
                    Type::Pawn => dr == by_color.forward() && df.abs() == 1,
                    Type::Knight => {
                        (dr.abs() == 2 && df.abs() == 1) || (dr.abs() == 1 && df.abs() == 2)
                    }
                    Type::King => dr.abs() <= 1 && df.abs() <= 1 && (dr, df) != (0, 0),
                    Type::Bishop => {
                        dr != 0 && dr.abs() == df.abs() && self.is_clear_path(from, square)
                    }
                    Type::Rook => {
                        (dr == 0) != (df == 0) && self.is_clear_path(from, square)
                    }
                    Type::Queen => {
                        let straight = (dr == 0) != (df == 0);
                        let diagonal = dr != 0 && dr.abs() == df.abs();
                        (straight || diagonal) && self.is_clear_path(from, square)
                    }
                }
            })
    }

    /// Every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for squares on a shared rank, file, or diagonal.
    pub fn is_clear_path(&self, from: Square, to: Square) -> bool {
        let dr = (to.rank() as i8 - from.rank() as i8).signum();
        let df = (to.file() as i8 - from.file() as i8).signum();

        let mut current = from.offset(dr, df);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if self.piece_at(sq).is_some() {
                return false;
            }
            current = sq.offset(dr, df);
        }
        true
    }

    /// Checks if the king of the given color is currently in check
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_square) => self.is_square_attacked(king_square, color.opposite()),
            None => false,
        }
    }
}
