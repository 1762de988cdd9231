use super::MoveList;
use crate::game_repr::attacks::KING_OFFSETS;
use crate::game_repr::{Color, Position, Square, Type};

impl Position {
    pub fn king_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.jump_moves_into(from, &KING_OFFSETS, moves);
        self.castling_moves_into(from, moves);
    }

    pub fn king_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.king_moves_into(from, &mut moves);
        moves
    }

    /// Castling targets (g- and c-file) for a king standing on its home square.
    ///
    /// Requires the right, an own rook on its corner, empty squares between king
    /// and rook, and that none of the king's start, transit and landing squares
    /// is attacked.
    fn castling_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(king) = self.piece_at(from) else {
            return;
        };
        let king_color = king.color;
        let back_rank = king_color.back_rank();

        // Check if king is in its starting position
        if from.rank() != back_rank || from.file() != 4 {
            return;
        }

        let opponent_color = king_color.opposite();
        let square = |file: u8| Square::new(back_rank, file);

        // Try kingside castling
        if self.castling.kingside(king_color) {
            if let (Ok(f), Ok(g), Ok(h)) = (square(5), square(6), square(7)) {
                let squares_empty = self.piece_at(f).is_none() && self.piece_at(g).is_none();
                let rook_present = self.has_rook(h, king_color);
                let king_safe = [from, f, g]
                    .iter()
                    .all(|&sq| !self.is_square_attacked(sq, opponent_color));

                if squares_empty && rook_present && king_safe {
                    moves.push(g);
                }
            }
        }

        // Try queenside castling; b-file must be empty but may be attacked
        if self.castling.queenside(king_color) {
            if let (Ok(a), Ok(b), Ok(c), Ok(d)) = (square(0), square(1), square(2), square(3)) {
                let squares_empty = [b, c, d].iter().all(|&sq| self.piece_at(sq).is_none());
                let rook_present = self.has_rook(a, king_color);
                let king_safe = [from, d, c]
                    .iter()
                    .all(|&sq| !self.is_square_attacked(sq, opponent_color));

                if squares_empty && rook_present && king_safe {
                    moves.push(c);
                }
            }
        }
    }

    fn has_rook(&self, square: Square, color: Color) -> bool {
        self.piece_at(square)
            .is_some_and(|p| p.is_kind(color, Type::Rook))
    }
}
