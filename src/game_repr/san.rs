use super::*;

impl Position {
    /// Standard Algebraic Notation for a legal move, computed from the position
    /// before it is played. Check (`+`) and mate (`#`) suffixes are added by the
    /// caller once the move has been executed.
    pub fn san(&self, from: Square, to: Square, promotion: Type) -> String {
        let Some(piece) = self.piece_at(from) else {
            return String::new();
        };

        if self.is_castling_move(from, to) {
            return if to.file() > from.file() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut san = String::with_capacity(8);
        let is_capture = self.piece_at(to).is_some() || self.is_en_passant_capture(from, to);

        if piece.piece_type == Type::Pawn {
            if is_capture {
                san.push(from.file_char());
            }
        } else {
            san.push(piece.piece_type.san_letter());
            self.push_disambiguation(&mut san, piece, from, to);
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&to.to_string());

        if self.is_promotion_move(from, to) {
            let kind = if promotion.is_promotion_target() {
                promotion
            } else {
                Type::Queen
            };
            san.push('=');
            san.push(kind.san_letter());
        }

        san
    }

    /// File, rank, or both of `from` when another piece of the same kind and
    /// color can also legally reach `to`.
    fn push_disambiguation(&self, san: &mut String, piece: Piece, from: Square, to: Square) {
        let rivals: Vec<Square> = self
            .pieces()
            .filter(|&(sq, p)| sq != from && p == piece)
            .filter(|&(sq, _)| self.is_legal(sq, to))
            .map(|(sq, _)| sq)
            .collect();

        if rivals.is_empty() {
            return;
        }

        let shares_file = rivals.iter().any(|sq| sq.file() == from.file());
        let shares_rank = rivals.iter().any(|sq| sq.rank() == from.rank());

        if !shares_file {
            san.push(from.file_char());
        } else if !shares_rank {
            san.push(from.rank_char());
        } else {
            san.push(from.file_char());
            san.push(from.rank_char());
        }
    }
}
