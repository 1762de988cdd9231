use super::*;

impl Position {
    /// Checks that a pseudo-legal move doesn't leave the mover's king attacked.
    ///
    /// The move is tried on a scratch copy; `self` is never touched, so no reader
    /// can see a half-applied move.
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        let Some(moving_piece) = self.piece_at(from) else {
            return false;
        };

        let mut scratch = self.clone();
        scratch.apply_board_effect(from, to, Type::Queen);
        !scratch.is_in_check(moving_piece.color)
    }

    /// Generate legal moves for a piece into a provided buffer.
    /// The buffer is NOT cleared before adding moves.
    pub fn legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        match self.piece_at(from) {
            Some(piece) if piece.color == self.turn => {}
            _ => return,
        }

        let initial_len = moves.len();
        self.pseudo_legal_moves_into(from, moves);

        // Filter out moves that would leave the king in check
        let mut i = moves.len();
        while i > initial_len {
            i -= 1;
            if !self.is_move_legal(from, moves[i]) {
                moves.remove(i);
            }
        }
    }

    /// Legal destinations of the piece on `from`; empty unless it belongs to
    /// the side to move.
    pub fn legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(from, &mut moves);
        moves
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.legal_moves(from).contains(&to)
    }

    /// Every legal `(from, to)` pair for the side to move, in a8..h1 order of origin
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        let mut all_moves = Vec::with_capacity(40); // Typical position has 30-40 legal moves
        let mut buffer = MoveList::new();

        for (from, piece) in self.pieces() {
            if piece.color != self.turn {
                continue;
            }
            buffer.clear();
            self.legal_moves_into(from, &mut buffer);
            all_moves.extend(buffer.iter().map(|&to| (from, to)));
        }

        all_moves
    }

    /// Checks if the side to move has ANY legal move available
    pub fn has_legal_moves(&self) -> bool {
        let mut buffer = MoveList::new();
        self.pieces()
            .filter(|(_, piece)| piece.color == self.turn)
            .any(|(from, _)| {
                buffer.clear();
                self.legal_moves_into(from, &mut buffer);
                !buffer.is_empty()
            })
    }
}
