use super::*;

/// Halfmoves without a pawn move or capture that end the game
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

impl Position {
    /// Returns true if the side to move is checkmated
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.turn) && !self.has_legal_moves()
    }

    /// Returns true if the side to move is stalemated
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.turn) && !self.has_legal_moves()
    }

    /// King vs king, or king and a single minor piece vs a lone king.
    ///
    /// Two knights, or bishops on matching colors, are not treated as dead
    /// positions.
    pub fn is_insufficient_material(&self) -> bool {
        let mut white_pieces: Vec<Type> = Vec::new();
        let mut black_pieces: Vec<Type> = Vec::new();
        for (_, piece) in self.pieces() {
            match piece.color {
                Color::White => white_pieces.push(piece.piece_type),
                Color::Black => black_pieces.push(piece.piece_type),
            }
        }

        let lone = |side: &[Type]| side.len() == 1;
        let king_and_minor = |side: &[Type]| {
            side.len() == 2 && side.iter().any(|t| matches!(t, Type::Bishop | Type::Knight))
        };

        let (white, black) = (white_pieces.as_slice(), black_pieces.as_slice());
        (lone(white) && lone(black))
            || (lone(white) && king_and_minor(black))
            || (lone(black) && king_and_minor(white))
    }

    pub fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
    }
}
