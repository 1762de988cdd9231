pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::*;

/// Destination squares for one piece. A queen tops out at 27 targets, so this
/// never spills to the heap.
pub type MoveList = SmallVec<[Square; 32]>;

impl Position {
    /// Generate pseudo-legal destinations for the piece on `from` into a buffer.
    /// The buffer is NOT cleared; moves that leave the own king attacked are kept.
    pub fn pseudo_legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        match self.piece_at(from) {
            Some(Piece { piece_type: Type::Pawn,   .. }) => self.pawn_moves_into(from, moves),
            Some(Piece { piece_type: Type::Knight, .. }) => self.knight_moves_into(from, moves),
            Some(Piece { piece_type: Type::Bishop, .. }) => self.bishop_moves_into(from, moves),
            Some(Piece { piece_type: Type::Rook,   .. }) => self.rook_moves_into(from, moves),
            Some(Piece { piece_type: Type::Queen,  .. }) => self.queen_moves_into(from, moves),
            Some(Piece { piece_type: Type::King,   .. }) => self.king_moves_into(from, moves),
            None => {}
        }
    }

    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_legal_moves_into(from, &mut moves);
        moves
    }

    /// Walk each direction until the edge or the first occupied square, which is
    /// included only when it holds an enemy piece.
    pub(crate) fn ray_moves_into(&self, from: Square, directions: &[(i8, i8)], moves: &mut MoveList) {
        let Some(moving_piece) = self.piece_at(from) else {
            return;
        };

        for &(dr, df) in directions {
            let mut current = from.offset(dr, df);
            while let Some(target) = current {
                match self.piece_at(target) {
                    None => moves.push(target),
                    Some(p) => {
                        if p.color != moving_piece.color {
                            moves.push(target);
                        }
                        break;
                    }
                }
                current = target.offset(dr, df);
            }
        }
    }

    /// Fixed-offset targets (knight, king) that are on the board and not own-occupied.
    pub(crate) fn jump_moves_into(&self, from: Square, offsets: &[(i8, i8)], moves: &mut MoveList) {
        let Some(moving_piece) = self.piece_at(from) else {
            return;
        };

        for &(dr, df) in offsets {
            if let Some(target) = from.offset(dr, df) {
                match self.piece_at(target) {
                    Some(p) if p.color == moving_piece.color => {}
                    _ => moves.push(target),
                }
            }
        }
    }
}
