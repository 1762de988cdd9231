use serde::Serialize;

use super::*;

/// An executed move, as recorded in the game history.
///
/// Only the executor creates these; the fields are read-only to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<Type>,
    san: String,
    fen: String,
}

impl Move {
    pub(crate) fn new(
        from: Square,
        to: Square,
        piece: Piece,
        effect: &MoveEffect,
        san: String,
        fen: String,
    ) -> Self {
        Self {
            from,
            to,
            piece,
            captured: effect.captured,
            promotion: effect.promoted,
            san,
            fen,
        }
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece that moved, as it was before the move (a pawn for promotions)
    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn promotion(&self) -> Option<Type> {
        self.promotion
    }

    /// SAN including any `+` / `#` suffix
    pub fn san(&self) -> &str {
        &self.san
    }

    /// FEN of the position after this move
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Coordinate form, e.g. `e7e8q`
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

/// What a move did to the board. Returned by [`Position::mk_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffect {
    pub captured: Option<Piece>,
    pub promoted: Option<Type>,
    pub en_passant: bool,
    pub castling: bool,
}

impl Position {
    /// A pawn moving diagonally onto the en passant target with an enemy pawn
    /// behind it.
    pub fn is_en_passant_capture(&self, from: Square, to: Square) -> bool {
        let Some(pawn) = self.piece_at(from) else {
            return false;
        };
        pawn.piece_type == Type::Pawn
            && self.en_passant == Some(to)
            && from.file() != to.file()
            && self.piece_at(to).is_none()
            && to
                .offset(-pawn.color.forward(), 0)
                .and_then(|behind| self.piece_at(behind))
                .is_some_and(|p| p.is_kind(pawn.color.opposite(), Type::Pawn))
    }

    /// A king moving two files along its rank
    pub fn is_castling_move(&self, from: Square, to: Square) -> bool {
        self.piece_at(from)
            .is_some_and(|p| p.piece_type == Type::King)
            && from.rank() == to.rank()
            && from.file().abs_diff(to.file()) == 2
    }

    /// A pawn reaching its last rank
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        self.piece_at(from)
            .is_some_and(|p| p.piece_type == Type::Pawn && to.rank() == p.color.promotion_rank())
    }

    /// Moves pieces on the board only: the mover (promoted if needed), the
    /// en passant victim, the castling rook. Rights, clocks and turn are untouched.
    pub(crate) fn apply_board_effect(&mut self, from: Square, to: Square, promotion: Type) -> MoveEffect {
        let Some(moving_piece) = self.piece_at(from) else {
            return MoveEffect {
                captured: None,
                promoted: None,
                en_passant: false,
                castling: false,
            };
        };

        let en_passant = self.is_en_passant_capture(from, to);
        let castling = self.is_castling_move(from, to);
        let promoted = self.is_promotion_move(from, to).then(|| {
            if promotion.is_promotion_target() {
                promotion
            } else {
                Type::Queen
            }
        });

        let mut captured = self.piece_at(to);
        if en_passant {
            if let Some(behind) = to.offset(-moving_piece.color.forward(), 0) {
                captured = self.piece_at(behind);
                self.set_piece(behind, None);
            }
        }

        let placed = match promoted {
            Some(kind) => Piece::new(moving_piece.color, kind),
            None => moving_piece,
        };
        self.set_piece(to, Some(placed));
        self.set_piece(from, None);

        if castling {
            let (rook_from_file, rook_to_file) = if to.file() > from.file() { (7, 5) } else { (0, 3) };
            if let (Ok(rook_from), Ok(rook_to)) = (
                Square::new(from.rank(), rook_from_file),
                Square::new(from.rank(), rook_to_file),
            ) {
                let rook = self.piece_at(rook_from);
                self.set_piece(rook_to, rook);
                self.set_piece(rook_from, None);
            }
        }

        MoveEffect {
            captured,
            promoted,
            en_passant,
            castling,
        }
    }

    /// Executes a move without checking legality: board effects, en passant
    /// target, castling rights, clocks and side to move.
    pub fn mk_move(&mut self, from: Square, to: Square, promotion: Type) -> MoveEffect {
        let Some(moving_piece) = self.piece_at(from) else {
            log::warn!("mk_move called on empty square {}", from);
            return MoveEffect {
                captured: None,
                promoted: None,
                en_passant: false,
                castling: false,
            };
        };

        let effect = self.apply_board_effect(from, to, promotion);

        // Only a double step leaves an en passant target behind
        self.en_passant = None;
        if moving_piece.piece_type == Type::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant = from.offset(moving_piece.color.forward(), 0);
        }

        if moving_piece.piece_type == Type::King {
            self.castling.revoke_color(moving_piece.color);
        }
        self.castling.revoke_corner(from);
        self.castling.revoke_corner(to);

        if moving_piece.piece_type == Type::Pawn || effect.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if self.turn == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.turn = self.turn.opposite();

        log::trace!("{}{} -> {}", from, to, self.to_fen());
        effect
    }
}
