//! Game configuration.
//!
//! A [`GameConfig`] carries everything needed to start a [`Game`](crate::game::Game):
//! the starting position and the promotion piece used when a move request
//! does not name one.

use crate::game_repr::{Type, STARTING_FEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// FEN of the starting position
    pub fen: String,
    /// Piece a pawn becomes when no promotion is requested
    pub default_promotion: Type,
}

impl GameConfig {
    /// Standard starting position, promotions default to a queen.
    pub fn standard() -> Self {
        Self {
            fen: STARTING_FEN.to_string(),
            default_promotion: Type::Queen,
        }
    }

    /// Start from an arbitrary position. The FEN is validated when the game
    /// is created, not here.
    pub fn from_fen(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            ..Self::standard()
        }
    }

    /// Set the default promotion piece.
    ///
    /// Only queen, rook, bishop or knight are accepted; anything else keeps
    /// the current default.
    pub fn with_default_promotion(mut self, kind: Type) -> Self {
        if kind.is_promotion_target() {
            self.default_promotion = kind;
        } else {
            log::warn!("ignoring default promotion {:?}", kind);
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
