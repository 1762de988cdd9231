//! Error types for the rules engine.
//!
//! Parse failures ([`FenError`], [`SquareError`]) are fatal to the call that
//! asked for them. [`MoveError`] is routine control flow: the engine rejects
//! illegal requests from untrusted clients without changing any state.

use thiserror::Error;

use crate::game_repr::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square coordinates out of board: rank {rank}, file {file}")]
    OutOfBoard { rank: u8, file: u8 },

    #[error("malformed square: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("empty FEN string")]
    Empty,

    #[error("expected at most 6 fields, found {0}")]
    TooManyFields(usize),

    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} expands to {len} squares instead of 8")]
    RankLength { rank: usize, len: usize },

    #[error("invalid character {0:?} in piece placement")]
    InvalidPiece(char),

    #[error("invalid side to move {0:?}")]
    InvalidTurn(String),

    #[error("invalid castling field {0:?}")]
    InvalidCastling(String),

    #[error("invalid en passant field {0:?}")]
    InvalidEnPassant(String),

    #[error("invalid {field} value {value:?}")]
    InvalidCounter { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("invalid promotion piece {0:?}")]
    InvalidPromotion(char),

    #[error("malformed move {0:?}")]
    Malformed(String),
}
