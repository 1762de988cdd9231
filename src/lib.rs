pub mod config;
pub mod error;
pub mod game;
pub mod game_repr;
pub mod history;

pub use config::GameConfig;
pub use error::{FenError, MoveError, SquareError};
pub use game::{Game, GameResult, GameSnapshot, MoveRequest, Termination};
pub use game_repr::{Color, Move, Piece, Position, Square, Type, STARTING_FEN};
