mod attacks;
mod fen;
mod game_state;
mod legality;
mod moves;
mod perft;
mod piece;
mod position;
mod san;
mod square;
mod piece_moves;

#[cfg(test)]
mod tests;

pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use piece_moves::*;
pub use square::*;
