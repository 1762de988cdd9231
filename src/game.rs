//! The [`Game`] facade: one position plus the history of how it was reached.
//!
//! Every mutation goes through [`Game::make_move`] (or its text front ends)
//! and [`Game::undo`]. A rejected move returns an error and leaves the game
//! exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{FenError, MoveError};
use crate::game_repr::{Color, Move, MoveList, Position, Square, Type};
use crate::history::History;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl Termination {
    pub fn is_draw(self) -> bool {
        self != Termination::Checkmate
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::FiftyMoveRule => "fifty-move rule",
            Termination::ThreefoldRepetition => "threefold repetition",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
    /// Game still in progress
    #[serde(rename = "none")]
    Ongoing,
}

impl GameResult {
    /// Stored form: `white_win`, `black_win`, `draw` or `none`
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWin => "white_win",
            GameResult::BlackWin => "black_win",
            GameResult::Draw => "draw",
            GameResult::Ongoing => "none",
        }
    }

    /// PGN result token
    pub fn pgn_token(self) -> &'static str {
        match self {
            GameResult::WhiteWin => "1-0",
            GameResult::BlackWin => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A move as it arrives from a client: squares in text form and an optional
/// promotion letter (`q`, `r`, `b`, `n`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<char>,
}

impl MoveRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: char) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

/// Everything a client needs to render the current state of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub fen: String,
    pub turn: Color,
    pub is_game_over: bool,
    pub result: GameResult,
    pub in_check: bool,
    pub king_square: Option<Square>,
    pub termination: Option<Termination>,
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: History,
    default_promotion: Type,
}

impl Game {
    /// A game from the standard starting position
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            history: History::default(),
            default_promotion: Type::Queen,
        }
    }

    pub fn with_config(config: GameConfig) -> Result<Self, FenError> {
        let position = Position::from_fen(&config.fen)?;
        Ok(Self {
            history: History::new(position.clone()),
            position,
            default_promotion: config.default_promotion,
        })
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::with_config(GameConfig::from_fen(fen))
    }

    /// Replaces the position and clears the history. On error the game is
    /// left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let position = Position::from_fen(fen)?;
        log::debug!("loaded position {}", position.to_fen());
        self.history = History::new(position.clone());
        self.position = position;
        Ok(())
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn legal_moves(&self, square: Square) -> MoveList {
        self.position.legal_moves(square)
    }

    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        self.position.all_legal_moves()
    }

    /// Plays a move for the side to move.
    ///
    /// `promotion` falls back to the configured default when the move is a
    /// promotion and no piece is given; it is ignored otherwise.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Type>,
    ) -> Result<Move, MoveError> {
        if let Some(kind) = promotion {
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotion(kind.to_char()));
            }
        }

        let piece = match self.position.piece_at(from) {
            Some(piece) if self.position.is_legal(from, to) => piece,
            _ => {
                log::debug!("rejected {}{} in {}", from, to, self.position.to_fen());
                return Err(MoveError::IllegalMove { from, to });
            }
        };

        let promotion = promotion.unwrap_or(self.default_promotion);
        let before = self.position.clone();
        let mut san = self.position.san(from, to, promotion);
        let effect = self.position.mk_move(from, to, promotion);

        if self.position.is_checkmate() {
            san.push('#');
        } else if self.position.is_in_check(self.position.turn()) {
            san.push('+');
        }

        let record = Move::new(from, to, piece, &effect, san, self.position.to_fen());
        self.history.push(record.clone(), before, self.position.board_key());
        log::debug!("played {} ({})", record.san(), record.uci());

        if let Some(termination) = self.termination() {
            log::info!("game over by {}: {}", termination, self.result());
        }

        Ok(record)
    }

    /// Plays a move given in coordinate form: `e2e4`, `e7e8q`.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(MoveError::Malformed(text.to_string()));
        }

        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = text[4..].chars().next().map(parse_promotion).transpose()?;

        self.make_move(from, to, promotion)
    }

    pub fn apply_request(&mut self, request: &MoveRequest) -> Result<Move, MoveError> {
        let from: Square = request.from.parse()?;
        let to: Square = request.to.parse()?;
        let promotion = request.promotion.map(parse_promotion).transpose()?;

        self.make_move(from, to, promotion)
    }

    /// Takes back the last move, restoring the position it was played from.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let (record, before) = self.history.pop()?;
        self.position = before;
        log::debug!("undid {}", record.san());
        Some(record)
    }

    /// SAN of every move played, in order
    pub fn history(&self) -> Vec<String> {
        self.history.san_list()
    }

    pub fn moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.moves()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn pgn(&self) -> String {
        self.history.pgn()
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.position.is_in_check(color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.position.find_king(color)
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_fifty_move_rule(&self) -> bool {
        self.position.is_fifty_move_rule()
    }

    /// The current piece placement has occurred at least three times,
    /// counting the starting position. Side to move, castling rights and en
    /// passant are not part of the comparison.
    pub fn is_threefold_repetition(&self) -> bool {
        self.history.key_count(&self.position.board_key()) >= 3
    }

    pub fn termination(&self) -> Option<Termination> {
        if !self.position.has_legal_moves() {
            return Some(if self.position.is_in_check(self.position.turn()) {
                Termination::Checkmate
            } else {
                Termination::Stalemate
            });
        }
        if self.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.is_fifty_move_rule() {
            Some(Termination::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(Termination::ThreefoldRepetition)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.termination().is_some_and(Termination::is_draw)
    }

    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }

    pub fn result(&self) -> GameResult {
        match self.termination() {
            None => GameResult::Ongoing,
            Some(Termination::Checkmate) => match self.position.turn() {
                Color::White => GameResult::BlackWin,
                Color::Black => GameResult::WhiteWin,
            },
            Some(_) => GameResult::Draw,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let turn = self.position.turn();
        let termination = self.termination();
        GameSnapshot {
            fen: self.fen(),
            turn,
            is_game_over: termination.is_some(),
            result: self.result(),
            in_check: self.position.is_in_check(turn),
            king_square: self.position.find_king(turn),
            termination,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_promotion(c: char) -> Result<Type, MoveError> {
    Type::from_promotion_char(c).ok_or(MoveError::InvalidPromotion(c))
}
