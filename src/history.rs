//! Ordered record of the moves played in a game.
//!
//! Each entry keeps the executed [`Move`] together with the position it was
//! played from, so undo never has to replay the game. Board-only keys (the
//! piece placement field of the FEN) are kept in a parallel list that always
//! starts with the key of the starting position.

use crate::game_repr::{Color, Move, Position};

#[derive(Debug, Clone)]
struct Entry {
    record: Move,
    before: Position,
}

#[derive(Debug, Clone)]
pub struct History {
    start: Position,
    entries: Vec<Entry>,
    keys: Vec<String>,
}

impl History {
    pub fn new(start: Position) -> Self {
        let keys = vec![start.board_key()];
        Self {
            start,
            entries: Vec::new(),
            keys,
        }
    }

    /// Appends an executed move. `before` is the position the move was played
    /// from and `key` the board key of the position it produced.
    pub fn push(&mut self, record: Move, before: Position, key: String) {
        self.entries.push(Entry { record, before });
        self.keys.push(key);
    }

    /// Removes the last move, returning it with the position it was played from
    pub fn pop(&mut self) -> Option<(Move, Position)> {
        let entry = self.entries.pop()?;
        self.keys.pop();
        Some((entry.record, entry.before))
    }

    pub fn moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn last(&self) -> Option<&Move> {
        self.entries.last().map(|entry| &entry.record)
    }

    pub fn san_list(&self) -> Vec<String> {
        self.moves().map(|m| m.san().to_string()).collect()
    }

    /// How many times `key` occurs among the recorded board keys,
    /// starting position included.
    pub fn key_count(&self, key: &str) -> usize {
        self.keys.iter().filter(|k| k.as_str() == key).count()
    }

    /// Numbered move text: `1. e4 e5 2. Nf3`.
    ///
    /// Numbering follows the starting position's fullmove number; a game that
    /// starts with Black to move opens with `<n>... <san>`.
    pub fn pgn(&self) -> String {
        let mut pgn = String::new();
        let mut number = self.start.fullmove_number();
        let mut turn = self.start.turn();

        for (i, record) in self.moves().enumerate() {
            match turn {
                Color::White => {
                    pgn.push_str(&format!("{}. {} ", number, record.san()));
                }
                Color::Black => {
                    if i == 0 {
                        pgn.push_str(&format!("{}... ", number));
                    }
                    pgn.push_str(record.san());
                    pgn.push(' ');
                    number = number.saturating_add(1);
                }
            }
            turn = turn.opposite();
        }

        pgn.trim_end().to_string()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Position::default())
    }
}
