//! FEN (Forsyth-Edwards Notation) codec.
//!
//! Parsing accepts one to six whitespace-separated fields; missing trailing
//! fields take the defaults `w - - 0 1`. Serializing always emits all six
//! fields in canonical form, so `from_fen(to_fen(p)) == p`.

use std::fmt;
use std::str::FromStr;

use super::*;
use crate::error::FenError;

impl Position {
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        if parts.is_empty() {
            return Err(FenError::Empty);
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyFields(parts.len()));
        }

        let board = parse_placement(parts[0])?;

        let turn = match parts.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidTurn(other.to_string())),
        };

        let castling = parse_castling(parts.get(2).copied().unwrap_or("-"))?;

        let en_passant = match parts.get(3).copied().unwrap_or("-") {
            "-" => None,
            field => {
                let target = field
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant(field.to_string()))?;
                if !is_en_passant_consistent(&board, turn, target) {
                    return Err(FenError::InvalidEnPassant(field.to_string()));
                }
                Some(target)
            }
        };

        let halfmove_clock = parse_counter(parts.get(4).copied(), "halfmove clock", 0)?;
        let fullmove_number = parse_counter(parts.get(5).copied(), "fullmove number", 1)?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidCounter {
                field: "fullmove number",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Converts the current position to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = self.board_key();

        fen.push(' ');
        fen.push(self.turn.fen_char());

        // Castling availability, always in KQkq order
        let mut castling = String::new();
        if self.castling.white_kingside {
            castling.push('K');
        }
        if self.castling.white_queenside {
            castling.push('Q');
        }
        if self.castling.black_kingside {
            castling.push('k');
        }
        if self.castling.black_queenside {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push(' ');
        fen.push_str(&castling);

        match self.en_passant {
            Some(sq) => fen.push_str(&format!(" {}", sq)),
            None => fen.push_str(" -"),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Piece-placement field only. This is the key used for repetition counting.
    pub fn board_key(&self) -> String {
        let mut key = String::with_capacity(72);

        for rank in 0..8 {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            key.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        key.push(piece.to_char());
                    }
                }
            }

            if empty_count > 0 {
                key.push_str(&empty_count.to_string());
            }

            if rank < 7 {
                key.push('/');
            }
        }

        key
    }
}

fn parse_placement(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RankCount(rows.len()));
    }

    let mut board = [None; 64];
    for (rank, row) in rows.iter().enumerate() {
        let mut file = 0usize;
        for c in row.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file < 8 {
                        board[rank * 8 + file] = Some(piece);
                    }
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::RankLength { rank: 8 - rank, len: file });
        }
    }

    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }

    let invalid = || FenError::InvalidCastling(field.to_string());
    for c in field.chars() {
        let flag = match c {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => return Err(invalid()),
        };
        if *flag {
            return Err(invalid());
        }
        *flag = true;
    }

    Ok(rights)
}

/// The target must be the empty square a pawn of the side that just moved
/// skipped over: that pawn stands one step ahead of it and its home square
/// is empty.
fn is_en_passant_consistent(board: &[Option<Piece>; 64], turn: Color, target: Square) -> bool {
    let mover = turn.opposite();
    let skipped_rank = mover.pawn_rank() as i8 + mover.forward();
    if target.rank() as i8 != skipped_rank {
        return false;
    }

    let (Some(pawn_square), Some(home)) = (
        target.offset(mover.forward(), 0),
        target.offset(-mover.forward(), 0),
    ) else {
        return false;
    };

    board[target.index()].is_none()
        && board[home.index()].is_none()
        && board[pawn_square.index()] == Some(Piece::new(mover, Type::Pawn))
}

fn parse_counter(field: Option<&str>, name: &'static str, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(value) => value.parse::<u32>().map_err(|_| FenError::InvalidCounter {
            field: name,
            value: value.to_string(),
        }),
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
