use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SquareError;

/// A board coordinate.
///
/// Internally a 0..64 index `rank * 8 + file` where rank 0 is the eighth rank
/// (the top row of a FEN placement string) and file 0 is the a-file.
/// The text form (`"e4"`) is the only external representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    pub fn new(rank: u8, file: u8) -> Result<Self, SquareError> {
        if rank < 8 && file < 8 {
            Ok(Self(rank * 8 + file))
        } else {
            Err(SquareError::OutOfBoard { rank, file })
        }
    }

    /// Signed-coordinate constructor used by ray and offset walks.
    pub fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Index in 0..64
    pub fn from_index(idx: usize) -> Option<Self> {
        (idx < 64).then_some(Self(idx as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    pub fn file(self) -> u8 {
        self.0 % 8
    }

    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::from_coords(self.rank() as i8 + d_rank, self.file() as i8 + d_file)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.rank()) as char
    }

    /// All 64 squares, a8 first, h1 last
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::Malformed(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::Malformed(s.to_string()));
        }
        Ok(Self((b'8' - rank) * 8 + (file - b'a')))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

// Named squares the rules refer to directly
pub const A1: Square = Square(56);
pub const C1: Square = Square(58);
pub const D1: Square = Square(59);
pub const E1: Square = Square(60);
pub const F1: Square = Square(61);
pub const G1: Square = Square(62);
pub const H1: Square = Square(63);
pub const A8: Square = Square(0);
pub const C8: Square = Square(2);
pub const D8: Square = Square(3);
pub const E8: Square = Square(4);
pub const F8: Square = Square(5);
pub const G8: Square = Square(6);
pub const H8: Square = Square(7);
