use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Lowercase FEN letter for this piece kind
    pub fn to_char(self) -> char {
        match self {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        }
    }

    /// Uppercase letter used in SAN (pawns have none, but `P` is returned for completeness)
    pub fn san_letter(self) -> char {
        self.to_char().to_ascii_uppercase()
    }

    /// Parse a promotion choice (`q`, `r`, `b`, `n`, either case)
    pub fn from_promotion_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(Type::Queen),
            'r' => Some(Type::Rook),
            'b' => Some(Type::Bishop),
            'n' => Some(Type::Knight),
            _ => None,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        matches!(self, Type::Queen | Type::Rook | Type::Bishop | Type::Knight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank delta of a pawn advance. Rank 0 is the eighth rank, so white moves "up" by -1.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Rank a pawn of this color starts on
    pub fn pawn_rank(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Rank the king and rooks start on
    pub fn back_rank(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Rank on which a pawn of this color promotes
    pub fn promotion_rank(&self) -> u8 {
        self.opposite().back_rank()
    }

    pub fn fen_char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Parse a FEN piece letter; uppercase is white, lowercase is black.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn is_kind(&self, color: Color, piece_type: Type) -> bool {
        self.color == color && self.piece_type == piece_type
    }
}
