use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE AND ITS INVARIANTS
 */

/// The four castling permissions. Each flag only ever goes from `true` to `false`
/// while a game is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Clear the right tied to a rook home square. Any move from or onto one of
    /// the four corners invalidates it: either the rook left or it was captured.
    pub fn revoke_corner(&mut self, square: Square) {
        match square {
            A1 => self.white_queenside = false,
            H1 => self.white_kingside = false,
            A8 => self.black_queenside = false,
            H8 => self.black_kingside = false,
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Full rules state of a chess game at one point in time.
///
/// `Position` is plain data: cloning it is cheap and shares nothing, which is
/// what the legality filter relies on when it tries a move on a scratch copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Mailbox board indexed by [`Square::index`], a8 first
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

impl Default for Position {
    /// The standard starting array, white to move
    fn default() -> Self {
        let mut board = [None; 64];
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            board[file] = Some(Piece::new(Color::Black, piece_type));
            board[8 + file] = Some(Piece::new(Color::Black, Type::Pawn));
            board[48 + file] = Some(Piece::new(Color::White, Type::Pawn));
            board[56 + file] = Some(Piece::new(Color::White, piece_type));
        }

        Self {
            board,
            turn: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    /// A board with no pieces, white to move, no rights. Mostly useful for
    /// setting up test positions square by square.
    pub fn empty() -> Self {
        Self {
            board: [None; 64],
            turn: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.index()] = piece;
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Iterate over every occupied square
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Locate the king of `color`.
    ///
    /// Check logic assumes exactly one king per color. With none on the board
    /// this returns `None` (and the side counts as never in check); with several,
    /// the first one in a8..h1 scan order is reported.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.is_kind(color, Type::King))
            .map(|(sq, _)| sq)
    }

    /// 8x8 grid view for renderers, rank 8 first
    pub fn grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (idx, piece) in self.board.iter().enumerate() {
            grid[idx / 8][idx % 8] = *piece;
        }
        grid
    }
}
