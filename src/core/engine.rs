use std::fmt;

use super::utils::{ray, squares};

/** Placement field of the standard starting position. */
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const ROOK_DIR: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIR: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIR: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KING_MOVES: [(i8, i8); 8] = QUEEN_DIR;
const KNIGHT_MOVES: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /** Row direction of this side's pawn pushes. White runs toward row 0. */
    fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /** Row this side's pawns start on. */
    fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    fn from_fen(symbol: char) -> Option<PieceKind> {
        match symbol.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/**
    Board coordinate. Row 0 is Black's back rank, row 7 White's,
    so white pawns move toward smaller rows.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) off the board!");
        Square { row, col }
    }

    /** Step by a (row, col) delta, `None` past the edge. */
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

/** A (source, destination) pair. Nothing records these. */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenError {
    UnexpectedChar(char),
    BadRowCount(usize),
    BadRowWidth { row: usize, width: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::UnexpectedChar(symbol) => {
                write!(f, "unexpected character {symbol:?} in placement")
            }
            FenError::BadRowCount(count) => {
                write!(f, "placement has {count} rows instead of 8")
            }
            FenError::BadRowWidth { row, width } => {
                write!(f, "placement row {row} covers {width} columns instead of 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/** 8x8 mailbox. Cloned by value whenever a move has to be tried out. */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(
                Square::new(0, col),
                Some(Piece {
                    color: Color::Black,
                    kind,
                }),
            );
            board.set(
                Square::new(7, col),
                Some(Piece {
                    color: Color::White,
                    kind,
                }),
            );
        }
        for col in 0..8 {
            board.set(
                Square::new(1, col),
                Some(Piece {
                    color: Color::Black,
                    kind: PieceKind::Pawn,
                }),
            );
            board.set(
                Square::new(6, col),
                Some(Piece {
                    color: Color::White,
                    kind: PieceKind::Pawn,
                }),
            );
        }
        board
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /**
        Parse the placement field of a FEN string. Anything after the first
        whitespace is ignored, so full FEN records are accepted too.
    */
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::BadRowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col: usize = 0;
            for symbol in text.chars() {
                if let Some(run) = symbol.to_digit(10) {
                    col += run as usize;
                } else {
                    let kind =
                        PieceKind::from_fen(symbol).ok_or(FenError::UnexpectedChar(symbol))?;
                    let color = if symbol.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(FenError::BadRowWidth { row, width: col + 1 });
                    }
                    board.set(Square::new(row as u8, col as u8), Some(Piece { color, kind }));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::BadRowWidth { row, width: col });
            }
        }
        Ok(board)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row as usize][square.col as usize] = piece;
    }

    /** Relocate whatever stands on `from`. Captures are plain overwrites. */
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(to, piece);
        self.set(from, None);
    }

    /** Squares occupied by `side`. */
    pub fn pieces(&self, side: Color) -> impl Iterator<Item = Square> + '_ {
        squares().filter(move |&square| self.get(square).is_some_and(|p| p.color == side))
    }

    pub fn find_king(&self, side: Color) -> Option<Square> {
        squares().find(|&square| {
            self.get(square)
                == Some(Piece {
                    color: side,
                    kind: PieceKind::King,
                })
        })
    }

    /**
        Destinations for the piece on `from`, before the own-king check.
        Empty unless the square holds a piece of `side`.
    */
    pub fn pseudo_moves(&self, from: Square, side: Color) -> Vec<Square> {
        let piece = match self.get(from) {
            Some(piece) if piece.color == side => piece,
            _ => return Vec::new(),
        };
        let mut moves = Vec::new();
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, side, &mut moves),
            PieceKind::Knight => self.offset_moves(from, side, &KNIGHT_MOVES, &mut moves),
            PieceKind::King => self.offset_moves(from, side, &KING_MOVES, &mut moves),
            PieceKind::Rook => self.ray_moves(from, side, &ROOK_DIR, &mut moves),
            PieceKind::Bishop => self.ray_moves(from, side, &BISHOP_DIR, &mut moves),
            PieceKind::Queen => self.ray_moves(from, side, &QUEEN_DIR, &mut moves),
        }
        moves
    }

    /** Pushes only onto empty squares, captures only diagonally forward. */
    fn pawn_moves(&self, from: Square, side: Color, moves: &mut Vec<Square>) {
        let forward = side.forward();
        if let Some(step) = from.offset(forward, 0) {
            if self.get(step).is_none() {
                moves.push(step);
                if from.row == side.pawn_row() {
                    if let Some(jump) = step.offset(forward, 0) {
                        if self.get(jump).is_none() {
                            moves.push(jump);
                        }
                    }
                }
            }
        }
        for dcol in [-1, 1] {
            if let Some(target) = from.offset(forward, dcol) {
                if self.get(target).is_some_and(|p| p.color != side) {
                    moves.push(target);
                }
            }
        }
    }

    fn offset_moves(&self, from: Square, side: Color, table: &[(i8, i8)], moves: &mut Vec<Square>) {
        for &(drow, dcol) in table {
            if let Some(to) = from.offset(drow, dcol) {
                if self.get(to).map_or(true, |p| p.color != side) {
                    moves.push(to);
                }
            }
        }
    }

    fn ray_moves(
        &self,
        from: Square,
        side: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Square>,
    ) {
        for &direction in directions {
            for to in ray(from, direction) {
                match self.get(to) {
                    None => moves.push(to),
                    Some(piece) => {
                        if piece.color != side {
                            moves.push(to);
                        }
                        break;
                    }
                }
            }
        }
    }

    /** Destinations that do not leave `side`'s own king in check. */
    pub fn legal_moves(&self, from: Square, side: Color) -> Vec<Square> {
        self.pseudo_moves(from, side)
            .into_iter()
            .filter(|&to| self.is_move_safe(from, to, side))
            .collect()
    }

    /** Try the move on a scratch copy and see whether the king survives. */
    fn is_move_safe(&self, from: Square, to: Square, side: Color) -> bool {
        let mut scratch = self.clone();
        scratch.apply_move(from, to);
        !scratch.in_check(side)
    }

    /**
        Whether `side`'s king is attacked. Scans opposing pseudo-moves,
        never legal ones, so checking never recurses into the filter.
        A board without that king reports `false`.
    */
    pub fn in_check(&self, side: Color) -> bool {
        let Some(king) = self.find_king(side) else {
            return false;
        };
        let enemy = side.opposite();
        self.pieces(enemy)
            .any(|square| self.pseudo_moves(square, enemy).contains(&king))
    }

    pub fn is_checkmate(&self, side: Color) -> bool {
        self.in_check(side) && !self.has_legal_move(side)
    }

    /**
        Stalemate needs pieces on the board, no check and nowhere to go.
        A side with no pieces at all is not counted as stalemated.
    */
    pub fn is_stalemate(&self, side: Color) -> bool {
        self.pieces(side).next().is_some() && !self.in_check(side) && !self.has_legal_move(side)
    }

    fn has_legal_move(&self, side: Color) -> bool {
        self.pieces(side)
            .any(|from| !self.legal_moves(from, side).is_empty())
    }
}
