use std::fmt::{self, Display};

use thiserror::Error;

use super::consts::{
    BISHOP_VALUE, FILE_CNT, KING_VALUE, KNIGHT_VALUE, MyVal, PAWN_VALUE, QUEEN_VALUE, RANK_CNT,
    ROOK_VALUE,
};

pub const EMPTY_SYMBOL: char = '_';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown piece symbol '{symbol}' at row {row}, col {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },
    #[error("row {row} holds {len} squares, expected {FILE_CNT}")]
    BadRowLength { row: usize, len: usize },
    #[error("board holds {0} rows, expected {RANK_CNT}")]
    BadRowCount(usize),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline(always)]
    pub fn opposite(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "WHITE"),
            Side::Black => write!(f, "BLACK"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    #[inline(always)]
    pub fn value(&self) -> MyVal {
        match self {
            PieceType::Pawn => PAWN_VALUE,
            PieceType::Knight => KNIGHT_VALUE,
            PieceType::Bishop => BISHOP_VALUE,
            PieceType::Rook => ROOK_VALUE,
            PieceType::Queen => QUEEN_VALUE,
            PieceType::King => KING_VALUE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Side,
}

impl Piece {
    pub fn new(kind: PieceType, color: Side) -> Self {
        Self { kind, color }
    }

    /// Upper case symbols are WHITE, lower case are BLACK.
    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let color = if symbol.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match symbol.to_ascii_uppercase() {
            'K' => PieceType::King,
            'Q' => PieceType::Queen,
            'R' => PieceType::Rook,
            'B' => PieceType::Bishop,
            'N' => PieceType::Knight,
            'P' => PieceType::Pawn,
            _ => return None,
        };
        Some(Piece { kind, color })
    }

    pub fn symbol(&self) -> char {
        let symbol = match self.kind {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        };
        match self.color {
            Side::White => symbol,
            Side::Black => symbol.to_ascii_lowercase(),
        }
    }

    #[inline(always)]
    pub fn can_capture(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn from_grid(col: i32, row: i32) -> Self {
        Self { row, col }
    }

    pub fn move_to(&self, col_delta: i32, row_delta: i32) -> Position {
        Position {
            row: self.row + row_delta,
            col: self.col + col_delta,
        }
    }

    //Row and column bounds checked separately so the board shape is not assumed square
    #[inline(always)]
    pub fn out_of_bounds(col: i32, row: i32) -> bool {
        col < 0 || col >= FILE_CNT as i32 || row < 0 || row >= RANK_CNT as i32
    }
}

/// Outcome of probing a candidate destination square.
#[derive(PartialEq)]
pub enum ReturnState {
    /// Square is empty, a slider may continue past it
    True,
    /// Square holds an enemy piece, legal capture but the ray ends here
    TrueExit,
    /// Off the board or blocked by a friendly piece
    False,
}

/// An 8x8 grid of squares. Boards are values: every move clones into a
/// fresh board, nothing mutates a board the search has already handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; FILE_CNT]; RANK_CNT],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; FILE_CNT]; RANK_CNT],
        }
    }

    /// Builds a board from symbol rows, top row first. `_` marks an
    /// empty square.
    pub fn parse(rows: &[&str]) -> Result<Board, BoardError> {
        if rows.len() != RANK_CNT {
            return Err(BoardError::BadRowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.chars().count() != FILE_CNT {
                return Err(BoardError::BadRowLength {
                    row,
                    len: symbols.chars().count(),
                });
            }
            for (col, symbol) in symbols.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                match Piece::from_symbol(symbol) {
                    Some(piece) => board.squares[row][col] = Some(piece),
                    None => return Err(BoardError::InvalidSymbol { symbol, row, col }),
                }
            }
        }
        Ok(board)
    }

    pub fn get_piece(&self, row: i32, col: i32) -> Option<Piece> {
        if Position::out_of_bounds(col, row) {
            return None;
        }
        self.squares[row as usize][col as usize]
    }

    pub fn set_piece(&mut self, row: i32, col: i32, piece: Piece) {
        self.squares[row as usize][col as usize] = Some(piece);
    }

    #[inline(always)]
    pub fn square_empty_grid(&self, col: i32, row: i32) -> bool {
        if Position::out_of_bounds(col, row) {
            return false;
        }
        self.squares[row as usize][col as usize].is_none()
    }

    pub fn validate_position(&self, position: &Position, mover: Side) -> ReturnState {
        self.validate_grid_position(position.col, position.row, mover)
    }

    pub fn validate_grid_position(&self, col: i32, row: i32, mover: Side) -> ReturnState {
        if Position::out_of_bounds(col, row) {
            return ReturnState::False;
        }
        match self.squares[row as usize][col as usize] {
            None => ReturnState::True,
            Some(piece) if piece.color != mover => ReturnState::TrueExit,
            Some(_) => ReturnState::False,
        }
    }

    /// Clones the board with the piece on `from` moved to `to`. Whatever
    /// sat on `to` is gone.
    pub fn apply_move(&self, from: Position, to: Position) -> Board {
        let mut new = self.clone();
        new.squares[to.row as usize][to.col as usize] =
            new.squares[from.row as usize][from.col as usize];
        new.squares[from.row as usize][from.col as usize] = None;
        new
    }

    pub fn find_king(&self, side: Side) -> Option<Position> {
        for row in 0..RANK_CNT as i32 {
            for col in 0..FILE_CNT as i32 {
                if let Some(piece) = self.squares[row as usize][col as usize] {
                    if piece.kind == PieceType::King && piece.color == side {
                        return Some(Position { row, col });
                    }
                }
            }
        }
        None
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                match square {
                    Some(piece) => write!(f, "{} ", piece.symbol())?,
                    None => write!(f, "{} ", EMPTY_SYMBOL)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
