//! Board representation for checkers

pub mod board;


// Re-exports
pub use board::{Board, ParseBoardError};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;

/// Men each side starts with
pub const STARTING_PIECES: u8 = 12;

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerMan,
    AiMan,
}

impl Cell {
    /// Side owning the piece on this cell
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::PlayerMan => Some(Side::Player),
            Cell::AiMan => Some(Side::Ai),
            Cell::Empty => None,
        }
    }

    /// Character used by the text dump
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerMan => 'P',
            Cell::AiMan => 'A',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'P' | 'p' => Some(Cell::PlayerMan),
            'A' | 'a' => Some(Cell::AiMan),
            _ => None,
        }
    }
}

/// The two sides. `Player` starts on rows 5-7 and moves toward row 0,
/// `Ai` starts on rows 0-2 and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The man belonging to this side
    #[inline]
    pub fn man(self) -> Cell {
        match self {
            Side::Player => Cell::PlayerMan,
            Side::Ai => Cell::AiMan,
        }
    }

    /// Row direction this side's men advance in
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Side::Player => -1,
            Side::Ai => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` when off the board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Pieces only ever stand on dark squares
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Step by a row/column delta, `None` when the target leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        Self::from_signed(i32::from(self.row) + dr, i32::from(self.col) + dc)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A single man move: one diagonal step, or a two-step jump over an
/// opposing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// Build from the four raw coordinates used by the board API
    #[inline]
    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self::new(Pos::new(from_row, from_col), Pos::new(to_row, to_col))
    }

    #[inline]
    pub fn row_delta(self) -> i32 {
        i32::from(self.to.row) - i32::from(self.from.row)
    }

    #[inline]
    pub fn col_delta(self) -> i32 {
        i32::from(self.to.col) - i32::from(self.from.col)
    }

    /// A jump moves two squares along both axes
    #[inline]
    pub fn is_capture(self) -> bool {
        self.row_delta().abs() == 2 && self.col_delta().abs() == 2
    }

    /// Square jumped over by a capture
    #[inline]
    pub fn captured(self) -> Option<Pos> {
        if self.is_capture() {
            Some(Pos::new(
                (self.from.row + self.to.row) / 2,
                (self.from.col + self.to.col) / 2,
            ))
        } else {
            None
        }
    }

    /// Coordinates as `(from_row, from_col, to_row, to_col)`
    #[inline]
    pub fn coords(self) -> (i32, i32, i32, i32) {
        (
            i32::from(self.from.row),
            i32::from(self.from.col),
            i32::from(self.to.row),
            i32::from(self.to.col),
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
