//! Board structure with piece counters, scores and move application

use std::fmt;
use std::str::FromStr;

use super::{Cell, Move, Pos, Side, BOARD_SIZE, STARTING_PIECES};

/// Number of rows each side fills at the start
const HOME_ROWS: usize = 3;

/// Game board: 8x8 grid plus per-side counters and the turn flag.
///
/// `player_count` / `ai_count` always equal the number of men of that side
/// on the grid. Every mutation goes through `make_move`, `place_piece` or
/// `remove_piece`, which keep them in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    turn: Side,
    player_count: u8,
    ai_count: u8,
    /// Captures credited to each side
    player_score: u8,
    ai_score: u8,
}

impl Board {
    /// Standard starting layout: AI men on the dark squares of rows 0-2,
    /// Player men on the dark squares of rows 5-7, Player to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                if !pos.is_dark() {
                    continue;
                }
                if row < HOME_ROWS {
                    board.cells[row][col] = Cell::AiMan;
                } else if row >= BOARD_SIZE - HOME_ROWS {
                    board.cells[row][col] = Cell::PlayerMan;
                }
            }
        }
        board.player_count = STARTING_PIECES;
        board.ai_count = STARTING_PIECES;
        board
    }

    /// Board with no pieces at all, Player to move
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Side::Player,
            player_count: 0,
            ai_count: 0,
            player_score: 0,
            ai_score: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell content at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Whole grid, row-major
    #[inline]
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Override the side to move (position setup only)
    #[inline]
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    #[inline]
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    #[inline]
    pub fn ai_count(&self) -> u8 {
        self.ai_count
    }

    #[inline]
    pub fn player_score(&self) -> u8 {
        self.player_score
    }

    #[inline]
    pub fn ai_score(&self) -> u8 {
        self.ai_score
    }

    /// Pieces left for a side
    #[inline]
    pub fn count(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player_count,
            Side::Ai => self.ai_count,
        }
    }

    /// Captures credited to a side
    #[inline]
    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player_score,
            Side::Ai => self.ai_score,
        }
    }

    /// Recount a side's men straight from the grid
    pub fn count_on_grid(&self, side: Side) -> u8 {
        let man = side.man();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == man)
            .count() as u8
    }

    /// Positions of every man of `side`, row-major
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        let man = side.man();
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                (self.cells[row][col] == man).then(|| Pos::new(row as u8, col as u8))
            })
        })
    }

    /// Put a cell value on a square, adjusting counters for whatever was
    /// there before. Used for position setup.
    pub fn place_piece(&mut self, pos: Pos, cell: Cell) {
        self.remove_piece(pos);
        match cell {
            Cell::PlayerMan => self.player_count = self.player_count.saturating_add(1),
            Cell::AiMan => self.ai_count = self.ai_count.saturating_add(1),
            Cell::Empty => {}
        }
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Clear a square, adjusting counters
    pub fn remove_piece(&mut self, pos: Pos) {
        match self.get(pos) {
            Cell::PlayerMan => self.player_count = self.player_count.saturating_sub(1),
            Cell::AiMan => self.ai_count = self.ai_count.saturating_sub(1),
            Cell::Empty => {}
        }
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
    }

    /// Check a move given as raw coordinates. Off-board coordinates are
    /// simply illegal.
    pub fn is_legal_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        match (Pos::from_signed(from_row, from_col), Pos::from_signed(to_row, to_col)) {
            (Some(from), Some(to)) => self.is_legal(Move::new(from, to)),
            _ => false,
        }
    }

    /// Legality of a man move.
    ///
    /// Rules, in order:
    /// 1. Player men must move toward row 0, AI men toward row 7.
    /// 2. One diagonal step onto an empty square is legal.
    /// 3. A two-step diagonal jump onto an empty square over an opposing
    ///    piece is legal.
    ///
    /// Whose turn it is is not checked here; move generation only probes
    /// the side it was asked for.
    pub fn is_legal(&self, mv: Move) -> bool {
        let Some(side) = self.get(mv.from).side() else {
            return false;
        };

        let dr = mv.row_delta();
        let dc = mv.col_delta();
        if dr.signum() != side.forward() {
            return false;
        }
        if !self.is_empty(mv.to) {
            return false;
        }

        match (dr.abs(), dc.abs()) {
            (1, 1) => true,
            (2, 2) => mv
                .captured()
                .is_some_and(|mid| self.get(mid).side() == Some(side.opponent())),
            _ => false,
        }
    }

    /// Apply a move given as raw coordinates.
    ///
    /// Returns `false` and leaves the board untouched when the move is
    /// illegal.
    pub fn apply_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        match (Pos::from_signed(from_row, from_col), Pos::from_signed(to_row, to_col)) {
            (Some(from), Some(to)) => self.make_move(Move::new(from, to)),
            _ => false,
        }
    }

    /// Apply a move: relocate the man, remove a jumped piece (credited to
    /// the side whose turn it was), then pass the turn.
    pub fn make_move(&mut self, mv: Move) -> bool {
        if !self.is_legal(mv) {
            return false;
        }

        let mover = self.turn;
        let piece = self.get(mv.from);
        self.cells[mv.to.row as usize][mv.to.col as usize] = piece;
        self.cells[mv.from.row as usize][mv.from.col as usize] = Cell::Empty;

        if let Some(mid) = mv.captured() {
            self.remove_piece(mid);
            match mover {
                Side::Player => self.player_score = self.player_score.saturating_add(1),
                Side::Ai => self.ai_score = self.ai_score.saturating_add(1),
            }
        }

        self.turn = mover.opponent();
        true
    }

    /// A side has run out of men
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.player_count == 0 || self.ai_count == 0
    }

    /// Side left with pieces once the other has none
    pub fn winner(&self) -> Option<Side> {
        if self.player_count == 0 {
            Some(Side::Ai)
        } else if self.ai_count == 0 {
            Some(Side::Player)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error from parsing a text board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Not exactly eight board rows
    RowCount(usize),
    /// A row without exactly eight cells
    RowLength { row: usize, len: usize },
    /// Unknown cell character
    Symbol { row: usize, col: usize, ch: char },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::RowCount(n) => write!(f, "expected {BOARD_SIZE} rows, found {n}"),
            ParseBoardError::RowLength { row, len } => {
                write!(f, "row {row}: expected {BOARD_SIZE} cells, found {len}")
            }
            ParseBoardError::Symbol { row, col, ch } => {
                write!(f, "row {row}, col {col}: unknown cell '{ch}'")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the `Display` dump (headers optional). `.` is empty, `P` a
    /// Player man, `A` an AI man. Player is to move, scores start at 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty() && !chars.iter().all(char::is_ascii_digit))
            .map(|mut chars| {
                // Drop a leading row label
                if chars.len() == BOARD_SIZE + 1 && chars[0].is_ascii_digit() {
                    chars.remove(0);
                }
                chars
            })
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength { row, len: chars.len() });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(ParseBoardError::Symbol { row, col, ch })?;
                board.place_piece(Pos::new(row as u8, col as u8), cell);
            }
        }
        Ok(board)
    }
}
