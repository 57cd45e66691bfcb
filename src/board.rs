//! The 3x3 grid, its cell states and the numeric-keypad position layout.

use crate::common::PositionError;
use crate::config::{BOARD_SIZE, MAX_POSITION, MIN_POSITION};
use alloc::vec::Vec;
use core::fmt;

/// One of the two marks a player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }

    /// The mark of the opposing player.
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Marked(Symbol),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(s) => s.as_char(),
        }
    }
}

/// Map a 1-based position onto `(row, col)`.
///
/// Defined for any integer; only positions 1-9 land on the board.
pub fn position_to_row_col(position: i64) -> (i64, i64) {
    let p = position as i128;
    ((p - 1).div_euclid(3) as i64, ((p + 2) % 3) as i64)
}

/// Turn raw user text into a number, never failing.
///
/// Decimal text parses as a float, surrounding whitespace is ignored, empty
/// text is `0` and `0x`/`0o`/`0b` prefixes are read in their radix. Anything
/// else becomes NaN, which no position check accepts.
pub fn parse_position(input: &str) -> f64 {
    let text = input.trim();
    if text.is_empty() {
        return 0.0;
    }
    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// A position known to be in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(u8);

impl Position {
    /// Range-checked constructor. Says nothing about occupancy.
    pub fn new(value: i64) -> Result<Self, PositionError> {
        if value < MIN_POSITION {
            Err(PositionError::TooSmall)
        } else if value > MAX_POSITION {
            Err(PositionError::TooLarge)
        } else {
            Ok(Position(value as u8))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn row_col(self) -> (usize, usize) {
        let (row, col) = position_to_row_col(self.0 as i64);
        (row as usize, col as usize)
    }

    /// Every position in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (MIN_POSITION..=MAX_POSITION).map(|p| Position(p as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell occupancy for one game. Only the owning `Game` writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at `(row, col)`, both 0-based.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn cell(&self, position: Position) -> Cell {
        let (row, col) = position.row_col();
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Check a parsed number against the board, reporting why it fails.
    pub fn validate_position(&self, value: f64) -> Result<Position, PositionError> {
        if !value.is_finite() || libm::trunc(value) != value {
            return Err(PositionError::NotInteger);
        }
        let position = Position::new(value as i64)?;
        if !self.cell(position).is_empty() {
            return Err(PositionError::Occupied);
        }
        Ok(position)
    }

    /// `true` if `value` is a whole number in 1-9 naming an empty cell.
    pub fn is_valid_position(&self, value: f64) -> bool {
        self.validate_position(value).is_ok()
    }

    /// Positions still open, ascending.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&p| self.cell(p).is_empty()).collect()
    }

    pub fn is_full(&self) -> bool {
        Position::all().all(|p| !self.cell(p).is_empty())
    }

    pub(crate) fn set(&mut self, position: Position, symbol: Symbol) {
        let (row, col) = position.row_col();
        self.cells[row][col] = Cell::Marked(symbol);
    }

    /// After `symbol` was placed at `position`, did it complete a line?
    pub fn has_winner_after_move(&self, symbol: Symbol, position: Position) -> bool {
        let (row, col) = position.row_col();

        self.has_winner_in_row(symbol, row)
            || self.has_winner_in_column(symbol, col)
            || self.has_winner_in_main_diagonal(symbol)
            || self.has_winner_in_off_diagonal(symbol)
    }

    fn has_winner_in_row(&self, symbol: Symbol, row: usize) -> bool {
        (0..BOARD_SIZE).all(|j| self.cells[row][j] == Cell::Marked(symbol))
    }

    fn has_winner_in_column(&self, symbol: Symbol, col: usize) -> bool {
        (0..BOARD_SIZE).all(|i| self.cells[i][col] == Cell::Marked(symbol))
    }

    /// (0,0), (1,1), (2,2)
    fn has_winner_in_main_diagonal(&self, symbol: Symbol) -> bool {
        (0..BOARD_SIZE).all(|i| self.cells[i][i] == Cell::Marked(symbol))
    }

    /// (0,2), (1,1), (2,0)
    fn has_winner_in_off_diagonal(&self, symbol: Symbol) -> bool {
        (0..BOARD_SIZE).all(|i| self.cells[i][BOARD_SIZE - 1 - i] == Cell::Marked(symbol))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---+---+---")?;
        for row in &self.cells {
            writeln!(f, "   |   |   ")?;
            writeln!(
                f,
                " {} | {} | {} ",
                row[0].as_char(),
                row[1].as_char(),
                row[2].as_char()
            )?;
            writeln!(f, "   |   |   ")?;
            writeln!(f, "---+---+---")?;
        }
        Ok(())
    }
}
