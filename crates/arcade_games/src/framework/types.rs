//! Core domain types shared by every game.

use serde::{Deserialize, Serialize};

/// Seat at the table. `First` always opens the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Side {
    /// Seat that moves first.
    First,
    /// Seat that moves second.
    Second,
}

impl Side {
    /// Both seats in turn order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Index into per-seat arrays (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// The conventional X/O mark for this seat.
    pub fn mark(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

/// Who (or what) controls a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Simple computer opponent (random unless the game says otherwise).
    Computer,
    /// Searching computer opponent.
    #[strum(to_string = "AI")]
    Ai,
}

/// A cell address on a rectangular grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coord {
    /// Returns the coordinate shifted by `(dr, dc)`, or `None` if it would go negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }

    /// True when `other` is one step away horizontally or vertically.
    pub fn is_orthogonal_neighbor(self, other: Coord) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (0, 1) | (1, 0)
        )
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Content of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square<T> {
    /// Free cell.
    Empty,
    /// Cell holding a symbol.
    Taken(T),
    /// Cell that can never be played (outside the shape, or an obstacle).
    Blocked,
}

impl<T> Square<T> {
    /// True for [`Square::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// A placement of a chosen symbol, for games where the player picks what to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move<T> {
    /// Target cell.
    pub at: Coord,
    /// Symbol written into the cell.
    pub symbol: T,
}

impl<T: std::fmt::Display> std::fmt::Display for Move<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.symbol, self.at)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The seat won.
    Winner(Side),
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} player wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
