//! Rectangular cell storage and line scanning.

use super::error::MoveError;
use super::types::{Coord, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The four line directions: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Row-major matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Creates a grid by calling `f` for each coordinate in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Coord { row, col }))
            .map(&mut f)
            .collect();
        Self { rows, cols, cells }
    }
}

impl<T> Grid<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the coordinate addresses a cell.
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Returns the cell at `at`, if inside the grid.
    pub fn get(&self, at: Coord) -> Option<&T> {
        self.contains(at).then(|| &self.cells[at.row * self.cols + at.col])
    }

    /// Overwrites the cell at `at`.
    pub fn set(&mut self, at: Coord, value: T) -> Result<(), MoveError> {
        if !self.contains(at) {
            return Err(MoveError::OutOfBounds(at));
        }
        self.cells[at.row * self.cols + at.col] = value;
        Ok(())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord { row, col }))
    }

    /// Cells paired with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// The cells of one row.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Every straight segment of `len` cells, in the four line directions.
    ///
    /// Segments are listed per starting cell (row-major), then per direction.
    /// On a 3x3 grid with `len == 3` these are exactly the eight
    /// rows, columns and diagonals.
    pub fn windows(&self, len: usize) -> Vec<Vec<Coord>> {
        let mut out = Vec::new();
        if len == 0 {
            return out;
        }
        for start in self.coords() {
            for (dr, dc) in DIRECTIONS {
                let segment: Option<Vec<Coord>> = (0..len as isize)
                    .map(|step| {
                        start
                            .offset(dr * step, dc * step)
                            .filter(|c| self.contains(*c))
                    })
                    .collect();
                if let Some(segment) = segment {
                    out.push(segment);
                }
            }
        }
        out
    }
}

impl<S: Copy + PartialEq> Grid<Square<S>> {
    /// True when the cell exists and is empty.
    pub fn is_free(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Square::Empty))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, sq)| sq.is_empty())
            .map(|(c, _)| c)
            .collect()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|sq| !sq.is_empty())
    }

    /// Writes `symbol` into an empty cell.
    pub fn place(&mut self, at: Coord, symbol: S) -> Result<(), MoveError> {
        match self.get(at) {
            None => Err(MoveError::OutOfBounds(at)),
            Some(Square::Blocked) => Err(MoveError::Blocked(at)),
            Some(Square::Taken(_)) => Err(MoveError::Occupied(at)),
            Some(Square::Empty) => self.set(at, Square::Taken(symbol)),
        }
    }

    /// Counts every segment of `len` cells all holding `symbol`.
    ///
    /// Overlapping segments count separately, so four marks in a row
    /// contain two runs of three.
    #[instrument(skip(self))]
    pub fn count_runs(&self, symbol: S, len: usize) -> usize
    where
        S: std::fmt::Debug,
    {
        self.windows(len)
            .iter()
            .filter(|segment| self.all_hold(segment, symbol))
            .count()
    }

    /// True if at least one segment of `len` cells holds only `symbol`.
    pub fn has_run(&self, symbol: S, len: usize) -> bool {
        self.windows(len)
            .iter()
            .any(|segment| self.all_hold(segment, symbol))
    }

    fn all_hold(&self, segment: &[Coord], symbol: S) -> bool {
        segment
            .iter()
            .all(|c| self.get(*c) == Some(&Square::Taken(symbol)))
    }
}
