//! Pyramid Tic-Tac-Toe: rows of 1, 3 and 5 cells stacked into a triangle.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const ROWS: usize = 3;
const COLS: usize = 5;
const PLAYABLE: usize = 9;

/// 3x5 grid with the cells outside the pyramid blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl PyramidBoard {
    /// Creates an empty pyramid.
    pub fn new() -> Self {
        let grid = Grid::from_fn(ROWS, COLS, |at| {
            if Self::inside(at) {
                Square::Empty
            } else {
                Square::Blocked
            }
        });
        Self { grid, moves: 0 }
    }

    /// Row `r` spans columns `2 - r ..= 2 + r`.
    pub fn inside(at: Coord) -> bool {
        at.col.abs_diff(COLS / 2) <= at.row
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }
}

impl Default for PyramidBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for PyramidBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        self.grid.place(*at, side.mark())?;
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.grid.has_run(side.mark(), 3)
    }

    fn is_draw(&self, side: Side) -> bool {
        self.moves == PLAYABLE && !self.is_win(side)
    }

    fn legal_moves(&self, _side: Side) -> Vec<Coord> {
        self.grid.empty_cells()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`PyramidBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PyramidUi;

impl Ui<PyramidBoard> for PyramidUi {
    fn title(&self) -> &'static str {
        "Pyramid Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "The board is a pyramid of 1, 3 and 5 cells; '#' cells are off the board.",
            "Three in a row along any line of the pyramid wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> PyramidBoard {
        PyramidBoard::new()
    }

    fn render(&self, board: &PyramidBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &PyramidBoard, _side: Side) -> String {
        "enter row (0-2) and column (0-4)".to_string()
    }

    fn parse_move(&self, _board: &PyramidBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, Outcome};

    #[test]
    fn test_shape_has_nine_cells() {
        let board = PyramidBoard::new();
        let cells = board.legal_moves(Side::First);
        assert_eq!(cells.len(), PLAYABLE);
        assert_eq!(cells[0], Coord::new(0, 2));
        assert!(!PyramidBoard::inside(Coord::new(1, 0)));
    }

    #[test]
    fn test_seven_winning_lines() {
        let board = PyramidBoard::new();
        let lines = board
            .grid()
            .windows(3)
            .into_iter()
            .filter(|line| line.iter().all(|c| PyramidBoard::inside(*c)))
            .count();
        assert_eq!(lines, 7);
    }

    #[test]
    fn test_diagonal_wins() {
        let mut board = PyramidBoard::new();
        board.update(Side::First, &Coord::new(0, 2)).unwrap();
        board.update(Side::Second, &Coord::new(2, 2)).unwrap();
        board.update(Side::First, &Coord::new(1, 3)).unwrap();
        board.update(Side::Second, &Coord::new(2, 1)).unwrap();
        board.update(Side::First, &Coord::new(2, 4)).unwrap();
        assert_eq!(verdict(&board, Side::First), Some(Outcome::Winner(Side::First)));
    }

    #[test]
    fn test_outside_cell_blocked() {
        let mut board = PyramidBoard::new();
        assert_eq!(
            board.update(Side::First, &Coord::new(0, 0)),
            Err(MoveError::Blocked(Coord::new(0, 0)))
        );
    }
}
