//! Four-in-a-Row on a 6x7 rack with gravity.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_exact, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const ROWS: usize = 6;
const COLS: usize = 7;

/// Dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct ColumnDrop {
    /// Zero-based column.
    pub column: usize,
}

impl std::fmt::Display for ColumnDrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.column)
    }
}

/// Vertical rack: pieces fall to the lowest free row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourInARowBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl FourInARowBoard {
    /// Creates an empty rack.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(ROWS, COLS, Square::Empty),
            moves: 0,
        }
    }

    /// The cells; row 0 is the top.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }

    /// Row a piece dropped into `column` would land on.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.grid.is_free(Coord::new(row, column)))
    }
}

impl Default for FourInARowBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FourInARowBoard {
    type Symbol = char;
    type Move = ColumnDrop;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, mv: &ColumnDrop) -> Result<(), MoveError> {
        if mv.column >= COLS {
            return Err(MoveError::NoSuchColumn(mv.column));
        }
        let row = self
            .landing_row(mv.column)
            .ok_or(MoveError::ColumnFull(mv.column))?;
        self.grid.place(Coord::new(row, mv.column), side.mark())?;
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.grid.has_run(side.mark(), 4)
    }

    fn is_draw(&self, side: Side) -> bool {
        self.moves == ROWS * COLS && !self.is_win(side)
    }

    fn legal_moves(&self, _side: Side) -> Vec<ColumnDrop> {
        (0..COLS)
            .filter(|&column| self.landing_row(column).is_some())
            .map(ColumnDrop::new)
            .collect()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`FourInARowBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FourInARowUi;

impl Ui<FourInARowBoard> for FourInARowUi {
    fn title(&self) -> &'static str {
        "Four-in-a-Row"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Pick a column; your piece falls to the lowest free row.",
            "Four in a row horizontally, vertically or diagonally wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> FourInARowBoard {
        FourInARowBoard::new()
    }

    fn render(&self, board: &FourInARowBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &FourInARowBoard, _side: Side) -> String {
        format!("enter a column (0-{})", COLS - 1)
    }

    fn parse_move(
        &self,
        _board: &FourInARowBoard,
        _side: Side,
        input: &str,
    ) -> Result<ColumnDrop, MoveError> {
        let n = parse_exact(input, 1)?;
        Ok(ColumnDrop::new(n[0]))
    }

    fn search_depth(&self) -> usize {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, Outcome};

    fn drop(board: &mut FourInARowBoard, side: Side, column: usize) {
        board.update(side, &ColumnDrop::new(column)).unwrap();
    }

    #[test]
    fn test_pieces_stack_from_the_bottom() {
        let mut board = FourInARowBoard::new();
        drop(&mut board, Side::First, 3);
        drop(&mut board, Side::Second, 3);
        assert_eq!(board.grid().get(Coord::new(5, 3)), Some(&Square::Taken('X')));
        assert_eq!(board.grid().get(Coord::new(4, 3)), Some(&Square::Taken('O')));
        assert_eq!(board.landing_row(3), Some(3));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut board = FourInARowBoard::new();
        for i in 0..ROWS {
            let side = if i % 2 == 0 { Side::First } else { Side::Second };
            drop(&mut board, side, 0);
        }
        assert_eq!(
            board.update(Side::First, &ColumnDrop::new(0)),
            Err(MoveError::ColumnFull(0))
        );
        assert!(!board.legal_moves(Side::First).contains(&ColumnDrop::new(0)));
        assert_eq!(
            board.update(Side::First, &ColumnDrop::new(7)),
            Err(MoveError::NoSuchColumn(7))
        );
    }

    #[test]
    fn test_vertical_four_wins() {
        let mut board = FourInARowBoard::new();
        for _ in 0..3 {
            drop(&mut board, Side::First, 2);
            drop(&mut board, Side::Second, 5);
        }
        drop(&mut board, Side::First, 2);
        assert_eq!(verdict(&board, Side::First), Some(Outcome::Winner(Side::First)));
    }

    #[test]
    fn test_three_is_not_enough() {
        let mut board = FourInARowBoard::new();
        for column in 0..3 {
            drop(&mut board, Side::First, column);
            drop(&mut board, Side::Second, column);
        }
        assert_eq!(verdict(&board, Side::Second), None);
    }

    #[test]
    fn test_full_rack_without_four_is_a_draw() {
        let columns = [
            5, 4, 5, 0, 6, 2, 4, 5, 5, 0, 4, 1, 1, 0, 4, 5, 6, 5, 3, 1, 1, 2, 2, 6, 2, 6, 6, 3,
            6, 2, 0, 3, 0, 3, 3, 4, 3, 1, 4, 2, 1, 0,
        ];
        let mut board = FourInARowBoard::new();
        let mut side = Side::First;
        for (i, column) in columns.into_iter().enumerate() {
            board.update(side, &ColumnDrop::new(column)).unwrap();
            if i + 1 < columns.len() {
                assert_eq!(verdict(&board, side), None, "decided early at move {}", i + 1);
            }
            side = side.opponent();
        }
        assert_eq!(board.move_count(), 42);
        assert_eq!(verdict(&board, Side::Second), Some(Outcome::Draw));
        assert!(board.legal_moves(Side::First).is_empty());
    }
}
