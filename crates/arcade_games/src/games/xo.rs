//! Classic 3x3 X-O.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 board where three in a row wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XoBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl XoBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(3, 3, Square::Empty),
            moves: 0,
        }
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }
}

impl Default for XoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for XoBoard {
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
        self.moves == 9 && !self.is_win(side)
    }

    fn legal_moves(&self, _side: Side) -> Vec<Coord> {
        self.grid.empty_cells()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`XoBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct XoUi;

impl Ui<XoBoard> for XoUi {
    fn title(&self) -> &'static str {
        "X-O"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Players take turns marking cells of a 3x3 grid.",
            "Three marks in a row, column or diagonal wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> XoBoard {
        XoBoard::new()
    }

    fn render(&self, board: &XoBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &XoBoard, _side: Side) -> String {
        "enter row and column (0-2)".to_string()
    }

    fn parse_move(&self, _board: &XoBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, MinimaxStrategy, Outcome, Strategy};

    fn play(board: &mut XoBoard, moves: &[(Side, usize, usize)]) {
        for &(side, row, col) in moves {
            board.update(side, &Coord::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_row_wins() {
        let mut board = XoBoard::new();
        play(
            &mut board,
            &[
                (Side::First, 0, 0),
                (Side::Second, 1, 0),
                (Side::First, 0, 1),
                (Side::Second, 1, 1),
                (Side::First, 0, 2),
            ],
        );
        assert_eq!(verdict(&board, Side::First), Some(Outcome::Winner(Side::First)));
    }

    #[test]
    fn test_full_board_draws() {
        let mut board = XoBoard::new();
        // X O X / X O O / O X X
        play(
            &mut board,
            &[
                (Side::First, 0, 0),
                (Side::Second, 0, 1),
                (Side::First, 0, 2),
                (Side::Second, 1, 1),
                (Side::First, 1, 0),
                (Side::Second, 1, 2),
                (Side::First, 2, 1),
                (Side::Second, 2, 0),
                (Side::First, 2, 2),
            ],
        );
        assert_eq!(verdict(&board, Side::First), Some(Outcome::Draw));
        assert!(board.legal_moves(Side::Second).is_empty());
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut board = XoBoard::new();
        board.update(Side::First, &Coord::new(1, 1)).unwrap();
        let before = board.clone();
        assert_eq!(
            board.update(Side::Second, &Coord::new(1, 1)),
            Err(MoveError::Occupied(Coord::new(1, 1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_takes_the_win() {
        let mut board = XoBoard::new();
        play(
            &mut board,
            &[
                (Side::First, 0, 0),
                (Side::Second, 1, 0),
                (Side::First, 0, 1),
                (Side::Second, 1, 1),
            ],
        );
        let mut ai = MinimaxStrategy::new(9);
        assert_eq!(ai.choose(&board, Side::First), Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_minimax_blocks_the_loss() {
        let mut board = XoBoard::new();
        play(
            &mut board,
            &[(Side::First, 0, 0), (Side::Second, 2, 2), (Side::First, 0, 1)],
        );
        let mut ai = MinimaxStrategy::new(9);
        assert_eq!(ai.choose(&board, Side::Second), Some(Coord::new(0, 2)));
    }
}
