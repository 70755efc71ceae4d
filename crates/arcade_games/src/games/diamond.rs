//! Diamond Tic-Tac-Toe: four in a row inside a 25-cell diamond.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{
    parse_coord, Board, Coord, FirstFreeStrategy, Grid, MoveError, PlayerKind, Side, Square, Strategy, Ui,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const SIZE: usize = 7;
const CENTER: usize = 3;
const PLAYABLE: usize = 25;

/// 7x7 grid whose corners are blocked, leaving rows of 1, 3, 5, 7, 5, 3, 1 cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl DiamondBoard {
    /// Creates an empty diamond.
    pub fn new() -> Self {
        let grid = Grid::from_fn(SIZE, SIZE, |at| {
            if Self::inside(at) {
                Square::Empty
            } else {
                Square::Blocked
            }
        });
        Self { grid, moves: 0 }
    }

    /// True for cells within Manhattan distance 3 of the centre.
    pub fn inside(at: Coord) -> bool {
        at.row.abs_diff(CENTER) + at.col.abs_diff(CENTER) <= CENTER
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }
}

impl Default for DiamondBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for DiamondBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        self.grid.place(*at, side.mark())?;
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.grid.has_run(side.mark(), 4)
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

/// Presentation for [`DiamondBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiamondUi;

impl Ui<DiamondBoard> for DiamondUi {
    fn title(&self) -> &'static str {
        "Diamond Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Only the diamond-shaped cells can be played; '#' marks the rest.",
            "Four in a row inside the diamond wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> DiamondBoard {
        DiamondBoard::new()
    }

    fn render(&self, board: &DiamondBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &DiamondBoard, _side: Side) -> String {
        "enter row and column (0-6) inside the diamond".to_string()
    }

    fn parse_move(&self, _board: &DiamondBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }

    fn search_depth(&self) -> usize {
        3
    }

    /// Every computer seat fills the first free diamond cell.
    fn strategy(
        &self,
        _kind: PlayerKind,
        _side: Side,
        _settings: &GameSettings,
    ) -> Box<dyn Strategy<DiamondBoard>> {
        Box::new(FirstFreeStrategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, Outcome};

    #[test]
    fn test_diamond_has_twenty_five_cells() {
        let board = DiamondBoard::new();
        assert_eq!(board.legal_moves(Side::First).len(), PLAYABLE);
        let widths: Vec<usize> = (0..SIZE)
            .map(|row| {
                board
                    .grid()
                    .row(row)
                    .iter()
                    .filter(|sq| sq.is_empty())
                    .count()
            })
            .collect();
        assert_eq!(widths, vec![1, 3, 5, 7, 5, 3, 1]);
    }

    #[test]
    fn test_corner_is_blocked() {
        let mut board = DiamondBoard::new();
        assert_eq!(
            board.update(Side::First, &Coord::new(0, 0)),
            Err(MoveError::Blocked(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_four_on_the_middle_row_wins() {
        let mut board = DiamondBoard::new();
        for col in 0..3 {
            board.update(Side::First, &Coord::new(3, col)).unwrap();
            board.update(Side::Second, &Coord::new(4, col + 1)).unwrap();
        }
        assert_eq!(verdict(&board, Side::First), None);
        board.update(Side::First, &Coord::new(3, 3)).unwrap();
        assert_eq!(verdict(&board, Side::First), Some(Outcome::Winner(Side::First)));
    }

    #[test]
    fn test_computer_takes_first_free_cell() {
        let ui = DiamondUi;
        let mut board = DiamondBoard::new();
        board.update(Side::First, &Coord::new(0, 3)).unwrap();
        let mut strategy = ui.strategy(PlayerKind::Ai, Side::Second, &GameSettings::default());
        assert_eq!(strategy.choose(&board, Side::Second), Some(Coord::new(1, 2)));
    }

    #[test]
    fn test_filled_diamond_without_four_is_a_draw() {
        let cells = [
            (4, 2), (3, 2), (3, 5), (5, 3), (1, 2), (2, 3), (3, 0), (3, 4), (3, 1), (4, 1),
            (4, 5), (3, 6), (0, 3), (2, 4), (1, 4), (1, 3), (2, 2), (4, 4), (6, 3), (3, 3),
            (5, 2), (2, 5), (5, 4), (2, 1), (4, 3),
        ];
        let mut board = DiamondBoard::new();
        let mut side = Side::First;
        for (i, (row, col)) in cells.into_iter().enumerate() {
            board.update(side, &Coord::new(row, col)).unwrap();
            if i + 1 < cells.len() {
                assert_eq!(verdict(&board, side), None, "decided early at move {}", i + 1);
            }
            side = side.opponent();
        }
        assert_eq!(board.move_count(), PLAYABLE);
        assert_eq!(verdict(&board, Side::First), Some(Outcome::Draw));
        assert!(board.legal_moves(Side::Second).is_empty());
    }
}
