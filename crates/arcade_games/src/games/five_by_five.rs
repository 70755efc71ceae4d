//! 5x5 Tic-Tac-Toe: play 24 moves, then count every three-in-a-row.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const SIZE: usize = 5;
const LAST_MOVE: usize = 24;

/// 5x5 board scored by overlapping runs of three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveByFiveBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl FiveByFiveBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(SIZE, SIZE, Square::Empty),
            moves: 0,
        }
    }

    /// Runs of three currently held by `side`.
    pub fn score(&self, side: Side) -> usize {
        self.grid.count_runs(side.mark(), 3)
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }

    fn finished(&self) -> bool {
        self.moves >= LAST_MOVE
    }
}

impl Default for FiveByFiveBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FiveByFiveBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        if self.finished() {
            return Err(MoveError::GameOver);
        }
        self.grid.place(*at, side.mark())?;
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.finished() && self.score(side) > self.score(side.opponent())
    }

    fn is_lose(&self, side: Side) -> bool {
        self.finished() && self.score(side) < self.score(side.opponent())
    }

    fn is_draw(&self, side: Side) -> bool {
        self.finished() && self.score(side) == self.score(side.opponent())
    }

    fn legal_moves(&self, _side: Side) -> Vec<Coord> {
        if self.finished() {
            return Vec::new();
        }
        self.grid.empty_cells()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`FiveByFiveBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveByFiveUi;

impl Ui<FiveByFiveBoard> for FiveByFiveUi {
    fn title(&self) -> &'static str {
        "5x5 Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "The game stops after 24 moves, leaving one cell empty.",
            "Every three-in-a-row counts, overlaps included.",
            "More runs of three wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> FiveByFiveBoard {
        FiveByFiveBoard::new()
    }

    fn render(&self, board: &FiveByFiveBoard) -> String {
        render_marks(board.grid())
    }

    fn status(&self, board: &FiveByFiveBoard) -> Option<String> {
        Some(format!(
            "Runs  X: {}  O: {}",
            board.score(Side::First),
            board.score(Side::Second)
        ))
    }

    fn prompt(&self, _board: &FiveByFiveBoard, _side: Side) -> String {
        "enter row and column (0-4)".to_string()
    }

    fn parse_move(
        &self,
        _board: &FiveByFiveBoard,
        _side: Side,
        input: &str,
    ) -> Result<Coord, MoveError> {
        parse_coord(input)
    }

    fn search_depth(&self) -> usize {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, Outcome};

    #[test]
    fn test_overlapping_runs_counted() {
        let mut board = FiveByFiveBoard::new();
        for col in 0..4 {
            board.update(Side::First, &Coord::new(0, col)).unwrap();
            board.update(Side::Second, &Coord::new(4, col)).unwrap();
        }
        assert_eq!(board.score(Side::First), 2);
        assert_eq!(board.score(Side::Second), 2);
    }

    #[test]
    fn test_runs_do_not_end_the_game_early() {
        let mut board = FiveByFiveBoard::new();
        for col in 0..3 {
            board.update(Side::First, &Coord::new(0, col)).unwrap();
            board.update(Side::Second, &Coord::new(2, col + 1)).unwrap();
        }
        assert_eq!(verdict(&board, Side::Second), None);
    }

    #[test]
    fn test_game_stops_after_twenty_four_moves() {
        let mut board = FiveByFiveBoard::new();
        let mut side = Side::First;
        for at in board.grid().coords().take(LAST_MOVE).collect::<Vec<_>>() {
            board.update(side, &at).unwrap();
            side = side.opponent();
        }
        assert!(board.legal_moves(side).is_empty());
        assert_eq!(
            board.update(side, &Coord::new(4, 4)),
            Err(MoveError::GameOver)
        );
        assert!(verdict(&board, Side::Second).is_some());
    }

    #[test]
    fn test_more_runs_wins() {
        let mut board = FiveByFiveBoard::new();
        // X fills rows 0-1 and O fills rows 2-3 column by column, then the
        // remaining moves go to row 4 except its last cell.
        let mut side = Side::First;
        let mut order = Vec::new();
        for col in 0..SIZE {
            order.push(Coord::new(0, col));
            order.push(Coord::new(2, col));
        }
        for col in 0..SIZE {
            order.push(Coord::new(1, col));
            order.push(Coord::new(3, col));
        }
        for col in 0..4 {
            order.push(Coord::new(4, col));
        }
        for at in order {
            board.update(side, &at).unwrap();
            side = side.opponent();
        }
        assert_eq!(board.move_count(), LAST_MOVE);
        let x = board.score(Side::First);
        let o = board.score(Side::Second);
        assert_ne!(x, o);
        let winner = if x > o { Side::First } else { Side::Second };
        assert_eq!(verdict(&board, winner), Some(Outcome::Winner(winner)));
    }
}
