//! Misère Tic-Tac-Toe: whoever completes three in a row loses.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 board with inverted line rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisereBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl MisereBoard {
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

impl Default for MisereBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for MisereBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        self.grid.place(*at, side.mark())?;
        self.moves += 1;
        Ok(())
    }

    /// Filling the board without ever making a line wins for the last mover.
    fn is_win(&self, side: Side) -> bool {
        self.moves == 9 && !self.grid.has_run(side.mark(), 3)
    }

    fn is_lose(&self, side: Side) -> bool {
        self.grid.has_run(side.mark(), 3)
    }

    fn is_draw(&self, _side: Side) -> bool {
        false
    }

    fn legal_moves(&self, _side: Side) -> Vec<Coord> {
        self.grid.empty_cells()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`MisereBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MisereUi;

impl Ui<MisereBoard> for MisereUi {
    fn title(&self) -> &'static str {
        "Misere Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Avoid making three in a row: whoever does loses.",
            "If the board fills up cleanly, the last player to move wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> MisereBoard {
        MisereBoard::new()
    }

    fn render(&self, board: &MisereBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &MisereBoard, _side: Side) -> String {
        "enter row and column (0-2)".to_string()
    }

    fn parse_move(&self, _board: &MisereBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, MinimaxStrategy, Outcome, Strategy};

    fn play(board: &mut MisereBoard, moves: &[(usize, usize)]) -> Side {
        let mut side = Side::First;
        for &(row, col) in moves {
            board.update(side, &Coord::new(row, col)).unwrap();
            side = side.opponent();
        }
        side.opponent()
    }

    #[test]
    fn test_three_in_a_row_loses() {
        let mut board = MisereBoard::new();
        let mover = play(&mut board, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(mover, Side::First);
        assert_eq!(verdict(&board, mover), Some(Outcome::Winner(Side::Second)));
    }

    #[test]
    fn test_clean_full_board_wins_for_last_mover() {
        let mut board = MisereBoard::new();
        // X O X / X O O / O X X: no lines.
        let mover = play(
            &mut board,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(verdict(&board, mover), Some(Outcome::Winner(Side::First)));
    }

    #[test]
    fn test_ai_avoids_completing_a_line() {
        let mut board = MisereBoard::new();
        play(&mut board, &[(0, 0), (2, 2), (0, 1), (2, 0)]);
        let mut ai = MinimaxStrategy::new(9);
        let choice = ai.choose(&board, Side::First).unwrap();
        assert_ne!(choice, Coord::new(0, 2));
    }
}
