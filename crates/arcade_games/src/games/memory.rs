//! Memory Tic-Tac-Toe: X-O rules, but the board never shows whose mark is where.

use super::xo::XoBoard;
use crate::catalog::GameSettings;
use crate::framework::{
    parse_coord, render_grid, Board, Coord, Grid, MinimaxStrategy, MoveError, PlayerKind, Side, Square,
    Strategy, Ui,
};
use serde::{Deserialize, Serialize};

/// X-O board whose marks are hidden from players.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryBoard {
    inner: XoBoard,
}

impl MemoryBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The true cells, marks included.
    pub fn grid(&self) -> &Grid<Square<char>> {
        self.inner.grid()
    }
}

impl Board for MemoryBoard {
    type Symbol = char;
    type Move = Coord;

    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        self.inner.update(side, at)
    }

    fn is_win(&self, side: Side) -> bool {
        self.inner.is_win(side)
    }

    fn is_draw(&self, side: Side) -> bool {
        self.inner.is_draw(side)
    }

    fn legal_moves(&self, side: Side) -> Vec<Coord> {
        self.inner.legal_moves(side)
    }

    fn move_count(&self) -> usize {
        self.inner.move_count()
    }
}

/// Presentation for [`MemoryBoard`]: taken cells show as `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryUi;

impl Ui<MemoryBoard> for MemoryUi {
    fn title(&self) -> &'static str {
        "Memory Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Marks are hidden after placement. Remember where you played!",
            "Three in a row wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> MemoryBoard {
        MemoryBoard::new()
    }

    fn render(&self, board: &MemoryBoard) -> String {
        render_grid(board.grid(), |_, sq| match sq {
            Square::Empty => String::new(),
            Square::Taken(_) | Square::Blocked => "?".to_string(),
        })
    }

    fn prompt(&self, _board: &MemoryBoard, _side: Side) -> String {
        "enter row and column (0-2)".to_string()
    }

    fn parse_move(&self, _board: &MemoryBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }

    /// Every computer seat searches the whole game; it sees the true board.
    fn strategy(
        &self,
        _kind: PlayerKind,
        _side: Side,
        _settings: &GameSettings,
    ) -> Box<dyn Strategy<MemoryBoard>> {
        Box::new(MinimaxStrategy::new(self.search_depth()))
    }
}
