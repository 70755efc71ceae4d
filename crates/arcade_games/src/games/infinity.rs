//! Infinity Tic-Tac-Toe: each side keeps at most three marks on the board.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

const KEEP: usize = 3;

/// 3x3 board where a fourth mark evicts the side's oldest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfinityBoard {
    grid: Grid<Square<char>>,
    history: [VecDeque<Coord>; 2],
    moves: usize,
}

impl InfinityBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(3, 3, Square::Empty),
            history: [VecDeque::new(), VecDeque::new()],
            moves: 0,
        }
    }

    /// Marks `side` has on the board, oldest first.
    pub fn marks(&self, side: Side) -> &VecDeque<Coord> {
        &self.history[side.index()]
    }

    /// The mark `side` would lose on its next placement.
    pub fn next_to_vanish(&self, side: Side) -> Option<Coord> {
        let marks = self.marks(side);
        (marks.len() == KEEP).then(|| marks.front().copied()).flatten()
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }
}

impl Default for InfinityBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for InfinityBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        self.grid.place(*at, side.mark())?;
        let marks = &mut self.history[side.index()];
        marks.push_back(*at);
        let evicted = if marks.len() > KEEP {
            marks.pop_front()
        } else {
            None
        };
        if let Some(oldest) = evicted {
            debug!(%oldest, "Oldest mark removed");
            self.grid.set(oldest, Square::Empty)?;
        }
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
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

/// Presentation for [`InfinityBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InfinityUi;

impl Ui<InfinityBoard> for InfinityUi {
    fn title(&self) -> &'static str {
        "Infinity Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Each player keeps at most three marks on the board.",
            "Placing a fourth removes your oldest mark.",
            "Three in a row wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> InfinityBoard {
        InfinityBoard::new()
    }

    fn render(&self, board: &InfinityBoard) -> String {
        render_marks(board.grid())
    }

    fn status(&self, board: &InfinityBoard) -> Option<String> {
        let fading: Vec<String> = Side::ALL
            .iter()
            .filter_map(|&side| {
                board
                    .next_to_vanish(side)
                    .map(|at| format!("{} loses {} next", side.mark(), at))
            })
            .collect();
        (!fading.is_empty()).then(|| fading.join(", "))
    }

    fn prompt(&self, _board: &InfinityBoard, _side: Side) -> String {
        "enter row and column (0-2)".to_string()
    }

    fn parse_move(&self, _board: &InfinityBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }

    fn search_depth(&self) -> usize {
        5
    }
}
