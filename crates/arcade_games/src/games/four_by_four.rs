//! 4x4 Tic-Tac-Toe: pieces start on the edges and slide one step at a time.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_exact, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const SIZE: usize = 4;
const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Moving one of your pieces to a neighbouring empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Slide {
    /// Cell holding the piece.
    pub from: Coord,
    /// Empty destination, one step up, down, left or right.
    pub to: Coord,
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 4x4 board with four pieces a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourByFourBoard {
    grid: Grid<Square<char>>,
    moves: usize,
}

impl FourByFourBoard {
    /// Starting layout: `O X O X` on top, `X O X O` at the bottom.
    pub fn new() -> Self {
        let grid = Grid::from_fn(SIZE, SIZE, |at| match at.row {
            0 | 3 if (at.row + at.col) % 2 == 0 => Square::Taken('O'),
            0 | 3 => Square::Taken('X'),
            _ => Square::Empty,
        });
        Self { grid, moves: 0 }
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }
}

impl Default for FourByFourBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FourByFourBoard {
    type Symbol = char;
    type Move = Slide;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, mv: &Slide) -> Result<(), MoveError> {
        let mark = side.mark();
        match self.grid.get(mv.from) {
            None => return Err(MoveError::OutOfBounds(mv.from)),
            Some(Square::Taken(owner)) if *owner == mark => {}
            Some(_) => return Err(MoveError::NotYourPiece(mv.from)),
        }
        if !self.grid.contains(mv.to) {
            return Err(MoveError::OutOfBounds(mv.to));
        }
        if !mv.from.is_orthogonal_neighbor(mv.to) {
            return Err(MoveError::NotAdjacent {
                from: mv.from,
                to: mv.to,
            });
        }
        self.grid.place(mv.to, mark)?;
        self.grid.set(mv.from, Square::Empty)?;
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.grid.has_run(side.mark(), 3)
    }

    fn is_draw(&self, _side: Side) -> bool {
        false
    }

    fn legal_moves(&self, side: Side) -> Vec<Slide> {
        let mark = side.mark();
        let grid = &self.grid;
        grid.iter()
            .filter(|(_, sq)| **sq == Square::Taken(mark))
            .flat_map(move |(from, _)| {
                STEPS
                    .iter()
                    .filter_map(move |&(dr, dc)| from.offset(dr, dc))
                    .filter(move |to| grid.is_free(*to))
                    .map(move |to| Slide::new(from, to))
            })
            .collect()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`FourByFourBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FourByFourUi;

impl Ui<FourByFourBoard> for FourByFourUi {
    fn title(&self) -> &'static str {
        "4x4 Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Each player starts with four pieces on the top and bottom rows.",
            "Slide one of your pieces one step up, down, left or right into an empty cell.",
            "Three in a row wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> FourByFourBoard {
        FourByFourBoard::new()
    }

    fn render(&self, board: &FourByFourBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &FourByFourBoard, _side: Side) -> String {
        "enter the piece's row and column, then the destination row and column (0-3)".to_string()
    }

    fn parse_move(&self, _board: &FourByFourBoard, _side: Side, input: &str) -> Result<Slide, MoveError> {
        let n = parse_exact(input, 4)?;
        Ok(Slide::new(Coord::new(n[0], n[1]), Coord::new(n[2], n[3])))
    }

    fn search_depth(&self) -> usize {
        5
    }
}
