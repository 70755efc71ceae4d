//! SUS: the first seat writes `S`, the second `U`, and points go to
//! every S-U-S line a placement completes.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Seat, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Directions an `S` can start a line in.
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Axes a `U` can sit in the middle of.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 3x3 board with running S and U scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SusBoard {
    grid: Grid<Square<char>>,
    scores: [usize; 2],
    moves: usize,
}

impl SusBoard {
    /// Creates an empty board with both scores at zero.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(3, 3, Square::Empty),
            scores: [0, 0],
            moves: 0,
        }
    }

    /// The letter a seat writes.
    pub fn letter(side: Side) -> char {
        match side {
            Side::First => 'S',
            Side::Second => 'U',
        }
    }

    /// Points scored by `side` so far.
    pub fn score(&self, side: Side) -> usize {
        self.scores[side.index()]
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }

    fn holds(&self, at: Option<Coord>, letter: char) -> bool {
        at.and_then(|c| self.grid.get(c)) == Some(&Square::Taken(letter))
    }

    /// Lines completed by the letter just written at `at`.
    fn points_at(&self, at: Coord, letter: char) -> usize {
        if letter == 'S' {
            ALL_DIRECTIONS
                .iter()
                .filter(|&&(dr, dc)| {
                    self.holds(at.offset(dr, dc), 'U') && self.holds(at.offset(2 * dr, 2 * dc), 'S')
                })
                .count()
        } else {
            AXES.iter()
                .filter(|&&(dr, dc)| {
                    self.holds(at.offset(dr, dc), 'S') && self.holds(at.offset(-dr, -dc), 'S')
                })
                .count()
        }
    }

    fn finished(&self) -> bool {
        self.moves >= 9
    }
}

impl Default for SusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for SusBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        let letter = Self::letter(side);
        self.grid.place(*at, letter)?;
        self.moves += 1;
        let points = self.points_at(*at, letter);
        self.scores[side.index()] += points;
        debug!(points, score = self.scores[side.index()], "Scored");
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
        self.grid.empty_cells()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`SusBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SusUi;

impl Ui<SusBoard> for SusUi {
    fn title(&self) -> &'static str {
        "SUS"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Player 1 writes S, player 2 writes U.",
            "Every S-U-S line your letter completes scores a point.",
            "After nine moves the higher score wins.",
        ]
    }

    fn seat(&self, side: Side) -> Seat {
        match side {
            Side::First => Seat {
                default_name: "Player 1",
                label: "S",
            },
            Side::Second => Seat {
                default_name: "Player 2",
                label: "U",
            },
        }
    }

    fn new_board(&self, _settings: &GameSettings) -> SusBoard {
        SusBoard::new()
    }

    fn render(&self, board: &SusBoard) -> String {
        render_marks(board.grid())
    }

    fn status(&self, board: &SusBoard) -> Option<String> {
        Some(format!(
            "Score  S: {}  U: {}",
            board.score(Side::First),
            board.score(Side::Second)
        ))
    }

    fn prompt(&self, _board: &SusBoard, side: Side) -> String {
        format!("enter row and column (0-2) for your {}", SusBoard::letter(side))
    }

    fn parse_move(&self, _board: &SusBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }

    fn search_depth(&self) -> usize {
        5
    }
}
