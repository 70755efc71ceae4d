//! Obstacles Tic-Tac-Toe: a 6x6 board that fills with blocked cells as play goes on.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, MoveError, Side, Square, Ui};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

const SIZE: usize = 6;

/// 6x6 board that drops obstacles after every round of two moves.
///
/// A clone gets a generator forked from this one, so a searching strategy
/// playing on clones cannot see where the real obstacles will fall.
#[derive(Debug)]
pub struct ObstaclesBoard {
    grid: Grid<Square<char>>,
    rng: StdRng,
    per_round: usize,
    moves: usize,
}

impl ObstaclesBoard {
    /// Creates an empty board adding `per_round` obstacles after each round.
    pub fn new(per_round: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            grid: Grid::filled(SIZE, SIZE, Square::Empty),
            rng,
            per_round,
            moves: 0,
        }
    }

    /// The cells; obstacles are [`Square::Blocked`].
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }

    /// Number of obstacles on the board.
    pub fn obstacle_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, sq)| matches!(sq, Square::Blocked))
            .count()
    }

    #[instrument(skip(self))]
    fn drop_obstacles(&mut self) -> Result<(), MoveError> {
        let empties = self.grid.empty_cells();
        let chosen: Vec<Coord> = empties
            .choose_multiple(&mut self.rng, self.per_round)
            .copied()
            .collect();
        for at in chosen {
            debug!(%at, "Obstacle placed");
            self.grid.set(at, Square::Blocked)?;
        }
        Ok(())
    }

    fn has_four(&self, side: Side) -> bool {
        self.grid.has_run(side.mark(), 4)
    }
}

impl Clone for ObstaclesBoard {
    fn clone(&self) -> Self {
        let fork: u64 = self.rng.clone().random();
        Self {
            grid: self.grid.clone(),
            rng: StdRng::seed_from_u64(fork),
            per_round: self.per_round,
            moves: self.moves,
        }
    }
}

impl Board for ObstaclesBoard {
    type Symbol = char;
    type Move = Coord;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, at: &Coord) -> Result<(), MoveError> {
        self.grid.place(*at, side.mark())?;
        self.moves += 1;
        if self.moves % 2 == 0 {
            self.drop_obstacles()?;
        }
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.has_four(side)
    }

    fn is_lose(&self, side: Side) -> bool {
        self.has_four(side.opponent())
    }

    fn is_draw(&self, side: Side) -> bool {
        self.grid.is_full() && !self.has_four(side) && !self.has_four(side.opponent())
    }

    fn legal_moves(&self, _side: Side) -> Vec<Coord> {
        self.grid.empty_cells()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`ObstaclesBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ObstaclesUi;

impl Ui<ObstaclesBoard> for ObstaclesUi {
    fn title(&self) -> &'static str {
        "Obstacles Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "After every round, obstacles ('#') appear on random empty cells.",
            "Nobody, not even the computer, knows where the next obstacle will fall.",
            "Four in a row wins.",
        ]
    }

    fn new_board(&self, settings: &GameSettings) -> ObstaclesBoard {
        ObstaclesBoard::new(*settings.obstacles_per_round(), *settings.seed())
    }

    fn render(&self, board: &ObstaclesBoard) -> String {
        render_marks(board.grid())
    }

    fn status(&self, board: &ObstaclesBoard) -> Option<String> {
        Some(format!("Obstacles: {}", board.obstacle_count()))
    }

    fn prompt(&self, _board: &ObstaclesBoard, _side: Side) -> String {
        "enter row and column (0-5)".to_string()
    }

    fn parse_move(&self, _board: &ObstaclesBoard, _side: Side, input: &str) -> Result<Coord, MoveError> {
        parse_coord(input)
    }

    fn search_depth(&self) -> usize {
        3
    }
}
