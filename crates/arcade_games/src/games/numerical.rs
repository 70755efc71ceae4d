//! Numerical Tic-Tac-Toe: odd against even, lines summing to 15 win.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_exact, Board, Coord, Grid, Move, MoveError, Seat, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const TARGET: u32 = 15;
const ODD: [u8; 5] = [1, 3, 5, 7, 9];
const EVEN: [u8; 4] = [2, 4, 6, 8];

/// 3x3 board of numbers; each of 1-9 is used at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericalBoard {
    grid: Grid<Square<u8>>,
    used: [bool; 10],
    moves: usize,
}

impl NumericalBoard {
    /// Creates an empty board with every number available.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(3, 3, Square::Empty),
            used: [false; 10],
            moves: 0,
        }
    }

    /// Numbers a seat owns: odd for the first, even for the second.
    pub fn owned(side: Side) -> &'static [u8] {
        match side {
            Side::First => &ODD,
            Side::Second => &EVEN,
        }
    }

    /// Numbers `side` may still play, ascending.
    pub fn available(&self, side: Side) -> Vec<u8> {
        Self::owned(side)
            .iter()
            .copied()
            .filter(|&n| !self.used[usize::from(n)])
            .collect()
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<u8>> {
        &self.grid
    }

    fn line_sum(&self, line: &[Coord]) -> Option<u32> {
        line.iter()
            .map(|c| match self.grid.get(*c) {
                Some(Square::Taken(n)) => Some(u32::from(*n)),
                _ => None,
            })
            .sum()
    }
}

impl Default for NumericalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for NumericalBoard {
    type Symbol = u8;
    type Move = Move<u8>;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, mv: &Move<u8>) -> Result<(), MoveError> {
        if !self.available(side).contains(&mv.symbol) {
            return Err(MoveError::SymbolUnavailable(mv.symbol.to_string()));
        }
        self.grid.place(mv.at, mv.symbol)?;
        self.used[usize::from(mv.symbol)] = true;
        self.moves += 1;
        Ok(())
    }

    // Any complete line counts, whoever placed its numbers.
    fn is_win(&self, _side: Side) -> bool {
        self.grid
            .windows(3)
            .iter()
            .any(|line| self.line_sum(line) == Some(TARGET))
    }

    fn is_draw(&self, side: Side) -> bool {
        self.moves == 9 && !self.is_win(side)
    }

    fn legal_moves(&self, side: Side) -> Vec<Move<u8>> {
        let numbers = self.available(side);
        self.grid
            .empty_cells()
            .into_iter()
            .flat_map(|at| numbers.clone().into_iter().map(move |n| Move::new(at, n)))
            .collect()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`NumericalBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericalUi;

impl Ui<NumericalBoard> for NumericalUi {
    fn title(&self) -> &'static str {
        "Numerical Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Player 1 plays the odd numbers 1, 3, 5, 7, 9.",
            "Player 2 plays the even numbers 2, 4, 6, 8.",
            "Each number can be used once.",
            "Complete a line that sums to 15 to win.",
        ]
    }

    fn seat(&self, side: Side) -> Seat {
        match side {
            Side::First => Seat {
                default_name: "Player 1",
                label: "odd numbers",
            },
            Side::Second => Seat {
                default_name: "Player 2",
                label: "even numbers",
            },
        }
    }

    fn new_board(&self, _settings: &GameSettings) -> NumericalBoard {
        NumericalBoard::new()
    }

    fn render(&self, board: &NumericalBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, board: &NumericalBoard, side: Side) -> String {
        let numbers: Vec<String> = board.available(side).iter().map(u8::to_string).collect();
        format!(
            "enter row, column (0-2) and a number from [{}]",
            numbers.join(", ")
        )
    }

    fn parse_move(&self, _board: &NumericalBoard, _side: Side, input: &str) -> Result<Move<u8>, MoveError> {
        let n = parse_exact(input, 3)?;
        let number = u8::try_from(n[2])
            .map_err(|_| MoveError::SymbolUnavailable(n[2].to_string()))?;
        Ok(Move::new(Coord::new(n[0], n[1]), number))
    }

    fn search_depth(&self) -> usize {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, Outcome};

    fn play(board: &mut NumericalBoard, side: Side, row: usize, col: usize, n: u8) {
        board.update(side, &Move::new(Coord::new(row, col), n)).unwrap();
    }

    #[test]
    fn test_line_summing_to_fifteen_wins() {
        let mut board = NumericalBoard::new();
        play(&mut board, Side::First, 0, 0, 9);
        play(&mut board, Side::Second, 1, 1, 2);
        play(&mut board, Side::First, 0, 1, 1);
        assert_eq!(verdict(&board, Side::First), None);
        play(&mut board, Side::Second, 0, 2, 4);
        assert_eq!(verdict(&board, Side::Second), Some(Outcome::Winner(Side::Second)));
    }

    #[test]
    fn test_numbers_are_owned_and_single_use() {
        let mut board = NumericalBoard::new();
        assert_eq!(
            board.update(Side::First, &Move::new(Coord::new(0, 0), 2)),
            Err(MoveError::SymbolUnavailable("2".to_string()))
        );
        play(&mut board, Side::First, 0, 0, 5);
        assert_eq!(
            board.update(Side::First, &Move::new(Coord::new(0, 1), 5)),
            Err(MoveError::SymbolUnavailable("5".to_string()))
        );
        assert_eq!(board.available(Side::First), vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_legal_moves_pair_cells_with_numbers() {
        let board = NumericalBoard::new();
        assert_eq!(board.legal_moves(Side::First).len(), 9 * 5);
        assert_eq!(board.legal_moves(Side::Second).len(), 9 * 4);
    }

    #[test]
    fn test_parse_move() {
        let board = NumericalBoard::new();
        assert_eq!(
            NumericalUi.parse_move(&board, Side::First, "2 1 7").unwrap(),
            Move::new(Coord::new(2, 1), 7)
        );
        assert!(NumericalUi.parse_move(&board, Side::First, "2 1").is_err());
    }
}
