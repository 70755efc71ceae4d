//! Ultimate Tic-Tac-Toe: a 3x3 main board whose cells are won by playing
//! ordinary X-O sub-games.
//!
//! Only one sub-game runs at a time. When none is running, the mover opens
//! one: on the main cell matching the last cell played if it is still
//! unclaimed, otherwise on any unclaimed main cell. Both seats then alternate
//! on that sub-board until it is won (the main cell goes to the winner) or
//! filled (the main cell is marked drawn).

use crate::catalog::GameSettings;
use crate::framework::{parse_numbers, render_grid, Board, Coord, Grid, MoveError, Side, Square, Ui};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A cell on a particular sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct UltimateMove {
    /// Main-board position of the sub-game.
    pub board: Coord,
    /// Cell within the sub-board.
    pub cell: Coord,
}

impl std::fmt::Display for UltimateMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on board {}", self.cell, self.board)
    }
}

/// Main board plus the sub-game in progress.
///
/// Main cells are [`Square::Taken`] by the sub-game winner's mark or
/// [`Square::Blocked`] when the sub-game was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UltimateBoard {
    main: Grid<Square<char>>,
    mini: Grid<Square<char>>,
    running: Option<Coord>,
    forced: Option<Coord>,
    moves: usize,
}

fn empty_3x3() -> Grid<Square<char>> {
    Grid::filled(3, 3, Square::Empty)
}

impl UltimateBoard {
    /// Creates a board with no sub-game started.
    pub fn new() -> Self {
        Self {
            main: empty_3x3(),
            mini: empty_3x3(),
            running: None,
            forced: None,
            moves: 0,
        }
    }

    /// Claims on the main board.
    pub fn main(&self) -> &Grid<Square<char>> {
        &self.main
    }

    /// The current (or last finished) sub-board.
    pub fn mini(&self) -> &Grid<Square<char>> {
        &self.mini
    }

    /// Sub-game in progress, if any.
    pub fn running(&self) -> Option<Coord> {
        self.running
    }

    /// Main cell the next sub-game must be opened on, if the rules force one.
    pub fn forced(&self) -> Option<Coord> {
        self.forced.filter(|at| self.main.is_free(*at))
    }

    /// Main positions the next move may use.
    pub fn playable_boards(&self) -> Vec<Coord> {
        match (self.running, self.forced()) {
            (Some(board), _) => vec![board],
            (None, Some(board)) => vec![board],
            (None, None) => self.main.empty_cells(),
        }
    }

    fn check_board(&self, board: Coord) -> Result<(), MoveError> {
        match self.main.get(board) {
            None => return Err(MoveError::OutOfBounds(board)),
            Some(Square::Empty) => {}
            Some(_) => return Err(MoveError::BoardClaimed(board)),
        }
        let expected = self.running.or_else(|| self.forced());
        match expected {
            Some(expected) if expected != board => Err(MoveError::WrongBoard {
                expected,
                requested: board,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for UltimateBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for UltimateBoard {
    type Symbol = char;
    type Move = UltimateMove;

    #[instrument(skip(self))]
    fn update(&mut self, side: Side, mv: &UltimateMove) -> Result<(), MoveError> {
        if self.main.is_full() {
            return Err(MoveError::GameOver);
        }
        self.check_board(mv.board)?;
        let mark = side.mark();
        let mut mini = if self.running.is_some() {
            self.mini.clone()
        } else {
            empty_3x3()
        };
        mini.place(mv.cell, mark)?;

        if mini.has_run(mark, 3) {
            info!(board = %mv.board, %mark, "Sub-game won");
            self.main.set(mv.board, Square::Taken(mark))?;
            self.running = None;
        } else if mini.is_full() {
            info!(board = %mv.board, "Sub-game drawn");
            self.main.set(mv.board, Square::Blocked)?;
            self.running = None;
        } else {
            if self.running.is_none() {
                debug!(board = %mv.board, "Sub-game started");
            }
            self.running = Some(mv.board);
        }
        self.forced = Some(mv.cell);
        self.mini = mini;
        self.moves += 1;
        Ok(())
    }

    fn is_win(&self, side: Side) -> bool {
        self.main.has_run(side.mark(), 3)
    }

    fn is_draw(&self, side: Side) -> bool {
        self.main.is_full() && !self.is_win(side)
    }

    fn legal_moves(&self, _side: Side) -> Vec<UltimateMove> {
        let cells = if self.running.is_some() {
            self.mini.empty_cells()
        } else {
            empty_3x3().coords().collect()
        };
        self.playable_boards()
            .into_iter()
            .flat_map(|board| cells.iter().map(move |&cell| UltimateMove::new(board, cell)))
            .collect()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`UltimateBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UltimateUi;

impl Ui<UltimateBoard> for UltimateUi {
    fn title(&self) -> &'static str {
        "Ultimate Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "The main board is made of nine small boards.",
            "Win a small board to claim its position on the main board.",
            "The cell you play decides which small board is opened next.",
            "Three claimed positions in a row wins.",
        ]
    }

    fn new_board(&self, _settings: &GameSettings) -> UltimateBoard {
        UltimateBoard::new()
    }

    fn render(&self, board: &UltimateBoard) -> String {
        let main = render_grid(board.main(), |at, sq| match sq {
            Square::Taken(mark) => mark.to_string(),
            Square::Blocked => "-".to_string(),
            Square::Empty if board.running() == Some(at) => "*".to_string(),
            Square::Empty => String::new(),
        });
        let mut out = format!("Main board\n{}", main);
        if let Some(running) = board.running() {
            let mini = render_grid(board.mini(), |_, sq| match sq {
                Square::Taken(mark) => mark.to_string(),
                _ => String::new(),
            });
            out.push_str(&format!("Board {}\n{}", running, mini));
        }
        out
    }

    fn status(&self, board: &UltimateBoard) -> Option<String> {
        match (board.running(), board.forced()) {
            (Some(running), _) => Some(format!("Sub-game in progress on board {}", running)),
            (None, Some(forced)) => Some(format!("Next sub-game opens on board {}", forced)),
            (None, None) => Some("Next sub-game may open on any free board".to_string()),
        }
    }

    fn prompt(&self, board: &UltimateBoard, _side: Side) -> String {
        match board.running().or_else(|| board.forced()) {
            Some(target) => format!("enter row and column (0-2) on board {}", target),
            None => "enter board row, board column, then cell row and cell column (0-2)".to_string(),
        }
    }

    fn parse_move(&self, board: &UltimateBoard, _side: Side, input: &str) -> Result<UltimateMove, MoveError> {
        let n = parse_numbers(input)?;
        let target = board.running().or_else(|| board.forced());
        match (n.as_slice(), target) {
            ([row, col], Some(target)) => Ok(UltimateMove::new(target, Coord::new(*row, *col))),
            ([br, bc, row, col], _) => Ok(UltimateMove::new(Coord::new(*br, *bc), Coord::new(*row, *col))),
            _ => Err(MoveError::Malformed(match target {
                Some(_) => "expected a row and a column".to_string(),
                None => "expected board row, board column, cell row and cell column".to_string(),
            })),
        }
    }

    fn search_depth(&self) -> usize {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{verdict, Outcome};

    fn mv(board: (usize, usize), cell: (usize, usize)) -> UltimateMove {
        UltimateMove::new(Coord::new(board.0, board.1), Coord::new(cell.0, cell.1))
    }

    /// X wins the sub-game on `board` along its top row; O answers on row 1.
    fn win_subgame(u: &mut UltimateBoard, board: (usize, usize), finish: (usize, usize)) {
        u.update(Side::First, &mv(board, (0, 0))).unwrap();
        u.update(Side::Second, &mv(board, (1, 0))).unwrap();
        u.update(Side::First, &mv(board, (0, 1))).unwrap();
        u.update(Side::Second, &mv(board, (1, 1))).unwrap();
        u.update(Side::First, &mv(board, finish)).unwrap();
    }

    #[test]
    fn test_first_move_opens_any_board() {
        let u = UltimateBoard::new();
        assert_eq!(u.playable_boards().len(), 9);
        assert_eq!(u.legal_moves(Side::First).len(), 81);
    }

    #[test]
    fn test_running_sub_game_pins_the_board() {
        let mut u = UltimateBoard::new();
        u.update(Side::First, &mv((1, 1), (0, 0))).unwrap();
        assert_eq!(u.running(), Some(Coord::new(1, 1)));
        assert_eq!(
            u.update(Side::Second, &mv((0, 0), (1, 1))),
            Err(MoveError::WrongBoard {
                expected: Coord::new(1, 1),
                requested: Coord::new(0, 0)
            })
        );
        assert_eq!(
            u.update(Side::Second, &mv((1, 1), (0, 0))),
            Err(MoveError::Occupied(Coord::new(0, 0)))
        );
        assert_eq!(u.legal_moves(Side::Second).len(), 8);
    }

    #[test]
    fn test_won_sub_game_claims_and_forces_next_board() {
        let mut u = UltimateBoard::new();
        win_subgame(&mut u, (0, 0), (0, 2));
        assert_eq!(u.main().get(Coord::new(0, 0)), Some(&Square::Taken('X')));
        assert_eq!(u.running(), None);
        assert_eq!(u.forced(), Some(Coord::new(0, 2)));
        assert_eq!(u.playable_boards(), vec![Coord::new(0, 2)]);
    }

    #[test]
    fn test_forced_board_already_claimed_frees_the_choice() {
        let mut u = UltimateBoard::new();
        win_subgame(&mut u, (0, 1), (0, 2));
        // Forced to (0,2); X wins there too, finishing on (0,1) which is claimed.
        u.update(Side::Second, &mv((0, 2), (2, 2))).unwrap();
        u.update(Side::First, &mv((0, 2), (0, 0))).unwrap();
        u.update(Side::Second, &mv((0, 2), (1, 0))).unwrap();
        u.update(Side::First, &mv((0, 2), (0, 2))).unwrap();
        u.update(Side::Second, &mv((0, 2), (1, 1))).unwrap();
        u.update(Side::First, &mv((0, 2), (0, 1))).unwrap();
        assert_eq!(u.main().get(Coord::new(0, 2)), Some(&Square::Taken('X')));
        assert_eq!(u.forced(), None);
        assert_eq!(u.playable_boards().len(), 7);
        assert_eq!(
            u.update(Side::Second, &mv((0, 1), (0, 0))),
            Err(MoveError::BoardClaimed(Coord::new(0, 1)))
        );
    }

    #[test]
    fn test_three_claimed_boards_win() {
        let mut u = UltimateBoard::new();
        win_subgame(&mut u, (0, 0), (0, 2));
        // Forced to (0,2). O opens it and X wins it, ending on cell (0,1).
        u.update(Side::Second, &mv((0, 2), (2, 2))).unwrap();
        u.update(Side::First, &mv((0, 2), (0, 0))).unwrap();
        u.update(Side::Second, &mv((0, 2), (1, 0))).unwrap();
        u.update(Side::First, &mv((0, 2), (0, 2))).unwrap();
        u.update(Side::Second, &mv((0, 2), (1, 1))).unwrap();
        u.update(Side::First, &mv((0, 2), (0, 1))).unwrap();
        assert_eq!(verdict(&u, Side::First), None);
        // Forced to (0,1).
        u.update(Side::Second, &mv((0, 1), (2, 2))).unwrap();
        u.update(Side::First, &mv((0, 1), (0, 0))).unwrap();
        u.update(Side::Second, &mv((0, 1), (1, 0))).unwrap();
        u.update(Side::First, &mv((0, 1), (0, 1))).unwrap();
        u.update(Side::Second, &mv((0, 1), (1, 1))).unwrap();
        u.update(Side::First, &mv((0, 1), (0, 2))).unwrap();
        assert_eq!(verdict(&u, Side::First), Some(Outcome::Winner(Side::First)));
    }

    #[test]
    fn test_parse_move_uses_pinned_board() {
        let mut u = UltimateBoard::new();
        assert!(UltimateUi.parse_move(&u, Side::First, "1 1").is_err());
        let opening = UltimateUi.parse_move(&u, Side::First, "2 0 1 1").unwrap();
        assert_eq!(opening, mv((2, 0), (1, 1)));
        u.update(Side::First, &opening).unwrap();
        assert_eq!(
            UltimateUi.parse_move(&u, Side::Second, "0 2").unwrap(),
            mv((2, 0), (0, 2))
        );
    }

    #[test]
    fn test_full_sub_board_marks_main_cell_drawn() {
        let mut u = UltimateBoard::new();
        let cells = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut side = Side::First;
        for cell in cells {
            u.update(side, &mv((1, 1), cell)).unwrap();
            side = side.opponent();
        }
        assert_eq!(u.main().get(Coord::new(1, 1)), Some(&Square::Blocked));
        assert_eq!(u.running(), None);
        assert_eq!(u.forced(), Some(Coord::new(2, 2)));
        assert_eq!(verdict(&u, Side::First), None);
        assert_eq!(
            u.update(Side::Second, &mv((1, 1), (0, 0))),
            Err(MoveError::BoardClaimed(Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_full_main_board_without_line_is_a_draw() {
        let mut u = UltimateBoard::new();
        let claims = [
            ['X', 'O', 'X'],
            ['X', 'O', 'O'],
            ['O', 'X', 'X'],
        ];
        for (row, marks) in claims.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                u.main.set(Coord::new(row, col), Square::Taken(*mark)).unwrap();
            }
        }
        u.main.set(Coord::new(1, 1), Square::Blocked).unwrap();
        assert_eq!(verdict(&u, Side::First), Some(Outcome::Draw));
        assert_eq!(verdict(&u, Side::Second), Some(Outcome::Draw));
        assert!(u.legal_moves(Side::First).is_empty());
        assert_eq!(u.update(Side::First, &mv((0, 0), (0, 0))), Err(MoveError::GameOver));
    }
}
