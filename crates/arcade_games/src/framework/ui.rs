//! Per-game presentation and input parsing.
//!
//! A [`Ui`] never touches a terminal. It turns boards into text and text
//! into moves; the runtime decides where the text goes.

use super::board::Board;
use super::error::MoveError;
use super::grid::Grid;
use super::strategy::{MinimaxStrategy, RandomStrategy, Strategy};
use super::types::{Coord, PlayerKind, Side};
use crate::catalog::GameSettings;

/// How a seat is introduced during player setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    /// Name offered when the player enters none.
    pub default_name: &'static str,
    /// What the seat plays with, shown next to the name.
    pub label: &'static str,
}

/// The usual "Player X" / "Player O" seats.
pub fn xo_seat(side: Side) -> Seat {
    match side {
        Side::First => Seat {
            default_name: "Player X",
            label: "X",
        },
        Side::Second => Seat {
            default_name: "Player O",
            label: "O",
        },
    }
}

/// Presentation of one game.
pub trait Ui<B: Board>: Send + Sync + 'static {
    /// Banner shown when the game starts.
    fn title(&self) -> &'static str;

    /// Rule summary lines.
    fn rules(&self) -> &'static [&'static str] {
        &[]
    }

    /// Seat description for player setup.
    fn seat(&self, side: Side) -> Seat {
        xo_seat(side)
    }

    /// A fresh board for a new game.
    fn new_board(&self, settings: &GameSettings) -> B;

    /// Multi-line picture of the board.
    fn render(&self, board: &B) -> String;

    /// Extra line shown under the board, such as running scores.
    fn status(&self, _board: &B) -> Option<String> {
        None
    }

    /// What a human at `side` is asked to type.
    fn prompt(&self, board: &B, side: Side) -> String;

    /// Reads a typed move. Only syntax and obvious ranges are checked here;
    /// the board has the final word.
    fn parse_move(&self, board: &B, side: Side, input: &str) -> Result<B::Move, MoveError>;

    /// Deepest search the AI opponent may run on this board.
    fn search_depth(&self) -> usize {
        9
    }

    /// Strategy playing a computer seat of `kind`.
    fn strategy(&self, kind: PlayerKind, side: Side, settings: &GameSettings) -> Box<dyn Strategy<B>> {
        match kind {
            PlayerKind::Ai => Box::new(MinimaxStrategy::new(
                (*settings.ai_depth()).min(self.search_depth()),
            )),
            PlayerKind::Human | PlayerKind::Computer => {
                Box::new(RandomStrategy::for_seat(*settings.seed(), side))
            }
        }
    }
}

/// Splits input on whitespace and commas into unsigned numbers.
pub fn parse_numbers(input: &str) -> Result<Vec<usize>, MoveError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| MoveError::Malformed(format!("'{}' is not a number", part)))
        })
        .collect()
}

/// Reads exactly `count` numbers.
pub fn parse_exact(input: &str, count: usize) -> Result<Vec<usize>, MoveError> {
    let numbers = parse_numbers(input)?;
    if numbers.len() != count {
        return Err(MoveError::Malformed(format!(
            "expected {} numbers, got {}",
            count,
            numbers.len()
        )));
    }
    Ok(numbers)
}

/// Reads "row col".
pub fn parse_coord(input: &str) -> Result<Coord, MoveError> {
    let n = parse_exact(input, 2)?;
    Ok(Coord::new(n[0], n[1]))
}

/// Draws a grid with row and column headers, three characters per cell.
///
/// ```text
///    0   1   2
///   +---+---+---+
///  0| X |   | O |
///   +---+---+---+
/// ```
pub fn render_grid<T>(grid: &Grid<T>, mut cell: impl FnMut(Coord, &T) -> String) -> String {
    let mut out = String::from("  ");
    for col in 0..grid.cols() {
        out.push_str(&format!(" {:^3}", col));
    }
    out.push('\n');
    let border = format!("  +{}\n", "---+".repeat(grid.cols()));
    out.push_str(&border);
    for row in 0..grid.rows() {
        out.push_str(&format!("{:>2}|", row));
        for (col, value) in grid.row(row).iter().enumerate() {
            out.push_str(&format!("{:^3}|", cell(Coord::new(row, col), value)));
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::types::Square;

    #[test]
    fn test_parse_numbers_accepts_commas() {
        assert_eq!(parse_numbers("1, 2").unwrap(), vec![1, 2]);
        assert_eq!(parse_numbers("  0 4 ").unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_parse_coord_rejects_wrong_count() {
        assert!(matches!(parse_coord("1"), Err(MoveError::Malformed(_))));
        assert!(matches!(parse_coord("a b"), Err(MoveError::Malformed(_))));
        assert_eq!(parse_coord("2 1").unwrap(), Coord::new(2, 1));
    }

    #[test]
    fn test_render_grid_shape() {
        let mut grid: Grid<Square<char>> = Grid::filled(2, 2, Square::Empty);
        grid.set(Coord::new(0, 1), Square::Taken('X')).unwrap();
        let text = render_grid(&grid, |_, sq| match sq {
            Square::Taken(c) => c.to_string(),
            _ => String::new(),
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 2 * 2);
        assert_eq!(lines[2], " 0|   | X |");
    }
}
