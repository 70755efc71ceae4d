//! Game-agnostic building blocks: boards, moves, seats, presentation, strategies.

mod board;
mod error;
mod grid;
mod strategy;
mod types;
mod ui;

pub use board::{verdict, Board};
pub use error::MoveError;
pub use grid::Grid;
pub use strategy::{FirstFreeStrategy, MinimaxStrategy, RandomStrategy, Strategy};
pub use types::{Coord, Move, Outcome, PlayerKind, Side, Square};
pub use ui::{parse_coord, parse_exact, parse_numbers, render_grid, xo_seat, Seat, Ui};
