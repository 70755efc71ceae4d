//! The board contract every game implements.

use super::error::MoveError;
use super::types::{Outcome, Side};
use std::fmt::{Debug, Display};
use tracing::instrument;

/// Game board: owns the position and enforces the rules.
///
/// Boards are cloned freely by searching strategies, so they must be
/// self-contained values.
pub trait Board: Clone + Debug + Send + Sync + 'static {
    /// What a cell holds (`char` for letter games, `u8` for number games).
    type Symbol: Copy + PartialEq + Debug + Send + Sync + 'static;

    /// A single move in this game.
    type Move: Clone + Debug + Display + PartialEq + Send + Sync + 'static;

    /// Validates and applies a move for `side`.
    ///
    /// A rejected move leaves the board untouched.
    fn update(&mut self, side: Side, mv: &Self::Move) -> Result<(), MoveError>;

    /// True if `side` has won.
    fn is_win(&self, side: Side) -> bool;

    /// True if `side` has lost outright (misère-style rules).
    fn is_lose(&self, _side: Side) -> bool {
        false
    }

    /// True if the game is drawn from `side`'s perspective.
    fn is_draw(&self, side: Side) -> bool;

    /// True once the game has ended for `side`.
    fn is_over(&self, side: Side) -> bool {
        self.is_win(side) || self.is_lose(side) || self.is_draw(side)
    }

    /// Every move [`Board::update`] would accept for `side`, in a stable order.
    fn legal_moves(&self, side: Side) -> Vec<Self::Move>;

    /// Moves played so far.
    fn move_count(&self) -> usize;
}

/// Judges the position right after `mover` played.
///
/// Checks are ordered win, lose, draw: a mover who wins and fills the
/// board on the same move wins.
#[instrument(skip(board))]
pub fn verdict<B: Board>(board: &B, mover: Side) -> Option<Outcome> {
    if board.is_win(mover) {
        Some(Outcome::Winner(mover))
    } else if board.is_lose(mover) {
        Some(Outcome::Winner(mover.opponent()))
    } else if board.is_draw(mover) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
