//! The game menu and the settings boards are built from.

use crate::framework::{Board, Ui};
use crate::games::{
    DiamondUi, Dictionary, FiveByFiveUi, FourByFourUi, FourInARowUi, InfinityUi, MemoryUi, MisereUi,
    NumericalUi, ObstaclesUi, PyramidUi, SusUi, UltimateUi, WordUi, XoUi,
};
use derive_getters::Getters;
use derive_setters::Setters;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Every game in the arcade, in menu order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display, strum::EnumCount,
)]
pub enum GameKind {
    /// Classic 3x3 X-O.
    #[strum(to_string = "X-O")]
    Xo,
    /// Gravity drops on a 6x7 rack.
    #[strum(to_string = "Four-in-a-Row")]
    FourInARow,
    /// S and U letters scoring S-U-S lines.
    #[strum(to_string = "SUS")]
    Sus,
    /// Runs of three counted on a 5x5 board.
    #[strum(to_string = "5x5 Tic-Tac-Toe")]
    FiveByFive,
    /// Letters spelling dictionary words.
    #[strum(to_string = "Word Tic-Tac-Toe")]
    Word,
    /// Three in a row loses.
    #[strum(to_string = "Misere Tic-Tac-Toe")]
    Misere,
    /// Four in a row on a diamond.
    #[strum(to_string = "Diamond Tic-Tac-Toe")]
    Diamond,
    /// Odd against even, lines summing to 15.
    #[strum(to_string = "Numerical Tic-Tac-Toe")]
    Numerical,
    /// Random obstacles on a 6x6 board.
    #[strum(to_string = "Obstacles Tic-Tac-Toe")]
    Obstacles,
    /// At most three marks each.
    #[strum(to_string = "Infinity Tic-Tac-Toe")]
    Infinity,
    /// Sub-games on a board of boards.
    #[strum(to_string = "Ultimate Tic-Tac-Toe")]
    Ultimate,
    /// Hidden marks.
    #[strum(to_string = "Memory Tic-Tac-Toe")]
    Memory,
    /// Sliding pieces on a 4x4 board.
    #[strum(to_string = "4x4 Tic-Tac-Toe")]
    FourByFour,
    /// Three rows shaped like a pyramid.
    #[strum(to_string = "Pyramid Tic-Tac-Toe")]
    Pyramid,
}

/// Menu entry that leaves the arcade.
pub const EXIT_CHOICE: usize = 0;

impl GameKind {
    /// Position in the menu, starting at 1.
    pub fn menu_number(self) -> usize {
        GameKind::iter().position(|kind| kind == self).map_or(0, |i| i + 1)
    }

    /// The game listed under `number`, if any. `0` is the exit entry, not a game.
    pub fn from_menu_number(number: usize) -> Option<Self> {
        GameKind::iter().nth(number.checked_sub(1)?)
    }

    /// Menu lines, one per game, followed by the exit entry.
    pub fn menu() -> Vec<String> {
        GameKind::iter()
            .map(|kind| format!("{:>2}. {}", kind.menu_number(), kind))
            .chain(std::iter::once(format!("{:>2}. Exit", EXIT_CHOICE)))
            .collect()
    }

    /// Hands the game's board and UI types to `visitor`.
    #[instrument(skip(visitor))]
    pub fn accept<V: GameVisitor>(self, visitor: V) -> V::Output {
        match self {
            GameKind::Xo => visitor.visit(XoUi),
            GameKind::FourInARow => visitor.visit(FourInARowUi),
            GameKind::Sus => visitor.visit(SusUi),
            GameKind::FiveByFive => visitor.visit(FiveByFiveUi),
            GameKind::Word => visitor.visit(WordUi),
            GameKind::Misere => visitor.visit(MisereUi),
            GameKind::Diamond => visitor.visit(DiamondUi),
            GameKind::Numerical => visitor.visit(NumericalUi),
            GameKind::Obstacles => visitor.visit(ObstaclesUi),
            GameKind::Infinity => visitor.visit(InfinityUi),
            GameKind::Ultimate => visitor.visit(UltimateUi),
            GameKind::Memory => visitor.visit(MemoryUi),
            GameKind::FourByFour => visitor.visit(FourByFourUi),
            GameKind::Pyramid => visitor.visit(PyramidUi),
        }
    }
}

/// Generic operation over any game, dispatched by [`GameKind::accept`].
///
/// This is how code that needs the concrete board type (a game loop, the
/// documentation index) is written once for all fourteen games.
pub trait GameVisitor {
    /// What the visit produces.
    type Output;

    /// Runs with the concrete board and UI of one game.
    fn visit<B: Board, U: Ui<B>>(self, ui: U) -> Self::Output;
}

/// Values boards and computer seats are built from.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct GameSettings {
    /// Words accepted by Word Tic-Tac-Toe.
    dictionary: Dictionary,
    /// Obstacles dropped after each round of Obstacles Tic-Tac-Toe.
    obstacles_per_round: usize,
    /// Seed for every random choice; `None` uses OS entropy.
    seed: Option<u64>,
    /// Upper bound on AI search depth.
    ai_depth: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            dictionary: Dictionary::builtin(),
            obstacles_per_round: 1,
            seed: None,
            ai_depth: 9,
        }
    }
}
