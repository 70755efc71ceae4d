//! Arcade games library - board rules, presentation and computer opponents
//!
//! Pure game logic with no terminal or async code: the runtime that drives
//! games lives in the `board_arcade` crate.
//!
//! # Architecture
//!
//! - **Framework**: the [`Board`], [`Ui`] and [`Strategy`] traits plus shared
//!   cell, grid and move types
//! - **Games**: fourteen Tic-Tac-Toe variants, each a board and its UI
//! - **Catalog**: the game menu, [`GameSettings`] and [`GameVisitor`] dispatch
//! - **Hierarchy**: the class index published with the documentation
//!
//! # Example
//!
//! ```
//! use arcade_games::{verdict, Board, Coord, Outcome, Side, XoBoard};
//!
//! let mut board = XoBoard::new();
//! for (side, col) in [(Side::First, 0), (Side::Second, 0), (Side::First, 1), (Side::Second, 1), (Side::First, 2)] {
//!     let row = if side == Side::First { 0 } else { 1 };
//!     board.update(side, &Coord::new(row, col)).unwrap();
//! }
//! assert_eq!(verdict(&board, Side::First), Some(Outcome::Winner(Side::First)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod framework;
mod games;
mod hierarchy;

// Crate-level exports - Framework
pub use framework::{
    parse_coord, parse_exact, parse_numbers, render_grid, verdict, xo_seat, Board, Coord,
    FirstFreeStrategy, Grid, MinimaxStrategy, Move, MoveError, Outcome, PlayerKind, RandomStrategy,
    Seat, Side, Square, Strategy, Ui,
};

// Crate-level exports - Games
pub use games::{
    ColumnDrop, DiamondBoard, DiamondUi, Dictionary, DictionaryError, FiveByFiveBoard, FiveByFiveUi,
    FourByFourBoard, FourByFourUi, FourInARowBoard, FourInARowUi, InfinityBoard, InfinityUi,
    MemoryBoard, MemoryUi, MisereBoard, MisereUi, NumericalBoard, NumericalUi, ObstaclesBoard,
    ObstaclesUi, PyramidBoard, PyramidUi, Slide, SusBoard, SusUi, UltimateBoard, UltimateMove,
    UltimateUi, WordBoard, WordUi, XoBoard, XoUi,
};

// Crate-level exports - Catalog
pub use catalog::{GameKind, GameSettings, GameVisitor, EXIT_CHOICE};

// Crate-level exports - Documentation index
pub use hierarchy::{doc_reference, html_escape, ClassIndex, IndexError, IndexNode};
