//! Reasons a board refuses a move.

use super::types::Coord;

/// Error returned by [`Board::update`](super::Board::update) and move parsing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell lies outside the board.
    #[display("{} is outside the board", _0)]
    OutOfBounds(Coord),

    /// The cell already holds a symbol.
    #[display("{} is already occupied", _0)]
    Occupied(Coord),

    /// The cell can never be played.
    #[display("{} is not a playable cell", _0)]
    Blocked(Coord),

    /// Column index past the right edge.
    #[display("Column {} does not exist", _0)]
    NoSuchColumn(usize),

    /// Every row in the column is taken.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// The chosen symbol is used up or not owned by the mover.
    #[display("Symbol {} is not available to you", _0)]
    SymbolUnavailable(String),

    /// Sliding a piece the mover does not own.
    #[display("There is no piece of yours at {}", _0)]
    NotYourPiece(Coord),

    /// Sliding further than one orthogonal step.
    #[display("{} is not next to {}", to, from)]
    NotAdjacent {
        /// Piece origin.
        from: Coord,
        /// Requested destination.
        to: Coord,
    },

    /// Playing outside the sub-board the rules require.
    #[display("You must play on board {}, not {}", expected, requested)]
    WrongBoard {
        /// Board the rules require.
        expected: Coord,
        /// Board the move named.
        requested: Coord,
    },

    /// The sub-board has already been won or drawn.
    #[display("Board {} is already decided", _0)]
    BoardClaimed(Coord),

    /// Input text could not be turned into a move.
    #[display("Could not read move: {}", _0)]
    Malformed(String),

    /// No more moves are accepted.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
