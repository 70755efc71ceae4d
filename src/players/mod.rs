//! Player trait and implementations.

mod computer;
mod human;
mod spec;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, SharedInput};
pub use spec::{PlayerSpec, PlayerSpecError};

use anyhow::Result;
use arcade_games::{Board, PlayerKind, Side};

/// Anything that can occupy a seat.
#[async_trait::async_trait]
pub trait Player<B: Board>: Send {
    /// Gets a move for `side` on `board`.
    ///
    /// The board validates the returned move; a rejected move is asked for again.
    async fn get_move(&mut self, board: &B, side: Side) -> Result<B::Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Who controls the seat.
    fn kind(&self) -> PlayerKind;
}
