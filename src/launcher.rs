//! Turns a menu choice into a running game.

use crate::config::ArcadeConfig;
use crate::manager::{GameEvent, GameManager};
use crate::players::{ComputerPlayer, HumanPlayer, Player, PlayerSpec, SharedInput};
use anyhow::Result;
use arcade_games::{Board, GameSettings, GameVisitor, Outcome, PlayerKind, Seat, Side, Ui};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// A game that has been set up and is ready to run.
pub type GameFuture = Pin<Box<dyn Future<Output = Result<Outcome>> + Send>>;

/// Builds the board and both players for whichever game it visits.
pub struct Launch {
    settings: GameSettings,
    seats: [PlayerSpec; 2],
    think_delay: Duration,
    turn_limit: usize,
    input: SharedInput,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Launch {
    /// Creates a launch from config and the two seat choices.
    pub fn new(
        config: &ArcadeConfig,
        seats: [PlayerSpec; 2],
        input: SharedInput,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            settings: config.game_settings(),
            seats,
            think_delay: config.think_delay(),
            turn_limit: *config.turn_limit(),
            input,
            event_tx,
        }
    }
}

impl GameVisitor for Launch {
    type Output = GameFuture;

    #[instrument(skip(self, ui), fields(game = ui.title()))]
    fn visit<B: Board, U: Ui<B>>(self, ui: U) -> GameFuture {
        let ui = Arc::new(ui);
        let board = ui.new_board(&self.settings);

        let [first, second] = self.seats;
        let players = [(Side::First, first), (Side::Second, second)].map(|(side, spec)| {
            let name = spec.name_or(ui.seat(side).default_name).to_string();
            debug!(%side, %name, kind = %spec.kind, "Seating player");
            let player: Box<dyn Player<B>> = match spec.kind {
                PlayerKind::Human => Box::new(HumanPlayer::new(
                    name,
                    Arc::clone(&ui),
                    Arc::clone(&self.input),
                    self.event_tx.clone(),
                )),
                kind => Box::new(ComputerPlayer::new(
                    name,
                    kind,
                    ui.strategy(kind, side, &self.settings),
                    self.think_delay,
                )),
            };
            player
        });

        let mut manager = GameManager::new(board, Arc::clone(&ui), players, self.event_tx, self.turn_limit);
        Box::pin(async move { manager.run().await })
    }
}

/// Reads the two seat descriptions of a game.
pub struct SeatsOf;

impl GameVisitor for SeatsOf {
    type Output = [Seat; 2];

    fn visit<B: Board, U: Ui<B>>(self, ui: U) -> [Seat; 2] {
        Side::ALL.map(|side| ui.seat(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_games::GameKind;

    #[test]
    fn test_seats_follow_the_game() {
        let [first, second] = GameKind::Sus.accept(SeatsOf);
        assert_eq!(first.label, "S");
        assert_eq!(second.label, "U");
        let [first, _] = GameKind::Xo.accept(SeatsOf);
        assert_eq!(first.default_name, "Player X");
    }
}
