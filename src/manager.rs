//! Game loop between two players.

use crate::players::Player;
use anyhow::Result;
use arcade_games::{verdict, Board, Outcome, PlayerKind, Side, Ui};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Rejected moves a computer seat may make in one turn before the game aborts.
pub const MAX_COMPUTER_REJECTIONS: usize = 10;

/// Messages sent from the game loop to the console.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Game started.
    Started {
        /// Game title.
        title: String,
        /// Rule summary lines.
        rules: Vec<String>,
    },
    /// Board picture after a change.
    Board {
        /// Rendered board.
        render: String,
        /// Extra line such as scores.
        status: Option<String>,
    },
    /// A seat is on move.
    Turn {
        /// Player name.
        name: String,
        /// Seat label (`X`, `S`, `odd numbers`).
        label: String,
    },
    /// A human is asked for input.
    Prompt {
        /// Player name.
        name: String,
        /// What to type.
        text: String,
    },
    /// Input or move refused.
    MoveRejected {
        /// Player name.
        name: String,
        /// Why.
        reason: String,
    },
    /// Move was made.
    MoveMade {
        /// Player name.
        name: String,
        /// The move as text.
        description: String,
    },
    /// Game ended.
    Finished {
        /// Final result.
        outcome: Outcome,
        /// Winner's name, `None` on a draw.
        winner_name: Option<String>,
    },
}

/// Runs one game of `B` between two players.
pub struct GameManager<B: Board, U: Ui<B>> {
    board: B,
    ui: Arc<U>,
    players: [Box<dyn Player<B>>; 2],
    event_tx: mpsc::UnboundedSender<GameEvent>,
    turn_limit: usize,
}

impl<B: Board, U: Ui<B>> GameManager<B, U> {
    /// Creates a new game manager. `players[0]` moves first.
    pub fn new(
        board: B,
        ui: Arc<U>,
        players: [Box<dyn Player<B>>; 2],
        event_tx: mpsc::UnboundedSender<GameEvent>,
        turn_limit: usize,
    ) -> Self {
        Self {
            board,
            ui,
            players,
            event_tx,
            turn_limit,
        }
    }

    /// Current position.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Runs the game loop until a result.
    #[instrument(skip(self), fields(game = self.ui.title()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            "Starting game"
        );

        self.event_tx.send(GameEvent::Started {
            title: self.ui.title().to_string(),
            rules: self.ui.rules().iter().map(|line| line.to_string()).collect(),
        })?;
        self.send_board()?;

        let mut side = Side::First;
        let mut turns = 0;
        loop {
            if turns >= self.turn_limit {
                warn!(turns, "Turn limit reached, calling a draw");
                return self.finish(Outcome::Draw);
            }
            if self.board.legal_moves(side).is_empty() {
                info!(%side, "No legal move left, calling a draw");
                return self.finish(Outcome::Draw);
            }

            self.event_tx.send(GameEvent::Turn {
                name: self.players[side.index()].name().to_string(),
                label: self.ui.seat(side).label.to_string(),
            })?;

            let mv = self.take_turn(side).await?;
            turns += 1;

            self.event_tx.send(GameEvent::MoveMade {
                name: self.players[side.index()].name().to_string(),
                description: mv.to_string(),
            })?;
            self.send_board()?;

            if let Some(outcome) = verdict(&self.board, side) {
                return self.finish(outcome);
            }
            side = side.opponent();
        }
    }

    /// Asks the seat for moves until the board accepts one.
    async fn take_turn(&mut self, side: Side) -> Result<B::Move> {
        let mut rejections = 0;
        loop {
            let player = &mut self.players[side.index()];
            debug!(player = player.name(), "Waiting for move");
            let mv = player.get_move(&self.board, side).await?;

            match self.board.update(side, &mv) {
                Ok(()) => return Ok(mv),
                Err(e) => {
                    warn!(player = player.name(), %mv, error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        name: player.name().to_string(),
                        reason: e.to_string(),
                    })?;
                    if player.kind() != PlayerKind::Human {
                        rejections += 1;
                        if rejections >= MAX_COMPUTER_REJECTIONS {
                            anyhow::bail!(
                                "{} made {} illegal moves in a row",
                                player.name(),
                                rejections
                            );
                        }
                    }
                }
            }
        }
    }

    fn send_board(&self) -> Result<()> {
        self.event_tx.send(GameEvent::Board {
            render: self.ui.render(&self.board),
            status: self.ui.status(&self.board),
        })?;
        Ok(())
    }

    fn finish(&self, outcome: Outcome) -> Result<Outcome> {
        let winner_name = outcome
            .winner()
            .map(|side| self.players[side.index()].name().to_string());
        info!(%outcome, winner = ?winner_name, "Game over");
        self.event_tx.send(GameEvent::Finished {
            outcome,
            winner_name,
        })?;
        Ok(outcome)
    }
}
