//! Human player that types moves at the console.

use super::Player;
use crate::manager::GameEvent;
use anyhow::Result;
use arcade_games::{Board, PlayerKind, Side, Ui};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, instrument};

/// Console lines shared by every human seat; only the player to move reads.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Human player using line input.
pub struct HumanPlayer<U> {
    name: String,
    ui: Arc<U>,
    input: SharedInput,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<U> HumanPlayer<U> {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        ui: Arc<U>,
        input: SharedInput,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            ui,
            input,
            event_tx,
        }
    }
}

#[async_trait::async_trait]
impl<B: Board, U: Ui<B>> Player<B> for HumanPlayer<U> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    async fn get_move(&mut self, board: &B, side: Side) -> Result<B::Move> {
        loop {
            self.event_tx.send(GameEvent::Prompt {
                name: self.name.clone(),
                text: self.ui.prompt(board, side),
            })?;

            let line = self.input.lock().await.recv().await;
            let Some(line) = line else {
                anyhow::bail!("Input channel closed");
            };

            match self.ui.parse_move(board, side, line.trim()) {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    debug!(input = %line, error = %e, "Unreadable move");
                    self.event_tx.send(GameEvent::MoveRejected {
                        name: self.name.clone(),
                        reason: e.to_string(),
                    })?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_games::{Coord, XoBoard, XoUi};

    #[tokio::test]
    async fn test_reprompts_until_move_parses() {
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut player = HumanPlayer::new(
            "Alice",
            Arc::new(XoUi),
            Arc::new(Mutex::new(line_rx)),
            event_tx,
        );

        line_tx.send("nonsense".to_string()).unwrap();
        line_tx.send(" 1 2 ".to_string()).unwrap();

        let mv = Player::<XoBoard>::get_move(&mut player, &XoBoard::new(), Side::First)
            .await
            .unwrap();
        assert_eq!(mv, Coord::new(1, 2));

        assert!(matches!(event_rx.recv().await, Some(GameEvent::Prompt { .. })));
        assert!(matches!(
            event_rx.recv().await,
            Some(GameEvent::MoveRejected { .. })
        ));
        assert!(matches!(event_rx.recv().await, Some(GameEvent::Prompt { .. })));
    }

    #[tokio::test]
    async fn test_closed_input_ends_the_game() {
        let (line_tx, line_rx) = mpsc::unbounded_channel::<String>();
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        drop(line_tx);
        let mut player = HumanPlayer::new(
            "Alice",
            Arc::new(XoUi),
            Arc::new(Mutex::new(line_rx)),
            event_tx,
        );
        let result = Player::<XoBoard>::get_move(&mut player, &XoBoard::new(), Side::First).await;
        assert!(result.is_err());
    }
}
