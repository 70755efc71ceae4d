//! Computer player backed by a move strategy.

use super::Player;
use anyhow::Result;
use arcade_games::{Board, PlayerKind, Side, Strategy};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Computer seat. The strategy decides, the delay keeps the console readable.
///
/// Searches run on tokio's blocking pool so a deep minimax never stalls
/// the tasks printing the game.
pub struct ComputerPlayer<B: Board> {
    name: String,
    kind: PlayerKind,
    strategy_name: &'static str,
    strategy: Arc<Mutex<Box<dyn Strategy<B>>>>,
    think_delay: Duration,
}

impl<B: Board> ComputerPlayer<B> {
    /// Creates a new computer player.
    pub fn new(
        name: impl Into<String>,
        kind: PlayerKind,
        strategy: Box<dyn Strategy<B>>,
        think_delay: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            strategy_name: strategy.name(),
            strategy: Arc::new(Mutex::new(strategy)),
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl<B: Board> Player<B> for ComputerPlayer<B> {
    #[instrument(skip(self, board), fields(player = %self.name, strategy = self.strategy_name))]
    async fn get_move(&mut self, board: &B, side: Side) -> Result<B::Move> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let strategy = Arc::clone(&self.strategy);
        let position = board.clone();
        let choice =
            tokio::task::spawn_blocking(move || strategy.blocking_lock().choose(&position, side))
                .await?;

        let mv = choice.ok_or_else(|| anyhow::anyhow!("{} has no legal move", self.name))?;
        debug!(%mv, "Computer chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_games::{Coord, FirstFreeStrategy, XoBoard};
    use std::sync::mpsc as std_mpsc;

    #[tokio::test]
    async fn test_first_free_picks_top_left() {
        let mut player: ComputerPlayer<XoBoard> = ComputerPlayer::new(
            "Bot",
            PlayerKind::Computer,
            Box::new(FirstFreeStrategy),
            Duration::ZERO,
        );
        let mv = player.get_move(&XoBoard::new(), Side::First).await.unwrap();
        assert_eq!(mv, Coord::new(0, 0));
        assert_eq!(player.name(), "Bot");
    }

    #[tokio::test]
    async fn test_full_board_is_an_error() {
        let mut board = XoBoard::new();
        let order = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut side = Side::First;
        for (r, c) in order {
            board.update(side, &Coord::new(r, c)).unwrap();
            side = side.opponent();
        }
        let mut player: ComputerPlayer<XoBoard> = ComputerPlayer::new(
            "Bot",
            PlayerKind::Computer,
            Box::new(FirstFreeStrategy),
            Duration::ZERO,
        );
        assert!(player.get_move(&board, side).await.is_err());
    }

    /// Blocks its thread until another task says it may answer.
    struct WaitForSignal {
        go: std_mpsc::Receiver<()>,
    }

    impl Strategy<XoBoard> for WaitForSignal {
        fn choose(&mut self, board: &XoBoard, side: Side) -> Option<Coord> {
            self.go.recv().ok()?;
            FirstFreeStrategy.choose(board, side)
        }

        fn name(&self) -> &'static str {
            "wait-for-signal"
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_search_leaves_the_runtime_free() {
        let (go_tx, go_rx) = std_mpsc::channel();
        let mut player: ComputerPlayer<XoBoard> = ComputerPlayer::new(
            "Bot",
            PlayerKind::Ai,
            Box::new(WaitForSignal { go: go_rx }),
            Duration::ZERO,
        );

        // Only runs if the search is not holding the single runtime thread.
        let signal = tokio::spawn(async move {
            go_tx.send(()).unwrap();
        });

        let mv = player.get_move(&XoBoard::new(), Side::First).await.unwrap();
        assert_eq!(mv, Coord::new(0, 0));
        signal.await.unwrap();
    }
}
