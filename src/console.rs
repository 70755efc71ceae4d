//! Line-oriented console front end: menu, player setup and game output.

use crate::config::ArcadeConfig;
use crate::launcher::{Launch, SeatsOf};
use crate::manager::GameEvent;
use crate::players::{PlayerSpec, SharedInput};
use anyhow::Result;
use arcade_games::{GameKind, Outcome, PlayerKind, Seat, Side, EXIT_CHOICE};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Starts a task forwarding stdin lines into a shared channel.
///
/// The channel closes at end of input.
pub fn spawn_stdin_reader() -> SharedInput {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("Stdin closed");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
    Arc::new(Mutex::new(line_rx))
}

/// Interactive arcade session.
pub struct Console {
    config: ArcadeConfig,
    input: SharedInput,
}

impl Console {
    /// Creates a console reading from `input`.
    pub fn new(config: ArcadeConfig, input: SharedInput) -> Self {
        Self { config, input }
    }

    /// Runs the menu loop. With `game` set, plays that game once and returns.
    #[instrument(skip(self, seats))]
    pub async fn run(&self, game: Option<GameKind>, seats: [Option<PlayerSpec>; 2]) -> Result<()> {
        if let Some(kind) = game {
            self.play(kind, seats).await?;
            return Ok(());
        }

        println!("Welcome to the Board Arcade!");
        while let Some(kind) = self.choose_game().await? {
            self.play(kind, seats.clone()).await?;
        }
        println!("Goodbye!");
        Ok(())
    }

    /// Sets up both seats and plays one game of `kind`.
    #[instrument(skip(self, seats))]
    pub async fn play(&self, kind: GameKind, seats: [Option<PlayerSpec>; 2]) -> Result<Outcome> {
        let seat_info = kind.accept(SeatsOf);
        let [first, second] = seats;
        let first = match first {
            Some(spec) => spec,
            None => self.choose_seat(Side::First, seat_info[0]).await?,
        };
        let second = match second {
            Some(spec) => spec,
            None => self.choose_seat(Side::Second, seat_info[1]).await?,
        };

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let printer = spawn_event_printer(event_rx);

        info!(game = %kind, "Launching game");
        let launch = Launch::new(&self.config, [first, second], Arc::clone(&self.input), event_tx);
        let result = kind.accept(launch).await;

        // Every sender went down with the game, so the printer drains and stops.
        printer.await?;
        result
    }

    async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        Ok(self.input.lock().await.recv().await)
    }

    async fn choose_game(&self) -> Result<Option<GameKind>> {
        loop {
            println!();
            for line in GameKind::menu() {
                println!("{}", line);
            }
            let Some(line) = self.read_line("Choose a game: ").await? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(EXIT_CHOICE) => return Ok(None),
                Ok(number) => match GameKind::from_menu_number(number) {
                    Some(kind) => return Ok(Some(kind)),
                    None => println!("No game numbered {}.", number),
                },
                Err(_) => println!("Please enter a number from the menu."),
            }
        }
    }

    async fn choose_seat(&self, side: Side, seat: Seat) -> Result<PlayerSpec> {
        let name = self
            .read_line(&format!("Name for {} ({}) [{}]: ", side, seat.label, seat.default_name))
            .await?
            .map(|line| line.trim().to_string())
            .filter(|name| !name.is_empty());

        loop {
            let Some(line) = self
                .read_line("Controlled by 1) Human 2) Computer 3) AI [1]: ")
                .await?
            else {
                anyhow::bail!("Input closed during player setup");
            };
            let kind = match line.trim() {
                "" | "1" => Some(PlayerKind::Human),
                "2" => Some(PlayerKind::Computer),
                "3" => Some(PlayerKind::Ai),
                other => other.parse::<PlayerKind>().ok(),
            };
            match kind {
                Some(kind) => return Ok(PlayerSpec::new(name, kind)),
                None => println!("Please choose 1, 2 or 3."),
            }
        }
    }
}

/// Prints game events until every sender is gone.
pub fn spawn_event_printer(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            print!("{}", describe(&event));
            let _ = std::io::stdout().flush();
        }
    })
}

/// Console text for one event, newline terminated except for prompts.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Started { title, rules } => {
            let mut out = format!("\n=== {} ===\n", title);
            for rule in rules {
                out.push_str(&format!("  {}\n", rule));
            }
            out
        }
        GameEvent::Board { render, status } => match status {
            Some(status) => format!("\n{}{}\n", render, status),
            None => format!("\n{}", render),
        },
        GameEvent::Turn { name, label } => format!("{} ({}) to move.\n", name, label),
        GameEvent::Prompt { text, .. } => format!("{} ", text),
        GameEvent::MoveRejected { name, reason } => format!("{}: {}\n", name, reason),
        GameEvent::MoveMade { name, description } => format!("{} plays {}.\n", name, description),
        GameEvent::Finished {
            winner_name: Some(name),
            ..
        } => format!("{} wins!\n", name),
        GameEvent::Finished { outcome, .. } => format!("{}.\n", outcome),
    }
}
