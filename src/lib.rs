//! Board Arcade - console runtime for the arcade games
//!
//! Drives the games defined in `arcade_games`: seats human and computer
//! players, runs the turn loop and prints the board at the console.
//!
//! # Architecture
//!
//! - **Config**: [`ArcadeConfig`] loaded from TOML
//! - **Players**: the async [`Player`] trait with human and computer seats
//! - **Manager**: [`GameManager`] runs one game and reports [`GameEvent`]s
//! - **Launcher**: [`Launch`] builds a manager for any [`arcade_games::GameKind`]
//! - **Console**: menu, player setup and event printing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod launcher;
mod manager;
mod players;

// Crate-level exports - Configuration
pub use config::{ArcadeConfig, ConfigError};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerSpec, PlayerSpecError, SharedInput};

// Crate-level exports - Game loop
pub use launcher::{GameFuture, Launch, SeatsOf};
pub use manager::{GameEvent, GameManager, MAX_COMPUTER_REJECTIONS};

// Crate-level exports - Console
pub use console::{describe, spawn_event_printer, spawn_stdin_reader, Console};
