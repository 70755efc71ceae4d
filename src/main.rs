//! Board Arcade - Unified CLI
//!
//! Menu-driven console arcade of two-player board games.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use arcade_games::{ClassIndex, GameKind};
use board_arcade::{spawn_stdin_reader, ArcadeConfig, Console, PlayerSpec};
use clap::Parser;
use cli::{Cli, Command, IndexFormat};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,board_arcade=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ArcadeConfig::load(&cli.config)?;

    match cli.command {
        None => run_arcade(config, None, [None, None]).await,
        Some(Command::Play {
            game,
            first,
            second,
            seed,
        }) => {
            let game = game
                .map(|number| {
                    GameKind::from_menu_number(number)
                        .ok_or_else(|| anyhow::anyhow!("No game numbered {}", number))
                })
                .transpose()?;
            run_arcade(config.with_seed(seed), game, [first, second]).await
        }
        Some(Command::List) => {
            for line in GameKind::menu() {
                println!("{}", line);
            }
            Ok(())
        }
        Some(Command::Hierarchy { format }) => print_hierarchy(format),
    }
}

/// Run the interactive arcade
#[instrument(skip(config, seats))]
async fn run_arcade(
    config: ArcadeConfig,
    game: Option<GameKind>,
    seats: [Option<PlayerSpec>; 2],
) -> Result<()> {
    info!("Starting Board Arcade");
    let console = Console::new(config, spawn_stdin_reader());
    console.run(game, seats).await
}

/// Print the class index of the game framework
fn print_hierarchy(format: IndexFormat) -> Result<()> {
    let index = ClassIndex::framework();
    index.validate()?;
    match format {
        IndexFormat::Js => println!("{}", index.to_js()),
        IndexFormat::Json => println!("{}", index.to_json()?),
    }
    Ok(())
}
