//! Command-line interface for board_arcade.

use board_arcade::PlayerSpec;
use clap::{Parser, Subcommand, ValueEnum};

/// Board Arcade - two-player board games at the console
#[derive(Parser, Debug)]
#[command(name = "board_arcade")]
#[command(about = "Fourteen Tic-Tac-Toe variants against people or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the arcade configuration file
    #[arg(short, long, global = true, default_value = "arcade.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run; defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play from the menu, or one game directly
    Play {
        /// Menu number of the game to play (skips the menu)
        #[arg(short, long)]
        game: Option<usize>,

        /// First seat as NAME:KIND or KIND (human, computer, ai)
        #[arg(long, alias = "x")]
        first: Option<PlayerSpec>,

        /// Second seat as NAME:KIND or KIND (human, computer, ai)
        #[arg(long, alias = "o")]
        second: Option<PlayerSpec>,

        /// Seed for computer choices and obstacles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the games
    List,

    /// Print the documentation class index
    Hierarchy {
        /// Output format
        #[arg(short, long, value_enum, default_value = "js")]
        format: IndexFormat,
    },
}

/// Output format of the class index.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexFormat {
    /// `var hierarchy = ...;` script
    Js,
    /// Plain JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_games::ClassIndex;
    use clap::CommandFactory;

    #[test]
    fn test_js_format_help_matches_output() {
        let mut command = Cli::command();
        let help = command
            .find_subcommand_mut("hierarchy")
            .expect("hierarchy subcommand")
            .render_long_help()
            .to_string();
        assert!(help.contains("var hierarchy ="));
        assert!(ClassIndex::framework().to_js().starts_with("var hierarchy ="));
    }

    #[test]
    fn test_play_accepts_seat_aliases() {
        let cli = Cli::try_parse_from(["board_arcade", "play", "--game", "3", "--x", "ai", "--o", "Bo:human"])
            .expect("valid arguments");
        match cli.command {
            Some(Command::Play { game, first, second, .. }) => {
                assert_eq!(game, Some(3));
                assert_eq!(first.map(|spec| spec.kind), Some(arcade_games::PlayerKind::Ai));
                assert_eq!(second.and_then(|spec| spec.name), Some("Bo".to_string()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
