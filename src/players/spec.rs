//! `NAME:KIND` seat descriptions from the command line.

use arcade_games::PlayerKind;
use derive_more::{Display, Error};
use std::str::FromStr;

/// Who sits in a seat, as typed on the command line.
///
/// Accepts `human`, `ai`, `computer` or `NAME:KIND` (`Alice:human`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    /// Display name; the seat default is used when absent.
    pub name: Option<String>,
    /// Who controls the seat.
    pub kind: PlayerKind,
}

impl PlayerSpec {
    /// Creates a new player spec.
    pub fn new(name: Option<String>, kind: PlayerKind) -> Self {
        Self { name, kind }
    }

    /// The name to show, falling back to `default_name`.
    pub fn name_or<'a>(&'a self, default_name: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default_name)
    }
}

/// Seat description that could not be read.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid player '{}': expected NAME:KIND with KIND one of human, computer, ai", input)]
pub struct PlayerSpecError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for PlayerSpec {
    type Err = PlayerSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlayerSpecError {
            input: s.to_string(),
        };
        match s.rsplit_once(':') {
            Some((name, kind)) => {
                let kind = PlayerKind::from_str(kind.trim()).map_err(|_| invalid())?;
                let name = name.trim();
                let name = (!name.is_empty()).then(|| name.to_string());
                Ok(Self::new(name, kind))
            }
            None => PlayerKind::from_str(s.trim())
                .map(|kind| Self::new(None, kind))
                .map_err(|_| invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_name_and_kind() {
        let spec: PlayerSpec = "Alice:human".parse().unwrap();
        assert_eq!(spec.name.as_deref(), Some("Alice"));
        assert_eq!(spec.kind, PlayerKind::Human);
    }

    #[test]
    fn test_kind_alone_keeps_default_name() {
        let spec: PlayerSpec = "AI".parse().unwrap();
        assert_eq!(spec.kind, PlayerKind::Ai);
        assert_eq!(spec.name_or("Player O"), "Player O");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!("Bob:robot".parse::<PlayerSpec>().is_err());
        assert!("".parse::<PlayerSpec>().is_err());
    }
}
