//! Word Tic-Tac-Toe: any letter goes anywhere, and spelling a word wins.

use super::render_marks;
use crate::catalog::GameSettings;
use crate::framework::{parse_coord, Board, Coord, Grid, Move, MoveError, Side, Square, Ui};
use derive_more::{Display, Error};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Three-letter words used when no dictionary file is available.
const BUILTIN_WORDS: &[&str] = &[
    "ACE", "ACT", "ADD", "AGE", "AGO", "AID", "AIM", "AIR", "ALL", "AND", "ANT", "ANY", "APE",
    "ARC", "ARE", "ARK", "ARM", "ART", "ASH", "ASK", "ATE", "AWE", "AXE", "BAD", "BAG", "BAN",
    "BAT", "BED", "BEE", "BET", "BIG", "BIN", "BIT", "BOW", "BOX", "BOY", "BUG", "BUN", "BUS",
    "BUT", "BUY", "CAB", "CAN", "CAP", "CAR", "CAT", "COW", "CRY", "CUP", "CUT", "DAY", "DEN",
    "DEW", "DID", "DIG", "DIM", "DOG", "DOT", "DRY", "DUE", "EAR", "EAT", "EGG", "ELF", "END",
    "ERA", "EYE", "FAN", "FAR", "FAT", "FED", "FEW", "FIG", "FIN", "FIT", "FIX", "FLY", "FOG",
    "FOR", "FOX", "FUN", "FUR", "GAP", "GAS", "GET", "GOT", "GUM", "GUN", "GUY", "HAD", "HAM",
    "HAS", "HAT", "HEN", "HER", "HID", "HIM", "HIP", "HIS", "HIT", "HOT", "HOW", "HUG", "ICE",
    "ILL", "INK", "JAM", "JAR", "JET", "JOB", "JOY", "KEY", "KID", "LAP", "LAW", "LAY", "LEG",
    "LET", "LID", "LIE", "LIP", "LOG", "LOT", "LOW", "MAD", "MAN", "MAP", "MAT", "MEN", "MIX",
    "MOB", "MUD", "MUG", "NAP", "NET", "NEW", "NOD", "NOT", "NOW", "NUT", "OAK", "ODD", "OFF",
    "OIL", "OLD", "ONE", "OUR", "OUT", "OWL", "OWN", "PAN", "PAT", "PAW", "PAY", "PEN", "PET",
    "PIE", "PIG", "PIN", "PIT", "POT", "PUT", "RAN", "RAT", "RAW", "RED", "RIB", "RID", "RIP",
    "ROD", "ROW", "RUB", "RUG", "RUN", "SAD", "SAT", "SAW", "SAY", "SEA", "SEE", "SET", "SEW",
    "SHE", "SIT", "SIX", "SKY", "SON", "SUN", "TAB", "TAG", "TAN", "TAP", "TAR", "TEA", "TEN",
    "THE", "TIE", "TIN", "TIP", "TOE", "TON", "TOO", "TOP", "TOY", "TRY", "TUB", "TWO", "USE",
    "VAN", "WAR", "WAS", "WAX", "WAY", "WEB", "WET", "WHO", "WHY", "WIG", "WIN", "WON", "YES",
    "YET", "YOU", "ZIP", "ZOO",
];

/// Error loading a word list.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Set of accepted words, stored uppercase. Cloning shares the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Arc<HashSet<String>>,
}

impl Dictionary {
    /// Builds a dictionary from words in any case.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// The built-in list of three-letter words.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS)
    }

    /// Reads a whitespace-separated word file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DictionaryError::new(format!("Failed to read dictionary file: {}", e))
        })?;
        let dictionary = Self::from_words(content.split_whitespace());
        if dictionary.is_empty() {
            return Err(DictionaryError::new(
                "Dictionary file contains no words".to_string(),
            ));
        }
        info!(words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Loads `path`, falling back to [`Dictionary::builtin`] when it cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                info!(error = %e, "Using built-in word list");
                Self::builtin()
            }
        }
    }

    /// True if `word` is in the set, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 3x3 board of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBoard {
    grid: Grid<Square<char>>,
    dictionary: Dictionary,
    moves: usize,
}

impl WordBoard {
    /// Creates an empty board judged against `dictionary`.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            grid: Grid::filled(3, 3, Square::Empty),
            dictionary,
            moves: 0,
        }
    }

    /// The cells.
    pub fn grid(&self) -> &Grid<Square<char>> {
        &self.grid
    }

    /// Words currently spelled along complete lines, read top-to-bottom and left-to-right.
    pub fn spelled_words(&self) -> Vec<String> {
        self.grid
            .windows(3)
            .iter()
            .filter_map(|line| {
                line.iter()
                    .map(|c| match self.grid.get(*c) {
                        Some(Square::Taken(letter)) => Some(*letter),
                        _ => None,
                    })
                    .collect::<Option<String>>()
            })
            .filter(|word| self.dictionary.contains(word))
            .collect()
    }
}

impl Board for WordBoard {
    type Symbol = char;
    type Move = Move<char>;

    #[instrument(skip(self))]
    fn update(&mut self, _side: Side, mv: &Move<char>) -> Result<(), MoveError> {
        if !mv.symbol.is_ascii_alphabetic() {
            return Err(MoveError::SymbolUnavailable(mv.symbol.to_string()));
        }
        self.grid.place(mv.at, mv.symbol.to_ascii_uppercase())?;
        self.moves += 1;
        Ok(())
    }

    // Either seat wins by completing a word; the verdict is asked of the mover.
    fn is_win(&self, _side: Side) -> bool {
        self.moves >= 3 && !self.spelled_words().is_empty()
    }

    fn is_draw(&self, side: Side) -> bool {
        self.moves == 9 && !self.is_win(side)
    }

    fn legal_moves(&self, _side: Side) -> Vec<Move<char>> {
        self.grid
            .empty_cells()
            .into_iter()
            .flat_map(|at| ('A'..='Z').map(move |letter| Move::new(at, letter)))
            .collect()
    }

    fn move_count(&self) -> usize {
        self.moves
    }
}

/// Presentation for [`WordBoard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WordUi;

impl Ui<WordBoard> for WordUi {
    fn title(&self) -> &'static str {
        "Word Tic-Tac-Toe"
    }

    fn rules(&self) -> &'static [&'static str] {
        &[
            "Write any letter into any free cell.",
            "Complete a row, column or diagonal that spells a word to win.",
        ]
    }

    fn new_board(&self, settings: &GameSettings) -> WordBoard {
        WordBoard::new(settings.dictionary().clone())
    }

    fn render(&self, board: &WordBoard) -> String {
        render_marks(board.grid())
    }

    fn prompt(&self, _board: &WordBoard, _side: Side) -> String {
        "enter row, column (0-2) and a letter".to_string()
    }

    fn parse_move(&self, _board: &WordBoard, _side: Side, input: &str) -> Result<Move<char>, MoveError> {
        let mut parts: Vec<&str> = input.split_whitespace().collect();
        let letter = match parts.pop() {
            Some(last) if last.chars().count() == 1 => last.chars().next(),
            _ => None,
        }
        .filter(|c| c.is_ascii_alphabetic())
        .ok_or_else(|| MoveError::Malformed("expected a letter after the cell".to_string()))?;
        let at = parse_coord(&parts.join(" "))?;
        Ok(Move::new(at, letter.to_ascii_uppercase()))
    }

    fn search_depth(&self) -> usize {
        2
    }
}
