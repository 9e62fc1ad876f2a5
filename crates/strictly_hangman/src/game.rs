//! The hangman game state machine.
//!
//! A [`Game`] owns one secret word and tracks which of its letters have been
//! revealed. Hits are recorded once; misses are counted every time, even when
//! the same wrong letter is tried again.

use crate::error::WordError;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Placeholder rendered for letters that are still hidden.
pub const PLACEHOLDER: char = '_';

/// Opaque handle identifying a game from the outside.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random (v4) identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Outcome of a game judged against a mistake ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Still guessing.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every letter revealed.
    #[strum(to_string = "won")]
    Won,
    /// More mistakes than the ceiling allows.
    #[strum(to_string = "lost")]
    Lost,
}

/// A single game of hangman bound to one secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    word: String,
    letters: Vec<char>,
    guessed_letters: Vec<char>,
    mistake_count: u32,
    solved: bool,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a game with a freshly generated id.
    ///
    /// The word is upper-cased before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if the word is empty or contains anything but
    /// ASCII letters.
    pub fn new(word: impl AsRef<str>) -> Result<Self, WordError> {
        Self::with_id(GameId::random(), word)
    }

    /// Creates a game under a caller-chosen id.
    #[instrument(skip(word), fields(game_id = %id))]
    pub fn with_id(id: GameId, word: impl AsRef<str>) -> Result<Self, WordError> {
        let word = word.as_ref();
        if word.is_empty() {
            debug!("Rejected empty word");
            return Err(WordError::Empty);
        }
        if let Some(character) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            debug!(?character, "Rejected word with non-letter");
            return Err(WordError::NonAlphabetic { character });
        }

        let word = word.to_ascii_uppercase();
        let letters: Vec<char> = word.chars().collect();
        info!(length = letters.len(), "Created new game");

        Ok(Self {
            id,
            word,
            letters,
            guessed_letters: Vec::new(),
            mistake_count: 0,
            solved: false,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Guessing
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Guesses one letter, case-insensitively.
    ///
    /// - A letter that was already revealed returns `true` and changes nothing.
    /// - A new letter that occurs in the word is revealed at every position and
    ///   returns `true`; the game becomes solved once nothing is hidden.
    /// - Anything else counts as a mistake and returns `false`, including a
    ///   repeat of an earlier miss.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn guess(&mut self, raw: char) -> bool {
        let character = raw.to_ascii_uppercase();

        if self.guessed_letters.contains(&character) {
            debug!("Letter already revealed");
            return true;
        }

        if self.letters.contains(&character) {
            self.guessed_letters.push(character);
            if self.letters.iter().all(|l| self.guessed_letters.contains(l)) {
                self.solved = true;
                info!(mistakes = self.mistake_count, "Game solved");
            }
            return true;
        }

        self.mistake_count += 1;
        debug!(mistakes = self.mistake_count, "Wrong guess");
        false
    }

    /// Renders the word with hidden letters replaced by `_`, one space between
    /// positions (e.g. `H _ L L _`).
    pub fn masked_word(&self) -> String {
        let mut mask = String::with_capacity(self.letters.len() * 2);
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                mask.push(' ');
            }
            if self.guessed_letters.contains(letter) {
                mask.push(*letter);
            } else {
                mask.push(PLACEHOLDER);
            }
        }
        mask
    }

    /// Judges the game against a mistake ceiling.
    ///
    /// The game is lost once the mistake count exceeds `max_mistakes`.
    pub fn status(&self, max_mistakes: u32) -> GameStatus {
        if self.solved {
            GameStatus::Won
        } else if self.mistake_count > max_mistakes {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the game's id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the normalized secret word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the letters of the word in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the revealed letters in the order they were guessed.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Returns how many wrong guesses were made.
    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    /// Returns whether every letter has been revealed.
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked_word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_uppercased() {
        let game = Game::new("HeLlO").expect("Valid word");
        assert_eq!(game.word(), "HELLO");
        assert_eq!(game.letters(), ['H', 'E', 'L', 'L', 'O']);
    }

    #[test]
    fn test_status_against_ceiling() {
        let mut game = Game::new("ab").expect("Valid word");
        assert_eq!(game.status(1), GameStatus::InProgress);
        game.guess('x');
        assert_eq!(game.status(1), GameStatus::InProgress);
        game.guess('x');
        assert_eq!(game.status(1), GameStatus::Lost);
        game.guess('a');
        game.guess('b');
        assert_eq!(game.status(1), GameStatus::Won);
    }

    #[test]
    fn test_game_id_parses_its_display() {
        let id = GameId::random();
        let parsed: GameId = id.to_string().parse().expect("Valid uuid");
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<GameId>().is_err());
    }
}
