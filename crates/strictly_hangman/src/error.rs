//! Error types for game construction and word selection.

use derive_more::{Display, Error};

/// A word was rejected as the secret of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// The word has no letters at all.
    #[display("Word must not be empty")]
    Empty,
    /// The word contains something other than `A`-`Z` (either case).
    #[display("Word must only contain letters, found {character:?}")]
    NonAlphabetic {
        /// First offending character.
        character: char,
    },
}

/// Selecting a word from a line source failed.
#[derive(Debug, Display, Error)]
pub enum SelectError {
    /// The source produced zero lines.
    #[display("Word source is empty")]
    EmptySource,
    /// Reading a line from the source failed.
    #[display("Failed to read word source: {source}")]
    Io {
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

impl From<std::io::Error> for SelectError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
