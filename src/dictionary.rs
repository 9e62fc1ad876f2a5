//! Word lists on disk, one file per language.

use derive_more::{Display, Error};
use derive_new::new;
use rand::Rng;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use strictly_hangman::{Game, Language, SelectError, WordError, select_random};
use tracing::{debug, info, instrument};

/// Generating a game from a dictionary failed.
#[derive(Debug, Display, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[display("Cannot open dictionary {}: {source}", path.display())]
    Open {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// No word could be selected from the file.
    #[display("Cannot select a {language} word: {source}")]
    Select {
        /// Language of the dictionary.
        language: Language,
        /// Selection failure.
        source: SelectError,
    },
    /// The selected line is not a playable word.
    #[display("Dictionary {language} contains invalid word {word:?}: {source}")]
    Word {
        /// Language of the dictionary.
        language: Language,
        /// The offending line.
        word: String,
        /// Validation failure.
        source: WordError,
    },
}

/// Directory holding `<locale>.dict` word lists, one word per line.
#[derive(Debug, Clone, new)]
pub struct Dictionaries {
    #[new(into)]
    dir: PathBuf,
}

impl Dictionaries {
    /// Path of the word list for `language`.
    pub fn path(&self, language: Language) -> PathBuf {
        self.dir.join(language.dictionary_file_name())
    }

    /// Opens the word list for `language` as a line reader.
    #[instrument(skip(self))]
    pub fn open(&self, language: Language) -> Result<BufReader<File>, DictionaryError> {
        let path = self.path(language);
        debug!(path = %path.display(), "Opening dictionary");
        let file = File::open(&path).map_err(|source| DictionaryError::Open { path, source })?;
        Ok(BufReader::new(file))
    }

    /// Creates a game from a word drawn uniformly from `language`'s list.
    #[instrument(skip(self, rng))]
    pub fn generate<R: Rng>(
        &self,
        language: Language,
        rng: &mut R,
    ) -> Result<Game, DictionaryError> {
        let reader = self.open(language)?;
        let word = select_random(reader, rng)
            .map_err(|source| DictionaryError::Select { language, source })?;
        let game = Game::new(&word)
            .map_err(|source| DictionaryError::Word { language, word, source })?;
        info!(game_id = %game.id(), "Generated random game");
        Ok(game)
    }
}
