//! Pure hangman game logic.
//!
//! - [`Game`]: one secret word, revealed letters, mistake count
//! - [`select_random`]: one-pass uniform choice of a line from a word list
//! - [`Language`]: the bundled word lists
//!
//! # Example
//!
//! ```
//! use strictly_hangman::Game;
//!
//! let mut game = Game::new("hello").unwrap();
//! assert!(game.guess('l'));
//! assert_eq!(game.masked_word(), "_ _ L L _");
//! assert!(!game.guess('x'));
//! assert_eq!(game.mistake_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod language;
mod selector;

pub use error::{SelectError, WordError};
pub use game::{Game, GameId, GameStatus, PLACEHOLDER};
pub use language::Language;
pub use selector::select_random;
