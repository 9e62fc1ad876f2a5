//! Hangman - guess the word one letter at a time.
//!
//! The game logic lives in [`strictly_hangman`]; this crate puts it behind two
//! front ends.
//!
//! # Architecture
//!
//! - **Server**: REST API over a registry of running games
//! - **Registry**: games keyed by id, each behind its own lock
//! - **Dictionaries**: per-language word lists on disk
//! - **Console**: single-player game on stdin/stdout
//!
//! # Example
//!
//! ```no_run
//! use hangman::{GameServer, HangmanConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = HangmanConfig::default();
//! let app = GameServer::from_config(&config).router();
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod dictionary;
mod random;
mod registry;
mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, HangmanConfig};

// Crate-level exports - Console game
pub use console::{GameOrigin, PlayOutcome, play, single_character};

// Crate-level exports - Word sources
pub use dictionary::{Dictionaries, DictionaryError};
pub use random::RandomSource;

// Crate-level exports - Session management
pub use registry::{GuessReply, SessionRegistry};

// Crate-level exports - HTTP API
pub use server::{
    API_VERSION, ApiError, CreateGameQuery, GameResponse, GameServer, GameView, GuessRequest,
};

// Crate-level exports - Game types
pub use strictly_hangman::{Game, GameId, GameStatus, Language, SelectError, WordError};
