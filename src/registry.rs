//! Registry of running games for the HTTP server.

use derive_getters::Getters;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_hangman::{Game, GameId};
use tracing::{debug, info, instrument, warn};

/// A game behind its own lock, so guesses on different games never contend.
type SharedGame = Arc<Mutex<Game>>;

/// Locks a mutex, recovering the data if a previous holder panicked.
///
/// Every mutation of the guarded values is a single step, so a poisoned
/// lock never exposes a half-updated game.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Result of a guess made through the registry.
#[derive(Debug, Clone, Getters)]
pub struct GuessReply {
    /// Whether the letter occurs in the word.
    correct: bool,
    /// Snapshot of the game right after the guess.
    game: Game,
}

/// Maps game ids to running games.
///
/// Cloning is cheap and every clone shares the same games. Solved games are
/// removed as soon as the winning guess lands; games that merely pile up
/// mistakes stay registered.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    games: Arc<Mutex<HashMap<GameId, SharedGame>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session registry");
        Self::default()
    }

    /// Registers a game under its own id and returns that id.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn create(&self, game: Game) -> GameId {
        let id = game.id();
        let previous = lock(&self.games).insert(id, Arc::new(Mutex::new(game)));
        if previous.is_some() {
            warn!("Replaced a game registered under the same id");
        }
        info!("Registered game");
        id
    }

    /// Returns a snapshot of the game, or `None` if no such game is running.
    #[instrument(skip(self))]
    pub fn get(&self, id: &GameId) -> Option<Game> {
        let shared = lock(&self.games).get(id).cloned();
        match shared {
            Some(shared) => Some(lock(&shared).clone()),
            None => {
                debug!("Game not found");
                None
            }
        }
    }

    /// Removes a game. Removing an unknown id does nothing.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &GameId) -> bool {
        let removed = lock(&self.games).remove(id).is_some();
        debug!(removed, "Remove requested");
        removed
    }

    /// Guesses a letter on a running game.
    ///
    /// The guess runs under the game's own lock. If it solves the game, the
    /// game is removed from the registry before that lock is released, so a
    /// solved game never takes another guess. Returns `None` for unknown or
    /// already solved games.
    ///
    /// Lock order is game, then map.
    #[instrument(skip(self))]
    pub fn guess(&self, id: &GameId, character: char) -> Option<GuessReply> {
        let Some(shared) = lock(&self.games).get(id).cloned() else {
            debug!("Game not found");
            return None;
        };

        let mut game = lock(&shared);
        if game.is_solved() {
            debug!("Game already solved");
            return None;
        }

        let correct = game.guess(character);
        if game.is_solved() {
            info!("Game solved, removing from registry");
            self.remove(id);
        }

        Some(GuessReply {
            correct,
            game: game.clone(),
        })
    }

    /// Number of running games.
    pub fn len(&self) -> usize {
        lock(&self.games).len()
    }

    /// Whether no games are running.
    pub fn is_empty(&self) -> bool {
        lock(&self.games).is_empty()
    }

    /// Ids of all running games.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<GameId> {
        let ids: Vec<_> = lock(&self.games).keys().copied().collect();
        debug!(count = ids.len(), "Listed games");
        ids
    }
}
