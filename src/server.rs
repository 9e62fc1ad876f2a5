//! HTTP API for hangman games.
//!
//! Routes:
//!
//! - `GET|POST /api/games?lang=ENG` creates a game with a random word (201)
//! - `PUT /api/games/{word}` creates a game with the given word (201)
//! - `GET /api/games/{id}` returns a running game (200, 404)
//! - `POST /api/games/{id}` with `{"character": "e"}` guesses a letter
//!   (200, 404, 422)
//! - `GET /health` reports liveness and the number of running games

use crate::config::HangmanConfig;
use crate::console::single_character;
use crate::dictionary::{Dictionaries, DictionaryError};
use crate::random::RandomSource;
use crate::registry::SessionRegistry;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::json;
use strictly_hangman::{Game, GameId, Language, WordError};
use tracing::{debug, error, info, instrument, warn};

/// Version of the response layout below.
pub const API_VERSION: u32 = 1;

/// Query of the random-game route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGameQuery {
    /// Language to draw the word from; the server default when absent.
    #[serde(default)]
    pub lang: Option<Language>,
}

/// Body of a guess.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuessRequest {
    /// The guessed letter; must be exactly one character.
    #[serde(default)]
    pub character: Option<String>,
}

/// Public view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Game id, the handle for later requests.
    pub id: GameId,
    /// Word with hidden letters as `_`, e.g. `H _ L L _`.
    pub mask: String,
    /// Number of wrong guesses.
    pub mistake_count: u32,
    /// Whether every letter is revealed.
    pub solved: bool,
    /// Revealed letters in guess order.
    pub guessed_letters: Vec<char>,
    /// The secret word, only once the game is solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            mask: game.masked_word(),
            mistake_count: game.mistake_count(),
            solved: game.is_solved(),
            guessed_letters: game.guessed_letters().to_vec(),
            word: game.is_solved().then(|| game.word().to_string()),
        }
    }
}

/// Envelope of every game response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    /// Layout version, currently [`API_VERSION`].
    pub version: u32,
    /// The game.
    pub game: GameView,
    /// Whether the guess hit; only present on guess responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

impl GameResponse {
    fn new(game: &Game, correct: Option<bool>) -> Self {
        Self {
            version: API_VERSION,
            game: GameView::from(game),
            correct,
        }
    }
}

/// Failures of an API request, each mapped to one status code.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// No running game has this id (404).
    #[display("Game {id} not found")]
    NotFound {
        /// The requested id.
        id: GameId,
    },
    /// The path segment is not a game id (400).
    #[display("Malformed game id {id:?}")]
    InvalidId {
        /// The raw path segment.
        id: String,
    },
    /// The guess body lacks exactly one character (422).
    #[display("Guess must contain exactly one character")]
    MalformedGuess,
    /// The custom word is not playable (422).
    #[display("{source}")]
    InvalidWord {
        /// Validation failure.
        source: WordError,
    },
    /// No random word could be produced (500).
    #[display("{source}")]
    Dictionary {
        /// Dictionary failure.
        source: DictionaryError,
    },
    /// The word selection task did not complete (500).
    #[display("Word selection task failed: {source}")]
    Task {
        /// Join failure.
        source: tokio::task::JoinError,
    },
}

impl From<WordError> for ApiError {
    fn from(source: WordError) -> Self {
        Self::InvalidWord { source }
    }
}

impl From<DictionaryError> for ApiError {
    fn from(source: DictionaryError) -> Self {
        Self::Dictionary { source }
    }
}

impl ApiError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::MalformedGuess | ApiError::InvalidWord { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Dictionary { .. } | ApiError::Task { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, %status, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Shared state of the HTTP handlers.
#[derive(Debug, Clone, new)]
pub struct GameServer {
    registry: SessionRegistry,
    dictionaries: Dictionaries,
    random: RandomSource,
    default_language: Language,
}

impl GameServer {
    /// Creates a server with an empty registry from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &HangmanConfig) -> Self {
        info!(
            dictionary_dir = %config.dictionary_dir().display(),
            default_language = %config.default_language(),
            "Creating game server"
        );
        Self::new(
            SessionRegistry::new(),
            Dictionaries::new(config.dictionary_dir().clone()),
            RandomSource::from_seed(*config.rng_seed()),
            *config.default_language(),
        )
    }

    /// Returns the registry of running games.
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Builds the router serving the API over this state.
    pub fn router(self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/api/games", get(create_random_game).post(create_random_game))
            .route(
                "/api/games/{game}",
                get(retrieve_game).put(create_custom_game).post(guess),
            )
            .layer(middleware::from_fn(log_request))
            .with_state(self)
    }
}

/// Logs every request with the status it produced.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    info!(%method, %uri, status = %response.status(), "Request handled");
    response
}

fn parse_id(raw: &str) -> Result<GameId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId { id: raw.to_string() })
}

#[instrument(skip(server))]
async fn health(State(server): State<GameServer>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "games": server.registry.len() }))
}

#[instrument(skip(server))]
async fn create_random_game(
    State(server): State<GameServer>,
    Query(query): Query<CreateGameQuery>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let language = query.lang.unwrap_or(server.default_language);
    let dictionaries = server.dictionaries.clone();
    let mut rng = server.random.rng();

    let game = tokio::task::spawn_blocking(move || dictionaries.generate(language, &mut rng))
        .await
        .map_err(|source| ApiError::Task { source })??;

    let response = GameResponse::new(&game, None);
    server.registry.create(game);
    Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(server))]
async fn create_custom_game(
    State(server): State<GameServer>,
    Path(word): Path<String>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let game = Game::new(&word)?;
    let response = GameResponse::new(&game, None);
    server.registry.create(game);
    Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(server))]
async fn retrieve_game(
    State(server): State<GameServer>,
    Path(raw_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let game = server.registry.get(&id).ok_or(ApiError::NotFound { id })?;
    Ok(Json(GameResponse::new(&game, None)))
}

#[instrument(skip(server))]
async fn guess(
    State(server): State<GameServer>,
    Path(raw_id): Path<String>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let character = request
        .character
        .as_deref()
        .and_then(single_character)
        .ok_or_else(|| {
            warn!(character = ?request.character, "Malformed guess");
            ApiError::MalformedGuess
        })?;

    let reply = server
        .registry
        .guess(&id, character)
        .ok_or(ApiError::NotFound { id })?;
    Ok(Json(GameResponse::new(reply.game(), Some(*reply.correct()))))
}
