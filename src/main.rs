//! Hangman - Unified CLI
//!
//! Plays a console game or serves the REST API.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hangman::{Dictionaries, Game, GameOrigin, GameServer, HangmanConfig, RandomSource};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            lang,
            word,
            max_mistakes,
            dictionary_dir,
        } => {
            init_tracing("warn", true);
            let mut config = HangmanConfig::load(&cli.config)?;
            if let Some(lang) = lang {
                config = config.with_default_language(lang);
            }
            if let Some(max_mistakes) = max_mistakes {
                config = config.with_max_mistakes(max_mistakes);
            }
            if let Some(dir) = dictionary_dir {
                config = config.with_dictionary_dir(dir);
            }
            run_console(config, word)
        }
        Command::Serve {
            port,
            host,
            dictionary_dir,
        } => {
            init_tracing("info,hangman=debug", false);
            let mut config = HangmanConfig::load(&cli.config)?;
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(dir) = dictionary_dir {
                config = config.with_dictionary_dir(dir);
            }
            run_http_server(config).await
        }
    }
}

/// Installs the global subscriber; `RUST_LOG` overrides `default_filter`.
fn init_tracing(default_filter: &str, to_stderr: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if to_stderr {
        builder.with_writer(std::io::stderr).init();
    } else {
        builder.init();
    }
}

/// Play a single game on stdin/stdout
#[instrument(skip_all)]
fn run_console(config: HangmanConfig, word: Option<String>) -> Result<()> {
    let (mut game, origin) = match word {
        Some(word) => (
            Game::new(&word).context("Invalid custom word")?,
            GameOrigin::Custom,
        ),
        None => {
            let language = *config.default_language();
            let dictionaries = Dictionaries::new(config.dictionary_dir().clone());
            let mut rng = RandomSource::from_seed(*config.rng_seed()).rng();
            let game = dictionaries
                .generate(language, &mut rng)
                .context("Failed to generate a random game")?;
            (game, GameOrigin::Random(language))
        }
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let outcome = hangman::play(&mut game, origin, *config.max_mistakes(), stdin, stdout)?;
    info!(%outcome, "Console game over");
    Ok(())
}

/// Run the HTTP game server
async fn run_http_server(config: HangmanConfig) -> Result<()> {
    info!("Starting hangman HTTP server");

    let app = GameServer::from_config(&config).router();

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!("✅ Server ready at http://{}:{}/", config.host(), config.port());
    info!("🎮 Routes: /api/games, /api/games/{{id}}, /health");

    axum::serve(listener, app).await?;

    Ok(())
}
