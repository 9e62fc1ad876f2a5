//! Command-line interface for hangman.

use clap::{Parser, Subcommand};
use hangman::Language;
use std::path::PathBuf;

/// Hangman - guess the word before the gallows is complete
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Hangman game with a REST API and a console mode", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "HANGMAN_CONFIG",
        default_value = "hangman.toml"
    )]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game in the terminal
    Play {
        /// Language to draw the word from (ENG or GER)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Play with this word instead of a random one
        #[arg(short, long)]
        word: Option<String>,

        /// Mistakes allowed before losing
        #[arg(long)]
        max_mistakes: Option<u32>,

        /// Directory containing the word lists
        #[arg(long)]
        dictionary_dir: Option<PathBuf>,
    },

    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Directory containing the word lists
        #[arg(long)]
        dictionary_dir: Option<PathBuf>,
    },
}
