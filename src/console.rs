//! Interactive console game.
//!
//! Reads one guess per line and writes the running game to any writer, so the
//! loop runs the same against a terminal or an in-memory buffer.

use std::io::{self, BufRead, Write};
use strictly_hangman::{Game, GameStatus, Language};
use tracing::{debug, info, instrument};

/// How the console game was set up, for the opening announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOrigin {
    /// Word drawn from a language's dictionary.
    Random(Language),
    /// Word supplied by the player.
    Custom,
}

/// How a console game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PlayOutcome {
    /// Every letter revealed.
    Won,
    /// Mistake ceiling exceeded.
    Lost,
    /// Input ended before the game did.
    Abandoned,
}

/// Returns the only character of `input`, or `None` unless it has exactly one.
pub fn single_character(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => Some(character),
        _ => None,
    }
}

/// Plays `game` to the end against `input`/`output`.
///
/// The loop keeps asking while the game is unsolved and no more than
/// `max_mistakes` mistakes were made, so the player loses on mistake
/// `max_mistakes + 1`.
///
/// # Errors
///
/// Propagates I/O failures of `input` or `output`.
#[instrument(skip(game, input, output), fields(game_id = %game.id()))]
pub fn play<R, W>(
    game: &mut Game,
    origin: GameOrigin,
    max_mistakes: u32,
    mut input: R,
    mut output: W,
) -> io::Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
{
    match origin {
        GameOrigin::Random(language) => {
            writeln!(output, "A random {} game was generated.", language.name())?
        }
        GameOrigin::Custom => writeln!(output, "A custom game was created.")?,
    }
    writeln!(output, "Here it is: {}", game.masked_word())?;
    writeln!(output, "You are allowed to do {} mistakes!", max_mistakes)?;

    let mut line = String::new();
    while game.status(max_mistakes) == GameStatus::InProgress {
        writeln!(output)?;
        writeln!(output, "Word: {}", game.masked_word())?;
        writeln!(output, "Total mistakes: {}", game.mistake_count())?;
        write!(output, "Please enter one character to guess: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            break;
        }

        match single_character(line.trim_end_matches(['\r', '\n'])) {
            Some(character) => {
                if game.guess(character) {
                    writeln!(output, "That was correct!")?;
                } else {
                    writeln!(output, "That was not correct!")?;
                }
            }
            None => writeln!(output, "Please enter exactly one character!")?,
        }
    }

    let outcome = match game.status(max_mistakes) {
        GameStatus::Won => PlayOutcome::Won,
        GameStatus::Lost => PlayOutcome::Lost,
        GameStatus::InProgress => PlayOutcome::Abandoned,
    };

    writeln!(output)?;
    if outcome == PlayOutcome::Won {
        writeln!(output, "You won!")?;
    } else {
        writeln!(output, "You lost!")?;
    }
    writeln!(output, "The word was: {}", game.word())?;
    output.flush()?;

    info!(%outcome, mistakes = game.mistake_count(), "Console game finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character() {
        assert_eq!(single_character("a"), Some('a'));
        assert_eq!(single_character("ß"), Some('ß'));
        assert_eq!(single_character(""), None);
        assert_eq!(single_character("ab"), None);
    }
}
