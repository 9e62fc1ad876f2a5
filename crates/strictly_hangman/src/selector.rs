//! Uniform word selection from a stream of lines.
//!
//! Uses reservoir sampling with a reservoir of one: the n-th line replaces
//! the current pick with probability 1/n, so after N lines every line has
//! been kept with probability 1/N. Only the current pick is held in memory.

use crate::error::SelectError;
use rand::Rng;
use std::io::BufRead;
use tracing::{debug, instrument};

/// Picks one line of `source` uniformly at random in a single pass.
///
/// # Errors
///
/// Returns [`SelectError::EmptySource`] if the source has no lines and
/// [`SelectError::Io`] if reading fails.
#[instrument(skip_all)]
pub fn select_random<S, R>(source: S, rng: &mut R) -> Result<String, SelectError>
where
    S: BufRead,
    R: Rng,
{
    let mut selected = None;
    let mut count: u64 = 0;

    for line in source.lines() {
        let line = line?;
        count += 1;
        if rng.random_range(0..count) == 0 {
            selected = Some(line);
        }
    }

    debug!(count, "Scanned word source");
    selected.ok_or(SelectError::EmptySource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[test]
    fn test_single_line_is_always_selected() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = select_random(Cursor::new("ONLY\n"), &mut rng).expect("One line");
            assert_eq!(word, "ONLY");
        }
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = select_random(Cursor::new("WORD\r\n"), &mut rng).expect("One line");
        assert_eq!(word, "WORD");
    }
}
