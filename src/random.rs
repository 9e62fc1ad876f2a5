//! Where word selection gets its randomness.

use crate::registry::lock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument};

/// Source of the generators handed to word selection.
///
/// `Secure` seeds every generator from the thread-local CSPRNG. `Seeded`
/// derives them from one shared, seeded generator, so a server started with
/// the same seed deals the same sequence of words.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// Unpredictable, seeded from the operating system.
    #[default]
    Secure,
    /// Reproducible sequence from a fixed seed.
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    /// Picks `Seeded` when a seed is given, `Secure` otherwise.
    #[instrument]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                info!(seed, "Using seeded word selection");
                Self::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
            }
            None => Self::Secure,
        }
    }

    /// Returns a fresh generator for one selection.
    pub fn rng(&self) -> StdRng {
        match self {
            Self::Secure => StdRng::from_rng(&mut rand::rng()),
            Self::Seeded(shared) => StdRng::from_rng(&mut *lock(shared)),
        }
    }
}
