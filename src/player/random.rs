use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::console::Console;
use crate::error::GameError;
use crate::game::{GameState, COLS};

/// A computer opponent that picks uniformly at random among legal columns,
/// optionally pausing first so its moves are easy to follow.
pub struct RandomAgent {
    rng: StdRng,
    delay: Duration,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            delay: Duration::ZERO,
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(
        &mut self,
        state: &GameState,
        _console: &mut dyn Console,
    ) -> Result<usize, GameError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let legal = state.legal_columns();
        match legal.choose(&mut self.rng) {
            Some(&column) => Ok(column),
            // Nothing legal left; any guess is rejected by the caller
            None => Ok(self.rng.random_range(1..=COLS)),
        }
    }

    fn label(&self) -> &str {
        "random"
    }
}
