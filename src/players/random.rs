//! Computer player that picks uniformly random open squares.

use super::{MoveSource, PlayerError};
use crate::games::tictactoe::{Game, Position, SamplingStrategy, select_random_move};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Random computer opponent.
pub struct RandomPlayer<R = ChaCha8Rng> {
    name: String,
    rng: R,
    strategy: SamplingStrategy,
}

impl RandomPlayer<ChaCha8Rng> {
    /// Creates a player whose choices are fixed by `seed`.
    pub fn seeded(name: impl Into<String>, seed: u64, strategy: SamplingStrategy) -> Self {
        let name = name.into();
        info!(player = %name, seed, %strategy, "Creating seeded random player");
        Self::new(name, ChaCha8Rng::seed_from_u64(seed), strategy)
    }

    /// Creates a player seeded from operating system entropy.
    pub fn from_entropy(name: impl Into<String>, strategy: SamplingStrategy) -> Self {
        Self::new(name, ChaCha8Rng::from_entropy(), strategy)
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R, strategy: SamplingStrategy) -> Self {
        Self {
            name: name.into(),
            rng,
            strategy,
        }
    }
}

impl<R: Rng> MoveSource for RandomPlayer<R> {
    #[instrument(skip(self, game), fields(player = %self.name, strategy = %self.strategy))]
    fn get_move(&mut self, game: &Game) -> Result<Position, PlayerError> {
        let pos = select_random_move(game.board(), &mut self.rng, self.strategy)
            .ok_or(PlayerError::NoMovesAvailable)?;
        debug!(position = %pos, "Computer chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
