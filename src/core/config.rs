//! Strip generation parameters.
//!
//! A strip is described by how many coins it holds and the largest run of
//! empty cells allowed in front of each coin. Hosts either build a
//! `StripConfig` explicitly or sample one with `StripConfig::sample`.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::ConfigError;

/// Fewest coins a strip may hold.
pub const MIN_NUM_COINS: usize = 3;

/// Smallest permitted `max_gap`.
pub const MIN_MAX_GAP: usize = 1;

/// Gap bound used when the coin count is sampled.
pub const DEFAULT_MAX_GAP: usize = 4;

/// Rightmost cell a coin may occupy.
///
/// Keeps cell arithmetic, rendering, and move enumeration bounded.
pub const MAX_POSITION: usize = (1 << 20) - 1;

/// Parameters for generating a strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Number of coins (at least 3).
    pub num_coins: usize,

    /// Maximum empty cells between a coin and its left neighbor,
    /// or between the left edge and coin 0 (at least 1).
    pub max_gap: usize,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            num_coins: MIN_NUM_COINS,
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

impl StripConfig {
    /// Create a new config. Call `validate` before generating from it.
    #[must_use]
    pub const fn new(num_coins: usize, max_gap: usize) -> Self {
        Self { num_coins, max_gap }
    }

    /// Draw a config with a random coin count.
    ///
    /// Starts at `MIN_NUM_COINS` and adds a coin for every successful fair
    /// flip, so counts are geometric with mean 4. Uses `DEFAULT_MAX_GAP`.
    /// The count stops growing once the strip would pass `MAX_POSITION`.
    pub fn sample(rng: &mut GameRng) -> Self {
        let max_coins = (MAX_POSITION + 1) / (DEFAULT_MAX_GAP + 1);
        let mut num_coins = MIN_NUM_COINS;
        while num_coins < max_coins && rng.flip() {
            num_coins += 1;
        }
        Self::new(num_coins, DEFAULT_MAX_GAP)
    }

    /// Set the coin count.
    #[must_use]
    pub fn with_num_coins(mut self, num_coins: usize) -> Self {
        self.num_coins = num_coins;
        self
    }

    /// Set the maximum gap.
    #[must_use]
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Check the coin count and gap bound.
    ///
    /// The widest possible layout must also fit within `MAX_POSITION`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_coins < MIN_NUM_COINS {
            return Err(ConfigError::TooFewCoins(self.num_coins));
        }
        if self.max_gap < MIN_MAX_GAP {
            return Err(ConfigError::GapTooSmall(self.max_gap));
        }
        let span = self
            .max_gap
            .checked_add(1)
            .and_then(|cell| cell.checked_mul(self.num_coins));
        if span.map_or(true, |span| span > MAX_POSITION + 1) {
            return Err(ConfigError::StripTooLong {
                num_coins: self.num_coins,
                max_gap: self.max_gap,
            });
        }
        Ok(())
    }
}
