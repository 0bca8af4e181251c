//! Error types for strip construction and move application.
//!
//! A move that fails `is_legal_move` is not an error: interactive play
//! rejects it and the player retries. `IllegalMove` is only produced when
//! `move_coin` is asked to apply such a move anyway.

use crate::core::config::{MAX_POSITION, MIN_MAX_GAP, MIN_NUM_COINS};

/// Rejected strip parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least {min} coins must be used (got {0})", min = MIN_NUM_COINS)]
    TooFewCoins(usize),

    #[error("maximum gap must be at least {min} (got {0})", min = MIN_MAX_GAP)]
    GapTooSmall(usize),

    #[error("{num_coins} coins with maximum gap {max_gap} can reach past cell {max}", max = MAX_POSITION)]
    StripTooLong { num_coins: usize, max_gap: usize },
}

/// Errors surfaced by the coin strip engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinStripError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("positions {positions:?} are not a valid strip layout")]
    InvalidLayout { positions: Vec<usize> },

    #[error("illegal move: coin {coin} cannot move {distance} spaces left")]
    IllegalMove { coin: usize, distance: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::TooFewCoins(2).to_string(),
            "at least 3 coins must be used (got 2)"
        );
        assert_eq!(
            ConfigError::GapTooSmall(0).to_string(),
            "maximum gap must be at least 1 (got 0)"
        );
    }

    #[test]
    fn test_strip_too_long_display() {
        let err = ConfigError::StripTooLong { num_coins: 3, max_gap: 1 << 20 };
        assert_eq!(
            err.to_string(),
            "3 coins with maximum gap 1048576 can reach past cell 1048575"
        );
    }

    #[test]
    fn test_invalid_configuration_wraps_config_error() {
        let err: CoinStripError = ConfigError::TooFewCoins(1).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: at least 3 coins must be used (got 1)"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = CoinStripError::IllegalMove { coin: 1, distance: 10 };
        assert_eq!(err.to_string(), "illegal move: coin 1 cannot move 10 spaces left");
    }
}
