//! Player identification for the two-player game.
//!
//! Players are stored 0-based but displayed 1-based, so `PlayerId::FIRST`
//! prints as "Player 1".

use serde::{Deserialize, Serialize};

/// One of the two alternating players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: Self = Self(0);

    /// The player who moves second.
    pub const SECOND: Self = Self(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player whose turn follows this one.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}
