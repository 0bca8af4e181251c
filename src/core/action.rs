//! Move representation.
//!
//! A `CoinMove` names a coin by its left-to-right index and how many cells
//! it should slide left. A `MoveRecord` is what a session keeps after the
//! move has been applied.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A request to slide one coin left.
///
/// ```
/// use coin_strip::core::CoinMove;
///
/// let mv = CoinMove::new(2, 3);
/// assert_eq!(mv.coin, 2);
/// assert_eq!(mv.distance, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinMove {
    /// Coin index, counted from the left end.
    pub coin: usize,

    /// Number of cells to move left. Zero is never legal.
    pub distance: usize,
}

impl CoinMove {
    /// Create a new move.
    #[must_use]
    pub const fn new(coin: usize, distance: usize) -> Self {
        Self { coin, distance }
    }
}

impl std::fmt::Display for CoinMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coin {} left {}", self.coin, self.distance)
    }
}

/// An applied move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move applied.
    pub action: CoinMove,

    /// Cell the coin left.
    pub from: usize,

    /// Cell the coin landed on.
    pub to: usize,

    /// 0-based position in the session's move history.
    pub sequence: usize,
}
