//! # coin-strip
//!
//! Game-state engine for the Silver Dollar Game (CoinStrip).
//!
//! Coins sit on distinct cells of a strip that is unbounded to the right.
//! Two players alternate sliding a single coin left. A coin may not pass
//! the left edge, land on another coin, or jump over one. The game ends when
//! the coins are packed into the leftmost cells, and the player who made the
//! last move wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness comes from an injected, seedable
//!    `GameRng`. Same seed, same strip.
//!
//! 2. **Recoverable errors**: Bad parameters and forced illegal moves are
//!    `Result`s. Asking whether a move is legal is never an error.
//!
//! 3. **No I/O**: Prompting and printing belong to the host. The engine only
//!    renders text on request.
//!
//! ## Modules
//!
//! - `core`: Players, moves, RNG, configuration
//! - `strip`: The `CoinStrip` engine and its renderers
//! - `rules`: `GameSession` turn-taking and winner detection
//! - `error`: Error types
//!
//! ```
//! use coin_strip::{CoinMove, CoinStrip};
//!
//! let mut strip = CoinStrip::from_positions(vec![0, 5, 9]).unwrap();
//! assert!(!strip.is_legal_move(1, 10));
//! strip.move_coin(2, 3).unwrap();
//! assert_eq!(strip.positions(), &[0, 5, 6]);
//! assert!(strip.legal_moves().contains(&CoinMove::new(1, 4)));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod strip;

// Re-export commonly used types
pub use crate::core::{
    CoinMove, MoveRecord, PlayerId,
    GameRng, GameRngState,
    StripConfig, DEFAULT_MAX_GAP, MAX_POSITION, MIN_MAX_GAP, MIN_NUM_COINS,
};

pub use crate::error::{CoinStripError, ConfigError};

pub use crate::rules::GameSession;

pub use crate::strip::{BarRenderer, BoxRenderer, CoinStrip, StripRenderer};
