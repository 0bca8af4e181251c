//! Core building blocks: players, moves, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{CoinMove, MoveRecord};
pub use config::{StripConfig, DEFAULT_MAX_GAP, MAX_POSITION, MIN_MAX_GAP, MIN_NUM_COINS};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
