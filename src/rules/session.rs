//! Two-player session around a `CoinStrip`.
//!
//! Player 1 moves first. A legal move is applied, recorded, and passes the
//! turn; an illegal move is rejected and the same player goes again. Once
//! the strip is packed, the player who made the last move wins.

use im::Vector;
use tracing::{debug, info};

use crate::core::{CoinMove, GameRng, GameRngState, MoveRecord, PlayerId, StripConfig};
use crate::error::CoinStripError;
use crate::strip::CoinStrip;

/// A game in progress: the strip, whose turn it is, and what has been played.
#[derive(Clone, Debug)]
pub struct GameSession {
    strip: CoinStrip,
    rng: GameRng,
    active_player: PlayerId,
    history: Vector<MoveRecord>,
}

impl GameSession {
    /// Start a session on a strip generated from `config`.
    pub fn new(config: &StripConfig, mut rng: GameRng) -> Result<Self, CoinStripError> {
        let strip = CoinStrip::generate(config, &mut rng)?;
        Ok(Self::with_rng(strip, rng))
    }

    /// Start a session on a strip with a random coin count.
    pub fn random(mut rng: GameRng) -> Self {
        let strip = CoinStrip::random(&mut rng);
        Self::with_rng(strip, rng)
    }

    /// Start a session on an existing strip. `rng` feeds later restarts.
    pub fn from_strip(strip: CoinStrip, rng: GameRng) -> Self {
        Self::with_rng(strip, rng)
    }

    fn with_rng(strip: CoinStrip, rng: GameRng) -> Self {
        debug!(num_coins = strip.num_coins(), seed = rng.seed(), "session started");
        Self {
            strip,
            rng,
            active_player: PlayerId::FIRST,
            history: Vector::new(),
        }
    }

    /// Replace the strip with a fresh one from `config`, drawing from this
    /// session's RNG. Player 1 moves first again.
    ///
    /// On error the current game is left as it was.
    pub fn restart(&mut self, config: &StripConfig) -> Result<(), CoinStripError> {
        self.strip = CoinStrip::generate(config, &mut self.rng)?;
        self.active_player = PlayerId::FIRST;
        self.history.clear();
        debug!(num_coins = self.strip.num_coins(), "session restarted");
        Ok(())
    }

    /// The strip being played.
    #[must_use]
    pub fn strip(&self) -> &CoinStrip {
        &self.strip
    }

    /// The player who moves next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current RNG state, for reproducing later restarts.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Play a move for the active player.
    ///
    /// On `IllegalMove` nothing changes and the same player is still to move.
    pub fn play(&mut self, action: CoinMove) -> Result<MoveRecord, CoinStripError> {
        let from = self
            .strip
            .position(action.coin)
            .ok_or(CoinStripError::IllegalMove {
                coin: action.coin,
                distance: action.distance,
            })?;
        self.strip.apply(action)?;

        let record = MoveRecord {
            player: self.active_player,
            action,
            from,
            to: from - action.distance,
            sequence: self.history.len(),
        };
        self.history.push_back(record.clone());
        self.active_player = self.active_player.other();

        if self.strip.is_game_over() {
            info!(winner = %record.player, moves = self.history.len(), "game over");
        }
        Ok(record)
    }

    /// Whether no legal move remains.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.strip.is_game_over()
    }

    /// The winner, once the game is over.
    ///
    /// This is the player who made the last move. A strip that starts
    /// packed has no moves, and Player 2 is declared the winner.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.is_over().then(|| self.active_player.other())
    }
}
