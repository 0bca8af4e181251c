//! The coin strip: coin positions plus the rules that move them.
//!
//! ## Invariants
//!
//! Every `CoinStrip` holds at least `MIN_NUM_COINS` coins at strictly
//! increasing, non-negative positions. Coin `i` is always the i-th coin from
//! the left; moves never reorder coins.
//!
//! ## Terminal state
//!
//! The game is over when the rightmost coin sits on cell `n - 1`. With
//! strictly increasing positions that forces coin `i` onto cell `i` for every
//! `i`, which leaves no gap for any coin to move into.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::render::{BoxRenderer, StripRenderer};
use crate::core::{CoinMove, GameRng, StripConfig, MAX_POSITION, MIN_NUM_COINS};
use crate::error::CoinStripError;

/// Inline capacity for positions. Sampled strips average 4 coins.
type Positions = SmallVec<[usize; 8]>;

/// Coins on a one-dimensional strip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct CoinStrip {
    positions: Positions,
}

impl CoinStrip {
    /// Generate a strip from explicit parameters.
    ///
    /// Each coin is placed `0..=max_gap` cells past the cell after its left
    /// neighbor (coin 0 is measured from the left edge).
    pub fn generate(config: &StripConfig, rng: &mut GameRng) -> Result<Self, CoinStripError> {
        config.validate()?;
        Ok(Self::place(config, rng))
    }

    /// Generate a strip with a random coin count and the default gap bound.
    pub fn random(rng: &mut GameRng) -> Self {
        let config = StripConfig::sample(rng);
        Self::place(&config, rng)
    }

    /// Lay out coins for an already validated config.
    fn place(config: &StripConfig, rng: &mut GameRng) -> Self {
        let mut positions = Positions::with_capacity(config.num_coins);
        let mut next_free = 0;
        for _ in 0..config.num_coins {
            let pos = next_free + rng.gen_inclusive(0, config.max_gap);
            positions.push(pos);
            next_free = pos + 1;
        }

        debug!(
            num_coins = config.num_coins,
            max_gap = config.max_gap,
            ?positions,
            "generated strip"
        );
        Self { positions }
    }

    /// Generate a strip from explicit parameters with a fresh seeded RNG.
    pub fn with_seed(num_coins: usize, max_gap: usize, seed: u64) -> Result<Self, CoinStripError> {
        Self::generate(&StripConfig::new(num_coins, max_gap), &mut GameRng::new(seed))
    }

    /// Build a strip from known positions.
    ///
    /// Fails with `InvalidLayout` unless there are at least `MIN_NUM_COINS`
    /// strictly increasing positions, none past `MAX_POSITION`.
    pub fn from_positions(positions: impl Into<Vec<usize>>) -> Result<Self, CoinStripError> {
        let positions = positions.into();
        let increasing = positions.windows(2).all(|w| w[0] < w[1]);
        let in_bounds = positions.last().is_some_and(|&last| last <= MAX_POSITION);

        if positions.len() < MIN_NUM_COINS || !increasing || !in_bounds {
            return Err(CoinStripError::InvalidLayout { positions });
        }
        Ok(Self {
            positions: Positions::from_vec(positions),
        })
    }

    // === Accessors ===

    /// Coin positions, left to right.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of coins.
    #[must_use]
    pub fn num_coins(&self) -> usize {
        self.positions.len()
    }

    /// Position of a coin, or `None` if the index is out of range.
    #[must_use]
    pub fn position(&self, coin: usize) -> Option<usize> {
        self.positions.get(coin).copied()
    }

    /// Position of the rightmost coin, which is also the largest position.
    #[must_use]
    pub fn rightmost(&self) -> usize {
        // Construction guarantees at least MIN_NUM_COINS entries.
        self.positions[self.positions.len() - 1]
    }

    /// Empty cells between a coin and its left neighbor (or the left edge).
    #[must_use]
    pub fn gap(&self, coin: usize) -> Option<usize> {
        let pos = self.position(coin)?;
        let floor = match coin {
            0 => 0,
            _ => self.positions[coin - 1] + 1,
        };
        Some(pos - floor)
    }

    /// Single-cell steps left before the strip is packed: the sum over all
    /// coins of `position[i] - i`.
    ///
    /// Every legal move shrinks this by exactly its distance, and it is zero
    /// exactly when the game is over.
    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        // position[i] >= i by strict increase
        self.positions
            .iter()
            .enumerate()
            .map(|(coin, &pos)| pos - coin)
            .sum()
    }

    // === Rules ===

    /// Whether sliding `coin` left by `distance` cells is allowed.
    ///
    /// Out-of-range coins and zero distances are simply illegal. Never
    /// mutates the strip.
    #[must_use]
    pub fn is_legal_move(&self, coin: usize, distance: usize) -> bool {
        if distance == 0 {
            trace!(coin, "rejected zero-distance move");
            return false;
        }
        let Some(pos) = self.position(coin) else {
            trace!(coin, num_coins = self.num_coins(), "rejected unknown coin");
            return false;
        };
        let Some(target) = pos.checked_sub(distance) else {
            trace!(coin, distance, "rejected move past left edge");
            return false;
        };
        // Only the immediate left neighbor matters: everything further left
        // is strictly further left still.
        if coin > 0 && target <= self.positions[coin - 1] {
            trace!(coin, distance, "rejected move onto or past neighbor");
            return false;
        }
        true
    }

    /// Slide `coin` left by `distance` cells.
    ///
    /// Re-checks legality and leaves the strip untouched on failure.
    pub fn move_coin(&mut self, coin: usize, distance: usize) -> Result<(), CoinStripError> {
        if !self.is_legal_move(coin, distance) {
            return Err(CoinStripError::IllegalMove { coin, distance });
        }
        let from = self.positions[coin];
        self.positions[coin] = from - distance;

        debug!(coin, from, to = from - distance, "moved coin");
        Ok(())
    }

    /// Apply a `CoinMove`.
    pub fn apply(&mut self, action: CoinMove) -> Result<(), CoinStripError> {
        self.move_coin(action.coin, action.distance)
    }

    /// Every legal move, ordered by coin then distance.
    ///
    /// One entry per empty cell in front of each coin, so the length is the
    /// sum of all gaps (at most `MAX_POSITION`). Empty exactly when the game
    /// is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<CoinMove> {
        (0..self.num_coins())
            .flat_map(|coin| {
                let max = self.gap(coin).unwrap_or(0);
                (1..=max).map(move |distance| CoinMove::new(coin, distance))
            })
            .collect()
    }

    /// True when every coin is packed against the left edge.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rightmost() == self.num_coins() - 1
    }

    // === Rendering ===

    /// Bordered-grid rendering.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&BoxRenderer)
    }

    /// Render with any renderer.
    #[must_use]
    pub fn render_with(&self, renderer: &impl StripRenderer) -> String {
        renderer.render(&self.positions)
    }
}

impl std::fmt::Display for CoinStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<Vec<usize>> for CoinStrip {
    type Error = CoinStripError;

    fn try_from(positions: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_positions(positions)
    }
}

impl From<CoinStrip> for Vec<usize> {
    fn from(strip: CoinStrip) -> Self {
        strip.positions.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::strip::render::BarRenderer;

    fn strip(positions: &[usize]) -> CoinStrip {
        CoinStrip::from_positions(positions.to_vec()).unwrap()
    }

    #[test]
    fn test_packed_strip_is_game_over() {
        assert!(strip(&[0, 1, 2]).is_game_over());
    }

    #[test]
    fn test_gapped_strip_is_not_over() {
        assert!(!strip(&[0, 1, 3]).is_game_over());
        assert!(!strip(&[1, 2, 3]).is_game_over());
    }

    #[test]
    fn test_legal_move_without_left_neighbor() {
        let s = strip(&[2, 4, 6]);
        assert!(s.is_legal_move(0, 1));
        assert!(s.is_legal_move(0, 2));
        assert!(!s.is_legal_move(0, 3));
    }

    #[test]
    fn test_cannot_land_on_neighbor() {
        let s = strip(&[2, 4, 6]);
        assert!(s.is_legal_move(1, 1));
        assert!(!s.is_legal_move(1, 2));
    }

    #[test]
    fn test_cannot_jump_neighbor() {
        let s = strip(&[0, 5, 9]);
        assert!(!s.is_legal_move(2, 5));
        assert!(!s.is_legal_move(2, 7));
    }

    #[test]
    fn test_cannot_pass_left_edge() {
        assert!(!strip(&[0, 5, 9]).is_legal_move(1, 10));
    }

    #[test]
    fn test_zero_distance_and_bad_index_rejected() {
        let s = strip(&[0, 5, 9]);
        assert!(!s.is_legal_move(1, 0));
        assert!(!s.is_legal_move(3, 1));
        assert!(!s.is_legal_move(usize::MAX, 1));
    }

    #[test]
    fn test_move_coin_to_terminal() {
        let mut s = strip(&[0, 5, 9]);
        s.move_coin(2, 3).unwrap();
        assert_eq!(s.positions(), &[0, 5, 6]);
        assert!(!s.is_game_over());

        s.move_coin(1, 4).unwrap();
        s.move_coin(2, 4).unwrap();
        assert_eq!(s.positions(), &[0, 1, 2]);
        assert!(s.is_game_over());
    }

    #[test]
    fn test_illegal_move_leaves_state() {
        let mut s = strip(&[0, 5, 9]);
        let err = s.move_coin(2, 4).unwrap_err();

        assert_eq!(err, CoinStripError::IllegalMove { coin: 2, distance: 4 });
        assert_eq!(s.positions(), &[0, 5, 9]);
    }

    #[test]
    fn test_generate_rejects_bad_config() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            CoinStrip::generate(&StripConfig::new(2, 4), &mut rng),
            Err(CoinStripError::InvalidConfiguration(ConfigError::TooFewCoins(2)))
        );
        assert_eq!(
            CoinStrip::generate(&StripConfig::new(3, 0), &mut rng),
            Err(CoinStripError::InvalidConfiguration(ConfigError::GapTooSmall(0)))
        );
    }

    #[test]
    fn test_generate_is_seeded() {
        let a = CoinStrip::with_seed(6, 3, 99).unwrap();
        let b = CoinStrip::with_seed(6, 3, 99).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.num_coins(), 6);
    }

    #[test]
    fn test_generate_gaps_bounded() {
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            let s = CoinStrip::generate(&StripConfig::new(5, 2), &mut rng).unwrap();
            for coin in 0..5 {
                assert!(s.gap(coin).unwrap() <= 2);
            }
        }
    }

    #[test]
    fn test_random_strip() {
        let mut rng = GameRng::new(11);
        for _ in 0..50 {
            let s = CoinStrip::random(&mut rng);
            assert!(s.num_coins() >= MIN_NUM_COINS);
            assert!((0..s.num_coins()).all(|c| s.gap(c).unwrap() <= 4));
        }
    }

    #[test]
    fn test_from_positions_rejects_bad_layouts() {
        assert!(CoinStrip::from_positions(vec![0, 1]).is_err());
        assert!(CoinStrip::from_positions(vec![0, 2, 2]).is_err());
        assert!(CoinStrip::from_positions(vec![3, 1, 4]).is_err());
        assert!(CoinStrip::from_positions(vec![0, 1, usize::MAX]).is_err());
        assert!(CoinStrip::from_positions(vec![0, 1, MAX_POSITION + 1]).is_err());
    }

    #[test]
    fn test_layout_at_max_position() {
        let s = strip(&[0, 1, MAX_POSITION]);
        assert_eq!(s.rightmost(), MAX_POSITION);
        assert_eq!(s.remaining_steps(), MAX_POSITION - 2);
        assert!(s.is_legal_move(2, MAX_POSITION - 2));
        assert!(!s.is_legal_move(2, MAX_POSITION - 1));
    }

    #[test]
    fn test_remaining_steps_tracks_every_coin() {
        let mut s = strip(&[2, 4, 6]);
        assert_eq!(s.remaining_steps(), 2 + 3 + 4);

        // Moving a coin other than the rightmost still counts
        s.move_coin(0, 1).unwrap();
        assert_eq!(s.remaining_steps(), 8);

        s.move_coin(1, 2).unwrap();
        assert_eq!(s.remaining_steps(), 6);

        s.move_coin(0, 1).unwrap();
        s.move_coin(2, 3).unwrap();
        assert_eq!(s.positions(), &[0, 2, 3]);
        assert_eq!(s.remaining_steps(), 2);

        s.move_coin(1, 1).unwrap();
        s.move_coin(2, 1).unwrap();
        assert_eq!(s.remaining_steps(), 0);
        assert!(s.is_game_over());
    }

    #[test]
    fn test_gap_and_remaining_steps() {
        let s = strip(&[1, 2, 6]);
        assert_eq!(s.gap(0), Some(1));
        assert_eq!(s.gap(1), Some(0));
        assert_eq!(s.gap(2), Some(3));
        assert_eq!(s.gap(3), None);
        assert_eq!(s.remaining_steps(), 1 + 1 + 4);
    }

    #[test]
    fn test_legal_moves() {
        let s = strip(&[1, 2, 4]);
        assert_eq!(
            s.legal_moves(),
            vec![CoinMove::new(0, 1), CoinMove::new(2, 1)]
        );
        assert!(strip(&[0, 1, 2]).legal_moves().is_empty());
    }

    #[test]
    fn test_render_variants() {
        let s = strip(&[0, 2, 3]);
        assert_eq!(s.to_string(), s.render());
        assert_eq!(s.render_with(&BarRenderer), "| 0 |   | 1 | 2 |");
    }

    #[test]
    fn test_serde_validates_layout() {
        let s = strip(&[0, 5, 9]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[0,5,9]");
        assert_eq!(serde_json::from_str::<CoinStrip>(&json).unwrap(), s);

        assert!(serde_json::from_str::<CoinStrip>("[4,2,9]").is_err());
    }
}
