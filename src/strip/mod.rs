//! The coin strip engine and its renderers.

pub mod engine;
pub mod render;

pub use engine::CoinStrip;
pub use render::{BarRenderer, BoxRenderer, StripRenderer};
