//! Turn-taking rules layered on the strip engine.
//!
//! The strip decides whether a move is legal; `GameSession` decides whose
//! turn it is and who has won.

pub mod session;

pub use session::GameSession;
