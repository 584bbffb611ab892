//! Bagh-Chal rules: legality, move generation, transitions and game end.
//!
//! Everything here is implemented as inherent methods on
//! [`GameState`](crate::core::GameState), split by concern:
//! - [`engine`]: legal moves, successors and checked move application
//! - [`outcome`]: win, loss and draw detection

pub mod engine;
pub mod outcome;

pub use outcome::GameResult;
