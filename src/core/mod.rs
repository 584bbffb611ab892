//! Core types: coordinates, the board graph, game state, moves, RNG, errors.
//!
//! Everything here is a plain value. The rules that turn one state into the
//! next live in [`crate::rules`].

pub mod action;
pub mod config;
pub mod coord;
pub mod error;
pub mod key;
pub mod lattice;
pub mod progress;
pub mod rng;
pub mod side;
pub mod state;

pub use action::Move;
pub use coord::Coord;
pub use error::{LayoutError, MoveError};
pub use key::BoardKey;
pub use progress::ProgressWindow;
pub use rng::GameRng;
pub use side::Side;
pub use state::GameState;
