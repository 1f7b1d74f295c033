//! "Stacked Onet": the fruit-matching game built on the engine.
//!
//! - Eleven fruit symbols, dealt in pairs over several layers
//! - Two levels: Easy (50 pairs) and Hard (100 pairs)
//! - Three-minute rounds, 10 points per match
//! - Restart deals a fresh board at the same level
//!
//! Window, fonts, images and the menu screen belong to the host.

mod game;
mod level;

pub use game::{fruits, StackedGame, StackedGameBuilder};
pub use level::Level;
