//! Core building blocks: geometry, configuration, RNG and errors.
//!
//! Nothing here knows about cards or rounds.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::{BoardArea, RoundConfig, MATCH_REWARD};
pub use error::{ConfigError, SetupError};
pub use geometry::{overlaps, Point, Rect};
pub use rng::GameRng;
