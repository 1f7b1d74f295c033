//! Round orchestration.
//!
//! - `Round`: per-tick driver over one board
//! - `RoundSnapshot`: what a renderer reads each frame

pub mod snapshot;
pub mod state;

pub use snapshot::RoundSnapshot;
pub use state::Round;
