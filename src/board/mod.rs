//! Board generation.
//!
//! Produces the card registry a round starts from: symbol pairs scattered
//! over several layers with no overlap inside any one layer.

pub mod generator;

pub use generator::BoardGenerator;
