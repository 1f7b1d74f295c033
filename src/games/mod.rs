//! Concrete games built on the engine.

pub mod stacked;
