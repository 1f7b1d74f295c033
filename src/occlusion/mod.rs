//! Occlusion engine and layer promotion.
//!
//! - `is_unblocked` / `unblocked_set`: reachability over any card collection
//! - `Occlusion`: cached reachability for one snapshot
//! - `promote`: lift freed cards to the top layer

pub mod engine;
pub mod promotion;

pub use engine::{is_unblocked, unblocked_set, Occlusion};
pub use promotion::promote;
