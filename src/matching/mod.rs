//! Selection and match resolution.
//!
//! ## Key Types
//!
//! - `Selection`: the 0/1-card buffer
//! - `MatchStateMachine`: validates pairs, removes matches, keeps score
//! - `SelectOutcome`: what a selection attempt did

pub mod machine;
pub mod selection;

pub use machine::{valid_match, MatchStateMachine};
pub use selection::{RejectReason, SelectOutcome, Selection};
