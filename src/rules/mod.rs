//! Round-ending rules.
//!
//! Decides when a round is over and why. The round driver calls
//! `evaluate` once per tick, after promotion.

pub mod terminal;

pub use terminal::{evaluate, find_valid_pair, is_stalemate, RoundResult, TerminalReason};
