//! # stacked-onet
//!
//! Occlusion and match engine for a stacked-layer tile-matching puzzle.
//!
//! Cards bearing symbols are scattered over several overlapping depth
//! layers. A card can be selected only when no card on a higher layer
//! overlaps it; two selected cards vanish when they share symbol and layer.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never draws. It answers "is this card
//!    selectable", "do these two cards match" and "is the round over", and
//!    hands renderers a read-only snapshot.
//!
//! 2. **Deterministic**: All randomness flows through an injected,
//!    seedable `GameRng`. Same seed, same board.
//!
//! 3. **Snapshot queries**: Occlusion is computed over an immutable
//!    `im::Vector` snapshot, then mutations are applied. Nothing mutates
//!    the card collection while iterating it.
//!
//! ## Frame order
//!
//! input → match state machine → registry mutation → promotion → terminal
//! check. See [`round::Round`].
//!
//! ## Modules
//!
//! - `core`: Geometry, configuration, RNG, errors
//! - `cards`: Symbols, cards, the card registry
//! - `occlusion`: Reachability queries and layer promotion
//! - `matching`: Selection buffer and match resolution
//! - `rules`: Terminal conditions
//! - `board`: Random board generation
//! - `round`: Per-tick driver and render snapshot
//! - `games`: The fruit-matching game with levels and restart

pub mod board;
pub mod cards;
pub mod core;
pub mod games;
pub mod matching;
pub mod occlusion;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    overlaps, BoardArea, ConfigError, GameRng, Point, Rect, RoundConfig, SetupError, MATCH_REWARD,
};

pub use crate::cards::{Alphabet, Card, CardId, CardRegistry, Symbol, SymbolInfo};

pub use crate::occlusion::{is_unblocked, promote, unblocked_set, Occlusion};

pub use crate::matching::{valid_match, MatchStateMachine, RejectReason, SelectOutcome, Selection};

pub use crate::rules::{evaluate, find_valid_pair, is_stalemate, RoundResult, TerminalReason};

pub use crate::board::BoardGenerator;

pub use crate::round::{Round, RoundSnapshot};

pub use crate::games::stacked::{fruits, Level, StackedGame, StackedGameBuilder};
