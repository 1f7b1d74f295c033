//! Terminal conditions.
//!
//! A round ends in exactly one of three ways, checked in priority order:
//! 1. every card is gone (success),
//! 2. the clock ran out (`time_up`),
//! 3. no two unblocked cards share both symbol and layer (`no_moves`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Symbol};
use crate::occlusion::Occlusion;

/// Why a round ended without being cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalReason {
    /// The board was cleared; there is nothing to explain.
    #[default]
    None,
    /// Stalemate: no valid pair among the unblocked cards.
    NoMoves,
    /// The round clock reached its limit.
    TimeUp,
}

impl TerminalReason {
    /// Wire name, as used in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TerminalReason::None => "none",
            TerminalReason::NoMoves => "no_moves",
            TerminalReason::TimeUp => "time_up",
        }
    }
}

impl std::fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    pub cleared: bool,
    pub reason: TerminalReason,
}

impl RoundResult {
    /// Every card was matched.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            cleared: true,
            reason: TerminalReason::None,
        }
    }

    /// The round ended with cards left.
    #[must_use]
    pub const fn failed(reason: TerminalReason) -> Self {
        Self {
            cleared: false,
            reason,
        }
    }
}

/// First pair of cards sharing both symbol and layer, scanning in order.
///
/// Callers pass the unblocked cards; the result is a move the player can
/// make right now. Cards are grouped by `(symbol, layer)` in one pass, so
/// this is O(k) for k candidates.
#[must_use]
pub fn find_valid_pair<'a, I>(candidates: I) -> Option<(CardId, CardId)>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen: FxHashMap<(Symbol, u8), CardId> = FxHashMap::default();
    for card in candidates {
        if let Some(&first) = seen.get(&(card.symbol, card.layer)) {
            return Some((first, card.id));
        }
        seen.insert((card.symbol, card.layer), card.id);
    }
    None
}

/// Check whether no valid pair exists among `candidates`.
#[must_use]
pub fn is_stalemate<'a, I>(candidates: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    find_valid_pair(candidates).is_none()
}

/// Evaluate terminal conditions for a snapshot at `elapsed` seconds.
///
/// Returns `None` while the round continues. Only one reason is ever
/// reported: cleared beats time-up, which beats stalemate.
#[must_use]
pub fn evaluate(occlusion: &Occlusion, elapsed: f64, duration: f64) -> Option<RoundResult> {
    if occlusion.cards().iter().all(|c| !c.visible) {
        return Some(RoundResult::cleared());
    }
    if elapsed >= duration {
        return Some(RoundResult::failed(TerminalReason::TimeUp));
    }
    if is_stalemate(occlusion.unblocked()) {
        return Some(RoundResult::failed(TerminalReason::NoMoves));
    }
    None
}
