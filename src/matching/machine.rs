//! Match state machine.
//!
//! `Idle --select(c)--> OneSelected(c) --select(c2)--> resolve --> Idle`
//!
//! Resolution re-checks occlusion for both cards against the current board
//! rather than trusting the check made when the first card was picked.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::selection::{RejectReason, SelectOutcome, Selection};
use crate::cards::{Card, CardId, CardRegistry};
use crate::core::config::MATCH_REWARD;
use crate::occlusion::is_unblocked;

/// Check whether two cards form a valid match on `cards`.
///
/// Both must be distinct, visible and unblocked, and share symbol and
/// layer. Symmetric in `a` and `b`.
#[must_use]
pub fn valid_match<'a, I>(a: &Card, b: &Card, cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card> + Copy,
{
    a.id != b.id
        && a.visible
        && b.visible
        && a.symbol == b.symbol
        && a.layer == b.layer
        && is_unblocked(a, cards)
        && is_unblocked(b, cards)
}

/// Selection buffer plus score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStateMachine {
    selection: Selection,
    score: u32,
    matches: u32,
    reward: u32,
}

impl Default for MatchStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStateMachine {
    /// Create an idle machine awarding [`MATCH_REWARD`] per match.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reward(MATCH_REWARD)
    }

    /// Create an idle machine with a custom reward.
    #[must_use]
    pub fn with_reward(reward: u32) -> Self {
        Self {
            selection: Selection::Idle,
            score: 0,
            matches: 0,
            reward,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of pairs removed so far.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Try to select a card.
    ///
    /// Blocked, removed or unknown cards are rejected, and so is re-picking
    /// the pending card (it is not a deselect). A second accepted card
    /// resolves the pair and always leaves the buffer idle.
    pub fn select(&mut self, id: CardId, registry: &mut CardRegistry) -> SelectOutcome {
        let Some(card) = registry.get(id) else {
            return self.reject(id, RejectReason::Missing);
        };
        if !card.visible {
            return self.reject(id, RejectReason::Removed);
        }
        if !is_unblocked(card, registry.cards()) {
            return self.reject(id, RejectReason::Blocked);
        }

        match self.selection {
            Selection::Idle => {
                registry.set_selected(id, true);
                self.selection = Selection::OneSelected(id);
                debug!(card = %id, "selected");
                SelectOutcome::Selected(id)
            }
            Selection::OneSelected(first) if first == id => {
                self.reject(id, RejectReason::AlreadySelected)
            }
            Selection::OneSelected(first) => self.resolve(first, id, registry),
        }
    }

    /// Drop a pending selection, if any.
    pub fn clear(&mut self, registry: &mut CardRegistry) {
        if let Selection::OneSelected(id) = self.selection {
            registry.set_selected(id, false);
        }
        self.selection = Selection::Idle;
    }

    fn resolve(&mut self, first: CardId, second: CardId, registry: &mut CardRegistry) -> SelectOutcome {
        self.selection = Selection::Idle;

        let matched = match (registry.get(first), registry.get(second)) {
            (Some(a), Some(b)) => valid_match(a, b, registry.cards()),
            _ => false,
        };

        if matched {
            registry.remove(first);
            registry.remove(second);
            self.score = self.score.saturating_add(self.reward);
            self.matches = self.matches.saturating_add(1);
            debug!(first = %first, second = %second, score = self.score, "matched");
            SelectOutcome::Matched(first, second)
        } else {
            registry.set_selected(first, false);
            registry.set_selected(second, false);
            debug!(first = %first, second = %second, "mismatch");
            SelectOutcome::Mismatched(first, second)
        }
    }

    fn reject(&self, id: CardId, reason: RejectReason) -> SelectOutcome {
        debug!(card = %id, ?reason, "selection rejected");
        SelectOutcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;
    use crate::core::geometry::Rect;

    fn push(registry: &mut CardRegistry, symbol: u16, x: i32, y: i32, layer: u8) -> CardId {
        registry.push(Symbol::new(symbol), Rect::new(x, y, 72, 72), layer)
    }

    #[test]
    fn test_matching_pair_is_removed() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let b = push(&mut registry, 0, 100, 0, 0);
        let mut machine = MatchStateMachine::new();

        assert_eq!(machine.select(a, &mut registry), SelectOutcome::Selected(a));
        assert!(registry.get(a).unwrap().selected);
        assert_eq!(machine.select(b, &mut registry), SelectOutcome::Matched(a, b));

        assert!(machine.selection().is_idle());
        assert_eq!(machine.score(), 10);
        assert_eq!(machine.matches(), 1);
        assert_eq!(registry.remaining(), 0);
    }

    #[test]
    fn test_mismatch_clears_buffer() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let b = push(&mut registry, 1, 100, 0, 0);
        let mut machine = MatchStateMachine::new();

        machine.select(a, &mut registry);
        assert_eq!(machine.select(b, &mut registry), SelectOutcome::Mismatched(a, b));

        assert!(machine.selection().is_idle());
        assert_eq!(machine.score(), 0);
        assert_eq!(registry.remaining(), 2);
        assert!(registry.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_different_layers_do_not_match() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let b = push(&mut registry, 0, 100, 0, 1);
        let mut machine = MatchStateMachine::new();

        machine.select(a, &mut registry);
        assert_eq!(machine.select(b, &mut registry), SelectOutcome::Mismatched(a, b));
    }

    #[test]
    fn test_reselecting_pending_card_is_noop() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let mut machine = MatchStateMachine::new();

        machine.select(a, &mut registry);
        assert_eq!(
            machine.select(a, &mut registry),
            SelectOutcome::Rejected(RejectReason::AlreadySelected)
        );
        assert_eq!(machine.selection(), Selection::OneSelected(a));
        assert!(registry.get(a).unwrap().selected);
    }

    #[test]
    fn test_blocked_and_removed_cards_rejected() {
        let mut registry = CardRegistry::new();
        let under = push(&mut registry, 0, 0, 0, 0);
        let _over = push(&mut registry, 1, 36, 36, 1);
        let gone = push(&mut registry, 2, 300, 300, 0);
        registry.remove(gone);
        let mut machine = MatchStateMachine::new();

        assert_eq!(
            machine.select(under, &mut registry),
            SelectOutcome::Rejected(RejectReason::Blocked)
        );
        assert_eq!(
            machine.select(gone, &mut registry),
            SelectOutcome::Rejected(RejectReason::Removed)
        );
        assert_eq!(
            machine.select(CardId::new(77), &mut registry),
            SelectOutcome::Rejected(RejectReason::Missing)
        );
        assert!(machine.selection().is_idle());
    }

    #[test]
    fn test_rejected_second_pick_keeps_first() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 400, 400, 1);
        let under = push(&mut registry, 0, 0, 0, 0);
        let _over = push(&mut registry, 1, 36, 36, 1);
        let mut machine = MatchStateMachine::new();

        machine.select(a, &mut registry);
        machine.select(under, &mut registry);

        assert_eq!(machine.selection(), Selection::OneSelected(a));
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let mut machine = MatchStateMachine::new();

        machine.select(a, &mut registry);
        machine.clear(&mut registry);

        assert!(machine.selection().is_idle());
        assert!(!registry.get(a).unwrap().selected);
    }

    #[test]
    fn test_valid_match_is_symmetric() {
        let mut registry = CardRegistry::new();
        push(&mut registry, 0, 0, 0, 1);
        push(&mut registry, 0, 100, 0, 1);
        push(&mut registry, 0, 200, 0, 0);
        let cards = registry.cards();

        for a in cards.iter() {
            for b in cards.iter() {
                assert_eq!(valid_match(a, b, cards), valid_match(b, a, cards));
            }
        }
        assert!(valid_match(&cards[0], &cards[1], cards));
        assert!(!valid_match(&cards[0], &cards[0], cards));
        assert!(!valid_match(&cards[0], &cards[2], cards));
    }

    #[test]
    fn test_pending_card_covered_before_second_pick() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let b = push(&mut registry, 0, 300, 0, 0);
        let cover = push(&mut registry, 1, 36, 36, 0);
        let mut machine = MatchStateMachine::new();

        assert_eq!(machine.select(a, &mut registry), SelectOutcome::Selected(a));
        assert!(registry.raise_layer(cover, 2));
        assert_eq!(machine.select(b, &mut registry), SelectOutcome::Mismatched(a, b));

        assert!(registry.get(a).unwrap().visible);
        assert!(registry.get(b).unwrap().visible);
        assert!(!registry.get(a).unwrap().selected);
        assert_eq!(machine.score(), 0);
        assert!(machine.selection().is_idle());
    }

    #[test]
    fn test_score_saturates() {
        let mut registry = CardRegistry::new();
        let ids: Vec<CardId> = (0..4).map(|i| push(&mut registry, 0, i * 100, 0, 0)).collect();
        let mut machine = MatchStateMachine::with_reward(u32::MAX);

        for pair in ids.chunks(2) {
            machine.select(pair[0], &mut registry);
            assert!(machine.select(pair[1], &mut registry).is_match());
        }
        assert_eq!(machine.score(), u32::MAX);
        assert_eq!(machine.matches(), 2);
    }

    #[test]
    fn test_custom_reward() {
        let mut registry = CardRegistry::new();
        let a = push(&mut registry, 0, 0, 0, 0);
        let b = push(&mut registry, 0, 100, 0, 0);
        let mut machine = MatchStateMachine::with_reward(25);

        machine.select(a, &mut registry);
        machine.select(b, &mut registry);
        assert_eq!(machine.score(), 25);
    }
}
