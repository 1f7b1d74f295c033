//! Selection buffer and selection outcomes.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// The selection buffer.
///
/// Holds at most one pending card: a second selection is resolved
/// immediately, so there is no state holding two cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    OneSelected(CardId),
}

impl Selection {
    /// The pending card, if any.
    #[must_use]
    pub const fn pending(self) -> Option<CardId> {
        match self {
            Selection::Idle => None,
            Selection::OneSelected(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// Why a selection attempt changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// No card with that id.
    Missing,
    /// The card was already matched.
    Removed,
    /// A higher-layer card overlaps it.
    Blocked,
    /// The card is already the pending selection.
    AlreadySelected,
    /// The round has already ended.
    Finished,
}

/// What a selection attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Rejected(RejectReason),
    /// The card became the pending selection.
    Selected(CardId),
    /// The pair matched and both cards were removed.
    Matched(CardId, CardId),
    /// The pair did not match; the buffer was cleared.
    Mismatched(CardId, CardId),
}

impl SelectOutcome {
    /// Check if any state changed.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, SelectOutcome::Rejected(_))
    }

    /// Check if a pair was removed.
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, SelectOutcome::Matched(..))
    }
}
