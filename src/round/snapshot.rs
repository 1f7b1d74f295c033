//! Read-only view of a round for renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::RoundResult;

/// Everything a renderer needs for one frame.
///
/// Removed cards are included (with `visible == false`) so indices match
/// card ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub cards: Vector<Card>,
    pub score: u32,
    /// Seconds left on the clock, never negative.
    pub time_left: f64,
    pub result: Option<RoundResult>,
}

impl RoundSnapshot {
    /// Visible cards in paint order: bottom layer first, later cards above
    /// earlier ones on the same layer.
    pub fn paint_order(&self) -> impl Iterator<Item = &Card> {
        let mut visible: Vec<&Card> = self.cards.iter().filter(|c| c.visible).collect();
        visible.sort_by_key(|c| c.layer);
        visible.into_iter()
    }

    /// Whole seconds left, as a countdown display shows them.
    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.time_left as u32
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}
