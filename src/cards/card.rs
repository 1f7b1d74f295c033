//! The card entity.
//!
//! A card is created once by the board generator. Afterwards only three
//! fields change: `visible` (cleared when the card is matched), `selected`
//! (the selection buffer's marker) and `layer` (raised by promotion).

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::geometry::{Point, Rect};

/// Stable card identifier: the card's index in its registry.
///
/// Ids stay valid for the whole round because removed cards are kept as
/// inert records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Registry index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub rect: Rect,
    /// Depth index; higher is nearer the player.
    pub layer: u8,
    /// False once the card has been matched away.
    pub visible: bool,
    pub selected: bool,
}

impl Card {
    /// Create a visible, unselected card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol, rect: Rect, layer: u8) -> Self {
        Self {
            id,
            symbol,
            rect,
            layer,
            visible: true,
            selected: false,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.rect.origin()
    }

    /// Check whether a board point hits this card.
    ///
    /// Removed cards are never hit.
    #[must_use]
    pub fn hit(&self, point: Point) -> bool {
        self.visible && self.rect.contains(point)
    }
}
