//! Card registry: the owner of every card in a round.
//!
//! Cards are stored in an `im::Vector` indexed by `CardId`, so taking a
//! snapshot for the occlusion engine is an O(1) clone. Cards are only ever
//! appended during board generation and are never physically removed;
//! matching a card just clears its `visible` flag.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::symbol::Symbol;
use crate::core::geometry::Rect;

/// Registry of the cards on one board.
///
/// ## Example
///
/// ```
/// use stacked_onet::cards::{CardRegistry, Symbol};
/// use stacked_onet::core::Rect;
///
/// let mut registry = CardRegistry::new();
/// let a = registry.push(Symbol::new(0), Rect::new(0, 0, 72, 72), 0);
/// let b = registry.push(Symbol::new(0), Rect::new(100, 0, 72, 72), 0);
///
/// registry.remove(a);
/// assert_eq!(registry.remaining(), 1);
/// assert!(registry.get(a).is_some()); // still stored, just not visible
/// assert!(registry.get(b).unwrap().visible);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRegistry {
    cards: Vector<Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card and return its id.
    pub fn push(&mut self, symbol: Symbol, rect: Rect, layer: u8) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        self.cards.push_back(Card::new(id, symbol, rect, layer));
        id
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Number of stored cards, removed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over cards still on the board.
    pub fn visible(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.visible)
    }

    /// Number of cards still on the board.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.visible().count()
    }

    /// Check if every card has been matched away.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|c| !c.visible)
    }

    /// Borrow the underlying storage.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Immutable copy of the current board. O(1).
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Raise a card's layer.
    ///
    /// Layers never go down: a request to lower (or keep) the layer is
    /// ignored. Returns true if the layer changed.
    pub fn raise_layer(&mut self, id: CardId, layer: u8) -> bool {
        match self.cards.get_mut(id.index()) {
            Some(card) if card.visible && layer > card.layer => {
                card.layer = layer;
                true
            }
            _ => false,
        }
    }

    /// Logically delete a card.
    ///
    /// Returns false if the card does not exist or was already removed.
    pub fn remove(&mut self, id: CardId) -> bool {
        match self.cards.get_mut(id.index()) {
            Some(card) if card.visible => {
                card.visible = false;
                card.selected = false;
                true
            }
            _ => false,
        }
    }

    /// Set the selection marker on a card.
    pub fn set_selected(&mut self, id: CardId, selected: bool) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.selected = selected;
        }
    }
}

impl FromIterator<Card> for CardRegistry {
    /// Build a registry from prepared cards, renumbering ids by position.
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let cards = iter
            .into_iter()
            .enumerate()
            .map(|(i, card)| Card {
                id: CardId::new(i as u32),
                ..card
            })
            .collect();
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i32, y: i32) -> Rect {
        Rect::new(x, y, 72, 72)
    }

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut registry = CardRegistry::new();

        let a = registry.push(Symbol::new(0), square(0, 0), 0);
        let b = registry.push(Symbol::new(1), square(100, 0), 1);

        assert_eq!(a, CardId::new(0));
        assert_eq!(b, CardId::new(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).unwrap().layer, 1);
        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_remove_is_logical() {
        let mut registry = CardRegistry::new();
        let a = registry.push(Symbol::new(0), square(0, 0), 0);
        registry.set_selected(a, true);

        assert!(registry.remove(a));
        assert!(!registry.remove(a));

        let card = registry.get(a).unwrap();
        assert!(!card.visible);
        assert!(!card.selected);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.remaining(), 0);
        assert!(registry.is_cleared());
    }

    #[test]
    fn test_raise_layer_is_monotonic() {
        let mut registry = CardRegistry::new();
        let a = registry.push(Symbol::new(0), square(0, 0), 1);

        assert!(!registry.raise_layer(a, 0));
        assert!(!registry.raise_layer(a, 1));
        assert!(registry.raise_layer(a, 2));
        assert_eq!(registry.get(a).unwrap().layer, 2);
    }

    #[test]
    fn test_removed_card_layer_is_frozen() {
        let mut registry = CardRegistry::new();
        let a = registry.push(Symbol::new(0), square(0, 0), 0);
        registry.remove(a);

        assert!(!registry.raise_layer(a, 2));
        assert_eq!(registry.get(a).unwrap().layer, 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut registry = CardRegistry::new();
        let a = registry.push(Symbol::new(0), square(0, 0), 0);

        let snapshot = registry.snapshot();
        registry.remove(a);

        assert!(snapshot[0].visible);
        assert!(!registry.get(a).unwrap().visible);
    }

    #[test]
    fn test_from_iter_renumbers() {
        let registry: CardRegistry = vec![
            Card::new(CardId::new(40), Symbol::new(0), square(0, 0), 0),
            Card::new(CardId::new(41), Symbol::new(0), square(100, 0), 0),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = registry.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(0), CardId::new(1)]);
    }
}
