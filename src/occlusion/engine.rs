//! Occlusion queries.
//!
//! A card is *unblocked* when no other visible card on a strictly higher
//! layer overlaps it. Cards on the top layer are therefore always
//! unblocked: nothing can sit above them.
//!
//! The free functions work over any borrowed card collection
//! (`&[Card]`, `&Vec<Card>`, `&im::Vector<Card>`). `Occlusion` runs the full
//! O(n²) scan once over a snapshot and answers per-card queries in O(1)
//! afterwards, which keeps pair checks from turning into O(n³) rescans.

use im::Vector;

use crate::cards::{Card, CardId};
use crate::core::geometry::overlaps;

/// Check whether `card` has no visible, higher-layer, overlapping card above it.
///
/// O(n) in the number of cards.
#[must_use]
pub fn is_unblocked<'a, I>(card: &Card, cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    !cards.into_iter().any(|other| {
        other.visible
            && other.id != card.id
            && other.layer > card.layer
            && overlaps(&card.rect, &other.rect)
    })
}

/// Ids of every visible card that is unblocked, in id order.
///
/// O(n²) in the number of cards.
#[must_use]
pub fn unblocked_set<'a, I>(cards: I) -> Vec<CardId>
where
    I: IntoIterator<Item = &'a Card> + Copy,
{
    cards
        .into_iter()
        .filter(|c| c.visible && is_unblocked(c, cards))
        .map(|c| c.id)
        .collect()
}

/// Occlusion state of one board snapshot.
///
/// Must be rebuilt after any card's `visible` or `layer` changes.
#[derive(Clone, Debug)]
pub struct Occlusion {
    cards: Vector<Card>,
    unblocked: Vec<bool>,
}

impl Occlusion {
    /// Scan a snapshot.
    #[must_use]
    pub fn new(cards: Vector<Card>) -> Self {
        let unblocked = cards
            .iter()
            .map(|c| c.visible && is_unblocked(c, &cards))
            .collect();
        Self { cards, unblocked }
    }

    /// The snapshot this was computed from.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look up a card in the snapshot.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Check whether a card is visible and unblocked.
    ///
    /// Unknown ids and removed cards are reported blocked.
    #[must_use]
    pub fn is_unblocked(&self, id: CardId) -> bool {
        self.unblocked.get(id.index()).copied().unwrap_or(false)
    }

    /// Unblocked cards, in id order.
    pub fn unblocked(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .zip(&self.unblocked)
            .filter_map(|(card, &free)| free.then_some(card))
    }

    /// Ids of unblocked cards, in id order.
    #[must_use]
    pub fn unblocked_ids(&self) -> Vec<CardId> {
        self.unblocked().map(|c| c.id).collect()
    }

    /// Number of unblocked cards.
    #[must_use]
    pub fn unblocked_count(&self) -> usize {
        self.unblocked.iter().filter(|&&free| free).count()
    }
}
