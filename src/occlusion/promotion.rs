//! Layer promotion.
//!
//! Once a card has nothing above it, it is lifted to the top layer. This
//! runs after every removal and before the next eligibility or terminal
//! check, because removing a card can free the cards underneath it.

use tracing::debug;

use super::engine::Occlusion;
use crate::cards::CardRegistry;

/// Lift every visible, unblocked card to `top_layer`.
///
/// The unblocked set is computed from a snapshot before anything is
/// mutated. Idempotent and monotonic: layers only go up, and a second pass
/// changes nothing. Returns the number of cards that moved.
pub fn promote(registry: &mut CardRegistry, top_layer: u8) -> usize {
    let occlusion = Occlusion::new(registry.snapshot());
    let promoted = occlusion
        .unblocked_ids()
        .into_iter()
        .filter(|&id| registry.raise_layer(id, top_layer))
        .count();

    if promoted > 0 {
        debug!(promoted, top_layer, "promoted freed cards");
    }
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Symbol};
    use crate::core::geometry::Rect;

    fn layers(registry: &CardRegistry) -> Vec<u8> {
        registry.iter().map(|c| c.layer).collect()
    }

    #[test]
    fn test_promotes_unblocked_only() {
        let mut registry = CardRegistry::new();
        registry.push(Symbol::new(0), Rect::new(0, 0, 72, 72), 0);
        registry.push(Symbol::new(1), Rect::new(36, 36, 72, 72), 1);
        registry.push(Symbol::new(2), Rect::new(400, 400, 72, 72), 0);

        assert_eq!(promote(&mut registry, 2), 2);
        assert_eq!(layers(&registry), vec![0, 2, 2]);
    }

    #[test]
    fn test_removal_frees_card_below() {
        let mut registry = CardRegistry::new();
        registry.push(Symbol::new(0), Rect::new(0, 0, 72, 72), 0);
        registry.push(Symbol::new(1), Rect::new(36, 36, 72, 72), 2);

        assert_eq!(promote(&mut registry, 2), 0);

        registry.remove(CardId::new(1));
        assert_eq!(promote(&mut registry, 2), 1);
        assert_eq!(registry.get(CardId::new(0)).unwrap().layer, 2);
    }

    #[test]
    fn test_second_pass_is_noop() {
        let mut registry = CardRegistry::new();
        registry.push(Symbol::new(0), Rect::new(0, 0, 72, 72), 0);
        registry.push(Symbol::new(1), Rect::new(36, 36, 72, 72), 1);
        registry.push(Symbol::new(1), Rect::new(200, 0, 72, 72), 0);

        promote(&mut registry, 2);
        let once = registry.clone();

        assert_eq!(promote(&mut registry, 2), 0);
        assert_eq!(registry, once);
    }

    #[test]
    fn test_removed_cards_stay_put() {
        let mut registry = CardRegistry::new();
        registry.push(Symbol::new(0), Rect::new(0, 0, 72, 72), 0);
        registry.remove(CardId::new(0));

        assert_eq!(promote(&mut registry, 2), 0);
        assert_eq!(layers(&registry), vec![0]);
    }
}
