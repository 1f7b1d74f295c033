//! Random board generation.
//!
//! `p` symbols are drawn with replacement from the alphabet, each one
//! dealt twice, and the `2p` instances shuffled. Every instance then gets a
//! uniformly random position and layer; a placement overlapping a card
//! already on the same layer is thrown away and resampled. Cards on
//! different layers may overlap freely, which is what creates occlusion.
//!
//! Resampling is capped per card by `RoundConfig::max_placement_attempts`.
//! A crowded configuration fails with `SetupError::PlacementExhausted`
//! instead of spinning forever.

use tracing::{debug, info, warn};

use crate::cards::{Alphabet, CardRegistry, Symbol};
use crate::core::config::RoundConfig;
use crate::core::error::{ConfigError, SetupError};
use crate::core::geometry::{Point, Rect};
use crate::core::rng::GameRng;

/// Builds boards for one configuration and alphabet.
///
/// ```
/// use stacked_onet::board::BoardGenerator;
/// use stacked_onet::cards::Alphabet;
/// use stacked_onet::core::{GameRng, RoundConfig};
///
/// let alphabet = Alphabet::new().with_symbol("a", "A").with_symbol("b", "B");
/// let config = RoundConfig::new(4, 2);
/// let mut rng = GameRng::new(7);
///
/// let registry = BoardGenerator::new(&config, &alphabet).generate(&mut rng).unwrap();
/// assert_eq!(registry.len(), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoardGenerator<'a> {
    config: &'a RoundConfig,
    alphabet: &'a Alphabet,
}

impl<'a> BoardGenerator<'a> {
    #[must_use]
    pub fn new(config: &'a RoundConfig, alphabet: &'a Alphabet) -> Self {
        Self { config, alphabet }
    }

    /// Generate a board.
    ///
    /// Fails on an invalid config, an empty alphabet, or when some card
    /// cannot be placed within the attempt budget. Never returns a
    /// partially filled board.
    pub fn generate(&self, rng: &mut GameRng) -> Result<CardRegistry, SetupError> {
        self.config.validate()?;
        if self.alphabet.is_empty() {
            return Err(SetupError::EmptyAlphabet);
        }

        let mut pool = self.deal_symbols(rng);
        let total = pool.len();
        let size = self.config.card_size;
        let (Some(x_range), Some(y_range)) =
            (self.config.board.x_range(size), self.config.board.y_range(size))
        else {
            return Err(ConfigError::BoardTooSmall {
                width: self.config.board.width,
                height: self.config.board.height,
                card_size: size,
            }
            .into());
        };
        let top_layer = self.config.top_layer();

        let mut per_layer: Vec<Vec<Rect>> = vec![Vec::new(); self.config.layers as usize];
        let mut registry = CardRegistry::new();
        let mut total_attempts: u64 = 0;

        while let Some(&symbol) = pool.last() {
            let mut attempts = 0;
            let (rect, layer) = loop {
                if attempts == self.config.max_placement_attempts {
                    warn!(
                        placed = registry.len(),
                        total,
                        attempts,
                        "board generation exhausted its placement budget"
                    );
                    return Err(SetupError::PlacementExhausted {
                        placed: registry.len(),
                        total,
                        attempts,
                    });
                }
                attempts += 1;

                let origin = Point::new(
                    rng.gen_range_inclusive(*x_range.start(), *x_range.end()),
                    rng.gen_range_inclusive(*y_range.start(), *y_range.end()),
                );
                let layer = rng.gen_range_inclusive(0, i32::from(top_layer)) as u8;
                let rect = Rect::square(origin, size);

                if !per_layer[layer as usize].iter().any(|r| r.overlaps(&rect)) {
                    break (rect, layer);
                }
            };

            total_attempts += u64::from(attempts);
            per_layer[layer as usize].push(rect);
            let id = registry.push(symbol, rect, layer);
            pool.pop();
            debug!(card = %id, %symbol, layer, x = rect.x, y = rect.y, attempts, "placed card");
        }

        info!(
            cards = registry.len(),
            layers = self.config.layers,
            total_attempts,
            "board generated"
        );
        Ok(registry)
    }

    /// Pick `pair_count` symbols with replacement, deal each twice, shuffle.
    fn deal_symbols(&self, rng: &mut GameRng) -> Vec<Symbol> {
        let alphabet: Vec<Symbol> = self.alphabet.symbols().collect();
        let base: Vec<Symbol> = (0..self.config.pair_count)
            .filter_map(|_| rng.choose(&alphabet).copied())
            .collect();

        let mut pool = [base.as_slice(), base.as_slice()].concat();
        rng.shuffle(&mut pool);
        pool
    }
}
