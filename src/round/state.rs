//! One round of play.
//!
//! `Round` wires the pieces together in the order a frame needs them:
//!
//! 1. input (`press` / `select`) goes through the match state machine,
//! 2. a committed match mutates the registry,
//! 3. promotion lifts whatever the match freed,
//! 4. `tick` promotes again and evaluates terminal conditions.
//!
//! No frame can observe a removal without its promotion: both `select` and
//! `tick` promote before returning.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::snapshot::RoundSnapshot;
use crate::board::BoardGenerator;
use crate::cards::{Alphabet, Card, CardId, CardRegistry};
use crate::core::config::RoundConfig;
use crate::core::error::{ConfigError, SetupError};
use crate::core::geometry::Point;
use crate::core::rng::GameRng;
use crate::matching::{MatchStateMachine, RejectReason, SelectOutcome, Selection};
use crate::occlusion::{is_unblocked, promote, Occlusion};
use crate::rules::{self, find_valid_pair, RoundResult};

/// A round in progress (or finished).
///
/// ```
/// use stacked_onet::cards::{CardRegistry, Symbol};
/// use stacked_onet::core::{Point, Rect, RoundConfig};
/// use stacked_onet::round::Round;
///
/// let mut registry = CardRegistry::new();
/// registry.push(Symbol::new(0), Rect::new(0, 0, 72, 72), 0);
/// registry.push(Symbol::new(0), Rect::new(100, 0, 72, 72), 0);
///
/// let mut round = Round::from_registry(RoundConfig::new(1, 3), registry).unwrap();
/// round.press(Point::new(10, 10));
/// round.press(Point::new(110, 10));
///
/// assert_eq!(round.score(), 10);
/// assert!(round.tick(1.0).unwrap().cleared);
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    config: RoundConfig,
    registry: CardRegistry,
    machine: MatchStateMachine,
    result: Option<RoundResult>,
}

impl Round {
    /// Generate a board and start a round on it.
    pub fn new(config: RoundConfig, alphabet: &Alphabet, rng: &mut GameRng) -> Result<Self, SetupError> {
        let registry = BoardGenerator::new(&config, alphabet).generate(rng)?;
        info!(
            pairs = config.pair_count,
            layers = config.layers,
            duration = config.duration_seconds,
            "round started"
        );
        Ok(Self::start(config, registry))
    }

    /// Start a round on a prepared board.
    ///
    /// The config's layers, duration and card size must be valid, and every
    /// card must sit on a layer the config has. Pair count and board area
    /// are not checked: the board already exists.
    pub fn from_registry(config: RoundConfig, registry: CardRegistry) -> Result<Self, SetupError> {
        config.validate_play()?;
        if let Some(card) = registry.iter().find(|c| c.layer >= config.layers) {
            return Err(ConfigError::LayerOutOfRange {
                card: card.id.raw(),
                layer: card.layer,
                layers: config.layers,
            }
            .into());
        }
        Ok(Self::start(config, registry))
    }

    fn start(config: RoundConfig, mut registry: CardRegistry) -> Self {
        promote(&mut registry, config.top_layer());
        Self {
            config,
            registry,
            machine: MatchStateMachine::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.machine.score()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.machine.selection()
    }

    /// The terminal result, once reached. Latched: it never changes after.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Seconds left at `elapsed`, clamped at zero.
    #[must_use]
    pub fn time_left(&self, elapsed: f64) -> f64 {
        (self.config.duration_seconds - elapsed).max(0.0)
    }

    /// Occlusion state of the current board.
    #[must_use]
    pub fn occlusion(&self) -> Occlusion {
        Occlusion::new(self.registry.snapshot())
    }

    /// Ids of the cards that can be selected right now.
    #[must_use]
    pub fn unblocked(&self) -> Vec<CardId> {
        self.occlusion().unblocked_ids()
    }

    /// A pair the player could match right now, if any.
    #[must_use]
    pub fn hint(&self) -> Option<(CardId, CardId)> {
        find_valid_pair(self.occlusion().unblocked())
    }

    /// Topmost selectable card under `point`.
    ///
    /// Candidates are tried from the highest layer down; on equal layers the
    /// earlier card wins. Blocked cards are skipped, so a press on an
    /// uncovered sliver of a blocked card selects nothing.
    #[must_use]
    pub fn card_at(&self, point: Point) -> Option<CardId> {
        let cards = self.registry.cards();
        let mut candidates: SmallVec<[&Card; 8]> = cards.iter().filter(|c| c.hit(point)).collect();
        candidates.sort_by_key(|c| std::cmp::Reverse(c.layer));
        candidates
            .into_iter()
            .find(|c| is_unblocked(c, cards))
            .map(|c| c.id)
    }

    /// Handle a pointer press at a board coordinate.
    ///
    /// Returns `None` when the press hit no selectable card.
    pub fn press(&mut self, point: Point) -> Option<SelectOutcome> {
        if self.is_over() {
            return Some(SelectOutcome::Rejected(RejectReason::Finished));
        }
        let id = self.card_at(point)?;
        Some(self.select(id))
    }

    /// Select a card by id.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        if self.is_over() {
            return SelectOutcome::Rejected(RejectReason::Finished);
        }

        let outcome = self.machine.select(id, &mut self.registry);
        if outcome.is_match() {
            promote(&mut self.registry, self.config.top_layer());
        }
        outcome
    }

    /// Advance the round clock to `elapsed` seconds.
    ///
    /// Runs promotion, then checks terminal conditions. Returns the result
    /// once the round is over; later calls return the same result.
    pub fn tick(&mut self, elapsed: f64) -> Option<RoundResult> {
        if self.result.is_some() {
            return self.result;
        }

        promote(&mut self.registry, self.config.top_layer());
        let occlusion = self.occlusion();
        self.result = rules::evaluate(&occlusion, elapsed, self.config.duration_seconds);

        if let Some(result) = self.result {
            self.machine.clear(&mut self.registry);
            info!(
                cleared = result.cleared,
                reason = %result.reason,
                score = self.score(),
                remaining = self.registry.remaining(),
                elapsed,
                "round over"
            );
        } else {
            debug!(unblocked = occlusion.unblocked_count(), elapsed, "tick");
        }
        self.result
    }

    /// Read-only view for a renderer.
    #[must_use]
    pub fn snapshot(&self, elapsed: f64) -> RoundSnapshot {
        RoundSnapshot {
            cards: self.registry.snapshot(),
            score: self.score(),
            time_left: self.time_left(elapsed),
            result: self.result,
        }
    }
}
