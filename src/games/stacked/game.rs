//! Stacked Onet session.

use tracing::{info, warn};

use super::level::Level;
use crate::cards::Alphabet;
use crate::core::config::{BoardArea, RoundConfig};
use crate::core::error::SetupError;
use crate::core::rng::GameRng;
use crate::round::Round;

/// The eleven fruit symbols of the stacked game, with emoji labels.
#[must_use]
pub fn fruits() -> Alphabet {
    [
        ("apple", "🍎"),
        ("banana", "🍌"),
        ("cherries", "🍒"),
        ("grapes", "🍇"),
        ("green_apple", "🍏"),
        ("kiwifruit", "🥝"),
        ("lemon", "🍋"),
        ("peach", "🍑"),
        ("pear", "🍐"),
        ("strawberry", "🍓"),
        ("watermelon", "🍉"),
    ]
    .into_iter()
    .fold(Alphabet::new(), |alphabet, (name, label)| alphabet.with_symbol(name, label))
}

/// Builder for creating a StackedGame.
#[derive(Clone, Debug)]
pub struct StackedGameBuilder {
    alphabet: Alphabet,
    duration_seconds: Option<f64>,
    board: Option<BoardArea>,
    max_deals: u32,
}

impl Default for StackedGameBuilder {
    fn default() -> Self {
        Self {
            alphabet: fruits(),
            duration_seconds: None,
            board: None,
            max_deals: 3,
        }
    }
}

impl StackedGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fruit alphabet.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Override the round length for every level.
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Override the board area for every level.
    pub fn board(mut self, board: BoardArea) -> Self {
        self.board = Some(board);
        self
    }

    /// How many fresh boards to try when placement runs out of room.
    ///
    /// Random placement can jam on crowded levels; a new deal from the next
    /// RNG fork usually fits. Clamped to at least 1.
    pub fn max_deals(mut self, deals: u32) -> Self {
        self.max_deals = deals.max(1);
        self
    }

    /// Build a session. No round is running until `start` is called.
    pub fn build(self, seed: u64) -> StackedGame {
        StackedGame {
            alphabet: self.alphabet,
            duration_seconds: self.duration_seconds,
            board: self.board,
            max_deals: self.max_deals,
            rng: GameRng::new(seed),
            level: Level::default(),
            round: None,
            rounds_started: 0,
        }
    }
}

/// A play session: pick a level, play rounds, restart.
///
/// Every round draws its board from a fresh fork of the session RNG, so a
/// session seed fixes the whole sequence of boards.
#[derive(Clone, Debug)]
pub struct StackedGame {
    alphabet: Alphabet,
    duration_seconds: Option<f64>,
    board: Option<BoardArea>,
    max_deals: u32,
    rng: GameRng,
    level: Level,
    round: Option<Round>,
    rounds_started: u32,
}

impl StackedGame {
    /// The symbol alphabet boards are dealt from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Level of the current (or last) round.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Number of rounds successfully started.
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    /// Configuration used for a level in this session.
    pub fn config_for(&self, level: Level) -> RoundConfig {
        let mut config = level.config();
        if let Some(seconds) = self.duration_seconds {
            config = config.with_duration(seconds);
        }
        if let Some(board) = self.board {
            config = config.with_board(board);
        }
        config
    }

    /// Start a new round at `level`, replacing any current round.
    ///
    /// A deal that runs out of placement attempts is retried from a new RNG
    /// fork, up to the session's deal limit. On failure the previous round
    /// is dropped too: no half-built board is ever left in the session.
    pub fn start(&mut self, level: Level) -> Result<&mut Round, SetupError> {
        self.level = level;
        self.round = None;

        let config = self.config_for(level);
        let mut deal = 1;
        let round = loop {
            let mut rng = self.rng.fork();
            match Round::new(config.clone(), &self.alphabet, &mut rng) {
                Ok(round) => break round,
                Err(err @ SetupError::PlacementExhausted { .. }) if deal < self.max_deals => {
                    warn!(%err, deal, "deal jammed, dealing again");
                    deal += 1;
                }
                Err(err) => return Err(err),
            }
        };

        self.rounds_started += 1;
        info!(level = level.label(), round = self.rounds_started, "session round ready");
        Ok(self.round.insert(round))
    }

    /// Start a new round at the current level.
    pub fn restart(&mut self) -> Result<&mut Round, SetupError> {
        self.start(self.level)
    }
}
