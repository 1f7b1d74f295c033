//! Round configuration.
//!
//! Pair count, layer count, round length, card size and window area are
//! all tunable. Defaults give the easy level of the fruit game.
//!
//! ```
//! use stacked_onet::core::RoundConfig;
//!
//! let config = RoundConfig::default()
//!     .with_pair_count(12)
//!     .with_layers(4)
//!     .with_duration(90.0);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.top_layer(), 3);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Points awarded for each committed match.
pub const MATCH_REWARD: u32 = 10;

/// The area cards are scattered over.
///
/// A card's top-left corner is sampled so the whole card stays inside the
/// board minus its margins. The top margin is wider to leave room for the
/// score and timer readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardArea {
    pub width: i32,
    pub height: i32,
    pub margin_left: i32,
    pub margin_top: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
}

impl Default for BoardArea {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            margin_left: 50,
            margin_top: 100,
            margin_right: 50,
            margin_bottom: 50,
        }
    }
}

impl BoardArea {
    /// Create an area with the given size and no margins.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            margin_left: 0,
            margin_top: 0,
            margin_right: 0,
            margin_bottom: 0,
        }
    }

    /// Set all four margins.
    #[must_use]
    pub fn with_margins(mut self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self
    }

    /// Valid x coordinates for the left edge of a card of `card_size`.
    ///
    /// `None` if the card does not fit horizontally, including when the
    /// size arithmetic would overflow.
    #[must_use]
    pub fn x_range(&self, card_size: i32) -> Option<RangeInclusive<i32>> {
        let high = self.width.checked_sub(card_size)?.checked_sub(self.margin_right)?;
        (high >= self.margin_left).then(|| self.margin_left..=high)
    }

    /// Valid y coordinates for the top edge of a card of `card_size`.
    ///
    /// `None` if the card does not fit vertically.
    #[must_use]
    pub fn y_range(&self, card_size: i32) -> Option<RangeInclusive<i32>> {
        let high = self.height.checked_sub(card_size)?.checked_sub(self.margin_bottom)?;
        (high >= self.margin_top).then(|| self.margin_top..=high)
    }
}

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of symbol pairs dealt (the board holds twice as many cards).
    pub pair_count: u32,

    /// Number of depth layers. Layer `layers - 1` is the top.
    pub layers: u8,

    /// Round length in seconds.
    pub duration_seconds: f64,

    /// Side length of every card, in board pixels.
    pub card_size: i32,

    /// Area cards are placed in.
    pub board: BoardArea,

    /// Placement attempts allowed per card before setup fails.
    pub max_placement_attempts: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            pair_count: 50,
            layers: 3,
            duration_seconds: 180.0,
            card_size: 72,
            board: BoardArea::default(),
            max_placement_attempts: 100_000,
        }
    }
}

impl RoundConfig {
    /// Create a config with the given pair and layer counts, other fields default.
    #[must_use]
    pub fn new(pair_count: u32, layers: u8) -> Self {
        Self {
            pair_count,
            layers,
            ..Self::default()
        }
    }

    /// Set the pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: u32) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the layer count.
    #[must_use]
    pub fn with_layers(mut self, layers: u8) -> Self {
        self.layers = layers;
        self
    }

    /// Set the round duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Set the card size.
    #[must_use]
    pub fn with_card_size(mut self, size: i32) -> Self {
        self.card_size = size;
        self
    }

    /// Set the board area.
    #[must_use]
    pub fn with_board(mut self, board: BoardArea) -> Self {
        self.board = board;
        self
    }

    /// Set the per-card placement attempt budget.
    #[must_use]
    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Total number of cards on a fresh board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count as usize * 2
    }

    /// Index of the topmost layer.
    ///
    /// Saturates to 0 for an (invalid) zero-layer config.
    #[must_use]
    pub fn top_layer(&self) -> u8 {
        self.layers.saturating_sub(1)
    }

    /// Check every field is usable for board generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        self.validate_play()?;
        if self.board.x_range(self.card_size).is_none() || self.board.y_range(self.card_size).is_none() {
            return Err(ConfigError::BoardTooSmall {
                width: self.board.width,
                height: self.board.height,
                card_size: self.card_size,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }

    /// Check the fields a round needs once its board exists: layers,
    /// duration and card size.
    ///
    /// Pair count, board area and placement budget only matter to the
    /// generator and are not checked.
    pub fn validate_play(&self) -> Result<(), ConfigError> {
        if self.layers == 0 {
            return Err(ConfigError::NoLayers);
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ConfigError::InvalidDuration(self.duration_seconds));
        }
        if self.card_size <= 0 {
            return Err(ConfigError::InvalidCardSize(self.card_size));
        }
        Ok(())
    }
}
