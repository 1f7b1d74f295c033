//! Difficulty levels offered by the menu.

use serde::{Deserialize, Serialize};

use crate::core::config::RoundConfig;

/// Menu difficulty selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Easy,
    Hard,
}

impl Level {
    /// Every level, in menu order.
    pub const ALL: [Level; 2] = [Level::Easy, Level::Hard];

    /// Pairs dealt at this level.
    #[must_use]
    pub const fn pair_count(self) -> u32 {
        match self {
            Level::Easy => 50,
            Level::Hard => 100,
        }
    }

    /// Layers used at this level.
    ///
    /// Hard doubles the layers along with the cards so each layer is about
    /// as crowded as on Easy; 200 cards do not fit on three layers of the
    /// default board without same-layer overlap.
    #[must_use]
    pub const fn layers(self) -> u8 {
        match self {
            Level::Easy => 3,
            Level::Hard => 6,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Level::Easy => "Level 1: Easy",
            Level::Hard => "Level 2: Hard",
        }
    }

    /// Level picked by a menu key (`'1'` or `'2'`).
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Level::Easy),
            '2' => Some(Level::Hard),
            _ => None,
        }
    }

    /// Round configuration for this level.
    #[must_use]
    pub fn config(self) -> RoundConfig {
        RoundConfig::new(self.pair_count(), self.layers())
    }
}
