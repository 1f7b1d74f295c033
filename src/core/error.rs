//! Error types.
//!
//! Only round setup can fail. Once a board exists, every occlusion,
//! selection and terminal query is total over it.

use thiserror::Error;

/// An invalid value in a [`RoundConfig`](super::RoundConfig).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("pair count must be greater than zero")]
    NoPairs,
    #[error("layer count must be at least 1")]
    NoLayers,
    #[error("round duration must be a positive number of seconds (got {0})")]
    InvalidDuration(f64),
    #[error("card size must be positive (got {0})")]
    InvalidCardSize(i32),
    #[error("board area {width}x{height} leaves no room for a {card_size}px card inside its margins")]
    BoardTooSmall { width: i32, height: i32, card_size: i32 },
    #[error("placement attempt budget must be greater than zero")]
    NoPlacementAttempts,
    #[error("card {card} sits on layer {layer} but the round only has {layers} layers")]
    LayerOutOfRange { card: u32, layer: u8, layers: u8 },
}

/// Failure to set up a round.
///
/// Fatal to that round: no partially built board is ever handed out.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    #[error("invalid round configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,
    #[error(
        "could not place card {placed} of {total} without a same-layer overlap after {attempts} attempts"
    )]
    PlacementExhausted { placed: usize, total: usize, attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: SetupError = ConfigError::NoPairs.into();
        assert_eq!(err, SetupError::Config(ConfigError::NoPairs));
        assert_eq!(
            err.to_string(),
            "invalid round configuration: pair count must be greater than zero"
        );
    }

    #[test]
    fn test_placement_message() {
        let err = SetupError::PlacementExhausted { placed: 7, total: 20, attempts: 100 };
        assert_eq!(
            err.to_string(),
            "could not place card 7 of 20 without a same-layer overlap after 100 attempts"
        );
    }
}
