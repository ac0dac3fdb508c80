//! Match configuration
//!
//! A [`KalahConfig`] fixes the board shape and each player's search settings.
//! It is built from CLI flags or loaded from a JSON file such as:
//!
//! ```json
//! {
//!   "shape": { "pits_per_side": 6, "stones_per_pit": 4 },
//!   "depths": [5, 3],
//!   "weights": { "store": 97, "row": 1 }
//! }
//! ```
//!
//! Every field is optional; missing fields take their default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardShape, Player};
use crate::error::{KalahError, KalahResult};
use crate::eval::EvalWeights;
use crate::search::SearchConfig;

/// Default search depth for each player in a match
pub const DEFAULT_MATCH_DEPTH: u32 = 4;
/// Largest accepted search depth
pub const MAX_DEPTH: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KalahConfig {
    pub shape: BoardShape,
    /// Search depth per player, indexed by [`Player::index`]
    pub depths: [u32; 2],
    /// Evaluation weights; `None` uses [`EvalWeights::for_board`]
    pub weights: Option<EvalWeights>,
}

impl Default for KalahConfig {
    fn default() -> Self {
        Self {
            shape: BoardShape::standard(),
            depths: [DEFAULT_MATCH_DEPTH; 2],
            weights: None,
        }
    }
}

impl KalahConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> KalahResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| KalahError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> KalahResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> KalahResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check shape, depths and weights against each other.
    pub fn validate(&self) -> KalahResult<()> {
        self.shape.validate()?;
        for player in Player::BOTH {
            let depth = self.depths[player.index()];
            if depth == 0 || depth > MAX_DEPTH {
                return Err(KalahError::config(format!(
                    "depth for {player} must be in 1..={MAX_DEPTH}, got {depth}"
                )));
            }
        }
        if let Some(weights) = self.weights {
            weights.validate(self.shape.total_stones())?;
        }
        Ok(())
    }

    /// Starting board for this configuration.
    pub fn new_board(&self) -> KalahResult<Board> {
        Board::new(self.shape)
    }

    #[inline]
    pub fn depth(&self, player: Player) -> u32 {
        self.depths[player.index()]
    }

    /// Search settings for `player` on `board`.
    pub fn search_config(&self, player: Player, board: &Board) -> SearchConfig {
        let weights = self
            .weights
            .unwrap_or_else(|| EvalWeights::for_board(board));
        SearchConfig::new(self.depth(player)).with_weights(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = KalahConfig::default();
        assert_eq!(config.shape, BoardShape::standard());
        assert_eq!(config.depths, [4, 4]);
        assert!(config.validate().is_ok());
        assert_eq!(config.new_board().unwrap(), Board::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = KalahConfig::from_json_str(r#"{ "depths": [6, 2] }"#).unwrap();
        assert_eq!(config.shape, BoardShape::standard());
        assert_eq!(config.depth(Player::Zero), 6);
        assert_eq!(config.depth(Player::One), 2);
        assert_eq!(config.weights, None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = KalahConfig {
            shape: BoardShape::new(4, 5),
            depths: [3, 7],
            weights: Some(EvalWeights::new(200, 2)),
        };
        let text = config.to_json_pretty().unwrap();
        assert_eq!(KalahConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            KalahConfig::from_json_str(r#"{ "depths": [0, 3] }"#),
            Err(KalahError::InvalidConfiguration(_))
        ));
        assert!(KalahConfig::from_json_str(
            r#"{ "shape": { "pits_per_side": 0, "stones_per_pit": 4 } }"#
        )
        .is_err());
        // 48 stones: a store weight of 10 lets rows outweigh stores
        assert!(KalahConfig::from_json_str(r#"{ "weights": { "store": 10, "row": 1 } }"#).is_err());
        // Rows can swing by up to twice the stones in play
        assert!(KalahConfig::from_json_str(r#"{ "weights": { "store": 96, "row": 1 } }"#).is_err());
        assert!(KalahConfig::from_json_str(r#"{ "weights": { "store": 97, "row": 1 } }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            KalahConfig::from_json_str("{ depths: }"),
            Err(KalahError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "shape": {{ "pits_per_side": 3, "stones_per_pit": 3 }}, "depths": [2, 5] }}"#
        )
        .unwrap();

        let config = KalahConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.shape, BoardShape::new(3, 3));
        assert_eq!(config.depths, [2, 5]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KalahConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, KalahError::ConfigIo { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_search_config_per_player() {
        let config = KalahConfig {
            depths: [5, 2],
            ..KalahConfig::default()
        };
        let board = config.new_board().unwrap();
        let search = config.search_config(Player::One, &board);
        assert_eq!(search.max_depth, 2);
        assert_eq!(search.weights, Some(EvalWeights::for_board(&board)));
    }
}
