//! Error types for the Kalah engine
//!
//! Every failure in the core is a usage error: an illegal pit, a bad
//! configuration value or a search on a finished game. None of them is
//! transient, so nothing here is retried.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a pit cannot be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Index is past the last slot of the board
    OutOfRange,
    /// Index names a store, not a pit
    Store,
    /// Pit belongs to the player who is not on move
    OpponentPit,
    /// Pit holds no stones
    EmptyPit,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::OutOfRange => "index out of range",
            IllegalMoveReason::Store => "slot is a store",
            IllegalMoveReason::OpponentPit => "pit belongs to the opponent",
            IllegalMoveReason::EmptyPit => "pit is empty",
        };
        f.write_str(text)
    }
}

/// Errors that can occur in the Kalah engine
#[derive(Error, Debug)]
pub enum KalahError {
    /// The selected pit is not a legal move for the player on move
    #[error("Illegal move at pit {pit}: {reason}")]
    IllegalMove { pit: usize, reason: IllegalMoveReason },

    /// Board shape, search depth or evaluation weights are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Search was asked for a move on a finished game
    #[error("No legal move: the game is already over")]
    NoLegalMove,

    /// Configuration file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for [`crate::config::KalahConfig`]
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl KalahError {
    #[inline]
    pub(crate) fn illegal(pit: usize, reason: IllegalMoveReason) -> Self {
        KalahError::IllegalMove { pit, reason }
    }

    #[inline]
    pub(crate) fn config(message: impl Into<String>) -> Self {
        KalahError::InvalidConfiguration(message.into())
    }
}

/// Result type alias for Kalah engine operations
pub type KalahResult<T> = Result<T, KalahError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_message() {
        let err = KalahError::illegal(3, IllegalMoveReason::EmptyPit);
        assert_eq!(err.to_string(), "Illegal move at pit 3: pit is empty");
    }

    #[test]
    fn test_config_message() {
        let err = KalahError::config("max_depth must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_depth must be positive"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse: Result<u32, _> = serde_json::from_str::<u32>("not json");
        let err: KalahError = parse.unwrap_err().into();
        assert!(matches!(err, KalahError::ConfigParse(_)));
    }
}
