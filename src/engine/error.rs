//! Errors raised when starting a game

use thiserror::Error;

use crate::core::WordError;

/// A word source or setting that cannot start a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("invalid word {word:?}: {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("word {word:?} has {found} letters, expected {expected} like the rest of the list")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("a game needs at least one try")]
    NoTries,
    #[error("{requested} tries requested, at most {max} are supported")]
    TooManyTries { requested: usize, max: usize },
}
