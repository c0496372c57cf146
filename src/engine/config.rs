//! Per-game settings

use crate::core::ScoringRule;

/// Number of attempts in a standard game
pub const DEFAULT_MAX_TRIES: usize = 6;

/// Largest grid a game may ask for
pub const MAX_TRIES: usize = 64;

/// First line of the share text
pub const DEFAULT_TITLE: &str = "Wordle";

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rows in the attempt grid
    pub max_tries: usize,
    /// How repeated letters are scored
    pub scoring: ScoringRule,
    /// Title line used by the share text
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            scoring: ScoringRule::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_tries_membership() {
        let config = GameConfig::default();
        assert_eq!(config.max_tries, 6);
        assert_eq!(config.scoring, ScoringRule::Membership);
        assert_eq!(config.title, "Wordle");
    }

    #[test]
    fn default_tries_within_bound() {
        assert!((1..=MAX_TRIES).contains(&DEFAULT_MAX_TRIES));
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::default()
            .with_max_tries(3)
            .with_scoring(ScoringRule::CountLimited)
            .with_title("Słowo");
        assert_eq!(config.max_tries, 3);
        assert_eq!(config.scoring, ScoringRule::CountLimited);
        assert_eq!(config.title, "Słowo");
    }
}
