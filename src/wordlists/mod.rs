//! Word sources for new games
//!
//! Provides the embedded dictionary and a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_word_list;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase_five_letters() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_starts_a_game() {
        let words = validate_word_list(DICTIONARY).unwrap();
        assert_eq!(words.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }
}
