//! Puzzle word representation
//!
//! A Word stores a validated lowercase word along with letter position indices.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated puzzle word with letter position tracking
///
/// Any non-zero length is accepted; the engine enforces that every word in a
/// dictionary shares one length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Box<[u8]>,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("h3llo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: Box<[u8]> = text.as_bytes().into();

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Get the character at a specific position
    ///
    /// Returns `None` past the end of the word.
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by count-limited scoring.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, usize> {
        self.char_positions
            .iter()
            .map(|(&ch, positions)| (ch, positions.len()))
            .collect()
    }

    /// Whether `letters` spell this word position-for-position
    #[must_use]
    pub fn matches(&self, letters: &[u8]) -> bool {
        *self.chars == *letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
