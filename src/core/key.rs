//! Key input accepted by the engine

use std::fmt;

/// A single key event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A letter key; anything that is not an ASCII letter is ignored by the engine
    Letter(char),
    /// Clear the most recently typed cell of the active row
    Backspace,
    /// Submit the active row
    Submit,
}

impl Key {
    /// Lowercase ASCII byte for letter keys, `None` otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Key;
    ///
    /// assert_eq!(Key::Letter('Q').letter(), Some(b'q'));
    /// assert_eq!(Key::Letter('7').letter(), None);
    /// assert_eq!(Key::Submit.letter(), None);
    /// ```
    #[must_use]
    pub fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(ch) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase() as u8),
            _ => None,
        }
    }

    /// Keys that type out `word` letter by letter
    pub fn typing(word: &str) -> impl Iterator<Item = Self> + '_ {
        word.chars().map(Self::Letter)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(ch) => write!(f, "{}", ch.to_ascii_uppercase()),
            Self::Backspace => write!(f, "CLEAR"),
            Self::Submit => write!(f, "ENTER"),
        }
    }
}
